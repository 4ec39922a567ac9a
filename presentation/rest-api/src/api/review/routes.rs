use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};
use business::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};
use business::domain::review::use_cases::get_by_movie::{
    GetMovieReviewsParams, GetMovieReviewsUseCase,
};
use business::domain::review::use_cases::update::{UpdateReviewParams, UpdateReviewUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, bad_request};
use crate::api::review::dto::{ReviewRequest, ReviewResponse};
use crate::api::security::StoreBearer;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    get_by_movie_use_case: Arc<dyn GetMovieReviewsUseCase>,
    create_use_case: Arc<dyn CreateReviewUseCase>,
    update_use_case: Arc<dyn UpdateReviewUseCase>,
    delete_use_case: Arc<dyn DeleteReviewUseCase>,
}

impl ReviewApi {
    pub fn new(
        get_by_movie_use_case: Arc<dyn GetMovieReviewsUseCase>,
        create_use_case: Arc<dyn CreateReviewUseCase>,
        update_use_case: Arc<dyn UpdateReviewUseCase>,
        delete_use_case: Arc<dyn DeleteReviewUseCase>,
    ) -> Self {
        Self {
            get_by_movie_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Movie reviews API
///
/// Anyone can read reviews; only their author can edit or delete them.
#[OpenApi]
impl ReviewApi {
    /// List reviews of a movie
    ///
    /// Newest first.
    #[oai(path = "/movies/:id/reviews", method = "get", tag = "ApiTags::Reviews")]
    async fn get_by_movie(&self, id: Path<String>) -> GetReviewsResponse {
        let Ok(movie_id) = Uuid::parse_str(&id.0) else {
            return GetReviewsResponse::BadRequest(bad_request("movie.invalid_id"));
        };

        match self
            .get_by_movie_use_case
            .execute(GetMovieReviewsParams { movie_id })
            .await
        {
            Ok(reviews) => {
                GetReviewsResponse::Ok(Json(reviews.into_iter().map(|r| r.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetReviewsResponse::NotFound(json),
                    _ => GetReviewsResponse::InternalError(json),
                }
            }
        }
    }

    /// Review a movie
    #[oai(path = "/movies/:id/reviews", method = "post", tag = "ApiTags::Reviews")]
    async fn create(
        &self,
        auth: StoreBearer,
        id: Path<String>,
        body: Json<ReviewRequest>,
    ) -> SaveReviewResponse {
        let Ok(movie_id) = Uuid::parse_str(&id.0) else {
            return SaveReviewResponse::BadRequest(bad_request("movie.invalid_id"));
        };

        let params = CreateReviewParams {
            user_id: auth.0,
            movie_id,
            comment: body.0.comment,
            rating: body.0.rating,
        };

        match self.create_use_case.execute(params).await {
            Ok(review) => SaveReviewResponse::Created(Json(review.into())),
            Err(err) => SaveReviewResponse::from_error(err.into_error_response()),
        }
    }

    /// Edit a review
    ///
    /// Only the author may edit; others get 403 and the review is unchanged.
    #[oai(path = "/reviews/:id", method = "put", tag = "ApiTags::Reviews")]
    async fn update(
        &self,
        auth: StoreBearer,
        id: Path<String>,
        body: Json<ReviewRequest>,
    ) -> SaveReviewResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return SaveReviewResponse::BadRequest(bad_request("review.invalid_id"));
        };

        let params = UpdateReviewParams {
            id: uuid,
            user_id: auth.0,
            comment: body.0.comment,
            rating: body.0.rating,
        };

        match self.update_use_case.execute(params).await {
            Ok(review) => SaveReviewResponse::Ok(Json(review.into())),
            Err(err) => SaveReviewResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a review
    #[oai(path = "/reviews/:id", method = "delete", tag = "ApiTags::Reviews")]
    async fn delete(&self, auth: StoreBearer, id: Path<String>) -> DeleteReviewResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteReviewResponse::BadRequest(bad_request("review.invalid_id"));
        };

        match self
            .delete_use_case
            .execute(DeleteReviewParams {
                id: uuid,
                user_id: auth.0,
            })
            .await
        {
            Ok(()) => DeleteReviewResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteReviewResponse::Forbidden(json),
                    404 => DeleteReviewResponse::NotFound(json),
                    _ => DeleteReviewResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveReviewResponse {
    #[oai(status = 200)]
    Ok(Json<ReviewResponse>),
    #[oai(status = 201)]
    Created(Json<ReviewResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SaveReviewResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteReviewResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
