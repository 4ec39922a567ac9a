use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::movie::value_objects::Genre;
use business::domain::movie::use_cases::create::{CreateMovieParams, CreateMovieUseCase};
use business::domain::movie::use_cases::delete::{DeleteMovieParams, DeleteMovieUseCase};
use business::domain::movie::use_cases::get_by_id::{GetMovieByIdParams, GetMovieByIdUseCase};
use business::domain::movie::use_cases::get_featured::GetFeaturedMoviesUseCase;
use business::domain::movie::use_cases::search::{SearchMoviesParams, SearchMoviesUseCase};
use business::domain::movie::use_cases::update::{UpdateMovieParams, UpdateMovieUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, bad_request};
use crate::api::movie::dto::{MovieRequest, MovieResponse};
use crate::api::security::StoreBearer;
use crate::api::tags::ApiTags;

pub struct MovieApi {
    search_use_case: Arc<dyn SearchMoviesUseCase>,
    featured_use_case: Arc<dyn GetFeaturedMoviesUseCase>,
    get_by_id_use_case: Arc<dyn GetMovieByIdUseCase>,
    create_use_case: Arc<dyn CreateMovieUseCase>,
    update_use_case: Arc<dyn UpdateMovieUseCase>,
    delete_use_case: Arc<dyn DeleteMovieUseCase>,
}

impl MovieApi {
    pub fn new(
        search_use_case: Arc<dyn SearchMoviesUseCase>,
        featured_use_case: Arc<dyn GetFeaturedMoviesUseCase>,
        get_by_id_use_case: Arc<dyn GetMovieByIdUseCase>,
        create_use_case: Arc<dyn CreateMovieUseCase>,
        update_use_case: Arc<dyn UpdateMovieUseCase>,
        delete_use_case: Arc<dyn DeleteMovieUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            featured_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Movie catalog API
///
/// Reads are public; writes need a store admin token.
#[OpenApi]
impl MovieApi {
    /// Search movies
    ///
    /// Case-insensitive match of `search` against title or genre code,
    /// optionally restricted to one `genre`. Ordered by title.
    #[oai(path = "/movies", method = "get", tag = "ApiTags::Movies")]
    async fn search(
        &self,
        search: Query<Option<String>>,
        genre: Query<Option<String>>,
    ) -> SearchMoviesResponse {
        let genre = match genre.0.as_deref() {
            None => None,
            Some(code) => match code.parse::<Genre>() {
                Ok(genre) => Some(genre),
                Err(_) => return SearchMoviesResponse::BadRequest(bad_request("movie.genre_invalid")),
            },
        };

        let params = SearchMoviesParams {
            search: search.0,
            genre,
        };

        match self.search_use_case.execute(params).await {
            Ok(movies) => {
                SearchMoviesResponse::Ok(Json(movies.into_iter().map(|m| m.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchMoviesResponse::InternalError(json)
            }
        }
    }

    /// Featured movies
    ///
    /// Up to three random movies for the home page.
    #[oai(path = "/movies/featured", method = "get", tag = "ApiTags::Movies")]
    async fn featured(&self) -> SearchMoviesResponse {
        match self.featured_use_case.execute().await {
            Ok(movies) => {
                SearchMoviesResponse::Ok(Json(movies.into_iter().map(|m| m.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchMoviesResponse::InternalError(json)
            }
        }
    }

    /// Get a movie
    #[oai(path = "/movies/:id", method = "get", tag = "ApiTags::Movies")]
    async fn get_by_id(&self, id: Path<String>) -> GetMovieResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetMovieResponse::BadRequest(bad_request("movie.invalid_id"));
        };

        match self
            .get_by_id_use_case
            .execute(GetMovieByIdParams { id: uuid })
            .await
        {
            Ok(movie) => GetMovieResponse::Ok(Json(movie.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetMovieResponse::NotFound(json),
                    _ => GetMovieResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a movie
    ///
    /// Exactly one of `image` and `image_url` must be set. Every invalid field
    /// is reported in `fields`.
    #[oai(path = "/movies", method = "post", tag = "ApiTags::Movies")]
    async fn create(&self, auth: StoreBearer, body: Json<MovieRequest>) -> SaveMovieResponse {
        let props = match body.0.into_props() {
            Ok(props) => props,
            Err(errors) => {
                return SaveMovieResponse::BadRequest(Json(ErrorResponse::validation(
                    "movie.validation_failed",
                    &errors,
                )));
            }
        };

        let params = CreateMovieParams {
            requested_by: auth.0,
            movie: props,
        };

        match self.create_use_case.execute(params).await {
            Ok(movie) => SaveMovieResponse::Created(Json(movie.into())),
            Err(err) => SaveMovieResponse::from_error(err.into_error_response()),
        }
    }

    /// Update a movie
    ///
    /// Replaces every editable field.
    #[oai(path = "/movies/:id", method = "put", tag = "ApiTags::Movies")]
    async fn update(
        &self,
        auth: StoreBearer,
        id: Path<String>,
        body: Json<MovieRequest>,
    ) -> SaveMovieResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return SaveMovieResponse::BadRequest(bad_request("movie.invalid_id"));
        };
        let props = match body.0.into_props() {
            Ok(props) => props,
            Err(errors) => {
                return SaveMovieResponse::BadRequest(Json(ErrorResponse::validation(
                    "movie.validation_failed",
                    &errors,
                )));
            }
        };

        let params = UpdateMovieParams {
            id: uuid,
            requested_by: auth.0,
            movie: props,
        };

        match self.update_use_case.execute(params).await {
            Ok(movie) => SaveMovieResponse::Ok(Json(movie.into())),
            Err(err) => SaveMovieResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a movie
    ///
    /// Reviews and cart lines of the movie go with it. Movies that appear in
    /// an order cannot be deleted (409).
    #[oai(path = "/movies/:id", method = "delete", tag = "ApiTags::Movies")]
    async fn delete(&self, auth: StoreBearer, id: Path<String>) -> DeleteMovieResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteMovieResponse::BadRequest(bad_request("movie.invalid_id"));
        };

        match self
            .delete_use_case
            .execute(DeleteMovieParams {
                id: uuid,
                requested_by: auth.0,
            })
            .await
        {
            Ok(()) => DeleteMovieResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteMovieResponse::Forbidden(json),
                    404 => DeleteMovieResponse::NotFound(json),
                    409 => DeleteMovieResponse::Conflict(json),
                    _ => DeleteMovieResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchMoviesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MovieResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMovieResponse {
    #[oai(status = 200)]
    Ok(Json<MovieResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveMovieResponse {
    #[oai(status = 200)]
    Ok(Json<MovieResponse>),
    #[oai(status = 201)]
    Created(Json<MovieResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SaveMovieResponse {
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
pub enum DeleteMovieResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
