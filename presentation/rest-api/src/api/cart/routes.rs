use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, bad_request};
use crate::api::security::StoreBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddToCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddToCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every call acts on the caller's own cart, created on first use. Each
/// response carries the whole cart priced at current catalog prices.
#[OpenApi]
impl CartApi {
    /// Get my cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self, auth: StoreBearer) -> CartResult {
        match self
            .get_use_case
            .execute(GetCartParams { user_id: auth.0 })
            .await
        {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Add a movie to my cart
    ///
    /// Adding a movie already in the cart increases that line's quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: StoreBearer, body: Json<AddCartItemRequest>) -> CartResult {
        let Ok(movie_id) = Uuid::parse_str(&body.0.movie_id) else {
            return CartResult::BadRequest(bad_request("cart.invalid_movie_id"));
        };

        let params = AddToCartParams {
            user_id: auth.0,
            movie_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Change a line's quantity
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        auth: StoreBearer,
        id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartResult {
        let Ok(item_id) = Uuid::parse_str(&id.0) else {
            return CartResult::BadRequest(bad_request("cart.invalid_item_id"));
        };

        let params = UpdateCartItemQuantityParams {
            user_id: auth.0,
            item_id,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Remove a line from my cart
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, auth: StoreBearer, id: Path<String>) -> CartResult {
        let Ok(item_id) = Uuid::parse_str(&id.0) else {
            return CartResult::BadRequest(bad_request("cart.invalid_item_id"));
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                user_id: auth.0,
                item_id,
            })
            .await
        {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResult {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
