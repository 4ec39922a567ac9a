use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_payment_status::{
    UpdatePaymentStatusParams, UpdatePaymentStatusUseCase,
};
use business::domain::order::value_objects::PaymentStatus;

use crate::api::error::{ErrorResponse, IntoErrorResponse, bad_request};
use crate::api::order::dto::{OrderResponse, PlaceOrderRequest, UpdatePaymentStatusRequest};
use crate::api::security::StoreBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_payment_status_use_case: Arc<dyn UpdatePaymentStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_payment_status_use_case: Arc<dyn UpdatePaymentStatusUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_payment_status_use_case,
        }
    }
}

/// Orders API
#[OpenApi]
impl OrderApi {
    /// Check out my cart
    ///
    /// Snapshots current prices into a new order and empties the cart in one
    /// step. A concurrent checkout of the same cart gets 409.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place(&self, auth: StoreBearer, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            user_id: auth.0,
            shipping_address: body.0.shipping_address,
        };

        match self.place_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List my orders
    ///
    /// Newest first.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all(&self, auth: StoreBearer) -> GetOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetAllOrdersParams { user_id: auth.0 })
            .await
        {
            Ok(orders) => {
                GetOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get one of my orders
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_by_id(&self, auth: StoreBearer, id: Path<String>) -> GetOrderResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetOrderResponse::BadRequest(bad_request("order.invalid_id"));
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id: uuid,
                user_id: auth.0,
            })
            .await
        {
            Ok(order) => GetOrderResponse::Ok(Json(order.into())),
            Err(err) => GetOrderResponse::from_error(err.into_error_response()),
        }
    }

    /// Change an order's payment status
    ///
    /// Store admins may apply any allowed transition. The buyer may only
    /// cancel their own order.
    #[oai(
        path = "/orders/:id/payment-status",
        method = "put",
        tag = "ApiTags::Orders"
    )]
    async fn update_payment_status(
        &self,
        auth: StoreBearer,
        id: Path<String>,
        body: Json<UpdatePaymentStatusRequest>,
    ) -> GetOrderResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetOrderResponse::BadRequest(bad_request("order.invalid_id"));
        };
        let Ok(status) = body.0.status.trim().to_uppercase().parse::<PaymentStatus>() else {
            return GetOrderResponse::BadRequest(bad_request("order.payment_status_invalid"));
        };

        let params = UpdatePaymentStatusParams {
            id: uuid,
            requested_by: auth.0,
            status,
        };

        match self.update_payment_status_use_case.execute(params).await {
            Ok(order) => GetOrderResponse::Ok(Json(order.into())),
            Err(err) => GetOrderResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
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

impl GetOrderResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}
