use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every endpoint acts on the authenticated user's own cart.
#[OpenApi]
impl CartApi {
    /// Get the current cart
    ///
    /// An empty cart is created on first access.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: SessionBearer) -> GetCartResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to the cart
    ///
    /// Adding a product already in the cart increments its quantity
    /// instead of creating a second line.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        auth: SessionBearer,
        body: Json<AddCartItemRequest>,
    ) -> MutateCartResponse {
        let params = AddCartItemParams {
            user_id: auth.0.user_id,
            product_id: body.0.product_id,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            image: body.0.image,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => err.into(),
        }
    }

    /// Set the quantity of a cart line
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_item_quantity(
        &self,
        auth: SessionBearer,
        product_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> MutateCartResponse {
        let params = UpdateCartItemQuantityParams {
            user_id: auth.0.user_id,
            product_id: product_id.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => err.into(),
        }
    }

    /// Remove an item from the cart
    ///
    /// Removing a product that is not in the cart is a no-op.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        auth: SessionBearer,
        product_id: Path<String>,
    ) -> MutateCartResponse {
        let params = RemoveCartItemParams {
            user_id: auth.0.user_id,
            product_id: product_id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => err.into(),
        }
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: SessionBearer) -> MutateCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MutateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<business::domain::cart::errors::CartError> for MutateCartResponse {
    fn from(err: business::domain::cart::errors::CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => MutateCartResponse::BadRequest(json),
            404 => MutateCartResponse::NotFound(json),
            _ => MutateCartResponse::InternalError(json),
        }
    }
}
