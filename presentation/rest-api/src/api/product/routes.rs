use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_stats::GetProductStatsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductCategoryDto, ProductListResponse, ProductResponse,
    ProductStatsResponse, UpdateProductRequest,
};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_stats_use_case: Arc<dyn GetProductStatsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_stats_use_case: Arc<dyn GetProductStatsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_stats_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn forbidden() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Forbidden", "auth.admin_required"))
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.invalid_id"))
}

/// Product catalog API
///
/// Public catalog browsing plus admin-only management endpoints.
#[OpenApi]
impl ProductApi {
    /// List catalog products
    ///
    /// Returns active products only, filtered by category or search text,
    /// newest first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        category: Query<Option<ProductCategoryDto>>,
        search: Query<Option<String>>,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> ListProductsResponse {
        let params = GetAllProductsParams {
            category: category.0.map(|c| c.into()),
            search: search.0,
            page: page.0,
            limit: limit.0,
            include_inactive: false,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Deactivated products are not visible here.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: uuid,
                include_inactive: false,
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products including deactivated ones (admin)
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::Admin")]
    async fn get_all_products_admin(
        &self,
        auth: SessionBearer,
        category: Query<Option<ProductCategoryDto>>,
        search: Query<Option<String>>,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> AdminListProductsResponse {
        if !auth.0.is_admin() {
            return AdminListProductsResponse::Forbidden(forbidden());
        }

        let params = GetAllProductsParams {
            category: category.0.map(|c| c.into()),
            search: search.0,
            page: page.0,
            limit: limit.0,
            include_inactive: true,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => AdminListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AdminListProductsResponse::InternalError(json)
            }
        }
    }

    /// Catalog counts (admin)
    ///
    /// Total, active, and inactive product counts plus active counts
    /// per category.
    #[oai(path = "/admin/products/stats", method = "get", tag = "ApiTags::Admin")]
    async fn get_product_stats(&self, auth: SessionBearer) -> ProductStatsApiResponse {
        if !auth.0.is_admin() {
            return ProductStatsApiResponse::Forbidden(forbidden());
        }

        match self.get_stats_use_case.execute().await {
            Ok(stats) => ProductStatsApiResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductStatsApiResponse::InternalError(json)
            }
        }
    }

    /// Create a new product (admin)
    #[oai(path = "/products", method = "post", tag = "ApiTags::Admin")]
    async fn create_product(
        &self,
        auth: SessionBearer,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        if !auth.0.is_admin() {
            return CreateProductResponse::Forbidden(forbidden());
        }

        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            image: body.0.image,
            category: body.0.category.into(),
            stock: body.0.stock,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product (admin)
    ///
    /// Absent fields keep their stored values.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Admin")]
    async fn update_product(
        &self,
        auth: SessionBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        if !auth.0.is_admin() {
            return UpdateProductResponse::Forbidden(forbidden());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_id()),
        };

        let params = UpdateProductParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            image: body.0.image,
            category: body.0.category.map(|c| c.into()),
            stock: body.0.stock,
            is_active: body.0.is_active,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product (admin)
    ///
    /// Deactivates the product; it disappears from the public catalog but
    /// stays restorable through an update with `is_active: true`.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Admin")]
    async fn delete_product(&self, auth: SessionBearer, id: Path<String>) -> DeleteProductResponse {
        self.run_delete(auth, id, false).await
    }

    /// Permanently delete a product (admin)
    ///
    /// Removes the row entirely. Not reversible.
    #[oai(
        path = "/products/:id/permanent",
        method = "delete",
        tag = "ApiTags::Admin"
    )]
    async fn permanently_delete_product(
        &self,
        auth: SessionBearer,
        id: Path<String>,
    ) -> DeleteProductResponse {
        self.run_delete(auth, id, true).await
    }
}

impl ProductApi {
    async fn run_delete(
        &self,
        auth: SessionBearer,
        id: Path<String>,
        permanent: bool,
    ) -> DeleteProductResponse {
        if !auth.0.is_admin() {
            return DeleteProductResponse::Forbidden(forbidden());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductResponse::BadRequest(invalid_id()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: uuid,
                permanent,
            })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AdminListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductStatsApiResponse {
    #[oai(status = 200)]
    Ok(Json<ProductStatsResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
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
