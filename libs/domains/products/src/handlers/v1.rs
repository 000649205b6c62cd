use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::{UuidPath, ValidatedJson};

use crate::error::ProductResult;
use crate::models::{CreateProductRequest, ProductResponse, UpdateStockRequest};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Path prefix the `Location` header of a created product points at
const LOCATION_PREFIX: &str = "/api/v1/products";

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_by_id).delete(delete))
        .route("/{id}/stock", patch(update_stock))
        .with_state(service)
}

async fn get_all<R: ProductRepository>(
    State(service): State<ProductService<R>>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    let products = service.get_all().await?;
    Ok(Json(products))
}

async fn get_by_id<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// 201 with a `Location` header for the new product
async fn create<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(request).await?;
    let location = format!("{}/{}", LOCATION_PREFIX, product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

async fn update_stock<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<UpdateStockRequest>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_stock(id, request).await?;
    Ok(Json(product))
}

async fn delete<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
