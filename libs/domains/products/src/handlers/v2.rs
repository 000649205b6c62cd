use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::ValidatedQuery;

use crate::error::ProductResult;
use crate::models::ProductResponse;
use crate::pagination::{PaginatedResult, PaginationQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new().route("/", get(get_paged)).with_state(service)
}

/// `?pageNumber=&pageSize=`, defaults 1 and 10. Sizes above the maximum are
/// clamped.
async fn get_paged<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
) -> ProductResult<Json<PaginatedResult<ProductResponse>>> {
    let page = service.get_paged(query.into()).await?;
    Ok(Json(page))
}
