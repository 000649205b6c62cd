use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProductRequest, Product, ProductResponse, UpdateStockRequest};
use crate::pagination::{PaginatedResult, PaginationParameters};
use crate::repository::ProductRepository;

/// Product use cases on top of a [`ProductRepository`].
///
/// Requests are expected to be validated already; the HTTP layer does that
/// through `ValidatedJson` and `ValidatedQuery`.
///
/// Cloning shares the repository, so the service can be used directly as
/// router state.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<ProductResponse>> {
        let products = self.repository.get_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_paged(
        &self,
        params: PaginationParameters,
    ) -> ProductResult<PaginatedResult<ProductResponse>> {
        if !params.is_valid() {
            return Err(ProductError::InvalidArgument(format!(
                "page {} of size {} is out of range",
                params.page_number(),
                params.page_size()
            )));
        }

        let (items, total_count) = self
            .repository
            .get_paged(params.page_number(), params.page_size())
            .await?;

        Ok(PaginatedResult::new(
            items,
            params.page_number(),
            params.page_size(),
            total_count,
        )
        .map(ProductResponse::from))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> ProductResult<ProductResponse> {
        self.repository
            .get_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateProductRequest) -> ProductResult<ProductResponse> {
        let product = self.repository.create(Product::new(request)).await?;
        Ok(product.into())
    }

    #[instrument(skip(self))]
    pub async fn update_stock(
        &self,
        id: Uuid,
        request: UpdateStockRequest,
    ) -> ProductResult<ProductResponse> {
        let mut product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        product.set_stock(request.stock_quantity);

        let updated = self.repository.update(product).await?;
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}
