use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Persistence for products.
///
/// Listing operations order by name ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, uncapped
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Persist a new product as given, id and timestamps included
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace a stored product. `NotFound` when the id is unknown.
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Returns whether a row was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;

    async fn exists(&self, id: Uuid) -> ProductResult<bool>;

    /// One 1-based page plus the total number of products
    async fn get_paged(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> ProductResult<(Vec<Product>, u64)>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn sorted(&self) -> Vec<Product> {
        let products = self.products.read().await;
        let mut result: Vec<Product> = products.values().cloned().collect();
        // Ties on name fall back to id so pages stay stable
        result.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        result
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.sorted().await)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let stored = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *stored = product.clone();

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: Uuid) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn get_paged(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> ProductResult<(Vec<Product>, u64)> {
        let all = self.sorted().await;
        let total = all.len() as u64;

        let skip = page_number.saturating_sub(1).saturating_mul(page_size);
        let items = all
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(page_size).unwrap_or(usize::MAX))
            .collect();

        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProductRequest;

    fn product(name: &str) -> Product {
        Product::new(CreateProductRequest {
            name: name.to_string(),
            image_url: format!("https://cdn.example.com/{name}.png"),
            price: Some(10.0),
            description: None,
            stock_quantity: Some(1),
        })
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(product("lamp")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created.clone()));
        assert!(repo.exists(created.id).await.unwrap());
        assert!(!repo.exists(Uuid::now_v7()).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_all_orders_by_name() {
        let repo = InMemoryProductRepository::new();
        for name in ["mouse", "cable", "keyboard"] {
            repo.create(product(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["cable", "keyboard", "mouse"]);
    }

    #[tokio::test]
    async fn test_get_paged_slices_and_counts() {
        let repo = InMemoryProductRepository::new();
        for i in 0..15 {
            repo.create(product(&format!("item-{i:02}"))).await.unwrap();
        }

        let (first, total) = repo.get_paged(1, 10).await.unwrap();
        assert_eq!(total, 15);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].name, "item-00");

        let (second, _) = repo.get_paged(2, 10).await.unwrap();
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].name, "item-10");

        let (past_end, total) = repo.get_paged(3, 10).await.unwrap();
        assert!(past_end.is_empty());
        assert_eq!(total, 15);
    }

    #[tokio::test]
    async fn test_update_replaces_and_rejects_unknown() {
        let repo = InMemoryProductRepository::new();
        let mut created = repo.create(product("desk")).await.unwrap();

        created.set_stock(Some(0));
        let updated = repo.update(created.clone()).await.unwrap();
        assert_eq!(updated.stock_quantity, Some(0));
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));

        let missing = product("ghost");
        let result = repo.update(missing.clone()).await;
        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == missing.id));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_anything_was_removed() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(product("chair")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
