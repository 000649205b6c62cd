//! PostgreSQL-backed tests for `PgProductRepository`.
//!
//! Each test starts its own container through `test_utils::TestDatabase`, so
//! they need Docker and are ignored by default:
//!
//! ```text
//! cargo test -p domain_products --test integration_test -- --ignored
//! ```

use domain_products::*;
use test_utils::assertions::{assert_some, assert_touched_after, assert_uuid_eq};
use test_utils::{TestDataBuilder, TestDatabase};

fn request(builder: &TestDataBuilder, suffix: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: builder.name("product", suffix),
        image_url: builder.image_url(suffix),
        price: Some(12.5),
        description: Some("Integration test product".to_string()),
        stock_quantity: Some(3),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_fetch_product() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_create_fetch");

    let created = service.create(request(&builder, "lamp")).await.unwrap();
    let fetched = service.get_by_id(created.id).await.unwrap();

    assert_uuid_eq(fetched.id, created.id, "fetched product id");
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.image_url, created.image_url);
    assert_eq!(fetched.price, Some(12.5));
    assert_eq!(fetched.stock_quantity, Some(3));
    assert!(fetched.updated_at.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_stock_persists_and_stamps() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_update_stock");

    let created = service.create(request(&builder, "desk")).await.unwrap();
    let updated = service
        .update_stock(
            created.id,
            UpdateStockRequest {
                stock_quantity: Some(0),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.stock_quantity, Some(0));
    assert_touched_after(updated.created_at, updated.updated_at, "stock update");

    let reloaded = service.get_by_id(created.id).await.unwrap();
    assert_eq!(reloaded.stock_quantity, Some(0));
    assert_some(reloaded.updated_at, "reloaded updated_at");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_stock_of_missing_product() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let result = service
        .update_stock(
            uuid::Uuid::now_v7(),
            UpdateStockRequest {
                stock_quantity: Some(1),
            },
        )
        .await;

    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_paging_and_ordering() {
    let db = TestDatabase::new().await;
    db.truncate_products().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_paging");

    for i in 0..15 {
        service
            .create(request(&builder, &format!("{i:02}")))
            .await
            .unwrap();
    }

    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 15);
    assert!(all.windows(2).all(|pair| pair[0].name <= pair[1].name));

    let first = service
        .get_paged(PaginationParameters::new(1, 10))
        .await
        .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_count, 15);
    assert_eq!(first.total_pages, 2);

    let past_end = service
        .get_paged(PaginationParameters::new(4, 10))
        .await
        .unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_count, 15);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_is_conditional() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("pg_delete");

    let created = service.create(request(&builder, "chair")).await.unwrap();

    service.delete(created.id).await.unwrap();
    assert!(matches!(
        service.delete(created.id).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_exists() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_exists");

    let product = Product::new(request(&builder, "mug"));
    let id = product.id;
    repo.create(product).await.unwrap();

    assert!(repo.exists(id).await.unwrap());
    assert!(!repo.exists(builder.id()).await.unwrap());
}
