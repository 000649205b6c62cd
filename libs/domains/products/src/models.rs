use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::{absolute_http_url, not_blank};

/// A catalog product as the service sees it
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// `None` until the first stock update
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Build a new product with a fresh id and `created_at = now`
    pub fn new(input: CreateProductRequest) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            image_url: input.image_url,
            price: input.price,
            description: input.description,
            stock_quantity: input.stock_quantity,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite the stock level and stamp `updated_at`.
    ///
    /// The stamp never goes below `created_at`, even if the clock stepped back.
    pub fn set_stock(&mut self, stock_quantity: Option<i32>) {
        self.stock_quantity = stock_quantity;
        self.updated_at = Some(Utc::now().max(self.created_at));
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "'Name' must not be empty."),
        length(
            max = 200,
            message = "The length of 'Name' must be 200 characters or fewer."
        )
    )]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(
            function = "absolute_http_url",
            message = "'Image Url' must be a valid absolute http or https URL."
        ),
        length(
            max = 500,
            message = "The length of 'Image Url' must be 500 characters or fewer."
        )
    )]
    pub image_url: String,

    #[validate(range(min = 0.0, message = "'Price' must be greater than or equal to '0'."))]
    pub price: Option<f64>,

    #[validate(length(
        max = 2000,
        message = "The length of 'Description' must be 2000 characters or fewer."
    ))]
    pub description: Option<String>,

    #[validate(range(
        min = 0,
        message = "'Stock Quantity' must be greater than or equal to '0'."
    ))]
    pub stock_quantity: Option<i32>,
}

/// `null` reads as an empty string, so it reaches the `not_blank` and URL rules
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockRequest {
    #[validate(
        required(message = "'Stock Quantity' must not be empty."),
        range(
            min = 0,
            message = "'Stock Quantity' must be greater than or equal to '0'."
        )
    )]
    pub stock_quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image_url: product.image_url,
            price: product.price,
            description: product.description,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Desk Lamp".to_string(),
            image_url: "https://cdn.example.com/lamp.png".to_string(),
            price: Some(39.5),
            description: None,
            stock_quantity: Some(4),
        }
    }

    #[test]
    fn test_new_product_is_stamped_once() {
        let product = Product::new(request());

        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Desk Lamp");
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn test_set_stock_stamps_update_after_creation() {
        let mut product = Product::new(request());
        let created_at = product.created_at;

        product.set_stock(Some(0));

        assert_eq!(product.stock_quantity, Some(0));
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at.unwrap() >= created_at);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let json = serde_json::to_value(ProductResponse::from(Product::new(request()))).unwrap();

        assert_eq!(json["imageUrl"], "https://cdn.example.com/lamp.png");
        assert_eq!(json["stockQuantity"], 4);
        assert!(json.get("createdAt").is_some());
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn test_request_reads_camel_case_and_defaults_missing_strings() {
        let parsed: CreateProductRequest =
            serde_json::from_str(r#"{"price": 5, "stockQuantity": 2}"#).unwrap();

        assert_eq!(parsed.name, "");
        assert_eq!(parsed.image_url, "");
        assert_eq!(parsed.price, Some(5.0));
        assert_eq!(parsed.stock_quantity, Some(2));
    }

    #[test]
    fn test_request_reads_null_strings_as_empty() {
        let parsed: CreateProductRequest =
            serde_json::from_str(r#"{"name": null, "imageUrl": null}"#).unwrap();

        assert_eq!(parsed.name, "");
        assert_eq!(parsed.image_url, "");
    }
}
