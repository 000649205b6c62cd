use database::UuidEntity;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl UuidEntity for Model {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            price: model.price,
            description: model.description,
            stock_quantity: model.stock_quantity,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

// Every column is Set, so the same conversion serves insert and update
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            image_url: Set(product.image_url),
            price: Set(product.price),
            description: Set(product.description),
            stock_quantity: Set(product.stock_quantity),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.map(Into::into)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_model_round_trips_through_product() {
        let created_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let model = Model {
            id: Uuid::now_v7(),
            name: "Standing Desk".to_string(),
            image_url: "https://cdn.example.com/desk.png".to_string(),
            price: Some(499.0),
            description: None,
            stock_quantity: Some(3),
            created_at: created_at.into(),
            updated_at: None,
        };

        let product = Product::from(model.clone());
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.id, model.id());

        let active: ActiveModel = product.into();
        assert_eq!(active.name.unwrap(), "Standing Desk");
        assert!(active.updated_at.unwrap().is_none());
    }
}
