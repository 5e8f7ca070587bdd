use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            price: model.price,
            category: model.category,
            description: model.description,
            image_url: model.image_url,
        }
    }
}

// Unassigned ids are left NotSet so the serial column picks the next value
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        let id = if product.is_persisted() {
            Set(product.id)
        } else {
            NotSet
        };

        ActiveModel {
            id,
            title: Set(product.title),
            price: Set(product.price),
            category: Set(product.category),
            description: Set(product.description),
            image_url: Set(product.image_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductInput;

    #[test]
    fn test_unassigned_id_is_not_set() {
        let product = Product::new(ProductInput::new("Dator", 4000.0, "", "", ""));
        let active: ActiveModel = product.into();
        assert!(matches!(active.id, NotSet));
        assert_eq!(active.title, Set("Dator".to_string()));
    }

    #[test]
    fn test_assigned_id_is_set() {
        let mut product = Product::new(ProductInput::new("Dator", 4000.0, "", "", ""));
        product.id = 42;
        let active: ActiveModel = product.into();
        assert_eq!(active.id, Set(42));
    }
}
