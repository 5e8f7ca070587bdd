use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Id carried by a product that has not been persisted yet
pub const UNASSIGNED_ID: i32 = 0;

/// Product entity - a single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier (0 until persisted)
    #[serde(default)]
    pub id: i32,
    /// Display title, unique across the catalog
    pub title: String,
    /// Price, never negative
    pub price: f64,
    /// Free-form category label
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Reference to the product image
    #[serde(default)]
    pub image_url: String,
}

/// DTO for adding or replacing a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl ProductInput {
    pub fn new(
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            category: category.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}

impl Product {
    /// Build a not-yet-persisted product from input
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: input.title,
            price: input.price,
            category: input.category,
            description: input.description,
            image_url: input.image_url,
        }
    }

    /// Whether the store has assigned an id to this product
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Replace every field except the id with the incoming values
    pub fn apply_update(&mut self, input: ProductInput) {
        self.title = input.title;
        self.price = input.price;
        self.category = input.category;
        self.description = input.description;
        self.image_url = input.image_url;
    }
}

impl From<ProductInput> for Product {
    fn from(input: ProductInput) -> Self {
        Product::new(input)
    }
}
