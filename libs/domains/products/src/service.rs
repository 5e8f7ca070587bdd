//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Product service providing catalog business rules
///
/// Holds no state beyond the injected repository. Mutating operations check
/// existence or title uniqueness first and then perform a single repository
/// write; the check and the write are not atomic with respect to each other.
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
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product in repository order
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// List distinct categories in ascending order
    #[instrument(skip(self))]
    pub async fn get_all_categories(&self) -> ProductResult<Vec<String>> {
        self.repository.find_all_categories().await
    }

    /// List products in a category; an unknown category yields an empty list
    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.repository.find_by_category(category).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Add a new product, rejecting titles that are already taken
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn add_product(&self, input: ProductInput) -> ProductResult<Product> {
        if self.repository.find_by_title(&input.title).await?.is_some() {
            tracing::info!("Rejected product with duplicate title");
            return Err(ProductError::DuplicateTitle(input.title));
        }

        let product = self.repository.save(Product::new(input)).await?;

        tracing::info!(product_id = product.id, "Added product");
        Ok(product)
    }

    /// Replace all fields of an existing product, keeping its id
    ///
    /// Title uniqueness is only enforced by [`Self::add_product`]; an update may
    /// rename a product to a title another product already uses.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let mut product = self.get_product_by_id(id).await?;
        product.apply_update(input);

        let product = self.repository.save(product).await?;

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    /// Delete an existing product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}
