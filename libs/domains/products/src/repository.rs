use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// A pass-through persistence boundary with no catalog rules of its own.
/// Implementations can use different storage backends (PostgreSQL, in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Get a product by its exact title
    async fn find_by_title(&self, title: &str) -> ProductResult<Option<Product>>;

    /// List products whose category matches exactly
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Distinct category labels in ascending order
    async fn find_all_categories(&self) -> ProductResult<Vec<String>>;

    /// Insert a product with an unassigned id, or replace the record with a matching id
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID (no-op when absent)
    async fn delete_by_id(&self, id: i32) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Catalog {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given products
    pub async fn with_products(products: impl IntoIterator<Item = Product>) -> ProductResult<Self> {
        let repository = Self::new();
        for product in products {
            repository.save(product).await?;
        }
        Ok(repository)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> ProductResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .products
            .values()
            .find(|p| p.title == title)
            .cloned())
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .products
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn find_all_categories(&self) -> ProductResult<Vec<String>> {
        let catalog = self.catalog.read().await;
        let categories: BTreeSet<&str> = catalog
            .products
            .values()
            .map(|p| p.category.as_str())
            .collect();
        Ok(categories.into_iter().map(str::to_string).collect())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;

        if product.is_persisted() {
            catalog.last_id = catalog.last_id.max(product.id);
        } else {
            catalog.last_id = catalog
                .last_id
                .checked_add(1)
                .ok_or_else(|| ProductError::Database("product id space exhausted".to_string()))?;
            product.id = catalog.last_id;
        }

        catalog.products.insert(product.id, product.clone());

        tracing::debug!(product_id = product.id, "Saved product");
        Ok(product)
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let mut catalog = self.catalog.write().await;

        if catalog.products.remove(&id).is_some() {
            tracing::debug!(product_id = id, "Deleted product");
        }

        Ok(())
    }
}
