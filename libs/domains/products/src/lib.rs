//! Product catalog domain
//!
//! A product has a title (unique across the catalog), a price, a category
//! label, a description and an image reference. Layers, outermost first:
//!
//! - [`handlers`]: axum routes and their OpenAPI description
//! - [`service`]: existence checks and title uniqueness
//! - [`repository`]: storage trait plus an in-memory store; [`postgres`] holds
//!   the SeaORM-backed one, mapped through [`entity`]
//! - [`models`]: the `Product` record and the validated `ProductInput` body
//!
//! ```rust,no_run
//! use domain_products::{InMemoryProductRepository, ProductService, handlers};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let routes: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductInput, UNASSIGNED_ID};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
