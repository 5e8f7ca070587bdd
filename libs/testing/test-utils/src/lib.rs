//! Helpers for catalog tests
//!
//! With the default `postgres` feature, [`TestDatabase`] runs a migrated
//! PostgreSQL in a container. [`TestDataBuilder`] derives titles and
//! categories from the test name so tests sharing one database stay apart.
//!
//! ```ignore
//! #[tokio::test]
//! async fn finds_by_title() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("finds_by_title");
//!     let title = data.title("lampa", "main");
//!     // ...
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic, per-test unique strings
///
/// ```
/// use test_utils::TestDataBuilder;
///
/// let data = TestDataBuilder::new(7);
/// assert_eq!(data.title("laptop", "main"), "test-laptop-7-main");
/// assert_eq!(data.category("shoes"), "test-shoes-7");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of `name`, stable across runs of the same binary
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn title(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{prefix}-{}-{suffix}", self.seed)
    }

    pub fn category(&self, name: &str) -> String {
        format!("test-{name}-{}", self.seed)
    }
}

pub mod assertions {
    use std::fmt::Debug;

    /// Unwrap `value`, naming `context` in the panic
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        match value {
            Some(inner) => inner,
            None => panic!("{context}: expected Some, got None"),
        }
    }

    /// Every element strictly less than the next (sorted, no duplicates)
    pub fn assert_strictly_ascending<T: PartialOrd + Debug>(values: &[T], context: &str) {
        if let Some(pair) = values.windows(2).find(|pair| pair[0] >= pair[1]) {
            panic!("{context}: {:?} is not strictly before {:?}", pair[0], pair[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_values() {
        let (a, b) = (TestDataBuilder::new(42), TestDataBuilder::new(42));
        assert_eq!(a.title("product", "x"), b.title("product", "x"));
        assert_eq!(a.category("shoes"), b.category("shoes"));
    }

    #[test]
    fn test_test_names_do_not_collide() {
        let a = TestDataBuilder::from_test_name("adds_product");
        let b = TestDataBuilder::from_test_name("deletes_product");
        assert_ne!(a.title("product", "x"), b.title("product", "x"));
    }

    #[test]
    fn test_strictly_ascending_accepts_sorted() {
        assertions::assert_strictly_ascending(&["a", "b", "c"], "letters");
        assertions::assert_strictly_ascending::<i32>(&[], "empty");
    }

    #[test]
    #[should_panic(expected = "letters")]
    fn test_strictly_ascending_rejects_duplicates() {
        assertions::assert_strictly_ascending(&["a", "a"], "letters");
    }
}
