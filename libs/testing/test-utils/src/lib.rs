//! Shared test infrastructure for the catalog crates.
//!
//! - `TestDatabase`: throwaway PostgreSQL container with the schema migrated
//!   (feature: "postgres", needs Docker)
//! - `TestDataBuilder`: deterministic names, URLs and ids derived from the
//!   test name
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let name = builder.name("product", "main");
//!     let image_url = builder.image_url("main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data seeded from a number or a test name
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name, so each test gets its own values
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A UUID derived from the seed, stable across runs
    pub fn id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// `test-<prefix>-<seed>-<suffix>`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).name("product", "main");
    /// assert_eq!(name, "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// An absolute https URL unique to this seed and suffix
    pub fn image_url(&self, suffix: &str) -> String {
        format!("https://images.example.com/{}/{}.png", self.seed, suffix)
    }
}

pub mod assertions {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// `updated` is present and not earlier than `created`
    pub fn assert_touched_after(
        created: DateTime<Utc>,
        updated: Option<DateTime<Utc>>,
        context: &str,
    ) -> DateTime<Utc> {
        let updated = assert_some(updated, context);
        assert!(
            updated >= created,
            "{}: updated_at {} is before created_at {}",
            context,
            updated,
            created
        );
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.id(), builder2.id());
        assert_eq!(
            builder1.name("product", "test"),
            builder2.name("product", "test")
        );
        assert_eq!(builder1.image_url("a"), builder2.image_url("a"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.id(), builder2.id());
    }

    #[test]
    fn test_image_url_is_absolute_https() {
        let url = TestDataBuilder::new(1).image_url("main");
        assert!(url.starts_with("https://"));
    }

    #[test]
    #[should_panic(expected = "is before created_at")]
    fn test_assert_touched_after_rejects_earlier_update() {
        let created = chrono::Utc::now();
        let updated = created - chrono::Duration::seconds(1);
        assertions::assert_touched_after(created, Some(updated), "stock update");
    }
}
