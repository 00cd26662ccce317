//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// mock media store endpoints. Methods can be chained together and finalized with
/// `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    upload_endpoints: Vec<(String, usize)>, // (returned url, expected_requests)
    destroy_endpoints: Vec<(usize, bool)>,  // (expected_requests, succeeds)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            mock_builders: Vec::new(),
            upload_endpoints: Vec::new(),
            destroy_endpoints: Vec::new(),
        }
    }

    /// Add every table of the catalog schema to the test database.
    ///
    /// Tables are created parents first: Pharmacy, Category, Product, ProductCategory,
    /// UnitProduct, ProductImage, Stock, Admin, Order, OrderStock, OrderActivity, Cart.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use apotek_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), apotek_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Pharmacy)
    ///     .with_table(Admin)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a mock upload endpoint answering with `url`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_upload_endpoint(mut self, url: impl Into<String>, expected_requests: usize) -> Self {
        self.upload_endpoints.push((url.into(), expected_requests));
        self
    }

    /// Add a mock destroy endpoint that confirms every removal.
    pub fn with_destroy_endpoint(mut self, expected_requests: usize) -> Self {
        self.destroy_endpoints.push((expected_requests, true));
        self
    }

    /// Add a mock destroy endpoint that fails every removal with a 500.
    pub fn with_failing_destroy_endpoint(mut self, expected_requests: usize) -> Self {
        self.destroy_endpoints.push((expected_requests, false));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for responses not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Pharmacy),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::ProductCategory),
                schema.create_table_from_entity(entity::prelude::UnitProduct),
                schema.create_table_from_entity(entity::prelude::ProductImage),
                schema.create_table_from_entity(entity::prelude::Stock),
                schema.create_table_from_entity(entity::prelude::Admin),
                schema.create_table_from_entity(entity::prelude::Order),
                schema.create_table_from_entity(entity::prelude::OrderStock),
                schema.create_table_from_entity(entity::prelude::OrderActivity),
                schema.create_table_from_entity(entity::prelude::Cart),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Create mock endpoints
        // Custom endpoints are created first so they take precedence over shortcuts
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (url, expected) in self.upload_endpoints {
            mocks.push(setup.media().create_upload_endpoint(&url, expected)?);
        }

        for (expected, succeeds) in self.destroy_endpoints {
            mocks.push(setup.media().create_destroy_endpoint(expected, succeeds));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
