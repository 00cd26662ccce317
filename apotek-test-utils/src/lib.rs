pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_CDN_URL, TEST_MEDIA_API_KEY},
        fixtures::catalog::factory,
        test_setup_with_catalog_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
