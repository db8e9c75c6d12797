//! Test utilities for the Sarpedon workspace.
//!
//! Tests declare what they need through [`TestBuilder`] (tables and registry fixtures) and then
//! work against the resulting [`TestContext`], which wraps an in-memory SQLite database.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_DATABASE_URL, fixtures::team::factory, TestBuilder, TestContext, TestError,
    };
}
