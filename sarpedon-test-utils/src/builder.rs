//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and team
/// registry fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_score_tables: bool,
    teams: Vec<(String, String)>, // (team_id, alias)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_score_tables: false,
            teams: Vec::new(),
        }
    }

    /// Add the team registry, results ledger and scoreboard tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_score_tables(mut self) -> Self {
        self.include_score_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Useful for tests that need some of the tables to be missing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sarpedon_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), sarpedon_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Team)
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

    /// Register a team in the team registry.
    ///
    /// The email is derived from the team ID, see [`crate::fixtures::team::factory::team`].
    ///
    /// # Arguments
    /// - `team_id` - Stable team identifier
    /// - `alias` - Display name teams are looked up by
    pub fn with_team(mut self, team_id: impl Into<String>, alias: impl Into<String>) -> Self {
        self.teams.push((team_id.into(), alias.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_score_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Results),
                schema.create_table_from_entity(entity::prelude::Scoreboard),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for (team_id, alias) in self.teams {
            context.team().insert_team(&team_id, &alias).await?;
        }

        Ok(context)
    }
}
