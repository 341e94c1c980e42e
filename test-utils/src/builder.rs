use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or one of the grouped helpers), then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Syndicate, Player};
///
/// let test = TestBuilder::new()
///     .with_table(Syndicate)
///     .with_table(Player)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_with_index_from_entity(entity));
        self
    }

    /// Adds the syndicate roster tables.
    ///
    /// Adds, in dependency order:
    /// - Syndicate
    /// - Player
    pub fn with_roster_tables(self) -> Self {
        self.with_table(Syndicate).with_table(Player)
    }

    /// Adds every table used by campaign and loot operations.
    ///
    /// Adds, in dependency order:
    /// - Syndicate
    /// - Player
    /// - Campaign
    /// - Item
    /// - CampaignLoot
    /// - LootRequest
    /// - CampaignSignup
    /// - CampaignAttendance
    /// - PlayerListPositionHistory
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_campaign_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_campaign_tables(self) -> Self {
        self.with_roster_tables()
            .with_table(Campaign)
            .with_table(Item)
            .with_table(CampaignLoot)
            .with_table(LootRequest)
            .with_table(CampaignSignup)
            .with_table(CampaignAttendance)
            .with_table(PlayerListPositionHistory)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
