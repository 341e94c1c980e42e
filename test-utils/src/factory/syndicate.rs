//! Syndicate factory for creating test syndicate entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test syndicates with customizable fields.
pub struct SyndicateFactory<'a> {
    db: &'a DatabaseConnection,
    tag: String,
}

impl<'a> SyndicateFactory<'a> {
    /// Creates a new SyndicateFactory with a unique tag.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            tag: format!("SYN{}", next_id()),
        }
    }

    /// Sets the syndicate tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Builds and inserts the syndicate entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::syndicate::Model)` - Created syndicate entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::syndicate::Model, DbErr> {
        entity::syndicate::ActiveModel {
            id: ActiveValue::NotSet,
            tag: ActiveValue::Set(self.tag),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a syndicate with a unique tag.
///
/// Shorthand for `SyndicateFactory::new(db).build().await`.
pub async fn create_syndicate(db: &DatabaseConnection) -> Result<entity::syndicate::Model, DbErr> {
    SyndicateFactory::new(db).build().await
}
