//! Loot request repository.

use entity::loot_request::LootRequestStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::loot::LootRequest;

/// Statuses of requests still waiting for a decision.
const OPEN_STATUSES: [LootRequestStatus; 2] = [
    LootRequestStatus::Interested,
    LootRequestStatus::SpecialOffer,
];

/// Fields of a new or changed loot request.
pub struct LootRequestFields {
    pub requested_by_id: i32,
    pub requested_for_id: i32,
    pub status: LootRequestStatus,
    pub special_offer_description: Option<String>,
}

/// Repository providing database operations for loot requests.
pub struct LootRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LootRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a loot request by id.
    ///
    /// # Returns
    /// - `Ok(Some(LootRequest))` - Request found
    /// - `Ok(None)` - No request with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LootRequest>, DbErr> {
        let entity = entity::prelude::LootRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(LootRequest::from_entity))
    }

    /// Gets every request on the given loot, oldest first.
    pub async fn get_by_loot_ids(&self, loot_ids: &[i32]) -> Result<Vec<LootRequest>, DbErr> {
        if loot_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::LootRequest::find()
            .filter(entity::loot_request::Column::LootId.is_in(loot_ids.to_vec()))
            .order_by_asc(entity::loot_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LootRequest::from_entity).collect())
    }

    /// Finds the request made for a player on a piece of loot.
    ///
    /// # Arguments
    /// - `loot_id` - Requested loot
    /// - `player_id` - Player the request was made for
    ///
    /// # Returns
    /// - `Ok(Some(LootRequest))` - The player's request, the oldest when several exist
    /// - `Ok(None)` - No request for the player on this loot
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_player(
        &self,
        loot_id: i32,
        player_id: i32,
    ) -> Result<Option<LootRequest>, DbErr> {
        let entity = entity::prelude::LootRequest::find()
            .filter(entity::loot_request::Column::LootId.eq(loot_id))
            .filter(entity::loot_request::Column::RequestedForId.eq(player_id))
            .order_by_asc(entity::loot_request::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(LootRequest::from_entity))
    }

    /// Creates a loot request.
    ///
    /// # Returns
    /// - `Ok(LootRequest)` - The created request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        loot_id: i32,
        fields: LootRequestFields,
    ) -> Result<LootRequest, DbErr> {
        let entity = entity::loot_request::ActiveModel {
            loot_id: ActiveValue::Set(loot_id),
            requested_by_id: ActiveValue::Set(fields.requested_by_id),
            requested_for_id: ActiveValue::Set(fields.requested_for_id),
            status: ActiveValue::Set(fields.status),
            special_offer_description: ActiveValue::Set(fields.special_offer_description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LootRequest::from_entity(entity))
    }

    /// Replaces the requester, beneficiary, status and offer of a request.
    ///
    /// # Returns
    /// - `Ok(Some(LootRequest))` - The updated request
    /// - `Ok(None)` - No request with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        fields: LootRequestFields,
    ) -> Result<Option<LootRequest>, DbErr> {
        let Some(entity) = entity::prelude::LootRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.requested_by_id = ActiveValue::Set(fields.requested_by_id);
        active.requested_for_id = ActiveValue::Set(fields.requested_for_id);
        active.status = ActiveValue::Set(fields.status);
        active.special_offer_description = ActiveValue::Set(fields.special_offer_description);
        let entity = active.update(self.db).await?;

        Ok(Some(LootRequest::from_entity(entity)))
    }

    /// Sets the status of a request.
    ///
    /// # Returns
    /// - `Ok(true)` - Request updated
    /// - `Ok(false)` - No request with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: LootRequestStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::LootRequest::update_many()
            .filter(entity::loot_request::Column::Id.eq(id))
            .col_expr(entity::loot_request::Column::Status, Expr::value(status))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Declines every open request on a piece of loot except one.
    ///
    /// # Arguments
    /// - `loot_id` - Loot whose requests are declined
    /// - `keep_id` - Request left untouched, `None` declines all open requests
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests declined
    /// - `Err(DbErr)` - Database error during update
    pub async fn decline_open(&self, loot_id: i32, keep_id: Option<i32>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::LootRequest::update_many()
            .filter(entity::loot_request::Column::LootId.eq(loot_id))
            .filter(entity::loot_request::Column::Status.is_in(OPEN_STATUSES));

        if let Some(keep_id) = keep_id {
            query = query.filter(entity::loot_request::Column::Id.ne(keep_id));
        }

        let result = query
            .col_expr(
                entity::loot_request::Column::Status,
                Expr::value(LootRequestStatus::Declined),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a request.
    ///
    /// # Returns
    /// - `Ok(true)` - Request deleted
    /// - `Ok(false)` - No request with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LootRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
