use crate::{
    error::AppError,
    model::loot::{DistributionOrderParams, LootRequestParams},
    service::loot::LootService,
};
use chrono::{Duration, TimeZone, Utc};
use entity::{
    campaign::{CampaignDifficulty, CampaignStatus},
    campaign_loot::CampaignLootStatus,
    item::{ItemRarity, ItemType, ItemWeaponRange, ItemWeaponType},
    loot_request::LootRequestStatus,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, campaign::CampaignFactory, campaign_loot::CampaignLootFactory,
        item::ItemFactory, loot_request::LootRequestFactory, player::PlayerFactory,
        position_history::PositionHistoryFactory, syndicate::SyndicateFactory,
    },
};

mod award_loot;
mod get_current_distribution_order;
mod withdraw_loot_request;

/// Syndicate with three players, two completed campaigns, four pieces of loot and two
/// requests on the tier 1 weapon of the first campaign.
///
/// Player1 attended both campaigns, player2 the normal one and player3 the hard one.
/// Every player has one history entry, player1 the oldest.
struct Seed {
    syndicate: entity::syndicate::Model,
    player1: entity::player::Model,
    player2: entity::player::Model,
    player3: entity::player::Model,
    campaign1: entity::campaign::Model,
    campaign2: entity::campaign::Model,
    /// Tier 2 weapon dropped in campaign1.
    loot1: entity::campaign_loot::Model,
    /// Tier 1 weapon dropped in campaign1.
    loot2: entity::campaign_loot::Model,
    /// Tier 1 weapon dropped in campaign2.
    loot3: entity::campaign_loot::Model,
    /// Tier 2 armor dropped in campaign2.
    loot4: entity::campaign_loot::Model,
    /// Player1's own interest in loot2.
    request1: entity::loot_request::Model,
    /// Player2's special offer for loot2.
    request2: entity::loot_request::Model,
}

async fn seed(db: &DatabaseConnection) -> Result<Seed, DbErr> {
    let syndicate = SyndicateFactory::new(db).tag("TAU").build().await?;
    let player1 = PlayerFactory::new(db, syndicate.id)
        .name("Leader")
        .level(5.2)
        .build()
        .await?;
    let player2 = PlayerFactory::new(db, syndicate.id)
        .name("Player24")
        .level(24.0)
        .build()
        .await?;
    let player3 = PlayerFactory::new(db, syndicate.id)
        .name("Player25")
        .level(25.0)
        .build()
        .await?;

    let campaign1 = CampaignFactory::new(db, syndicate.id)
        .station("Yards of Gadani")
        .difficulty(CampaignDifficulty::Normal)
        .status(CampaignStatus::Completed)
        .utc_date_time(Utc.with_ymd_and_hms(2019, 12, 31, 0, 0, 0).unwrap())
        .build()
        .await?;
    let campaign2 = CampaignFactory::new(db, syndicate.id)
        .station("Nouveau Limoges")
        .difficulty(CampaignDifficulty::Hard)
        .status(CampaignStatus::Completed)
        .utc_date_time(Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap())
        .build()
        .await?;

    factory::create_attendance(db, campaign1.id, player1.id).await?;
    factory::create_attendance(db, campaign2.id, player1.id).await?;
    factory::create_attendance(db, campaign1.id, player2.id).await?;
    factory::create_attendance(db, campaign2.id, player3.id).await?;

    let tier1_weapon = ItemFactory::new(db)
        .name("Tier 1 Blade")
        .tier(1)
        .rarity(ItemRarity::Epic)
        .weapon(ItemWeaponType::Blade, ItemWeaponRange::Short)
        .build()
        .await?;
    let tier2_weapon = ItemFactory::new(db)
        .name("Tier 2 Rifle")
        .tier(2)
        .rarity(ItemRarity::Epic)
        .weapon(ItemWeaponType::Rifle, ItemWeaponRange::Long)
        .build()
        .await?;
    let tier2_armor = ItemFactory::new(db)
        .name("Tier 2 Armor")
        .tier(2)
        .rarity(ItemRarity::Epic)
        .item_type(ItemType::Armor)
        .build()
        .await?;

    let loot1 = factory::create_loot(db, campaign1.id, tier2_weapon.id).await?;
    let loot2 = factory::create_loot(db, campaign1.id, tier1_weapon.id).await?;
    let loot3 = factory::create_loot(db, campaign2.id, tier1_weapon.id).await?;
    let loot4 = factory::create_loot(db, campaign2.id, tier2_armor.id).await?;

    let request1 = factory::create_loot_request(db, loot2.id, player1.id).await?;
    let request2 = LootRequestFactory::new(db, loot2.id, player2.id)
        .status(LootRequestStatus::SpecialOffer)
        .special_offer_description(Some("Trade for a Tier 2 Rifle".to_string()))
        .build()
        .await?;

    let start = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
    for (offset, player) in [&player1, &player2, &player3].into_iter().enumerate() {
        PositionHistoryFactory::new(db, player.id)
            .comment(Some("Initial seed".to_string()))
            .created_at(start + Duration::minutes(offset as i64))
            .build()
            .await?;
    }

    Ok(Seed {
        syndicate,
        player1,
        player2,
        player3,
        campaign1,
        campaign2,
        loot1,
        loot2,
        loot3,
        loot4,
        request1,
        request2,
    })
}

/// Most recent history entry.
async fn last_history_entry(
    db: &DatabaseConnection,
) -> Result<entity::player_list_position_history::Model, DbErr> {
    let entry = entity::prelude::PlayerListPositionHistory::find()
        .order_by_desc(entity::player_list_position_history::Column::Id)
        .one(db)
        .await?;

    entry.ok_or_else(|| DbErr::RecordNotFound("position history".to_string()))
}
