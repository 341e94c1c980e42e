use crate::data::campaign_loot::CampaignLootRepository;
use entity::campaign_loot::CampaignLootStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_by_campaigns;
