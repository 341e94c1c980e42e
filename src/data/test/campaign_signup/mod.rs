use crate::data::campaign_signup::CampaignSignupRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
