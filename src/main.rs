use dioxus_logger::tracing::{self, Level};

use taumanager::{
    bot, config::Config, error::AppError, scheduler::item_import, startup, tauhead::TauheadClient,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let _ = dioxus_logger::init(Level::INFO);

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let tauhead_client = TauheadClient::new(http_client, &config.tauhead_url)?;

    tracing::info!("Starting syndicate manager");

    let bot_client = bot::start::init_bot(&config, db.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let _scheduler = item_import::start_scheduler(
        db,
        tauhead_client,
        config.item_import_sets.clone(),
        &config.item_import_schedule,
    )
    .await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    tracing::info!("Shutting down");

    Ok(())
}
