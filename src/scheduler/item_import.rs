use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::item_import::ItemImportService,
    tauhead::{ItemLookup, TauheadClient},
};

/// Starts the item import scheduler
///
/// The job imports every configured TauHead item set on the given schedule. No job is
/// added when no sets are configured.
///
/// # Arguments
/// - `db`: Database connection
/// - `client`: TauHead client used for the lookups
/// - `sets`: Item set names to import
/// - `schedule`: Cron expression including seconds
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, stops when dropped with the runtime
/// - `Err(AppError)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    client: TauheadClient,
    sets: Vec<String>,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    if sets.is_empty() {
        tracing::info!("No item sets configured, item import disabled");
        return Ok(scheduler);
    }

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let client = client.clone();
        let sets = sets.clone();

        Box::pin(async move {
            import_sets(&db, &client, &sets).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Item import scheduler started with schedule {}", schedule);

    Ok(scheduler)
}

/// Imports each set in turn, logging failures without stopping at them.
///
/// # Returns
/// - Number of sets imported successfully
pub async fn import_sets<L: ItemLookup>(
    db: &DatabaseConnection,
    lookup: &L,
    sets: &[String],
) -> usize {
    let service = ItemImportService::new(db, lookup);
    let mut imported = 0;

    for set in sets {
        match service.import_items_from_tauhead(set).await {
            Ok(_) => imported += 1,
            Err(e) => tracing::error!("Error importing item set {}: {}", set, e),
        }
    }

    imported
}
