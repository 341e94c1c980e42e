//! Item catalogue import from TauHead item sets.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::item::ItemRepository, error::AppError, model::import::ImportSummary,
    tauhead::ItemLookup,
};

pub struct ItemImportService<'a, L: ItemLookup> {
    db: &'a DatabaseConnection,
    lookup: &'a L,
}

impl<'a, L: ItemLookup> ItemImportService<'a, L> {
    pub fn new(db: &'a DatabaseConnection, lookup: &'a L) -> Self {
        Self { db, lookup }
    }

    /// Imports every item of a TauHead item set into the catalogue.
    ///
    /// Items already catalogued under the same slug are overwritten with the imported
    /// data, other items are inserted. Set entries without item data are skipped.
    ///
    /// # Arguments
    /// - `set_name` - TauHead item set to import
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Counts of created, updated and skipped items
    /// - `Err(AppError)` - Lookup or database failure
    pub async fn import_items_from_tauhead(&self, set_name: &str) -> Result<ImportSummary, AppError> {
        let entries = self.lookup.bulk_parse_items(set_name).await?;
        let repo = ItemRepository::new(self.db);
        let mut summary = ImportSummary::default();

        for (slug, data) in entries {
            let Some(data) = data else {
                tracing::debug!("No item data for {} in set {}", slug, set_name);
                summary.skipped += 1;
                continue;
            };

            let exists = repo.find_by_slug(&data.slug).await?.is_some();
            repo.upsert(data).await?;

            if exists {
                summary.updated += 1;
            } else {
                summary.created += 1;
            }
        }

        tracing::info!(
            "Imported item set {}: {} created, {} updated, {} skipped",
            set_name,
            summary.created,
            summary.updated,
            summary.skipped
        );

        Ok(summary)
    }
}
