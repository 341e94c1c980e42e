//! TauHead item lookup.
//!
//! `ItemLookup` is the seam services use to resolve item metadata, either from a single
//! item page URL or from a whole item set. `TauheadClient` implements it against the
//! TauHead JSON API.

pub mod client;
mod dto;

use std::{collections::BTreeMap, future::Future};

use crate::{error::AppError, model::item::ItemData};

pub use client::TauheadClient;

/// Source of item metadata.
pub trait ItemLookup: Send + Sync {
    /// Looks up the item behind an item page URL.
    ///
    /// # Returns
    /// - `Ok(Some(ItemData))` - Item found
    /// - `Ok(None)` - The lookup knows no item at that URL
    /// - `Err(AppError)` - The URL is not an item URL or the lookup failed
    fn get_item_data(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Option<ItemData>, AppError>> + Send;

    /// Looks up every item of a named item set.
    ///
    /// # Returns
    /// - `Ok(BTreeMap)` - Item data keyed by slug, `None` for entries without data
    /// - `Err(AppError)` - The lookup failed
    fn bulk_parse_items(
        &self,
        set_name: &str,
    ) -> impl Future<Output = Result<BTreeMap<String, Option<ItemData>>, AppError>> + Send;
}
