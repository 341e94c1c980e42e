//! HTTP client for the TauHead JSON API.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use reqwest::StatusCode;
use url::Url;

use crate::{
    error::{tauhead::TauheadError, AppError},
    model::item::ItemData,
    tauhead::{dto::ItemDto, ItemLookup},
};

/// Path segment preceding the slug in item page URLs.
const ITEM_SEGMENT: &str = "item";

/// TauHead API client. Cheap to clone, clones share the connection pool.
#[derive(Clone)]
pub struct TauheadClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TauheadClient {
    /// Creates a client for the TauHead instance at `base_url`.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `base_url` - Root URL of the TauHead site, e.g. `https://www.tauhead.com`
    ///
    /// # Returns
    /// - `Ok(TauheadClient)` - Client ready for lookups
    /// - `Err(AppError::UrlErr)` - `base_url` is not a valid URL
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Extracts the item slug from an item page URL such as `https://www.tauhead.com/item/some-blade`.
    pub fn item_slug(url: &str) -> Result<String, TauheadError> {
        let invalid = || TauheadError::InvalidItemUrl(url.to_string());

        let parsed = Url::parse(url.trim()).map_err(|_| invalid())?;
        let mut segments = parsed.path_segments().ok_or_else(invalid)?;

        segments
            .by_ref()
            .find(|segment| *segment == ITEM_SEGMENT)
            .ok_or_else(invalid)?;

        match segments.next() {
            Some(slug) if !slug.is_empty() => Ok(slug.to_string()),
            _ => Err(invalid()),
        }
    }

    fn api_url(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::InternalError(format!("TauHead URL {} cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .push("api")
            .extend(segments);

        Ok(url)
    }
}

impl ItemLookup for TauheadClient {
    async fn get_item_data(&self, url: &str) -> Result<Option<ItemData>, AppError> {
        let slug = Self::item_slug(url)?;
        let api_url = self.api_url(&[ITEM_SEGMENT, &slug])?;

        tracing::debug!("Fetching TauHead item {}", slug);

        let response = self.http.get(api_url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(TauheadError::UnexpectedStatus {
                url: api_url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let dto: ItemDto = response.json().await?;

        Ok(Some(dto.into_item_data(slug)?))
    }

    async fn bulk_parse_items(
        &self,
        set_name: &str,
    ) -> Result<BTreeMap<String, Option<ItemData>>, AppError> {
        let api_url = self.api_url(&["item-set", set_name])?;

        tracing::debug!("Fetching TauHead item set {}", set_name);

        let response = self.http.get(api_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TauheadError::UnexpectedStatus {
                url: api_url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let entries: BTreeMap<String, Option<ItemDto>> = response.json().await?;

        let mut items = BTreeMap::new();
        for (slug, dto) in entries {
            // Entries with values this catalogue cannot store are skipped, not fatal
            let data = match dto.map(|dto| dto.into_item_data(slug.clone())) {
                Some(Ok(data)) => Some(data),
                Some(Err(e)) => {
                    tracing::warn!("Skipping item {} in set {}: {}", slug, set_name, e);
                    None
                }
                None => None,
            };
            items.insert(slug, data);
        }

        Ok(items)
    }
}
