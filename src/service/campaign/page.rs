//! Parsing of campaign history pages.
//!
//! A page lists one finished campaign per line:
//!
//! ```text
//! 2020-12-31 18:00 | Yards of Gadani | Hard | 1,2,5 | Leader, Player1
//! ```
//!
//! Fields are the UTC start time, station, difficulty, participating tiers and attendee
//! names. Blank lines and lines starting with `#` are ignored.

use chrono::{DateTime, NaiveDateTime, Utc};
use entity::campaign::CampaignDifficulty;

use crate::{
    model::{campaign::tier_bit, player::MAX_TIER},
    util::label,
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const FIELD_COUNT: usize = 5;

/// One campaign line of a history page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub utc_date_time: DateTime<Utc>,
    pub station: String,
    pub difficulty: CampaignDifficulty,
    /// Tier bitmask.
    pub tiers: i32,
    pub attendees: Vec<String>,
}

/// Parses every campaign line of a page.
///
/// # Returns
/// - `(Vec<PageEntry>, usize)` - Parsed entries in page order and the number of lines
///   that could not be parsed
pub fn parse_page(page: &str) -> (Vec<PageEntry>, usize) {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for line in page.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    (entries, skipped)
}

/// Parses a single campaign line, `None` when any field is malformed.
pub fn parse_line(line: &str) -> Option<PageEntry> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let utc_date_time = NaiveDateTime::parse_from_str(fields[0], DATE_FORMAT)
        .ok()?
        .and_utc();

    let station = fields[1];
    if station.is_empty() {
        return None;
    }

    let difficulty = label::parse::<CampaignDifficulty>(fields[2])?;
    let tiers = parse_tiers(fields[3])?;
    let attendees = split_list(fields[4]).map(str::to_string).collect();

    Some(PageEntry {
        utc_date_time,
        station: station.to_string(),
        difficulty,
        tiers,
        attendees,
    })
}

/// Converts a comma separated tier list such as `1,2,5` into a tier bitmask.
pub fn parse_tiers(value: &str) -> Option<i32> {
    let mut tiers = 0;

    for tier in split_list(value) {
        let tier: i32 = tier.parse().ok()?;
        if !(1..=MAX_TIER).contains(&tier) {
            return None;
        }
        tiers |= tier_bit(tier);
    }

    Some(tiers)
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}
