//! Result summaries of bulk imports.

/// Outcome of importing an item set from TauHead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Items inserted into the catalogue.
    pub created: usize,
    /// Existing items overwritten with the imported data.
    pub updated: usize,
    /// Entries the set listed without item data.
    pub skipped: usize,
}

/// Outcome of parsing a campaign history page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignPageSummary {
    /// Campaigns created from lines without a matching scheduled campaign.
    pub created: usize,
    /// Scheduled campaigns matched by a line and marked completed.
    pub updated: usize,
    /// Lines that could not be parsed.
    pub skipped: usize,
    /// Attendance records added.
    pub attendance_added: usize,
    /// Open campaigns scheduled in the past that were closed.
    pub closed: u64,
}
