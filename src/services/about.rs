//! Derivation of the about-page data.
//!
//! The backend supplies only the strings; splicing them into markup is the
//! templating collaborator's job.

use crate::api::AboutInfo;
use crate::models::{DropdownCatalog, ScorerDataset};

/// Application version surfaced on the about page.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable "last updated" label for the current data files.
pub const APP_UPDATED: &str = "October 2017";

/// Derive the informational strings from the loaded data sources.
///
/// Load-time validation guarantees both sources are non-empty, so the
/// defaults below are unreachable in a running server.
pub fn derive_about_info(dataset: &ScorerDataset, catalog: &DropdownCatalog) -> AboutInfo {
    AboutInfo {
        latest_season: dataset.max_season().unwrap_or_default().to_string(),
        first_player: catalog.first_player().unwrap_or_default().to_string(),
        last_player: catalog.last_player().unwrap_or_default().to_string(),
        player_count: catalog.len(),
        version: APP_VERSION.to_string(),
        updated: APP_UPDATED.to_string(),
    }
}
