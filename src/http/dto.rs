//! Data Transfer Objects for the HTTP API.
//!
//! The plot and about DTOs are re-exported from the api module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{AboutInfo, DropdownOption, PlotPoint, PlotSeries, PlotSpec, TrendPoint};

/// Legacy "no selection" marker the original dropdown shell sends for an
/// untouched slot. It is translated to `None` at this boundary; nothing
/// past the DTO layer compares against it.
pub const UNSELECTED_SENTINEL: &str = "Empty";

/// Query parameters for the plot endpoint: one value per dropdown slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotQuery {
    #[serde(default)]
    pub selected_p1: Option<String>,
    #[serde(default)]
    pub selected_p2: Option<String>,
    #[serde(default)]
    pub selected_p3: Option<String>,
    #[serde(default)]
    pub selected_p4: Option<String>,
    #[serde(default)]
    pub selected_p5: Option<String>,
    #[serde(default)]
    pub selected_p6: Option<String>,
    #[serde(default)]
    pub selected_p7: Option<String>,
    #[serde(default)]
    pub selected_p8: Option<String>,
    /// Smoothing span override for the trend curves (0 < span <= 1)
    #[serde(default)]
    pub span: Option<f64>,
}

impl PlotQuery {
    /// Slot values in slot order, with absent parameters, the legacy
    /// sentinel, and the empty string all mapped to "unselected".
    pub fn slots(&self) -> Vec<Option<String>> {
        [
            &self.selected_p1,
            &self.selected_p2,
            &self.selected_p3,
            &self.selected_p4,
            &self.selected_p5,
            &self.selected_p6,
            &self.selected_p7,
            &self.selected_p8,
        ]
        .into_iter()
        .map(|slot| {
            slot.as_deref()
                .filter(|v| !v.is_empty() && *v != UNSELECTED_SENTINEL)
                .map(str::to_string)
        })
        .collect()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of scorer records held in memory
    pub records: usize,
}

/// Player dropdown list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    /// Options in dropdown order
    pub players: Vec<DropdownOption>,
    /// Total count
    pub total: usize,
}
