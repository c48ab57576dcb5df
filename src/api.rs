//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types handed to the UI shell: the plot
//! specification consumed by the chart renderer, the dropdown option list,
//! and the about-page strings. All types derive Serialize/Deserialize for
//! JSON serialization.

use serde::{Deserialize, Serialize};

/// A single scatter point: a player's age and league goals for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Age at the season midpoint (1 January)
    pub age: f64,
    /// League goals scored that season
    pub goals: u32,
}

/// A point on a smoothed trend curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub age: f64,
    pub goals: f64,
}

/// One plotted player: scatter points plus an optional trend curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Player display name, exactly as it appears in the dataset
    pub player: String,
    /// Visual-encoding key (`#rrggbb`), derived from the player name alone
    /// so the same player is drawn the same way on every request
    pub color: String,
    /// (age, goals) points in dataset row order
    pub points: Vec<PlotPoint>,
    /// Locally weighted regression curve; present only for series with at
    /// least two points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_curve: Option<Vec<TrendPoint>>,
}

/// Complete plot specification handed to the chart renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One more than the highest goal count among the plotted records.
    /// Omitted when no record matched the selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_upper_bound: Option<u32>,
    pub series: Vec<PlotSeries>,
}

/// One selectable entry in the player dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Text shown in the dropdown widget
    pub label: String,
    /// Player name as it appears in the scorer dataset
    pub value: String,
}

/// Derived strings for the about page template.
///
/// The backend supplies only the data; the markup belongs to the UI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutInfo {
    /// Lexicographically greatest season label in the dataset
    pub latest_season: String,
    /// First player in dropdown order
    pub first_player: String,
    /// Last player in dropdown order
    pub last_player: String,
    /// Number of selectable players
    pub player_count: usize,
    /// Application version
    pub version: String,
    /// Human-readable "last updated" label
    pub updated: String,
}
