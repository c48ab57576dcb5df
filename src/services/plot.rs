//! The selection-to-plot pipeline.
//!
//! Converts the dropdown slot values of one request into a renderable
//! [`PlotSpec`]: normalize the slots, fall back to the exemplar roster when
//! nothing is selected, filter the dataset, and build one series per
//! matched player. Pure function of (dataset, slots, span); any string is
//! accepted as a candidate name and unmatched names simply contribute no
//! series.

use std::collections::HashSet;

use log::info;
use palette::{Hsl, IntoColor, Srgb};
use sha2::{Digest, Sha256};

use super::smoothing;
use crate::api::{PlotPoint, PlotSeries, PlotSpec, TrendPoint};
use crate::models::{ScorerDataset, ScorerRecord};

pub const PLOT_TITLE: &str = "LFCGM Age vs League Goals";
pub const EXEMPLAR_TITLE: &str = "LFCGM Example Plot, The Champions: Age vs League Goals";
pub const X_LABEL: &str = "Age at Midpoint of Season";
pub const Y_LABEL: &str = "League Goals per Season";

/// Fixed fallback roster shown when no explicit selection is made.
pub const EXEMPLAR_PLAYERS: [&str; 8] = [
    "Ian Rush",
    "Kenny Dalglish",
    "Roger Hunt",
    "David Johnson",
    "Harry Chambers",
    "John Toshack",
    "John Barnes",
    "Kevin Keegan",
];

/// A series needs at least this many points before it gets a trend curve.
const MIN_TREND_POINTS: usize = 2;

/// Drop unselected slots; the remaining values form the player selection.
///
/// Duplicates are kept and names are matched exactly, with no case or
/// whitespace normalization.
pub fn normalize_selection(slots: &[Option<String>]) -> Vec<String> {
    slots.iter().flatten().cloned().collect()
}

/// Build the plot specification for one request.
///
/// The exemplar fallback triggers only when the selection is empty after
/// normalization; a selection of entirely unknown names keeps the regular
/// title and yields an empty series list.
pub fn build_plot_spec(dataset: &ScorerDataset, slots: &[Option<String>], span: f64) -> PlotSpec {
    let mut players = normalize_selection(slots);
    let mut title = PLOT_TITLE;

    if players.is_empty() {
        info!("players list empty so setting the exemplar roster");
        players = EXEMPLAR_PLAYERS.iter().map(|s| s.to_string()).collect();
        title = EXEMPLAR_TITLE;
    }

    info!("creating plot spec for: {:?}", players);
    let names: HashSet<String> = players.into_iter().collect();
    let filtered = dataset.filter_by_players(&names);

    let y_axis_upper_bound = filtered
        .iter()
        .map(|r| r.league_goals)
        .max()
        .map(|highest| highest + 1);

    let series = group_by_player(&filtered)
        .into_iter()
        .map(|(player, records)| build_series(player, &records, span))
        .collect();

    PlotSpec {
        title: title.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        y_axis_upper_bound,
        series,
    }
}

/// Group filtered records by player.
///
/// Groups are ordered by first appearance in the dataset and each group
/// keeps its records in dataset row order, so the output never depends on
/// selection order.
fn group_by_player<'a>(records: &[&'a ScorerRecord]) -> Vec<(String, Vec<&'a ScorerRecord>)> {
    let mut groups: Vec<(String, Vec<&ScorerRecord>)> = Vec::new();
    for &record in records {
        match groups.iter_mut().find(|(name, _)| name.as_str() == record.player) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.player.clone(), vec![record])),
        }
    }
    groups
}

fn build_series(player: String, records: &[&ScorerRecord], span: f64) -> PlotSeries {
    let points: Vec<PlotPoint> = records
        .iter()
        .map(|r| PlotPoint {
            age: r.age,
            goals: r.league_goals,
        })
        .collect();

    let trend_curve = if points.len() >= MIN_TREND_POINTS {
        let xy: Vec<(f64, f64)> = points.iter().map(|p| (p.age, p.goals as f64)).collect();
        Some(
            smoothing::loess(&xy, span)
                .into_iter()
                .map(|(age, goals)| TrendPoint { age, goals })
                .collect(),
        )
    } else {
        None
    };

    PlotSeries {
        color: color_key(&player),
        player,
        points,
        trend_curve,
    }
}

/// Stable visual-encoding key for a player.
///
/// The name alone determines the hue, so a player keeps the same color
/// across requests no matter which dropdown slot selected them. Saturation
/// and lightness are fixed so every series reads at the same weight.
pub fn color_key(player: &str) -> String {
    let digest = Sha256::digest(player.as_bytes());
    let bucket = u16::from_be_bytes([digest[0], digest[1]]);
    let hue = (bucket as f32 / u16::MAX as f32) * 360.0;

    let rgb: Srgb = Hsl::new(hue, 0.75, 0.45).into_color();
    let bytes = [
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    ];
    format!("#{}", hex::encode(bytes))
}
