//! CSV loader for the historical scorer table.

use std::collections::HashSet;
use std::path::Path;

use log::info;

use super::error::DataLoadError;
use crate::models::{ScorerDataset, ScorerRecord};

/// Columns the scorer CSV must carry. `league` holds the league-goals count.
const REQUIRED_COLUMNS: [&str; 5] = ["season", "player", "league", "position", "age"];

/// Read the scorer table from `path` and return a populated dataset.
///
/// Row order is preserved. Fails if the file is missing or unreadable, a
/// required column is absent, a field does not parse, a season label is
/// malformed, a (player, season) pair repeats, or there are no data rows.
pub fn load_scorer_dataset(path: &Path) -> Result<ScorerDataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| DataLoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::Read {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records: Vec<ScorerRecord> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for (idx, result) in reader.deserialize::<ScorerRecord>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| DataLoadError::InvalidRow {
            path: path.to_path_buf(),
            row,
            message: e.to_string(),
        })?;

        validate_record(path, row, &record)?;

        if !seen.insert((record.player.clone(), record.season.clone())) {
            return Err(DataLoadError::InvalidRow {
                path: path.to_path_buf(),
                row,
                message: format!(
                    "duplicate record for '{}' in season {}",
                    record.player, record.season
                ),
            });
        }

        records.push(record);
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        "loaded {} scorer records from {}",
        records.len(),
        path.display()
    );
    Ok(ScorerDataset::new(records))
}

fn validate_record(path: &Path, row: usize, record: &ScorerRecord) -> Result<(), DataLoadError> {
    let invalid = |message: String| DataLoadError::InvalidRow {
        path: path.to_path_buf(),
        row,
        message,
    };

    if record.player.is_empty() {
        return Err(invalid("empty player name".to_string()));
    }
    if !is_valid_season_label(&record.season) {
        return Err(invalid(format!("invalid season label '{}'", record.season)));
    }
    if !record.age.is_finite() || record.age <= 0.0 {
        return Err(invalid(format!("invalid age {}", record.age)));
    }
    Ok(())
}

/// A season label is `YYYY-YYYY` with consecutive years, e.g. "2014-2015".
///
/// The four-digit form sorts correctly as a string, which `max_season`
/// relies on.
pub fn is_valid_season_label(label: &str) -> bool {
    let Some((first, second)) = label.split_once('-') else {
        return false;
    };
    if first.len() != 4 || second.len() != 4 {
        return false;
    }
    match (first.parse::<u32>(), second.parse::<u32>()) {
        (Ok(start), Ok(end)) => end == start + 1,
        _ => false,
    }
}
