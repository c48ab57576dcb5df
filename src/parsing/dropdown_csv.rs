//! CSV loader for the player dropdown catalog.

use std::path::Path;

use log::info;

use super::error::DataLoadError;
use crate::api::DropdownOption;
use crate::models::DropdownCatalog;

const REQUIRED_COLUMNS: [&str; 2] = ["label", "value"];

/// Read the dropdown option list from `path`, preserving file order.
///
/// Option values are taken on trust: nothing checks them against the scorer
/// dataset, so a stale entry selects nothing rather than failing startup.
pub fn load_dropdown_catalog(path: &Path) -> Result<DropdownCatalog, DataLoadError> {
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

    let mut options: Vec<DropdownOption> = Vec::new();

    for (idx, result) in reader.deserialize::<DropdownOption>().enumerate() {
        let row = idx + 1;
        let option = result.map_err(|e| DataLoadError::InvalidRow {
            path: path.to_path_buf(),
            row,
            message: e.to_string(),
        })?;

        if option.value.is_empty() {
            return Err(DataLoadError::InvalidRow {
                path: path.to_path_buf(),
                row,
                message: "empty option value".to_string(),
            });
        }

        options.push(option);
    }

    if options.is_empty() {
        return Err(DataLoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        "loaded {} dropdown options from {}",
        options.len(),
        path.display()
    );
    Ok(DropdownCatalog::new(options))
}
