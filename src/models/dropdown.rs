//! The selectable player list backing the dropdown widgets.

use crate::api::DropdownOption;

/// Ordered catalog of dropdown options, immutable after load.
///
/// Option values are trusted to match `player` strings in the scorer
/// dataset; no cross-validation happens at load time. A value with no
/// matching record simply yields an empty series when selected.
#[derive(Debug, Clone)]
pub struct DropdownCatalog {
    options: Vec<DropdownOption>,
}

impl DropdownCatalog {
    /// Wrap an already-loaded, ordered option list.
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self { options }
    }

    /// All options in file order.
    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Value of the first option in dropdown order.
    pub fn first_player(&self) -> Option<&str> {
        self.options.first().map(|o| o.value.as_str())
    }

    /// Value of the last option in dropdown order.
    pub fn last_player(&self) -> Option<&str> {
        self.options.last().map(|o| o.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str) -> DropdownOption {
        DropdownOption {
            label: value.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_first_and_last_player() {
        let catalog = DropdownCatalog::new(vec![
            option("Alan A'Court"),
            option("Ian Rush"),
            option("Willie Fagan"),
        ]);
        assert_eq!(catalog.first_player(), Some("Alan A'Court"));
        assert_eq!(catalog.last_player(), Some("Willie Fagan"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = DropdownCatalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.first_player(), None);
        assert_eq!(catalog.last_player(), None);
    }
}
