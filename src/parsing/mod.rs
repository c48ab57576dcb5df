//! CSV parsing and load-time validation for the two data sources.
//!
//! Both sources are read exactly once at process startup; a failure here is
//! fatal and must prevent the server from serving requests.

pub mod dropdown_csv;
pub mod error;
pub mod scorers_csv;

pub use dropdown_csv::load_dropdown_catalog;
pub use error::DataLoadError;
pub use scorers_csv::load_scorer_dataset;
