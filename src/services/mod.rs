//! Service layer for the plot pipeline and derived page data.
//!
//! Services sit between the loaded data sources and the HTTP handlers.
//! Everything here is a pure function over the immutable dataset; there is
//! no per-request state to coordinate.

pub mod about;

pub mod plot;

pub mod smoothing;

pub use about::derive_about_info;
pub use plot::build_plot_spec;
