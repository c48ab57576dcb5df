pub mod dropdown;
pub mod scorers;

pub use dropdown::*;
pub use scorers::*;
