//! Parsing of design-export input files.

pub mod design_json;

// Re-export commonly used functions
pub use design_json::{load_elements, load_tree};
