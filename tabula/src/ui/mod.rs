//! Terminal output.
//!
//! - [`table`]: box-drawn tables and the table summary listing.

pub mod table;
