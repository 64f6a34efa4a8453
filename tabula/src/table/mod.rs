//! The row model shared by data sources, commands and the renderer.
//!
//! A table is a plain slice of [`DataSet`] rows. Every row carries its own
//! column names; the renderer only reads them from the first row.

mod data_set;
mod value;

pub use self::{data_set::DataSet, value::Value};
