//! Prints named tables as fixed-width, box-drawn terminal tables.
//!
//! A [`command::Dispatcher`] routes command lines such as `print users` to a
//! [`command::Command`]. The `print` command fetches rows from a
//! [`datasource::DataSource`], renders them with
//! [`ui::table::TableRenderer`] and writes the text to a
//! [`sink::OutputSink`].

pub mod cli;
pub mod command;
pub mod config;
pub mod datasource;
pub mod sink;
pub mod table;
pub mod ui;

pub mod shadow {
    #![allow(clippy::needless_raw_string_hashes)]
    use shadow_rs::shadow;
    shadow!(build);

    pub use self::build::*;
}
