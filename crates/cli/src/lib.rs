//! Shared command-line plumbing for the Tabula binaries.

pub mod config;
