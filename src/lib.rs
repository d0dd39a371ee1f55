//! Core library for the workout-export command line application.
//!
//! Spreadsheet adapters live under [`io`], the record types inside [`model`],
//! run inputs in [`config`], and the loading and rendering of the JSON
//! document in [`export`].

pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod model;

pub use error::{Result, ToolError};
