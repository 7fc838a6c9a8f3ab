#![forbid(unsafe_code)]

//! `mjtile` command-line tool.
//!
//! Renders tiles and placeholders to HTML, reports resolved labels as JSON,
//! writes the themed SVG asset set, and builds an HTML gallery.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod labels;
pub mod logging;
pub mod render;
pub mod util;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{CliError, Result};
