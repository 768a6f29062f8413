pub mod api;
pub mod cli;
pub mod config;
pub mod filter;
pub mod mock;
pub mod model;
pub mod parse;
pub mod report;
pub mod source;
pub mod stats;
#[cfg(feature = "tui")]
pub mod ui;
pub mod util;
