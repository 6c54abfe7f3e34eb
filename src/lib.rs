//! btox: a toolbox for UUIDs, hashes and nearest terminal colors.

pub mod catalog;
pub mod colorspace;
pub mod config;
pub mod hash;
pub mod ids;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod system;
pub mod tui;
pub mod types;
