//! Command-line front end for regional age-population analysis.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
