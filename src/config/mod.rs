// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for gitgrade.
//!
//! This module handles locating, parsing, and validating `gitgrade.toml`.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, CONFIG_FILES};
pub use schema::*;
