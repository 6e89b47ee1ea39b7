pub mod fetch;
pub mod install;
pub mod query;

use buildpack::config::Config;
use buildpack::core::BuildpackResult;
use std::path::Path;

/// Load the config file named on the command line, or the platform default
pub fn load_config(path: Option<&Path>) -> BuildpackResult<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
