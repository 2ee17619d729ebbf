//! Config loader: assembles sources in merge order and deserializes the result.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, explicit_file, global_file};
use super::CliConfig;
use crate::error::ApiError;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global config file (if present) and the environment.
    pub fn load() -> Result<CliConfig, ApiError> {
        let builder = global_file::add_to_builder(builder_with_defaults()?)?;
        let config = environment::add_to_builder(builder).build()?;
        Ok(config.try_deserialize::<CliConfig>()?.normalize())
    }

    /// Load defaults, the given config file and the environment.
    ///
    /// The global config file is skipped; a missing `path` is an error.
    pub fn load_from_file(path: &Path) -> Result<CliConfig, ApiError> {
        let builder = explicit_file::add_to_builder(builder_with_defaults()?, path)?;
        let config = environment::add_to_builder(builder).build()?;
        Ok(config.try_deserialize::<CliConfig>()?.normalize())
    }
}
