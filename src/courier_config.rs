use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use courier_pipe::PipeConfig;
use log::LevelFilter;
use serde::Deserialize;

/// This struct is used to hold the application configuration.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    /// The most verbose level of records that are logged.
    pub log_level: LevelFilter,

    /// A file that receives a copy of every log record.
    pub log_file: PathBuf,

    /// This field holds the configuration for the pipe.
    pub pipe: PipeConfig,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("log/courier.log"),
            pipe: PipeConfig::default(),
        }
    }
}

impl CourierConfig {
    /// This method loads the configuration from a JSON file.
    ///
    /// # Returns
    ///
    /// * `CourierConfig` - read from `path`, or the default configuration if the file does not exist,
    /// * `anyhow::Error` - if the file could not be read or is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        match File::options().read(true).open(path) {
            Ok(file) => Self::from_reader(file)
                .with_context(|| format!("Invalid configuration in {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to open {}", path.display()))),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, anyhow::Error> {
        Ok(serde_json::from_reader(reader)?)
    }
}
