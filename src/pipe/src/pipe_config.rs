use serde::Deserialize;

/// This struct is used to hold pipe configuration.
#[derive(Debug, Eq, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// If set, the first document that cannot be unpacked stops the pipe with an error.
    pub fail_fast: bool,

    /// This field holds message types that are allowed through the pipe.
    ///
    /// An empty list lets every payload through. Otherwise only messages with a listed `type` are forwarded.
    pub accepted_types: Vec<String>,
}
