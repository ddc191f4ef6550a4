use std::fmt;

/// This struct summarizes a single run of the pipe.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub struct PipeReport {
    /// Number of documents that were re-packed and written out.
    pub forwarded: usize,

    /// Number of documents that could not be unpacked.
    pub rejected: usize,

    /// Number of valid documents dropped because their type is not accepted.
    pub filtered: usize,
}

impl fmt::Display for PipeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "forwarded: {}, rejected: {}, filtered: {}",
            self.forwarded, self.rejected, self.filtered
        )
    }
}
