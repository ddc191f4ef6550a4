mod pipe;
mod pipe_config;
mod pipe_report;

pub use pipe::Pipe;
pub use pipe_config::PipeConfig;
pub use pipe_report::PipeReport;
