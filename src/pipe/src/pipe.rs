use anyhow::Context;
use courier_packet::{model::Payload, PacketSerializer};
use log::{debug, error, info, warn};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    select,
};
use tokio_util::sync::CancellationToken;

use crate::{PipeConfig, PipeReport};

/// This struct relays newline-delimited documents from a reader to a writer.
///
/// Every document is unpacked and packed again with the same serializer, so the output contains only well-formed
/// documents in the serializer's canonical layout.
pub struct Pipe<S: PacketSerializer> {
    config: PipeConfig,
    serializer: S,
    cancellation_token: CancellationToken,
}

impl<S: PacketSerializer> Pipe<S> {
    pub fn new(config: PipeConfig, serializer: S) -> Self {
        Self {
            config,
            serializer,
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn get_cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// This method runs the pipe until the reader is exhausted or the pipe is cancelled.
    ///
    /// # Arguments
    ///
    /// * `reader` - A source of documents, one per line. Blank lines are skipped.
    /// * `writer` - A sink for the re-packed documents. Each one is followed by `\n`.
    ///
    /// # Returns
    ///
    /// * `PipeReport` - if the input has been processed or the pipe has been cancelled,
    /// * `anyhow::Error` - if an I/O error occurred, or a document could not be unpacked while `fail_fast` is set.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<PipeReport, anyhow::Error>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut report = PipeReport::default();
        let mut line_number = 0usize;
        let mut buffer = Vec::new();

        loop {
            buffer.clear();

            // Raw bytes: invalid UTF-8 is left for the serializer to reject.
            let read = select! {
                biased;

                _ = self.cancellation_token.cancelled() => {
                    info!("Pipe has been cancelled. No more documents will be read.");
                    break;
                }

                read = reader.read_until(b'\n', &mut buffer) => {
                    read.context("Failed to read from the input stream")?
                }
            };

            if read == 0 {
                debug!("Input stream is exhausted after {} lines.", line_number);
                break;
            }

            line_number += 1;

            let document = trim_line_ending(&buffer);

            if document.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let payload = match self.serializer.unpack(document) {
                Ok(payload) => payload,
                Err(e) => {
                    report.rejected += 1;

                    if self.config.fail_fast {
                        writer.flush().await?;

                        return Err(e.context(format!("Failed to unpack document on line {}", line_number)));
                    }

                    error!("Failed to unpack document on line {}", line_number);
                    debug!("Failed to unpack document on line {}. Error: {}", line_number, e);

                    continue;
                }
            };

            if !self.accepts(&payload) {
                report.filtered += 1;

                warn!(
                    "Document on line {} ({}) has no registered route. Dropping it.",
                    line_number,
                    payload.kind()
                );

                continue;
            }

            let data = self.serializer.pack(&payload)?;

            writer.write_all(&data).await?;
            writer.write_all(b"\n").await?;

            report.forwarded += 1;
        }

        writer.flush().await?;

        Ok(report)
    }

    fn accepts(&self, payload: &Payload) -> bool {
        if self.config.accepted_types.is_empty() {
            return true;
        }

        match payload.as_message().and_then(|m| m.message_type()) {
            Some(message_type) => self
                .config
                .accepted_types
                .iter()
                .any(|accepted| accepted == message_type),
            None => false,
        }
    }

    #[cfg(test)]
    pub(self) fn get_config(&self) -> &PipeConfig {
        &self.config
    }
}

/// This function strips a trailing `\n` or `\r\n` from a line.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);

    line.strip_suffix(b"\r").unwrap_or(line)
}
