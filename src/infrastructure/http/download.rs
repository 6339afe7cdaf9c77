//! Streaming HTTP download

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::domain::ports::{ArchiveSource, TransferProgress};
use crate::error::{FaltexError, FaltexResult};

use super::github::describe_ureq_error;

/// Bytes read from the response per iteration
pub const CHUNK_SIZE: usize = 8192;

/// Copy `reader` into `writer` in [`CHUNK_SIZE`] pieces, reporting cumulative
/// progress after every non-empty chunk.
///
/// Read failures are network errors against `url`; write failures are I/O.
pub fn copy_chunked(
    url: &str,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
    total: Option<u64>,
    on_progress: &mut dyn FnMut(TransferProgress) -> FaltexResult<()>,
) -> FaltexResult<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut downloaded: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FaltexError::network(url, e)),
        };
        writer.write_all(&buf[..n])?;
        downloaded += n as u64;

        on_progress(TransferProgress { downloaded, total })?;
    }

    writer.flush()?;
    Ok(downloaded)
}

/// Archive source that streams over HTTP with `ureq`
pub struct HttpArchiveSource {
    agent: ureq::Agent,
}

impl HttpArchiveSource {
    pub fn new(user_agent: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(user_agent).build(),
        }
    }
}

impl ArchiveSource for HttpArchiveSource {
    fn download(
        &self,
        url: &str,
        dest: &Path,
        on_progress: &mut dyn FnMut(TransferProgress) -> FaltexResult<()>,
    ) -> FaltexResult<u64> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| FaltexError::network(url, describe_ureq_error(e)))?;

        let total = response
            .header("Content-Length")
            .and_then(|v| v.trim().parse::<u64>().ok());

        let mut writer = BufWriter::new(File::create(dest)?);
        let mut reader = response.into_reader();
        copy_chunked(url, &mut reader, &mut writer, total, on_progress)
    }
}
