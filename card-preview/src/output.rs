use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Output path that means "write to stdout".
pub const STDOUT_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to write preview to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write preview to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Whether `path` asks for stdout rather than a file.
pub fn is_stdout(path: &Path) -> bool {
    path == Path::new(STDOUT_PATH)
}

fn write_to(writer: &mut impl Write, document: &str) -> io::Result<()> {
    writer.write_all(document.as_bytes())?;
    writer.flush()
}

/// Write a rendered document to `path`, or to stdout when `path` is `-`.
pub fn write_document(path: &Path, document: &str) -> Result<(), PreviewError> {
    if is_stdout(path) {
        return write_to(&mut io::stdout().lock(), document).map_err(PreviewError::Stdout);
    }

    std::fs::write(path, document).map_err(|source| PreviewError::Write {
        path: path.to_path_buf(),
        source,
    })
}
