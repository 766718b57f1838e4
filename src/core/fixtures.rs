//! Recording helper for persisting fetched pages as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("ETF_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `body` to `<fixture_dir>/<endpoint>_<ticker>.<ext>`.
pub(crate) fn record_fixture(
    endpoint: &str,
    ticker: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{endpoint}_{ticker}.{ext}"));
    fs::write(&path, body)?;

    tracing::debug!(path = %path.display(), "ETF_RECORD: wrote fixture");
    Ok(())
}
