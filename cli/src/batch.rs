//! Batch driver: one style file at a time, errors logged and skipped.

use std::path::{Path, PathBuf};

use stylx_core::{FileMap, relative_to};
use stylx_sqlite::{Result, StyleDatabase};
use tracing::{error, warn};

/// Runs `extract` against each path in order and collects the results keyed
/// by the path relative to `cwd`.
///
/// A file that fails to open or extract is logged and left out of the map;
/// its partial results are discarded. Every opened handle is closed before
/// the next path is processed.
pub(crate) fn run_batch<T, F>(paths: &[PathBuf], cwd: &Path, mut extract: F) -> FileMap<T>
where
    F: FnMut(&StyleDatabase) -> Result<T>,
{
    let mut output = FileMap::new();

    for path in paths {
        let key = relative_to(path, cwd).to_string_lossy().into_owned();
        match process_file(path, &mut extract) {
            Ok(value) => {
                output.insert(key, value);
            }
            Err(err) => error!(path = %key, "{err}"),
        }
    }

    output
}

fn process_file<T, F>(path: &Path, extract: &mut F) -> Result<T>
where
    F: FnMut(&StyleDatabase) -> Result<T>,
{
    let db = StyleDatabase::open(path)?;
    let result = extract(&db);
    if let Err(err) = db.close() {
        warn!(path = %path.display(), "failed to close style database: {err}");
    }
    result
}
