use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::extract::field_model::FieldRecord;

/// Output path meaning "write to stdout".
pub const STDOUT_TARGET: &str = "-";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize field records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// JSON array of records. Compact unless `pretty`.
pub fn records_to_json(records: &[FieldRecord], pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Write the records to `output`, or to stdout when `output` is `-`.
pub fn write_records(records: &[FieldRecord], output: &str, pretty: bool) -> Result<(), ExportError> {
    let json = records_to_json(records, pretty)?;

    if output == STDOUT_TARGET {
        let mut stdout = std::io::stdout().lock();
        return writeln!(stdout, "{}", json).map_err(|source| ExportError::Write {
            path: PathBuf::from(STDOUT_TARGET),
            source,
        });
    }

    let path = Path::new(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), fields = records.len(), "Wrote field records");
    Ok(())
}
