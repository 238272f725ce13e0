use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::document::OwlDocument;
use crate::error::{EmitError, Result};
use crate::rdf_xml::write_rdf_xml;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_temp(doc: &OwlDocument, temp: &Path) -> Result<()> {
    let file = File::create(temp).map_err(|source| EmitError::io(temp, source))?;
    let mut writer = write_rdf_xml(doc, BufWriter::new(file))?;
    writer.flush().map_err(|source| EmitError::io(temp, source))?;
    let file = writer
        .into_inner()
        .map_err(|err| EmitError::io(temp, err.into_error()))?;
    file.sync_all().map_err(|source| EmitError::io(temp, source))
}

/// Writes `doc` to `output_dir/file_name` atomically.
///
/// The document is written to a sibling `.tmp` file that is renamed into
/// place; on failure the temporary file is removed and any existing
/// artifact is left untouched.
pub fn write_artifact(doc: &OwlDocument, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| EmitError::io(output_dir, source))?;
    let path = output_dir.join(file_name);
    let temp = temp_path(&path);

    let written = write_temp(doc, &temp)
        .and_then(|()| fs::rename(&temp, &path).map_err(|source| EmitError::io(&path, source)));
    if let Err(err) = written {
        if temp.exists()
            && let Err(cleanup) = fs::remove_file(&temp)
        {
            warn!(path = %temp.display(), error = %cleanup, "failed to remove temporary artifact");
        }
        return Err(err);
    }
    debug!(path = %path.display(), "artifact written");
    Ok(path)
}
