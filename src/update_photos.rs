use super::config::Config;
use super::document::*;
use super::error::UpdateError;
use super::report::UpdateReport;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read and parse the members file, the file is closed before returning
pub fn load_document(path: &Path) -> Result<Document, UpdateError> {
    let content = fs::read(path).map_err(|source| UpdateError::io(path, source))?;
    serde_json::from_slice(&content).map_err(|source| UpdateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Two spaces of indentation, non-ASCII characters are written as they are
pub fn to_pretty_json(document: &Document) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Replace the file at `path` with `document`.
///
/// A symbolic link is followed, the file it points to is the one replaced. The document is
/// written next to that file in a temporary file which is then renamed over it, if anything
/// fails the target keeps its previous content.
pub fn write_document(path: &Path, document: &Document) -> Result<(), UpdateError> {
    let io_error = |source: io::Error| UpdateError::io(path, source);

    let content = to_pretty_json(document).map_err(|e| io_error(io::Error::from(e)))?;
    let target = fs::canonicalize(path).map_err(io_error)?;
    let permissions = fs::metadata(&target).map_err(io_error)?.permissions();
    if permissions.readonly() {
        return Err(io_error(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "the file is read-only",
        )));
    }
    // opened without truncation, only to know that writing it is allowed
    fs::OpenOptions::new()
        .write(true)
        .open(&target)
        .map_err(io_error)?;

    let directory = target.parent().unwrap_or_else(|| Path::new("/"));
    let mut file = NamedTempFile::new_in(directory).map_err(io_error)?;
    file.write_all(&content).map_err(io_error)?;
    file.as_file().set_permissions(permissions).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(&target).map_err(|e| io_error(e.error))?;
    Ok(())
}

/// Rewrite the photo URL of every member of the file pointed by the configuration
pub fn update_photos(config: &Config) -> Result<UpdateReport, UpdateError> {
    let path = &config.data_path;
    let document = load_document(path)?;
    let (document, n_updated) = transform(document)?;
    write_document(path, &document)?;
    Ok(UpdateReport::new(n_updated, path.clone()))
}
