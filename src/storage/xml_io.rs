//! XML file I/O with atomic writes
//!
//! Store files are always read and written whole. A missing or unparsable
//! file reads as an empty store.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::NfeError;

/// Header written at the top of every store file
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Read an XML document, returning the default value if the file is
/// missing or cannot be parsed
pub fn read_xml<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return T::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store unreadable, treating as empty");
            return T::default();
        }
    };

    match quick_xml::de::from_str(&contents) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store malformed, treating as empty");
            T::default()
        }
    }
}

/// Serialize a document to a string, declaration included
pub fn to_xml_string<T: Serialize>(data: &T) -> Result<String, NfeError> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    data.serialize(serializer)
        .map_err(|e| NfeError::Xml(format!("Failed to serialize data: {}", e)))?;

    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}

/// Write an XML document atomically (write to temp, then rename)
pub fn write_xml_atomic<T, P>(path: P, data: &T) -> Result<(), NfeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let document = to_xml_string(data)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            NfeError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("xml.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| NfeError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .map_err(|e| NfeError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| NfeError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| NfeError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        NfeError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Create the file holding an empty document if it does not exist yet.
/// Returns whether a file was created.
pub fn ensure_xml_file<T, P>(path: P) -> Result<bool, NfeError>
where
    T: Serialize + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    write_xml_atomic(path, &T::default())?;
    Ok(true)
}
