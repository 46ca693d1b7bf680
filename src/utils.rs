use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    config::FormatConfig,
    error::{Error, Result},
    formatter::{format_xml, strip_causality_data},
    path::get_path,
};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and format an XML file
#[instrument(skip(config))]
pub fn format_file(path: &Path, config: &FormatConfig) -> Result<String> {
    let content = read_file(path)?;
    debug!(bytes = content.len(), "file read");
    Ok(format_xml(&content, config))
}

/// Read an XML file and strip causality data from it
#[instrument]
pub fn strip_file(path: &Path) -> Result<String> {
    let content = read_file(path)?;
    Ok(strip_causality_data(&content))
}

/// Read an XML file and resolve the path at a byte offset
#[instrument]
pub fn path_in_file(path: &Path, offset: usize) -> Result<Option<String>> {
    let content = read_file(path)?;
    Ok(get_path(&content, offset))
}
