use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Reads the current requirements file, treating a missing file as empty.
pub fn read_existing(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "requirements file does not exist");
            Ok(String::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// Replaces the requirements file with `content`, creating it if needed.
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
