//! Location of flycast's on-disk files under `~/.flycast/`.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.flycast/ directory path, creating it if needed.
pub fn flycast_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flycast");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file kept in ~/.flycast/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(flycast_dir()?.join(filename))
}
