use crate::error::{FetchError, Result};
use std::path::{Component, Path, PathBuf};

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| FetchError::filesystem(path, e))?;
    }
    Ok(())
}

/// Expands a leading `~` to the current user's home directory.
///
/// `~user` forms are left untouched.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir().ok_or(FetchError::HomeDirectoryNotFound)?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Home-expanded, absolute form of a destination directory. The directory
/// need not exist.
pub fn resolve_destination(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    std::path::absolute(&expanded).map_err(|e| FetchError::filesystem(expanded, e))
}
