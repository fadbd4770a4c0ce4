//! Path utilities: expand ~ and resolve profile-relative defaults.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if (path.starts_with("~/") || path.starts_with("~\\"))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(&path[2..]);
    }
    PathBuf::from(path)
}

/// `<home>/<parts...>`, falling back to the current directory when the
/// profile directory is unknown.
pub fn home_join(parts: &[&str]) -> PathBuf {
    let mut p = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in parts {
        p.push(part);
    }
    p
}
