use crate::error::Error;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Resolve the base directory from the `--path` option or the current directory
pub fn resolve_base_dir(path: Option<&Path>) -> Result<PathBuf> {
    let base_dir = match path {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };

    if !base_dir.is_dir() {
        return Err(Error::BaseDirNotFound(base_dir.display().to_string()));
    }

    Ok(base_dir)
}

/// Resolve `path` against `base_dir` unless it is already absolute
pub fn resolve_in(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_base_dir_explicit() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base_dir = resolve_base_dir(Some(temp_dir.path()))?;
        assert_eq!(base_dir, temp_dir.path());
        Ok(())
    }

    #[test]
    fn test_resolve_base_dir_missing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("nope");
        let result = resolve_base_dir(Some(&missing));
        assert!(matches!(result, Err(Error::BaseDirNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_resolve_base_dir_default_is_cwd() -> Result<()> {
        let base_dir = resolve_base_dir(None)?;
        assert_eq!(base_dir, std::env::current_dir()?);
        Ok(())
    }

    #[test]
    fn test_resolve_in() {
        let base = Path::new("/work/ext");
        assert_eq!(resolve_in(base, Path::new("extension.zip")), base.join("extension.zip"));

        let absolute = std::env::temp_dir().join("out.zip");
        assert_eq!(resolve_in(base, &absolute), absolute);
    }
}
