use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::content::Content;
use crate::error::Result;

/// Resolved runtime context shared by every command.
pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub content_path: PathBuf,
    content_explicit: bool,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = Self::find_root()?;
        let config = Config::load(cli.config.as_deref(), &root)?;

        let explicit = cli.content.clone().or_else(|| config.content.path.clone());
        let content_explicit = explicit.is_some();
        let content_path = explicit
            .map(|path| absolutize(&root, path))
            .unwrap_or_else(|| root.join("portfolio.toml"));

        Ok(Self {
            root,
            config,
            content_path,
            content_explicit,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    /// Load the portfolio document, falling back to the built-in sample
    /// when the default path does not exist yet. An explicitly
    /// configured path must exist.
    pub fn load_content(&self) -> Result<Content> {
        if self.content_path.exists() {
            return Content::load(&self.content_path);
        }
        if self.content_explicit {
            return Err(crate::error::FolioError::Content(format!(
                "content file not found: {}",
                self.content_path.display()
            )));
        }
        debug!(path = %self.content_path.display(), "no portfolio document, using sample content");
        Ok(Content::sample())
    }

    fn find_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("FOLIO_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, "portfolio.toml") {
            return Ok(found);
        }
        Ok(cwd)
    }
}

fn absolutize(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// Walk up from `start` looking for a directory containing `name`.
fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(name).is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_upwards_locates_marker_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("portfolio.toml"), "").unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_upwards(&nested, "portfolio.toml").unwrap();
        assert_eq!(found, dir.path());
    }

    #[test]
    fn find_upwards_returns_none_without_marker() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_upwards(dir.path(), "portfolio.toml").is_none());
    }

    #[test]
    fn absolutize_keeps_absolute_paths() {
        let root = Path::new("/tmp/folio");
        let abs = PathBuf::from("/etc/portfolio.toml");
        assert_eq!(absolutize(root, abs.clone()), abs);
        assert_eq!(
            absolutize(root, PathBuf::from("p.toml")),
            PathBuf::from("/tmp/folio/p.toml")
        );
    }
}
