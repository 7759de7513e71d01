use std::path::PathBuf;

use crate::error::FetchError;

/// The opaque fetch collaborator: relative path in, document body out.
///
/// Implementations are blocking; the loader bridges them onto the async
/// runtime with `spawn_blocking`. The body is returned as raw text so that
/// JSON syntax errors stay in the decode taxonomy, where they are not
/// treated as retryable.
pub trait DocumentFetcher: Send + Sync + 'static {
    fn fetch(&self, relative_path: &str) -> Result<String, FetchError>;
}

/// Serves documents from a local directory (the `loadFrom = local` mode).
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsFetcher { root: root.into() }
    }
}

impl DocumentFetcher for FsFetcher {
    fn fetch(&self, relative_path: &str) -> Result<String, FetchError> {
        let path = self.root.join(relative_path);
        std::fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound(relative_path.to_string())
            } else {
                FetchError::Network(format!("{}: {}", path.display(), err))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fs_fetcher_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("compose.json"), r#"{"type":"Column"}"#).unwrap();

        let fetcher = FsFetcher::new(dir.path());
        let body = fetcher.fetch("compose.json").unwrap();
        assert_eq!(body, r#"{"type":"Column"}"#);
    }

    #[test]
    fn test_fs_fetcher_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FsFetcher::new(dir.path());
        match fetcher.fetch("absent.json") {
            Err(FetchError::NotFound(path)) => assert_eq!(path, "absent.json"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
