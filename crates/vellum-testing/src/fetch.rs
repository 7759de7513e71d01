use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use vellum_runtime::{DocumentFetcher, FetchError};

/// An in-memory fetch collaborator scripted with path → document pairs.
pub struct StubFetcher {
    documents: Mutex<HashMap<String, String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        StubFetcher {
            documents: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_document(self, path: &str, document: &Value) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(path.to_string(), document.to_string());
        self
    }

    /// Serve raw text, for malformed-payload tests.
    pub fn with_raw(self, path: &str, body: &str) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(path.to_string(), body.to_string());
        self
    }
}

impl Default for StubFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFetcher for StubFetcher {
    fn fetch(&self, relative_path: &str) -> Result<String, FetchError> {
        self.documents
            .lock()
            .unwrap()
            .get(relative_path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(relative_path.to_string()))
    }
}
