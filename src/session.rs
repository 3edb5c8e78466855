//! Session token storage.
//!
//! The token is an opaque bearer credential issued by the server on login.
//! It is persisted under a fixed key and never expired or refreshed here.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key the token is stored under in the session file
pub const TOKEN_KEY: &str = "authToken";

/// Persistent home for the session token
pub trait TokenStore: Send {
    fn load(&self) -> Result<Option<String>>;
    fn store(&mut self, token: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// JSON object on disk, e.g. `{"authToken": "..."}`
///
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "session file is not a JSON object, ignoring it");
                Ok(Map::new())
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(map).context("Failed to serialize session file")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn store(&mut self, token: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_map(&map)
    }

    fn clear(&mut self) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(TOKEN_KEY).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// Process-local store that forgets the token on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    fn store(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

/// Explicit session context handed to whatever builds authenticated requests.
///
/// The token is read from the store once at construction and cached; writes go
/// through to the store.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: Option<String>,
}

impl Session {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("failed to load session token: {:#}", e);
                None
            }
        };

        Self { store, token }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryTokenStore::default()))
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileTokenStore::new(path)))
    }

    /// Last persisted token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist a new token. The in-memory copy is updated even if the write fails.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        debug!("storing session token");
        self.store.store(token)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        self.store.clear()
    }
}
