pub mod blob;
pub mod memory;
pub mod record;
pub mod sqlite;

#[derive(Debug)]
pub enum PersistError {
    Sqlite(rusqlite::Error),
    Serde(serde_json::Error),
    Message(String),
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(e) => write!(f, "sqlite: {e}"),
            Self::Serde(e) => write!(f, "serde: {e}"),
            Self::Message(m) => f.write_str(m),
        }
    }
}

impl std::error::Error for PersistError {}

pub type PersistResult<T> = Result<T, PersistError>;

/// Read side of a key-value store.
pub trait KvSource {
    fn load(&self, key: &str) -> PersistResult<Option<Vec<u8>>>;
}

/// Write side of a key-value store. Each save replaces the whole value.
pub trait KvSink: Send {
    fn save(&mut self, key: &str, payload: &[u8]) -> PersistResult<()>;
    fn flush(&mut self) -> PersistResult<()> {
        Ok(())
    }
}

/// A store that can be both read and written.
pub trait KvStore: KvSource + KvSink {}

impl<T: KvSource + KvSink> KvStore for T {}
