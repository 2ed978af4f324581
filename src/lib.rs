pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod db;
pub mod emitter;
pub mod library;
pub mod sampling;
pub mod schema;
pub mod seeder;
pub mod setup;
pub mod sink;
pub mod status;

#[derive(Debug)]
pub enum LabseedError {
    Database(rusqlite::Error),
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
    Sink(String),
}

impl std::fmt::Display for LabseedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabseedError::Database(e) => write!(f, "database: {e}"),
            LabseedError::Io(e) => write!(f, "io: {e}"),
            LabseedError::Json(e) => write!(f, "json: {e}"),
            LabseedError::Config(msg) => write!(f, "config: {msg}"),
            LabseedError::Sink(msg) => write!(f, "sink: {msg}"),
        }
    }
}

impl From<rusqlite::Error> for LabseedError {
    fn from(e: rusqlite::Error) -> Self {
        LabseedError::Database(e)
    }
}

impl From<std::io::Error> for LabseedError {
    fn from(e: std::io::Error) -> Self {
        LabseedError::Io(e)
    }
}

impl From<serde_json::Error> for LabseedError {
    fn from(e: serde_json::Error) -> Self {
        LabseedError::Json(e)
    }
}

impl From<rusqlite_migration::Error> for LabseedError {
    fn from(e: rusqlite_migration::Error) -> Self {
        match e {
            rusqlite_migration::Error::RusqliteError { query: _, err } => {
                LabseedError::Database(err)
            }
            other => LabseedError::Config(format!("migration: {other}")),
        }
    }
}
