//! Error types for the schema import library.

use thiserror::Error;

/// Main error type for import operations.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A declared SQLite column type with no PostgreSQL translation.
    #[error("could not handle type '{type_name}' for column \"{column}\" of table \"{table}\"")]
    UnsupportedType {
        type_name: String,
        table: String,
        column: String,
    },

    /// The resolved option set is missing `database` or `table`.
    #[error("a value for the '{0}' option must be specified")]
    MissingRequiredOption(&'static str),

    /// The SQLite database file could not be opened.
    #[error("cannot open SQLite database {path}: {source}")]
    ConnectionOpen {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The column metadata query could not be compiled or stepped.
    #[error("metadata query failed ({query}): {source}")]
    MetadataQuery {
        query: String,
        #[source]
        source: rusqlite::Error,
    },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ImportError {
    /// Create a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        ImportError::Config(message.into())
    }

    /// Stable exit code for the CLI, one per failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            ImportError::Config(_) | ImportError::Yaml(_) => 1,
            ImportError::UnsupportedType { .. } => 2,
            ImportError::MissingRequiredOption(_) => 3,
            ImportError::ConnectionOpen { .. } => 4,
            ImportError::MetadataQuery { .. } => 5,
            ImportError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        // Add error chain for wrapped errors
        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
