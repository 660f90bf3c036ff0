//! # sqlite-pg-import
//!
//! Generate PostgreSQL `CREATE FOREIGN TABLE` statements from a SQLite
//! database schema.
//!
//! SQLite declares column types loosely; PostgreSQL does not. This library
//! classifies each declared type by its SQLite affinity and translates it
//! onto a closed set of PostgreSQL types, rejecting anything ambiguous
//! rather than guessing. Around that core it provides:
//!
//! - **Scope filtering**: import all tables, a limited list, or all-except
//! - **Option resolution**: table- and server-level options merged with
//!   documented precedence into a source descriptor
//! - **Statement generation**: one syntactically complete statement per
//!   table, honoring NOT NULL / DEFAULT import toggles
//!
//! ## Example
//!
//! ```rust,no_run
//! use sqlite_pg_import::{Config, ImportSession};
//!
//! fn main() -> sqlite_pg_import::Result<()> {
//!     let config = Config::load("import.yaml")?;
//!     let session = ImportSession::open(&config)?;
//!     for statement in session.run()?.statements {
//!         println!("{};", statement.sql);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod ddl;
pub mod error;
pub mod options;
pub mod session;
pub mod source;
pub mod typemap;

// Re-exports for convenient access
pub use crate::config::{Config, ImportConfig, SourceConfig, TargetConfig};
pub use crate::core::schema::{ColumnMetadata, ImportMode, ImportOptions, ImportScope};
pub use crate::core::traits::ColumnSource;
pub use crate::error::{ImportError, Result};
pub use crate::options::{resolve_table_source, TableSource};
pub use crate::session::{ImportOutcome, ImportSession, TableStatement};
pub use crate::source::SqliteSchema;
pub use crate::typemap::{Affinity, TargetType};
