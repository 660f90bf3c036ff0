//! SQLite source database operations.
//!
//! Owns the read-only connection to the embedded database and implements
//! the narrow metadata queries the import needs: listing candidate tables
//! and describing one table's columns. Nothing else is read.

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use crate::core::schema::ColumnMetadata;
use crate::core::traits::ColumnSource;
use crate::error::{ImportError, Result};

/// Lists candidate tables, excluding SQLite's own bookkeeping tables.
/// Ordered so the generated script is deterministic.
const TABLES_QUERY: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

/// Describes one table's columns in ordinal order. Five fields, accessed by
/// fixed positional index: cid, name, declared type, not-null flag, default
/// literal (or null-marker).
const COLUMNS_QUERY: &str =
    "SELECT cid, name, type, \"notnull\", dflt_value FROM pragma_table_info(?1) ORDER BY cid";

/// Read-only handle on the SQLite database being imported.
///
/// Acquired once per import session and released exactly once when the
/// session ends, on both success and failure paths: the release is the
/// `Drop` of the owned connection.
pub struct SqliteSchema {
    conn: Connection,
    path: String,
}

impl std::fmt::Debug for SqliteSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSchema")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteSchema {
    /// Open the database file read-only.
    ///
    /// # Errors
    ///
    /// [`ImportError::ConnectionOpen`] when the file cannot be opened.
    pub fn open(path: &str) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn =
            Connection::open_with_flags(path, flags).map_err(|e| ImportError::ConnectionOpen {
                path: path.to_string(),
                source: e,
            })?;

        info!(path = %path, "opened SQLite database");
        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Path the connection was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// List the user tables of the database, sorted by name.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(TABLES_QUERY)
            .map_err(|e| ImportError::MetadataQuery {
                query: TABLES_QUERY.to_string(),
                source: e,
            })?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<std::result::Result<Vec<_>, _>>())
            .map_err(|e| ImportError::MetadataQuery {
                query: TABLES_QUERY.to_string(),
                source: e,
            })?;

        debug!(count = names.len(), "listed candidate tables");
        Ok(names)
    }
}

impl ColumnSource for SqliteSchema {
    fn for_each_column(
        &self,
        table: &str,
        visit: &mut dyn FnMut(ColumnMetadata) -> Result<()>,
    ) -> Result<()> {
        let metadata_err = |e: rusqlite::Error| ImportError::MetadataQuery {
            query: COLUMNS_QUERY.to_string(),
            source: e,
        };

        // The statement is finalized when it drops, on every exit path,
        // including an error propagated out of `visit`.
        let mut stmt = self.conn.prepare(COLUMNS_QUERY).map_err(metadata_err)?;
        let mut rows = stmt.query([table]).map_err(metadata_err)?;

        while let Some(row) = rows.next().map_err(metadata_err)? {
            // SQLite reports untyped columns as an empty declared type.
            let decl_type: Option<String> = row.get(2).map_err(metadata_err)?;
            let column = ColumnMetadata {
                ordinal: row.get(0).map_err(metadata_err)?,
                name: row.get(1).map_err(metadata_err)?,
                decl_type: decl_type.filter(|t| !t.is_empty()),
                not_null: row.get::<_, i64>(3).map_err(metadata_err)? != 0,
                default_value: row.get(4).map_err(metadata_err)?,
            };
            visit(column)?;
        }

        Ok(())
    }
}
