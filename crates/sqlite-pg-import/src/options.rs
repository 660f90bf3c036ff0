//! Foreign-table option resolution.
//!
//! A foreign table's location is described by key/value options attached to
//! two catalog objects: the foreign table itself and the server it belongs
//! to. This module merges the two lists into a validated [`TableSource`].
//!
//! Merge policy: the concatenation of both lists is scanned in order, table
//! options first. Only the keys `database` and `table` are recognized; a
//! later occurrence of a recognized key overwrites an earlier one.
//! Unrecognized keys are ignored here; rejecting unknown options is the
//! responsibility of the layer that stores them, not this one.

use crate::error::{ImportError, Result};

/// Resolved descriptor telling the import where the SQLite database file
/// and the source table live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    /// Path to the SQLite database file.
    pub database: String,

    /// Name of the table inside that database.
    pub table: String,
}

/// Option scan result before validation; either field may be unset.
#[derive(Debug, Default)]
struct ScannedOptions {
    database: Option<String>,
    table: Option<String>,
}

fn scan(table_options: &[(String, String)], server_options: &[(String, String)]) -> ScannedOptions {
    let mut scanned = ScannedOptions::default();

    for (key, value) in table_options.iter().chain(server_options.iter()) {
        if key == "database" {
            scanned.database = Some(value.clone());
        }

        if key == "table" {
            scanned.table = Some(value.clone());
        }
    }

    scanned
}

/// Resolve the source descriptor for one foreign table.
///
/// `relation_name` is the host catalog's own name for the foreign object;
/// it is the fallback when no `table` option is set. The database location
/// has no fallback: its absence is a hard error.
///
/// # Errors
///
/// [`ImportError::MissingRequiredOption`] naming `database` or `table`.
pub fn resolve_table_source(
    table_options: &[(String, String)],
    server_options: &[(String, String)],
    relation_name: &str,
) -> Result<TableSource> {
    let scanned = scan(table_options, server_options);

    let table = match scanned.table {
        Some(t) => t,
        None => relation_name.to_string(),
    };

    let database = scanned
        .database
        .filter(|d| !d.is_empty())
        .ok_or(ImportError::MissingRequiredOption("database"))?;

    if table.is_empty() {
        return Err(ImportError::MissingRequiredOption("table"));
    }

    Ok(TableSource { database, table })
}

/// Resolve the database location from server options alone.
///
/// Used at session start, before any table is known and before any engine
/// access: a missing `database` aborts the import right here.
pub fn resolve_database(server_options: &[(String, String)]) -> Result<String> {
    scan(&[], server_options)
        .database
        .filter(|d| !d.is_empty())
        .ok_or(ImportError::MissingRequiredOption("database"))
}
