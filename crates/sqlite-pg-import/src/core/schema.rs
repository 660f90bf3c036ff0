//! Schema and policy types for the import operation.
//!
//! These types are the database-agnostic representation of what the SQLite
//! introspection layer yields and what the import command configures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Metadata for one column, materialized from a metadata cursor row.
///
/// Instances live only long enough for their DDL fragment to be appended;
/// the statement builder never retains more than the current row.
#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    /// Ordinal position (0-based), assigned by SQLite's introspection order.
    pub ordinal: i64,

    /// Column name. Quoted on output.
    pub name: String,

    /// Declared type string, verbatim from the schema.
    ///
    /// SQLite permits untyped columns; `None` imports as if declared `blob`.
    pub decl_type: Option<String>,

    /// Whether the column carries a NOT NULL constraint.
    pub not_null: bool,

    /// Default value literal, verbatim. `None` means no default was
    /// declared, which is distinct from a present-but-empty literal.
    pub default_value: Option<String>,
}

/// Strictness toggles for one import operation.
///
/// Defaults follow the foreign-data-wrapper convention: NOT NULL constraints
/// are imported, default expressions are not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Copy NOT NULL constraints onto the generated columns.
    #[serde(default = "default_true")]
    pub import_not_null: bool,

    /// Copy default value literals onto the generated columns.
    #[serde(default)]
    pub import_default: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            import_not_null: true,
            import_default: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Table-selection mode for a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Import every table; the name set is ignored.
    All,
    /// Import only tables named in the set.
    LimitTo,
    /// Import every table except those named in the set.
    Except,
}

/// The policy selecting which tables participate in the import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportScope {
    pub mode: ImportMode,

    /// Table names. Unordered; names are the only identity.
    #[serde(default)]
    pub tables: BTreeSet<String>,
}

impl Default for ImportScope {
    fn default() -> Self {
        Self {
            mode: ImportMode::All,
            tables: BTreeSet::new(),
        }
    }
}

impl ImportScope {
    /// Whether `table` participates in the import.
    ///
    /// Total function. Must be consulted before any metadata cursor is
    /// opened for the table: an excluded table incurs no SQLite query.
    pub fn includes(&self, table: &str) -> bool {
        match self.mode {
            ImportMode::All => true,
            ImportMode::LimitTo => self.tables.contains(table),
            ImportMode::Except => !self.tables.contains(table),
        }
    }
}
