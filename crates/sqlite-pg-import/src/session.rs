//! Import session orchestration.
//!
//! An [`ImportSession`] owns the SQLite connection for the duration of one
//! import run. Tables are processed strictly sequentially and the run is
//! fail-fast: the first error aborts the whole import and no statement for
//! the failing table is surfaced. The connection is released exactly once,
//! on both success and failure paths, when the session drops.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::schema::{ImportOptions, ImportScope};
use crate::ddl;
use crate::error::Result;
use crate::options;
use crate::source::SqliteSchema;

/// One generated statement, tagged with its source table.
#[derive(Debug, Clone, Serialize)]
pub struct TableStatement {
    pub table: String,
    pub sql: String,
}

/// Result of one import run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportOutcome {
    /// Statements for the included tables, in listing order.
    pub statements: Vec<TableStatement>,

    /// Tables excluded by the import scope.
    pub skipped: Vec<String>,
}

/// A single import run over one SQLite database.
pub struct ImportSession {
    schema: SqliteSchema,
    server_options: Vec<(String, String)>,
    scope: ImportScope,
    options: ImportOptions,
    target_schema: String,
    server_name: String,
}

impl std::fmt::Debug for ImportSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportSession")
            .field("target_schema", &self.target_schema)
            .field("server_name", &self.server_name)
            .finish_non_exhaustive()
    }
}

impl ImportSession {
    /// Resolve the database location and open it.
    ///
    /// A missing `database` option aborts here, before any engine access.
    pub fn open(config: &Config) -> Result<Self> {
        let server_options = config.source.server_options();
        let database = options::resolve_database(&server_options)?;
        let schema = SqliteSchema::open(&database)?;

        Ok(Self {
            schema,
            server_options,
            scope: config.import.scope.clone(),
            options: config.import.options,
            target_schema: config.target.schema.clone(),
            server_name: config.target.server.clone(),
        })
    }

    /// The candidate tables of the source database, before scope filtering.
    pub fn candidate_tables(&self) -> Result<Vec<String>> {
        self.schema.list_tables()
    }

    /// The scope policy this session runs under.
    pub fn scope(&self) -> &ImportScope {
        &self.scope
    }

    /// Generate creation statements for every table in scope.
    pub fn run(&self) -> Result<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        for table in self.schema.list_tables()? {
            // Each foreign object resolves its own source descriptor; the
            // catalog relation name doubles as the fallback table name.
            let source = options::resolve_table_source(&[], &self.server_options, &table)?;

            match ddl::table_creation_statement(
                &source,
                &self.scope,
                &self.options,
                &self.target_schema,
                &self.server_name,
                &self.schema,
            )? {
                Some(sql) => {
                    debug!(table = %table, "generated foreign table statement");
                    outcome.statements.push(TableStatement { table, sql });
                }
                None => outcome.skipped.push(table),
            }
        }

        info!(
            database = %self.schema.path(),
            generated = outcome.statements.len(),
            skipped = outcome.skipped.len(),
            "schema import complete"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImportConfig, SourceConfig, TargetConfig};
    use crate::core::schema::{ImportMode, ImportScope};
    use crate::error::ImportError;
    use std::collections::BTreeMap;

    fn fixture_config(dir: &tempfile::TempDir, ddl: &str) -> Config {
        let path = dir.path().join("fixture.db");
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(ddl).unwrap();
        drop(conn);

        Config {
            source: SourceConfig {
                database: path.to_string_lossy().into_owned(),
                options: BTreeMap::new(),
            },
            target: TargetConfig {
                schema: "public".to_string(),
                server: "sqlite_server".to_string(),
            },
            import: ImportConfig::default(),
        }
    }

    #[test]
    fn test_run_generates_one_statement_per_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(
            &dir,
            "CREATE TABLE users (id INTEGER NOT NULL, name TEXT);
             CREATE TABLE events (at TIMESTAMP);",
        );

        let outcome = ImportSession::open(&config).unwrap().run().unwrap();

        assert_eq!(outcome.statements.len(), 2);
        assert!(outcome.skipped.is_empty());
        // Listing order is alphabetical.
        assert_eq!(outcome.statements[0].table, "events");
        assert!(outcome.statements[0].sql.contains("\"at\" timestamp "));
        assert!(outcome.statements[1]
            .sql
            .starts_with("CREATE FOREIGN TABLE public.\"users\" ("));
        assert!(outcome.statements[1].sql.contains("\"id\" bigint  NOT NULL "));
        assert!(outcome.statements[1].sql.ends_with("OPTIONS (table 'users')"));
    }

    #[test]
    fn test_scope_excludes_tables_from_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_config(
            &dir,
            "CREATE TABLE users (id INTEGER);
             CREATE TABLE migrations (version INTEGER);",
        );
        config.import.scope = ImportScope {
            mode: ImportMode::Except,
            tables: ["migrations".to_string()].into(),
        };

        let outcome = ImportSession::open(&config).unwrap().run().unwrap();

        assert_eq!(outcome.statements.len(), 1);
        assert_eq!(outcome.statements[0].table, "users");
        assert_eq!(outcome.skipped, vec!["migrations"]);
    }

    #[test]
    fn test_unsupported_type_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_config(
            &dir,
            "CREATE TABLE parts (id INTEGER, kind widget, qty INTEGER);",
        );

        let err = ImportSession::open(&config).unwrap().run().unwrap_err();

        match err {
            ImportError::UnsupportedType {
                type_name,
                table,
                column,
            } => {
                assert_eq!(type_name, "widget");
                assert_eq!(table, "parts");
                assert_eq!(column, "kind");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_database_aborts_before_engine_access() {
        let config = Config {
            source: SourceConfig {
                database: String::new(),
                options: BTreeMap::new(),
            },
            target: TargetConfig {
                schema: "public".to_string(),
                server: "sqlite_server".to_string(),
            },
            import: ImportConfig::default(),
        };

        let err = ImportSession::open(&config).unwrap_err();
        assert!(matches!(err, ImportError::MissingRequiredOption("database")));
    }

    #[test]
    fn test_default_literals_survive_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_config(
            &dir,
            "CREATE TABLE settings (flag BOOLEAN DEFAULT 0, label TEXT DEFAULT 'none');",
        );
        config.import.options.import_default = true;

        let outcome = ImportSession::open(&config).unwrap().run().unwrap();
        let sql = &outcome.statements[0].sql;

        assert!(sql.contains("\"flag\" boolean  DEFAULT 0 "));
        assert!(sql.contains("\"label\" text  DEFAULT 'none' "));
    }
}
