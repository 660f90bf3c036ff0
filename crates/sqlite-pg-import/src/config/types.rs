//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::schema::{ImportOptions, ImportScope};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source database configuration (SQLite).
    pub source: SourceConfig,

    /// Target catalog configuration (PostgreSQL).
    pub target: TargetConfig,

    /// Import behavior configuration.
    #[serde(default)]
    pub import: ImportConfig,
}

/// Source database (SQLite) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the SQLite database file.
    pub database: String,

    /// Additional server-level options, appended after the explicit fields
    /// during option resolution. Unrecognized keys are carried but ignored;
    /// a `database` entry here overrides the field above (last write wins).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl SourceConfig {
    /// The server-level option list, in resolution order.
    pub fn server_options(&self) -> Vec<(String, String)> {
        let mut options = vec![("database".to_string(), self.database.clone())];
        options.extend(self.options.iter().map(|(k, v)| (k.clone(), v.clone())));
        options
    }
}

/// Target catalog (PostgreSQL) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Schema the foreign tables are created in (default: "public").
    #[serde(default = "default_public_schema")]
    pub schema: String,

    /// Name of the foreign server the tables are bound to.
    pub server: String,
}

/// Import behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Which tables participate (default: all).
    #[serde(default)]
    pub scope: ImportScope,

    /// Strictness toggles (NOT NULL / DEFAULT import).
    #[serde(flatten)]
    pub options: ImportOptions,
}

fn default_public_schema() -> String {
    "public".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::ImportMode;

    #[test]
    fn test_minimal_yaml() {
        let config: Config = serde_yaml::from_str(
            "source:\n  database: /tmp/app.db\ntarget:\n  server: sqlite_server\n",
        )
        .unwrap();

        assert_eq!(config.source.database, "/tmp/app.db");
        assert_eq!(config.target.schema, "public");
        assert_eq!(config.target.server, "sqlite_server");
        assert_eq!(config.import.scope.mode, ImportMode::All);
        assert!(config.import.options.import_not_null);
        assert!(!config.import.options.import_default);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
source:
  database: /tmp/app.db
  options:
    fetch_size: "100"
target:
  schema: staging
  server: sqlite_server
import:
  scope:
    mode: except
    tables: [migrations]
  import_not_null: false
  import_default: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.target.schema, "staging");
        assert_eq!(config.import.scope.mode, ImportMode::Except);
        assert!(!config.import.scope.includes("migrations"));
        assert!(!config.import.options.import_not_null);
        assert!(config.import.options.import_default);
    }

    #[test]
    fn test_server_options_order() {
        let config: Config = serde_yaml::from_str(
            "source:\n  database: /tmp/a.db\n  options:\n    database: /tmp/b.db\ntarget:\n  server: s\n",
        )
        .unwrap();

        let options = config.source.server_options();
        assert_eq!(options[0], ("database".to_string(), "/tmp/a.db".to_string()));
        // The map entry comes later, so it wins during resolution.
        assert_eq!(
            crate::options::resolve_database(&options).unwrap(),
            "/tmp/b.db"
        );
    }
}
