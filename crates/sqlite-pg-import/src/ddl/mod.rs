//! Generation of `CREATE FOREIGN TABLE` statements.
//!
//! One statement is produced per included table: a preamble naming the
//! target schema and quoted table, one column definition per metadata row,
//! and a closing clause binding the new object to the named server while
//! recording the original table name as an option for runtime lookup.

use tracing::debug;

use crate::core::identifier::{quote_ident, quote_literal};
use crate::core::schema::{ColumnMetadata, ImportOptions, ImportScope};
use crate::core::traits::ColumnSource;
use crate::error::{ImportError, Result};
use crate::options::TableSource;
use crate::typemap;

/// Declared type assumed for columns without one. SQLite stores such values
/// with Blob affinity, so the import does the same.
const UNTYPED_FALLBACK: &str = "blob";

/// Append one column definition fragment to the statement buffer.
///
/// `index` is the zero-based position within the current statement; a comma
/// separator is emitted for every column after the first. The default
/// literal, when imported, is spliced verbatim: sanitizing untrusted
/// metadata is the caller's trust boundary, not this layer's.
///
/// # Errors
///
/// [`ImportError::UnsupportedType`] when the declared type has no
/// translation; the buffer is left partially written and must be discarded
/// by the caller.
pub fn append_column_definition(
    buf: &mut String,
    index: usize,
    options: &ImportOptions,
    table: &str,
    column: &ColumnMetadata,
) -> Result<()> {
    let decl = column.decl_type.as_deref().unwrap_or(UNTYPED_FALLBACK);

    let target = typemap::translate(decl).ok_or_else(|| ImportError::UnsupportedType {
        type_name: decl.to_string(),
        table: table.to_string(),
        column: column.name.clone(),
    })?;

    if index > 0 {
        buf.push(',');
    }
    buf.push('\n');

    buf.push_str(&quote_ident(&column.name)?);
    buf.push(' ');
    buf.push_str(target.pg_name());
    buf.push(' ');

    if options.import_not_null && column.not_null {
        buf.push_str(" NOT NULL ");
    }

    if options.import_default {
        if let Some(ref literal) = column.default_value {
            buf.push_str(" DEFAULT ");
            buf.push_str(literal);
            buf.push(' ');
        }
    }

    Ok(())
}

/// Build the complete creation statement for one table.
///
/// Consults the scope filter first: an excluded table returns `Ok(None)`
/// without touching the metadata cursor. Otherwise the cursor is driven
/// row by row and released on every exit path; a failure discards the
/// partially built statement and surfaces the error unchanged.
pub fn table_creation_statement(
    source: &TableSource,
    scope: &ImportScope,
    options: &ImportOptions,
    target_schema: &str,
    server: &str,
    columns: &dyn ColumnSource,
) -> Result<Option<String>> {
    if !scope.includes(&source.table) {
        debug!(table = %source.table, "table excluded by import scope");
        return Ok(None);
    }

    let mut statement = format!(
        "CREATE FOREIGN TABLE {}.{} (",
        target_schema,
        quote_ident(&source.table)?
    );

    let mut counter = 0usize;
    columns.for_each_column(&source.table, &mut |column| {
        append_column_definition(&mut statement, counter, options, &source.table, &column)?;
        counter += 1;
        Ok(())
    })?;

    statement.push_str(&format!(
        "\n) SERVER {}\nOPTIONS (table {})",
        quote_ident(server)?,
        quote_literal(&source.table)
    ));

    debug!(table = %source.table, columns = counter, "built creation statement");
    Ok(Some(statement))
}
