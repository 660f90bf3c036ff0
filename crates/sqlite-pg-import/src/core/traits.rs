//! The seam between the embedded engine and the DDL builders.

use crate::core::schema::ColumnMetadata;
use crate::error::Result;

/// Narrow capability for describing the columns of one table.
///
/// The statement builder depends on this trait alone, so the classifier,
/// translator and builders carry zero dependency on any particular embedded
/// engine's calling convention.
///
/// # Contract
///
/// Implementations visit columns in the engine's native ordinal order, one
/// row at a time (internal iteration: the caller never holds more than the
/// current row). The underlying cursor must be released on every exit path,
/// including when `visit` returns an error, which is propagated unchanged.
pub trait ColumnSource {
    /// Visit the columns of `table` in ordinal order.
    fn for_each_column(
        &self,
        table: &str,
        visit: &mut dyn FnMut(ColumnMetadata) -> Result<()>,
    ) -> Result<()>;
}
