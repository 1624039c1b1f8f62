//! Decoding structured records from rows.

use crate::error::DecodeError;
use crate::row::Row;
use crate::value::ValueConvertible;

/// A record that can be rebuilt from a result row.
///
/// Usually derived with `#[derive(FromRow)]`. A record bound to a table sets
/// [`FromRow::TABLE`], which scopes every field lookup unless the caller
/// picks another table.
pub trait FromRow: Sized {
    /// Default table scope for field lookups.
    const TABLE: Option<&'static str> = None;

    /// Decodes the record, failing on the first unsatisfiable field.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or a value cannot be
    /// converted.
    fn from_row(decoder: &RowDecoder<'_>) -> Result<Self, DecodeError>;
}

/// Field-by-field access to a row under an optional table scope.
#[derive(Debug, Clone, Copy)]
pub struct RowDecoder<'r> {
    row: &'r Row,
    table: Option<&'r str>,
}

impl<'r> RowDecoder<'r> {
    /// Creates an unscoped decoder.
    #[must_use]
    pub const fn new(row: &'r Row) -> Self {
        Self { row, table: None }
    }

    /// Scopes lookups to the given table.
    #[must_use]
    pub const fn table(mut self, table: Option<&'r str>) -> Self {
        self.table = table;
        self
    }

    /// Returns the table scope.
    #[must_use]
    pub const fn scope(&self) -> Option<&'r str> {
        self.table
    }

    /// Returns the underlying row.
    #[must_use]
    pub const fn row(&self) -> &'r Row {
        self.row
    }

    /// Names of the columns visible under the current scope: columns of the
    /// scoped table and untagged columns, or every column when unscoped.
    #[must_use]
    pub fn columns(&self) -> Vec<&'r str> {
        self.row
            .columns()
            .filter(|column| match (self.table, column.table.as_deref()) {
                (Some(scope), Some(table)) => scope == table,
                _ => true,
            })
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Decodes a required field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if no column matches, or
    /// [`DecodeError::Field`] if the value cannot be converted.
    pub fn field<T: ValueConvertible>(&self, name: &str) -> Result<T, DecodeError> {
        let value = self
            .row
            .first_value(name, self.table)
            .ok_or_else(|| DecodeError::FieldNotFound {
                field: name.to_string(),
                table: self.table.map(ToString::to_string),
            })?;
        T::from_value(value).map_err(|source| DecodeError::Field {
            field: name.to_string(),
            source,
        })
    }

    /// Decodes an optional field. An absent column or a NULL value yields
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Field`] if a non-null value cannot be
    /// converted.
    pub fn optional_field<T: ValueConvertible>(
        &self,
        name: &str,
    ) -> Result<Option<T>, DecodeError> {
        match self.row.first_value(name, self.table) {
            None => Ok(None),
            Some(value) if value.is_null() => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .map_err(|source| DecodeError::Field {
                    field: name.to_string(),
                    source,
                }),
        }
    }

    /// Decodes a record. Without an explicit scope, the record's own
    /// [`FromRow::TABLE`] is used.
    ///
    /// # Errors
    ///
    /// Propagates the record's decode failure.
    pub fn decode<T: FromRow>(&self) -> Result<T, DecodeError> {
        let scoped = Self {
            row: self.row,
            table: self.table.or(T::TABLE),
        };
        T::from_row(&scoped)
    }
}

impl Row {
    /// Decodes a record from this row, optionally scoped to a table.
    ///
    /// # Errors
    ///
    /// Propagates the record's decode failure.
    pub fn decode<T: FromRow>(&self, table: Option<&str>) -> Result<T, DecodeError> {
        RowDecoder::new(self).table(table).decode()
    }
}
