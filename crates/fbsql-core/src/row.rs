//! Result rows and column identity.
//!
//! # Soft column matching
//!
//! A [`Column`] without a table equals any column of the same name,
//! whatever table the other one carries. This lets lookups succeed whether
//! or not the driver tags result columns with their table.
//!
//! It is also a hazard: in a join where two tables expose the same column
//! name, an unscoped lookup returns the first match in result order, which
//! may belong to the wrong table. Pass a table to [`Row::first_value`] or
//! decode with a table scope when joining.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::DecodeError;
use crate::value::{Value, ValueConvertible};

/// Identifies a result column.
#[derive(Debug, Clone, Eq)]
pub struct Column {
    /// Owning table, if the driver reported one.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl Column {
    /// Creates an unqualified column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a table-qualified column.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Soft match against a name and an optional table.
    #[must_use]
    pub fn matches(&self, name: &str, table: Option<&str>) -> bool {
        self.name == name
            && match (self.table.as_deref(), table) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name, other.table.as_deref())
    }
}

/// Hashes the name only, so that soft-equal columns hash alike.
impl Hash for Column {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<(&str, &str)> for Column {
    fn from((table, name): (&str, &str)) -> Self {
        Self::qualified(table, name)
    }
}

/// A result row: columns and values in result order.
///
/// Names are not unique on their own; two joined tables may both contribute
/// an `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    entries: Vec<(Column, Value)>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a column.
    pub fn push(&mut self, column: impl Into<Column>, value: Value) {
        self.entries.push((column.into(), value));
    }

    /// Builder form of [`Row::push`].
    #[must_use]
    pub fn with(mut self, column: impl Into<Column>, value: Value) -> Self {
        self.push(column, value);
        self
    }

    /// Returns the value of the first column matching `name`, scoped to
    /// `table` when given.
    ///
    /// Untagged columns match any table scope.
    #[must_use]
    pub fn first_value(&self, name: &str, table: Option<&str>) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(column, _)| column.matches(name, table))
            .map(|(_, value)| value)
    }

    /// Looks up a value using soft column equality.
    #[must_use]
    pub fn get(&self, column: &Column) -> Option<&Value> {
        self.first_value(&column.name, column.table.as_deref())
    }

    /// Returns true if any column has this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.first_value(name, None).is_some()
    }

    /// Decodes a single column.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if no column matches, or
    /// [`DecodeError::Field`] if the value cannot be converted.
    pub fn decode_column<T: ValueConvertible>(&self, name: &str) -> Result<T, DecodeError> {
        let value = self
            .first_value(name, None)
            .ok_or_else(|| DecodeError::FieldNotFound {
                field: name.to_string(),
                table: None,
            })?;
        T::from_value(value).map_err(|source| DecodeError::Field {
            field: name.to_string(),
            source,
        })
    }

    /// Iterates over columns and values in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&Column, &Value)> {
        self.entries.iter().map(|(column, value)| (column, value))
    }

    /// Returns the columns in result order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.entries.iter().map(|(column, _)| column)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Column, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (Column, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (Column, Value);
    type IntoIter = std::vec::IntoIter<(Column, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
