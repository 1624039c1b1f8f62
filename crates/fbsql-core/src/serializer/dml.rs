use super::{Serializer, SqlSerialize};
use crate::ast::{
    DeleteStatement, InsertSource, InsertStatement, JoinClause, OrderBy, SelectColumn,
    SelectStatement, TableRef, UpdateAssignment, UpdateStatement,
};
use crate::dialect::PaginationStyle;

impl SqlSerialize for SelectColumn {
    fn serialize(&self, out: &mut Serializer<'_>) {
        match self {
            Self::All => out.write("*"),
            Self::AllFrom(table) => {
                out.write_identifier(table);
                out.write(".*");
            }
            Self::Expr { expr, alias } => {
                expr.serialize(out);
                if let Some(alias) = alias {
                    out.write(" AS ");
                    out.write_identifier(alias);
                }
            }
        }
    }
}

impl SqlSerialize for TableRef {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write_identifier(&self.name);
        if let Some(alias) = &self.alias {
            out.write(" AS ");
            out.write_identifier(alias);
        }
    }
}

impl SqlSerialize for JoinClause {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write(self.join_type.as_str());
        out.write(" ");
        self.table.serialize(out);
        out.write(" ON ");
        self.on.serialize(out);
    }
}

impl SqlSerialize for OrderBy {
    fn serialize(&self, out: &mut Serializer<'_>) {
        self.expr.serialize(out);
        out.write(" ");
        out.write(self.direction.as_str());
    }
}

/// `VALUES (a, b)` for dialects that reject a SELECT without FROM. Aliases
/// have no place in a row constructor and are dropped.
fn serialize_values(select: &SelectStatement, out: &mut Serializer<'_>) {
    out.write("VALUES (");
    for (i, column) in select.columns.iter().enumerate() {
        if i > 0 {
            out.write(", ");
        }
        match column {
            SelectColumn::Expr { expr, .. } => expr.serialize(out),
            wildcard => wildcard.serialize(out),
        }
    }
    out.write(")");
}

impl SqlSerialize for SelectStatement {
    fn serialize(&self, out: &mut Serializer<'_>) {
        if self.tables.is_empty() && !out.dialect().supports_select_without_from() {
            serialize_values(self, out);
            return;
        }

        let pagination = out.dialect().pagination();

        out.write("SELECT");
        if self.distinct {
            out.write(" DISTINCT");
        }
        if pagination == PaginationStyle::Top && (self.limit.is_some() || self.offset.is_some()) {
            let start = self.offset.unwrap_or(0);
            let count = self
                .limit
                .map_or_else(|| i64::MAX.to_string(), |limit| limit.to_string());
            out.write(&format!(" TOP({start}, {count})"));
        }
        out.write(" ");
        if self.columns.is_empty() {
            out.write("*");
        } else {
            out.write_separated(&self.columns, ", ");
        }

        if !self.tables.is_empty() {
            out.write(" FROM ");
            out.write_separated(&self.tables, ", ");
        }
        for join in &self.joins {
            out.write(" ");
            join.serialize(out);
        }
        if let Some(predicate) = &self.where_clause {
            out.write(" WHERE ");
            predicate.serialize(out);
        }
        if !self.group_by.is_empty() && !self.selects_all() {
            out.write(" GROUP BY ");
            out.write_separated(&self.group_by, ", ");
        }
        if !self.order_by.is_empty() {
            out.write(" ORDER BY ");
            out.write_separated(&self.order_by, ", ");
        }

        if pagination == PaginationStyle::LimitOffset {
            if let Some(limit) = self.limit {
                out.write(&format!(" LIMIT {limit}"));
            }
            if let Some(offset) = self.offset {
                out.write(&format!(" OFFSET {offset}"));
            }
        }
    }
}

impl SqlSerialize for InsertStatement {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("INSERT INTO ");
        out.write_identifier(&self.table);
        if !self.columns.is_empty() {
            out.write(" (");
            out.write_identifiers(&self.columns);
            out.write(")");
        }
        match &self.values {
            InsertSource::Values(rows) => {
                out.write(" VALUES ");
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        out.write(", ");
                    }
                    out.write("(");
                    out.write_separated(row, ", ");
                    out.write(")");
                }
            }
            InsertSource::Query(query) => {
                out.write(" ");
                query.serialize(out);
            }
        }
    }
}

impl SqlSerialize for UpdateAssignment {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write_identifier(&self.column);
        out.write(" = ");
        self.value.serialize(out);
    }
}

impl SqlSerialize for UpdateStatement {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("UPDATE ");
        out.write_identifier(&self.table);
        out.write(" SET ");
        out.write_separated(&self.assignments, ", ");
        if let Some(predicate) = &self.where_clause {
            out.write(" WHERE ");
            predicate.serialize(out);
        }
    }
}

impl SqlSerialize for DeleteStatement {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("DELETE FROM ");
        out.write_identifier(&self.table);
        if let Some(predicate) = &self.where_clause {
            out.write(" WHERE ");
            predicate.serialize(out);
        }
    }
}
