use super::{Serializer, SqlSerialize};
use crate::ast::{
    AlterTable, AlterTableAction, ColumnConstraint, ColumnConstraintKind, ColumnDefinition,
    CreateIndex, CreateTable, DropIndex, DropTable, ForeignKey, TableConstraint,
    TableConstraintKind,
};

impl SqlSerialize for ForeignKey {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("REFERENCES ");
        out.write_identifier(&self.table);
        if !self.columns.is_empty() {
            out.write(" (");
            out.write_identifiers(&self.columns);
            out.write(")");
        }
        if let Some(action) = self.on_delete {
            out.write(" ON DELETE ");
            out.write(action.as_str());
        }
        if let Some(action) = self.on_update {
            out.write(" ON UPDATE ");
            out.write(action.as_str());
        }
    }
}

fn write_constraint_name(name: Option<&String>, out: &mut Serializer<'_>) {
    if let Some(name) = name {
        out.write("CONSTRAINT ");
        out.write_identifier(name);
        out.write(" ");
    }
}

impl SqlSerialize for ColumnConstraint {
    fn serialize(&self, out: &mut Serializer<'_>) {
        write_constraint_name(self.name.as_ref(), out);
        match &self.kind {
            ColumnConstraintKind::Default(expr) => {
                out.write("DEFAULT ");
                expr.serialize(out);
            }
            ColumnConstraintKind::Unique => out.write("UNIQUE"),
            ColumnConstraintKind::NotNull => out.write("NOT NULL"),
            ColumnConstraintKind::PrimaryKey(default) => {
                let clause = default.and_then(|d| out.dialect().primary_key_default(d));
                if let Some(clause) = clause {
                    out.write(&clause);
                    out.write(" ");
                }
                out.write("PRIMARY KEY");
            }
            ColumnConstraintKind::Check(expr) => {
                out.write("CHECK (");
                expr.serialize(out);
                out.write(")");
            }
            ColumnConstraintKind::Collate(collation) => {
                out.write("COLLATE ");
                out.write(collation);
            }
            ColumnConstraintKind::References(foreign_key) => foreign_key.serialize(out),
        }
    }
}

impl SqlSerialize for ColumnDefinition {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write_identifier(&self.name);
        out.write(" ");
        let data_type = out.dialect().data_type(&self.data_type);
        out.write(&data_type);
        for constraint in self.sorted_constraints() {
            out.write(" ");
            constraint.serialize(out);
        }
    }
}

impl SqlSerialize for TableConstraint {
    fn serialize(&self, out: &mut Serializer<'_>) {
        write_constraint_name(self.name.as_ref(), out);
        match &self.kind {
            TableConstraintKind::Unique(columns) => {
                out.write("UNIQUE (");
                out.write_identifiers(columns);
                out.write(")");
            }
            TableConstraintKind::PrimaryKey(columns) => {
                out.write("PRIMARY KEY (");
                out.write_identifiers(columns);
                out.write(")");
            }
            TableConstraintKind::Check(expr) => {
                out.write("CHECK (");
                expr.serialize(out);
                out.write(")");
            }
            TableConstraintKind::ForeignKey {
                columns,
                references,
            } => {
                out.write("FOREIGN KEY (");
                out.write_identifiers(columns);
                out.write(") ");
                references.serialize(out);
            }
        }
    }
}

impl SqlSerialize for CreateTable {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.inlined(|out| self.serialize_inline(out));
    }
}

impl CreateTable {
    fn serialize_inline(&self, out: &mut Serializer<'_>) {
        out.write("CREATE ");
        if self.temporary {
            out.write("TEMPORARY ");
        }
        out.write("TABLE ");
        if self.if_not_exists && out.dialect().supports_if_exists() {
            out.write("IF NOT EXISTS ");
        }
        out.write_identifier(&self.table);
        out.write(" (");
        out.write_separated(&self.columns, ", ");
        let constraints = self.sorted_constraints();
        if !constraints.is_empty() {
            if !self.columns.is_empty() {
                out.write(", ");
            }
            out.write_separated(constraints, ", ");
        }
        out.write(")");
        if let Some(epilogue) = out.dialect().create_table_epilogue(&self.table) {
            out.write("; ");
            out.write(&epilogue);
        }
    }
}

impl SqlSerialize for AlterTable {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("ALTER TABLE ");
        out.write_identifier(&self.table);
        match &self.action {
            AlterTableAction::RenameTo(name) => {
                out.write(" RENAME TO ");
                out.write_identifier(name);
            }
            AlterTableAction::AddColumn(column) => {
                out.write(" ADD ");
                out.inlined(|out| column.serialize(out));
            }
        }
    }
}

impl SqlSerialize for DropTable {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("DROP TABLE ");
        if self.if_exists && out.dialect().supports_if_exists() {
            out.write("IF EXISTS ");
        }
        out.write_identifier(&self.table);
        if out.dialect().supports_drop_behavior() {
            out.write(" ");
            out.write(self.behavior.as_str());
        }
    }
}

impl SqlSerialize for CreateIndex {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("CREATE ");
        if self.unique {
            out.write("UNIQUE ");
        }
        out.write("INDEX ");
        out.write_identifier(&self.name);
        out.write(" ON ");
        out.write_identifier(&self.table);
        out.write(" (");
        out.write_identifiers(&self.columns);
        out.write(")");
    }
}

impl SqlSerialize for DropIndex {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write("DROP INDEX ");
        out.write_identifier(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{DataType, DropBehavior, Expr, ForeignKeyAction, PrimaryKeyDefault};
    use crate::dialect::GenericDialect;

    fn render(node: &impl SqlSerialize) -> String {
        let mut out = Serializer::new(&GenericDialect);
        node.serialize(&mut out);
        out.finish().sql
    }

    #[test]
    fn test_column_constraints_render_in_canonical_order() {
        let column = ColumnDefinition::new("id", DataType::Integer)
            .not_null()
            .primary_key()
            .default(Expr::integer(0));
        assert_eq!(
            render(&column),
            "\"id\" INTEGER DEFAULT 0 NOT NULL PRIMARY KEY"
        );
    }

    #[test]
    fn test_create_table_inlines_defaults() {
        let create = CreateTable {
            table: String::from("flags"),
            temporary: false,
            if_not_exists: false,
            columns: vec![ColumnDefinition::new("label", DataType::VarChar(20)).default("none")],
            constraints: Vec::new(),
        };
        let mut out = Serializer::new(&GenericDialect);
        create.serialize(&mut out);
        let query = out.finish();
        assert_eq!(
            query.sql,
            "CREATE TABLE \"flags\" (\"label\" VARCHAR(20) DEFAULT 'none')"
        );
        assert!(query.binds.is_empty());
    }

    #[test]
    fn test_create_table() {
        let create = CreateTable {
            table: String::from("orders"),
            temporary: false,
            if_not_exists: true,
            columns: vec![
                ColumnDefinition::new("id", DataType::LongInt)
                    .primary_key_with(PrimaryKeyDefault::AutoIncrement),
                ColumnDefinition::new("user_id", DataType::LongInt).references(
                    ForeignKey::new("users", ["id"]).on_delete(ForeignKeyAction::Cascade),
                ),
            ],
            constraints: vec![TableConstraint {
                name: Some(String::from("positive")),
                kind: TableConstraintKind::Check(Expr::column("id").gt(Expr::integer(0))),
            }],
        };
        assert_eq!(
            render(&create),
            "CREATE TABLE IF NOT EXISTS \"orders\" (\
             \"id\" BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY, \
             \"user_id\" BIGINT REFERENCES \"users\" (\"id\") ON DELETE CASCADE, \
             CONSTRAINT \"positive\" CHECK (\"id\" > 0))"
        );
    }

    #[test]
    fn test_alter_drop_and_indexes() {
        let alter = AlterTable {
            table: String::from("users"),
            action: AlterTableAction::AddColumn(
                ColumnDefinition::new("email", DataType::VarChar(255)).unique(),
            ),
        };
        assert_eq!(
            render(&alter),
            "ALTER TABLE \"users\" ADD \"email\" VARCHAR(255) UNIQUE"
        );

        let drop = DropTable {
            table: String::from("users"),
            if_exists: true,
            behavior: DropBehavior::Cascade,
        };
        assert_eq!(render(&drop), "DROP TABLE IF EXISTS \"users\" CASCADE");

        let index = CreateIndex {
            name: String::from("idx_email"),
            table: String::from("users"),
            columns: vec![String::from("email")],
            unique: true,
        };
        assert_eq!(
            render(&index),
            "CREATE UNIQUE INDEX \"idx_email\" ON \"users\" (\"email\")"
        );
        assert_eq!(
            render(&DropIndex {
                name: String::from("idx_email")
            }),
            "DROP INDEX \"idx_email\""
        );
    }
}
