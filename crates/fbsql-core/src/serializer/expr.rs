use super::{Serializer, SqlSerialize};
use crate::ast::{BinaryOp, ColumnRef, Expr, FunctionArg, FunctionCall, Literal, UnaryOp};

impl SqlSerialize for Literal {
    fn serialize(&self, out: &mut Serializer<'_>) {
        match self {
            Self::Null => out.write("NULL"),
            Self::Default => out.write("DEFAULT"),
            Self::Boolean(b) => {
                let spelled = out.dialect().literal_boolean(*b);
                out.write(spelled);
            }
            Self::Integer(n) => out.write(&n.to_string()),
            Self::Float(f) => out.write(&f.to_string()),
            Self::String(s) => {
                let quoted = out.dialect().quote_string(s);
                out.write(&quoted);
            }
        }
    }
}

impl SqlSerialize for ColumnRef {
    fn serialize(&self, out: &mut Serializer<'_>) {
        if let Some(table) = &self.table {
            out.write_identifier(table);
            out.write(".");
        }
        out.write_identifier(&self.name);
    }
}

impl SqlSerialize for FunctionArg {
    fn serialize(&self, out: &mut Serializer<'_>) {
        match self {
            Self::All => out.write("*"),
            Self::Expr(expr) => expr.serialize(out),
        }
    }
}

impl SqlSerialize for FunctionCall {
    fn serialize(&self, out: &mut Serializer<'_>) {
        out.write(&self.name);
        if !self.args.is_empty() {
            out.write("(");
            out.write_separated(&self.args, ", ");
            out.write(")");
        }
    }
}

const fn is_associative(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::And | BinaryOp::Or | BinaryOp::Add | BinaryOp::Mul | BinaryOp::Concat
    )
}

fn write_operand(out: &mut Serializer<'_>, operand: &Expr, parent: BinaryOp, right_side: bool) {
    let needs_parens = match operand {
        Expr::Binary { op, .. } => {
            op.precedence() < parent.precedence()
                || (right_side
                    && op.precedence() == parent.precedence()
                    && !(*op == parent && is_associative(parent)))
        }
        _ => false,
    };
    if needs_parens {
        out.write("(");
        operand.serialize(out);
        out.write(")");
    } else {
        operand.serialize(out);
    }
}

impl SqlSerialize for Expr {
    fn serialize(&self, out: &mut Serializer<'_>) {
        match self {
            Self::Literal(literal) => literal.serialize(out),
            Self::Bind(value) => out.write_bind(value.clone()),
            Self::Column(column) => column.serialize(out),
            Self::Binary { left, op, right } => {
                write_operand(out, left, *op, false);
                out.write(" ");
                out.write(op.as_str());
                out.write(" ");
                write_operand(out, right, *op, true);
            }
            Self::Unary { op, operand } => {
                out.write(op.as_str());
                if *op == UnaryOp::Not {
                    out.write(" ");
                }
                if matches!(**operand, Self::Binary { .. }) {
                    out.write("(");
                    operand.serialize(out);
                    out.write(")");
                } else {
                    operand.serialize(out);
                }
            }
            Self::Function(call) => call.serialize(out),
            Self::Subquery(query) => {
                out.write("(");
                query.serialize(out);
                out.write(")");
            }
            Self::Group(items) => {
                out.write("(");
                out.write_separated(items, ", ");
                out.write(")");
            }
        }
    }
}
