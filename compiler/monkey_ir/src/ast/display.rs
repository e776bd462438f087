//! Source rendering for syntax trees.
//!
//! The rendering is fully parenthesized so that it parses back to the same
//! tree: prefix and infix expressions are wrapped in parentheses, index
//! expressions too, and an expression statement that is followed by another
//! statement is terminated with `;` (otherwise `a` followed by `(b)` would
//! re-parse as a call).

use std::fmt::{self, Display, Formatter, Write};

use super::{
    BlockStatement, Expression, FunctionLiteral, Identifier, IfExpression, Program, Statement,
};

fn write_statements(f: &mut Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{statement}")?;
        let has_next = i + 1 < statements.len();
        if has_next && matches!(statement, Statement::Expression { .. }) {
            f.write_char(';')?;
        }
    }
    Ok(())
}

fn write_braced(f: &mut Formatter<'_>, block: &BlockStatement) -> fmt::Result {
    if block.statements.is_empty() {
        f.write_str("{ }")
    } else {
        write!(f, "{{ {block} }}")
    }
}

fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write `value` as a double-quoted string literal.
fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// Renders the statements only; the enclosing construct supplies the braces.
impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return { value } => write!(f, "return {value};"),
            Statement::Expression { value } => write!(f, "{value}"),
            Statement::Block(block) => write_braced(f, block),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) ", self.condition)?;
        write_braced(f, &self.consequence)?;
        if let Some(alternative) = &self.alternative {
            f.write_str(" else ")?;
            write_braced(f, alternative)?;
        }
        Ok(())
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_separated(f, &self.parameters)?;
        f.write_str(") ")?;
        write_braced(f, &self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::String(value) => write_quoted(f, value),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::If(if_expr) => write!(f, "{if_expr}"),
            Expression::Function(function) => write!(f, "{function}"),
            Expression::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments)?;
                f.write_char(')')
            }
            Expression::Array(elements) => {
                f.write_char('[')?;
                write_separated(f, elements)?;
                f.write_char(']')
            }
            Expression::Index { collection, index } => write!(f, "({collection}[{index}])"),
            Expression::Hash(pairs) => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}
