//! Borrowed view over any syntax tree node.

use std::borrow::Cow;
use std::fmt;

use super::{BlockStatement, Expression, Program, Statement};

/// Any node of a syntax tree, borrowed.
///
/// This is the closed set of things the evaluator can be handed. Matching on
/// it is exhaustive, so adding a node kind is a compile error until every
/// consumer handles it.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Node::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Node::Expression(expression)
    }
}

impl Node<'_> {
    /// Literal text of the node's leading token, for diagnostics.
    pub fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Node::Program(program) => program.token_literal(),
            Node::Statement(statement) => statement.token_literal(),
            Node::Block(_) => Cow::Borrowed("{"),
            Node::Expression(expression) => expression.token_literal(),
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Statement(statement) => write!(f, "{statement}"),
            Node::Block(block) => write!(f, "{block}"),
            Node::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl Program {
    /// The first statement's leading literal, or empty for an empty program.
    pub fn token_literal(&self) -> Cow<'_, str> {
        self.statements
            .first()
            .map_or(Cow::Borrowed(""), Statement::token_literal)
    }
}

impl Statement {
    pub fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Statement::Let { .. } => Cow::Borrowed("let"),
            Statement::Return { .. } => Cow::Borrowed("return"),
            Statement::Expression { value } => value.token_literal(),
            Statement::Block(_) => Cow::Borrowed("{"),
        }
    }
}

impl Expression {
    pub fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Expression::Identifier(ident) => Cow::Borrowed(&ident.name),
            Expression::Integer(value) => Cow::Owned(value.to_string()),
            Expression::String(value) => Cow::Borrowed(value),
            Expression::Boolean(true) => Cow::Borrowed("true"),
            Expression::Boolean(false) => Cow::Borrowed("false"),
            Expression::Prefix { operator, .. } => Cow::Borrowed(operator.symbol()),
            Expression::Infix { operator, .. } => Cow::Borrowed(operator.symbol()),
            Expression::If(_) => Cow::Borrowed("if"),
            Expression::Function(_) => Cow::Borrowed("fn"),
            Expression::Call { .. } => Cow::Borrowed("("),
            Expression::Array(_) | Expression::Index { .. } => Cow::Borrowed("["),
            Expression::Hash(_) => Cow::Borrowed("{"),
        }
    }
}
