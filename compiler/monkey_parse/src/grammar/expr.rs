//! Expression parsing (Pratt).
//!
//! `parse_expression` runs the prefix production for the current token, then
//! folds infix productions while the lookahead binds tighter than the
//! caller's minimum precedence.

use monkey_ir::{
    Expression, FunctionLiteral, Identifier, IfExpression, InfixOperator, PrefixOperator,
    TokenKind, TokenSource,
};
use tracing::trace;

use crate::precedence::Precedence;
use crate::{ParseError, Parser};

fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

fn has_infix_parser(kind: TokenKind) -> bool {
    infix_operator(kind).is_some() || matches!(kind, TokenKind::LParen | TokenKind::LBracket)
}

impl<S: TokenSource> Parser<S> {
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && min < Precedence::of(self.peek.kind) {
            if !has_infix_parser(self.peek.kind) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        trace!(kind = %self.current.kind, "prefix");
        match self.current.kind {
            TokenKind::Ident => Some(Expression::ident(self.current.literal.as_str())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Some(Expression::String(self.current.literal.clone())),
            TokenKind::True => Some(Expression::Boolean(true)),
            TokenKind::False => Some(Expression::Boolean(false)),
            TokenKind::Bang => self.parse_prefix_expression(PrefixOperator::Bang),
            TokenKind::Minus => self.parse_prefix_expression(PrefixOperator::Minus),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self
                .parse_expression_list(TokenKind::RBracket)
                .map(Expression::Array),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.error(ParseError::NoPrefixParser {
                    kind,
                    span: self.current.span,
                });
                None
            }
        }
    }

    /// Entered with the operator token as `current`.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        trace!(kind = %self.current.kind, "infix");
        match self.current.kind {
            TokenKind::LParen => {
                let arguments = self.parse_expression_list(TokenKind::RParen)?;
                Some(Expression::Call {
                    callee: Box::new(left),
                    arguments,
                })
            }
            TokenKind::LBracket => self.parse_index_expression(left),
            kind => {
                let operator = infix_operator(kind)?;
                let precedence = Precedence::of(kind);
                self.advance();
                let right = self.parse_expression(precedence)?;
                Some(Expression::infix(operator, left, right))
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        if let Ok(value) = self.current.literal.parse::<i64>() {
            Some(Expression::Integer(value))
        } else {
            self.error(ParseError::InvalidInteger {
                literal: self.current.literal.clone(),
                span: self.current.span,
            });
            None
        }
    }

    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expression> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::prefix(operator, operand))
    }

    /// `( <expr> )`
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(inner)
    }

    /// `if ( <cond> ) { ... } [else { ... }]`
    fn parse_if_expression(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `fn ( <ident>, ... ) { ... }`
    fn parse_function_literal(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral { parameters, body }))
    }

    /// Entered on `(`, leaves `current` on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current.literal.as_str()));
        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current.literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    /// Comma-separated expressions up to `end`. Shared by call arguments and
    /// array literals; entered on the opening delimiter.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        if self.peek_is(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }

    /// `<left> [ <expr> ]`, entered on `[`.
    fn parse_index_expression(&mut self, collection: Expression) -> Option<Expression> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        Some(Expression::Index {
            collection: Box::new(collection),
            index: Box::new(index),
        })
    }

    /// `{ <key> : <value>, ... }`
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Some(Expression::Hash(pairs))
    }
}
