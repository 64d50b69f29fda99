//! Binary operator levels, unary operators and `**`.
//!
//! Each binary level is left-associative and delegates to the next tighter
//! level for its operands. `**` is right-associative: its right operand is
//! parsed at the unary level, so `-2 ** -1` is `-(2 ** (-1))`.

use pyfront_ir::{BinaryOp, ExprId, ExprKind, TokenKind, UnaryOp};
use pyfront_lexer::TokenSource;
use pyfront_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

type Level<S, L> = fn(&mut Parser<S, L>) -> Result<ExprId, ParseError>;

fn bitor_op(kind: TokenKind) -> Option<BinaryOp> {
    (kind == TokenKind::Pipe).then_some(BinaryOp::BitOr)
}

fn bitxor_op(kind: TokenKind) -> Option<BinaryOp> {
    (kind == TokenKind::Caret).then_some(BinaryOp::BitXor)
}

fn bitand_op(kind: TokenKind) -> Option<BinaryOp> {
    (kind == TokenKind::Amp).then_some(BinaryOp::BitAnd)
}

fn shift_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Shl => Some(BinaryOp::Shl),
        TokenKind::Shr => Some(BinaryOp::Shr),
        _ => None,
    }
}

fn arith_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn term_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::SlashSlash => Some(BinaryOp::FloorDiv),
        TokenKind::Percent => Some(BinaryOp::Mod),
        TokenKind::At => Some(BinaryOp::MatMul),
        _ => None,
    }
}

impl<S: TokenSource, L> Parser<S, L> {
    /// `left (op right)*` where `op` is accepted by `op_for`.
    fn left_assoc(
        &mut self,
        operand: Level<S, L>,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = operand(self)?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    /// `|`, the loosest bitwise level.
    pub(crate) fn or_expr(&mut self) -> Result<ExprId, ParseError> {
        self.left_assoc(Self::xor_expr, bitor_op)
    }

    fn xor_expr(&mut self) -> Result<ExprId, ParseError> {
        self.left_assoc(Self::and_expr, bitxor_op)
    }

    fn and_expr(&mut self) -> Result<ExprId, ParseError> {
        self.left_assoc(Self::shift_expr, bitand_op)
    }

    fn shift_expr(&mut self) -> Result<ExprId, ParseError> {
        self.left_assoc(Self::arith_expr, shift_op)
    }

    fn arith_expr(&mut self) -> Result<ExprId, ParseError> {
        self.left_assoc(Self::term, arith_op)
    }

    fn term(&mut self) -> Result<ExprId, ParseError> {
        self.left_assoc(Self::factor, term_op)
    }

    /// Prefix `+`, `-`, `~`.
    fn factor(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Plus => UnaryOp::Pos,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Tilde => UnaryOp::Invert,
            _ => return self.power(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.factor())?;
        let span = start.merge(self.expr_span(operand));
        Ok(self.alloc_expr(ExprKind::Unary { op, operand }, span))
    }

    /// `['await'] atom trailer* ['**' factor]`
    fn power(&mut self) -> Result<ExprId, ParseError> {
        let base = if self.cursor.check(TokenKind::KwAwait) {
            let start = self.cursor.advance().span;
            let value = self.atom_expr()?;
            let span = start.merge(self.expr_span(value));
            self.alloc_expr(ExprKind::Await(value), span)
        } else {
            self.atom_expr()?
        };
        if !self.cursor.eat(TokenKind::StarStar) {
            return Ok(base);
        }
        let exponent = ensure_sufficient_stack(|| self.factor())?;
        Ok(self.binary(BinaryOp::Pow, base, exponent))
    }
}
