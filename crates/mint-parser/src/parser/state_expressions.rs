//! Parser state - expression parsing methods.
//!
//! Plain precedence-climbing over three tiers (logical, comparison,
//! arithmetic), then unary/postfix/primary. The `VariableRead` wrapper
//! around a bare identifier is load-bearing: the completion engine treats it
//! as the "a variable belongs here" marker, and the binder resolves against
//! it. An identifier directly followed by `(` is a call instead.

use mint_scanner::SyntaxKind;

use super::node::{NodeIndex, NodeKind};
use super::state::ParserState;
use super::state_statements::is_expression_start;

impl ParserState {
    pub(super) fn parse_expression(&mut self) -> NodeIndex {
        if !self.enter_depth() {
            return self.error_and_skip("expression nesting too deep");
        }
        let node = self.parse_binary(0);
        self.exit_depth();
        node
    }

    /// `tier` 0 = logical (&& ||), 1 = comparison, 2 = additive.
    fn parse_binary(&mut self, tier: u8) -> NodeIndex {
        if tier > 2 {
            return self.parse_unary();
        }
        let mut lhs = self.parse_binary(tier + 1);
        while operator_tier(self.current().kind) == Some(tier) {
            let mut children = vec![lhs];
            self.bump(&mut children); // operator
            children.push(self.parse_binary(tier + 1));
            lhs = self.finish(NodeKind::BinaryExpr, children);
        }
        lhs
    }

    fn parse_unary(&mut self) -> NodeIndex {
        if matches!(self.current().kind, SyntaxKind::Bang | SyntaxKind::Minus) {
            if !self.enter_depth() {
                return self.error_and_skip("expression nesting too deep");
            }
            let mut children = Vec::new();
            self.bump(&mut children);
            children.push(self.parse_unary());
            let node = self.finish(NodeKind::UnaryExpr, children);
            self.exit_depth();
            return node;
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> NodeIndex {
        let primary = self.parse_primary();
        if matches!(
            self.current().kind,
            SyntaxKind::PlusPlus | SyntaxKind::MinusMinus
        ) {
            let mut children = vec![primary];
            self.bump(&mut children);
            return self.finish(NodeKind::PostfixExpr, children);
        }
        primary
    }

    fn parse_primary(&mut self) -> NodeIndex {
        match self.current().kind {
            SyntaxKind::LeftParen => {
                let mut children = Vec::new();
                self.bump(&mut children);
                children.push(self.parse_expression());
                self.expect(SyntaxKind::RightParen, &mut children);
                self.finish(NodeKind::ParenExpr, children)
            }
            SyntaxKind::IntegerLiteral
            | SyntaxKind::FloatLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => {
                let mut children = Vec::new();
                self.bump(&mut children);
                self.finish(NodeKind::LiteralExpr, children)
            }
            SyntaxKind::Identifier => {
                if self.next_kind() == SyntaxKind::LeftParen {
                    self.parse_call()
                } else {
                    let mut children = Vec::new();
                    self.bump(&mut children);
                    self.finish(NodeKind::VariableRead, children)
                }
            }
            _ => {
                // Leave the token in place; the enclosing statement list or
                // delimiter recovery decides what to do with it.
                let current = self.current();
                self.diagnostics.push(mint_common::Diagnostic::error(
                    current.span(),
                    format!(
                        "expected expression, found {}",
                        super::state::describe(current.kind)
                    ),
                ));
                self.finish(NodeKind::ErrorNode, Vec::new())
            }
        }
    }

    fn parse_call(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // callee identifier
        self.bump(&mut children); // (
        if is_expression_start(self.current().kind) {
            children.push(self.parse_arg_list());
        }
        self.expect(SyntaxKind::RightParen, &mut children);
        self.finish(NodeKind::CallExpr, children)
    }

    fn parse_arg_list(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        children.push(self.parse_argument());
        while self.eat(SyntaxKind::Comma, &mut children) {
            children.push(self.parse_argument());
        }
        self.finish(NodeKind::ArgList, children)
    }

    fn parse_argument(&mut self) -> NodeIndex {
        let children = vec![self.parse_expression()];
        self.finish(NodeKind::Argument, children)
    }
}

/// Binary operator precedence tier, loosest first.
fn operator_tier(kind: SyntaxKind) -> Option<u8> {
    let tier = match kind {
        SyntaxKind::AmpersandAmpersand | SyntaxKind::BarBar => 0,
        SyntaxKind::EqualsEquals
        | SyntaxKind::BangEquals
        | SyntaxKind::LessThan
        | SyntaxKind::GreaterThan
        | SyntaxKind::LessThanEquals
        | SyntaxKind::GreaterThanEquals
        | SyntaxKind::InKeyword
        | SyntaxKind::NotIn => 1,
        SyntaxKind::Plus | SyntaxKind::Minus | SyntaxKind::Star | SyntaxKind::Slash => 2,
        _ => return None,
    };
    Some(tier)
}
