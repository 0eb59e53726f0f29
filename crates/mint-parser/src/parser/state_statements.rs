//! Parser state - statement and declaration parsing methods.

use mint_scanner::SyntaxKind;

use super::node::{NodeIndex, NodeKind};
use super::state::ParserState;

impl ParserState {
    /// Parse a whole source file. Every token ends up in the tree, either in
    /// a real construct or wrapped in an error node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        while !self.at_eof() {
            children.push(self.parse_statement_or_skip());
        }
        self.finish(NodeKind::SourceFile, children)
    }

    pub(super) fn parse_statement_or_skip(&mut self) -> NodeIndex {
        if is_statement_start(self.current().kind) {
            self.parse_statement()
        } else {
            let found = super::state::describe(self.current().kind);
            self.error_and_skip(format!("expected statement, found {found}"))
        }
    }

    fn parse_statement(&mut self) -> NodeIndex {
        if !self.enter_depth() {
            return self.error_and_skip("statement nesting too deep");
        }
        let node = match self.current().kind {
            SyntaxKind::FunKeyword => self.parse_function_decl(),
            SyntaxKind::ValKeyword | SyntaxKind::VarKeyword => self.parse_var_decl(),
            SyntaxKind::IfKeyword => self.parse_if_stmt(),
            SyntaxKind::ForKeyword => self.parse_for_stmt(),
            SyntaxKind::WhileKeyword => self.parse_while_stmt(),
            SyntaxKind::TryKeyword => self.parse_try_stmt(),
            SyntaxKind::ReturnKeyword => self.parse_return_stmt(),
            _ => self.parse_expression_statement(),
        };
        self.exit_depth();
        node
    }

    fn parse_function_decl(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // fun
        self.expect(SyntaxKind::Identifier, &mut children);
        self.expect(SyntaxKind::LeftParen, &mut children);
        if self.at(SyntaxKind::Identifier) {
            children.push(self.parse_param_list());
        }
        self.expect(SyntaxKind::RightParen, &mut children);
        children.push(self.parse_block());
        self.finish(NodeKind::FunctionDecl, children)
    }

    fn parse_param_list(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        children.push(self.parse_param());
        while self.eat(SyntaxKind::Comma, &mut children) {
            children.push(self.parse_param());
        }
        self.finish(NodeKind::ParamList, children)
    }

    fn parse_param(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.expect(SyntaxKind::Identifier, &mut children);
        if self.eat(SyntaxKind::Colon, &mut children) {
            children.push(self.parse_type_ref());
        }
        self.finish(NodeKind::Param, children)
    }

    fn parse_type_ref(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.expect(SyntaxKind::Identifier, &mut children);
        self.finish(NodeKind::TypeRef, children)
    }

    fn parse_var_decl(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // val | var
        self.expect(SyntaxKind::Identifier, &mut children);
        if self.eat(SyntaxKind::Colon, &mut children) {
            children.push(self.parse_type_ref());
        }
        if self.eat(SyntaxKind::Equals, &mut children) {
            children.push(self.parse_expression());
        }
        self.finish(NodeKind::VarDecl, children)
    }

    fn parse_if_stmt(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // if
        self.expect(SyntaxKind::LeftParen, &mut children);
        children.push(self.parse_expression());
        self.expect(SyntaxKind::RightParen, &mut children);
        children.push(self.parse_block());
        if self.eat(SyntaxKind::ElseKeyword, &mut children) {
            if self.at(SyntaxKind::IfKeyword) {
                children.push(self.parse_if_stmt());
            } else {
                children.push(self.parse_block());
            }
        }
        self.finish(NodeKind::IfStmt, children)
    }

    fn parse_for_stmt(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // for
        self.expect(SyntaxKind::LeftParen, &mut children);
        self.expect(SyntaxKind::Identifier, &mut children);
        self.expect(SyntaxKind::InKeyword, &mut children);
        children.push(self.parse_expression());
        self.expect(SyntaxKind::RightParen, &mut children);
        children.push(self.parse_block());
        self.finish(NodeKind::ForStmt, children)
    }

    fn parse_while_stmt(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // while
        self.expect(SyntaxKind::LeftParen, &mut children);
        children.push(self.parse_expression());
        self.expect(SyntaxKind::RightParen, &mut children);
        children.push(self.parse_block());
        self.finish(NodeKind::WhileStmt, children)
    }

    fn parse_try_stmt(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // try
        children.push(self.parse_block());
        while self.at(SyntaxKind::CatchKeyword) {
            children.push(self.parse_catch_clause());
        }
        if self.at(SyntaxKind::FinallyKeyword) {
            let mut finally_children = Vec::new();
            self.bump(&mut finally_children); // finally
            finally_children.push(self.parse_block());
            children.push(self.finish(NodeKind::FinallyClause, finally_children));
        }
        self.finish(NodeKind::TryStmt, children)
    }

    fn parse_catch_clause(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // catch
        self.expect(SyntaxKind::LeftParen, &mut children);
        self.expect(SyntaxKind::Identifier, &mut children);
        self.expect(SyntaxKind::RightParen, &mut children);
        children.push(self.parse_block());
        self.finish(NodeKind::CatchClause, children)
    }

    fn parse_return_stmt(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        self.bump(&mut children); // return
        if is_expression_start(self.current().kind) {
            children.push(self.parse_expression());
        }
        self.finish(NodeKind::ReturnStmt, children)
    }

    fn parse_expression_statement(&mut self) -> NodeIndex {
        let children = vec![self.parse_expression()];
        self.finish(NodeKind::ExprStmt, children)
    }

    /// Parse a braced block. A missing `{` degrades to an empty block so the
    /// caller's construct still closes; stray tokens inside are skipped one
    /// at a time.
    pub(super) fn parse_block(&mut self) -> NodeIndex {
        let mut children = Vec::new();
        if !self.expect(SyntaxKind::LeftBrace, &mut children) {
            return self.finish(NodeKind::Block, children);
        }
        while !self.at(SyntaxKind::RightBrace) && !self.at_eof() {
            children.push(self.parse_statement_or_skip());
        }
        self.expect(SyntaxKind::RightBrace, &mut children);
        self.finish(NodeKind::Block, children)
    }
}

pub(super) fn is_statement_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunKeyword
            | SyntaxKind::ValKeyword
            | SyntaxKind::VarKeyword
            | SyntaxKind::IfKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::ReturnKeyword
    ) || is_expression_start(kind)
}

pub(super) fn is_expression_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::IntegerLiteral
            | SyntaxKind::FloatLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::LeftParen
            | SyntaxKind::Bang
            | SyntaxKind::Minus
    )
}
