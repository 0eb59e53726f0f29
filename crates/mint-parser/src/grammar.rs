//! Declarative grammar description for candidate collection.
//!
//! The completion engine needs to answer "which terminals may appear at
//! token index N" without executing the parser. This module describes the
//! same grammar the recursive-descent methods implement, as plain data the
//! engine can search: every rule is a list of alternatives, every
//! alternative a sequence of elements. Keep this table and the parse
//! methods in sync when the language grows.

use mint_scanner::SyntaxKind;
use serde::{Deserialize, Serialize};

/// Grammar rule identifiers. `File` is the entry rule; `VariableRead` and
/// `Argument` are the semantically special positions the engine defers to
/// scope resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum RuleId {
    File = 0,
    Statement,
    FunctionDecl,
    ParamList,
    Param,
    TypeRef,
    VarDecl,
    IfStmt,
    ForStmt,
    WhileStmt,
    TryStmt,
    ReturnStmt,
    ExprStmt,
    Block,
    Expression,
    Comparison,
    Additive,
    Unary,
    Postfix,
    Primary,
    CallExpr,
    ArgList,
    Argument,
    VariableRead,
}

pub(crate) const RULE_COUNT: usize = RuleId::VariableRead as usize + 1;

/// One element of a grammar sequence.
#[derive(Debug, Clone)]
pub enum GrammarElement {
    /// Match one terminal.
    Tok(SyntaxKind),
    /// Invoke another rule.
    Rule(RuleId),
    /// Zero or one occurrence of the sequence.
    Opt(Vec<GrammarElement>),
    /// Zero or more occurrences of the sequence.
    Star(Vec<GrammarElement>),
    /// Exactly one of the sequences.
    Choice(Vec<Vec<GrammarElement>>),
}

/// The rule table, indexed by `RuleId`.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Vec<Vec<GrammarElement>>>,
}

impl Grammar {
    pub fn alternatives(&self, rule: RuleId) -> &[Vec<GrammarElement>] {
        &self.rules[rule as usize]
    }

    pub fn entry_rule(&self) -> RuleId {
        RuleId::File
    }

    /// The mint grammar, mirroring the parser in `parser::state_statements`
    /// and `parser::state_expressions`.
    pub fn mint() -> Grammar {
        use GrammarElement::{Choice, Opt, Rule, Star, Tok};
        use SyntaxKind as K;

        let mut rules = vec![Vec::new(); RULE_COUNT];
        let mut define = |id: RuleId, alts: Vec<Vec<GrammarElement>>| {
            rules[id as usize] = alts;
        };

        define(
            RuleId::File,
            vec![vec![
                Star(vec![Rule(RuleId::Statement)]),
                Tok(K::EndOfFile),
            ]],
        );
        define(
            RuleId::Statement,
            vec![
                vec![Rule(RuleId::FunctionDecl)],
                vec![Rule(RuleId::VarDecl)],
                vec![Rule(RuleId::IfStmt)],
                vec![Rule(RuleId::ForStmt)],
                vec![Rule(RuleId::WhileStmt)],
                vec![Rule(RuleId::TryStmt)],
                vec![Rule(RuleId::ReturnStmt)],
                vec![Rule(RuleId::ExprStmt)],
            ],
        );
        define(
            RuleId::FunctionDecl,
            vec![vec![
                Tok(K::FunKeyword),
                Tok(K::Identifier),
                Tok(K::LeftParen),
                Opt(vec![Rule(RuleId::ParamList)]),
                Tok(K::RightParen),
                Rule(RuleId::Block),
            ]],
        );
        define(
            RuleId::ParamList,
            vec![vec![
                Rule(RuleId::Param),
                Star(vec![Tok(K::Comma), Rule(RuleId::Param)]),
            ]],
        );
        define(
            RuleId::Param,
            vec![vec![
                Tok(K::Identifier),
                Opt(vec![Tok(K::Colon), Rule(RuleId::TypeRef)]),
            ]],
        );
        define(RuleId::TypeRef, vec![vec![Tok(K::Identifier)]]);
        define(
            RuleId::VarDecl,
            vec![vec![
                Choice(vec![vec![Tok(K::ValKeyword)], vec![Tok(K::VarKeyword)]]),
                Tok(K::Identifier),
                Opt(vec![Tok(K::Colon), Rule(RuleId::TypeRef)]),
                Opt(vec![Tok(K::Equals), Rule(RuleId::Expression)]),
            ]],
        );
        define(
            RuleId::IfStmt,
            vec![vec![
                Tok(K::IfKeyword),
                Tok(K::LeftParen),
                Rule(RuleId::Expression),
                Tok(K::RightParen),
                Rule(RuleId::Block),
                Opt(vec![
                    Tok(K::ElseKeyword),
                    Choice(vec![vec![Rule(RuleId::IfStmt)], vec![Rule(RuleId::Block)]]),
                ]),
            ]],
        );
        define(
            RuleId::ForStmt,
            vec![vec![
                Tok(K::ForKeyword),
                Tok(K::LeftParen),
                Tok(K::Identifier),
                Tok(K::InKeyword),
                Rule(RuleId::Expression),
                Tok(K::RightParen),
                Rule(RuleId::Block),
            ]],
        );
        define(
            RuleId::WhileStmt,
            vec![vec![
                Tok(K::WhileKeyword),
                Tok(K::LeftParen),
                Rule(RuleId::Expression),
                Tok(K::RightParen),
                Rule(RuleId::Block),
            ]],
        );
        define(
            RuleId::TryStmt,
            vec![vec![
                Tok(K::TryKeyword),
                Rule(RuleId::Block),
                Star(vec![
                    Tok(K::CatchKeyword),
                    Tok(K::LeftParen),
                    Tok(K::Identifier),
                    Tok(K::RightParen),
                    Rule(RuleId::Block),
                ]),
                Opt(vec![Tok(K::FinallyKeyword), Rule(RuleId::Block)]),
            ]],
        );
        define(
            RuleId::ReturnStmt,
            vec![vec![
                Tok(K::ReturnKeyword),
                Opt(vec![Rule(RuleId::Expression)]),
            ]],
        );
        define(RuleId::ExprStmt, vec![vec![Rule(RuleId::Expression)]]);
        define(
            RuleId::Block,
            vec![vec![
                Tok(K::LeftBrace),
                Star(vec![Rule(RuleId::Statement)]),
                Tok(K::RightBrace),
            ]],
        );
        define(
            RuleId::Expression,
            vec![vec![
                Rule(RuleId::Comparison),
                Star(vec![
                    Choice(vec![
                        vec![Tok(K::AmpersandAmpersand)],
                        vec![Tok(K::BarBar)],
                    ]),
                    Rule(RuleId::Comparison),
                ]),
            ]],
        );
        define(
            RuleId::Comparison,
            vec![vec![
                Rule(RuleId::Additive),
                Star(vec![
                    Choice(vec![
                        vec![Tok(K::EqualsEquals)],
                        vec![Tok(K::BangEquals)],
                        vec![Tok(K::LessThan)],
                        vec![Tok(K::GreaterThan)],
                        vec![Tok(K::LessThanEquals)],
                        vec![Tok(K::GreaterThanEquals)],
                        vec![Tok(K::InKeyword)],
                        vec![Tok(K::NotIn)],
                    ]),
                    Rule(RuleId::Additive),
                ]),
            ]],
        );
        define(
            RuleId::Additive,
            vec![vec![
                Rule(RuleId::Unary),
                Star(vec![
                    Choice(vec![
                        vec![Tok(K::Plus)],
                        vec![Tok(K::Minus)],
                        vec![Tok(K::Star)],
                        vec![Tok(K::Slash)],
                    ]),
                    Rule(RuleId::Unary),
                ]),
            ]],
        );
        define(
            RuleId::Unary,
            vec![
                vec![
                    Choice(vec![vec![Tok(K::Bang)], vec![Tok(K::Minus)]]),
                    Rule(RuleId::Unary),
                ],
                vec![Rule(RuleId::Postfix)],
            ],
        );
        define(
            RuleId::Postfix,
            vec![vec![
                Rule(RuleId::Primary),
                Opt(vec![Choice(vec![
                    vec![Tok(K::PlusPlus)],
                    vec![Tok(K::MinusMinus)],
                ])]),
            ]],
        );
        define(
            RuleId::Primary,
            vec![
                vec![
                    Tok(K::LeftParen),
                    Rule(RuleId::Expression),
                    Tok(K::RightParen),
                ],
                vec![Tok(K::IntegerLiteral)],
                vec![Tok(K::FloatLiteral)],
                vec![Tok(K::StringLiteral)],
                vec![Tok(K::TrueKeyword)],
                vec![Tok(K::FalseKeyword)],
                vec![Tok(K::NullKeyword)],
                vec![Rule(RuleId::CallExpr)],
                vec![Rule(RuleId::VariableRead)],
            ],
        );
        define(
            RuleId::CallExpr,
            vec![vec![
                Tok(K::Identifier),
                Tok(K::LeftParen),
                Opt(vec![Rule(RuleId::ArgList)]),
                Tok(K::RightParen),
            ]],
        );
        define(
            RuleId::ArgList,
            vec![vec![
                Rule(RuleId::Argument),
                Star(vec![Tok(K::Comma), Rule(RuleId::Argument)]),
            ]],
        );
        define(RuleId::Argument, vec![vec![Rule(RuleId::Expression)]]);
        define(RuleId::VariableRead, vec![vec![Tok(K::Identifier)]]);

        Grammar { rules }
    }
}
