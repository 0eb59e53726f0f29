//! Terminal symbol kinds.
//!
//! `SyntaxKind` is the stable, enumerable identifier space for terminals.
//! The completion layer builds its ignored-token set from the category
//! predicates below and maps candidates back to text via `display_text`.

use serde::{Deserialize, Serialize};

/// Every terminal the scanner can produce.
///
/// Grouped: punctuation/operators first, then literals, trivia, keywords,
/// and identifiers. `Unknown` stands in for characters the scanner cannot
/// classify; `EndOfFile` terminates every token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFile,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    Semicolon,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Equals,
    EqualsEquals,
    BangEquals,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    AmpersandAmpersand,
    BarBar,
    PlusPlus,
    MinusMinus,
    /// `!in` - negated membership test. The one operator worth suggesting,
    /// rendered with its literal spelling rather than a symbolic name.
    NotIn,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,

    // Trivia (skipped by the scanner, never part of the parser stream)
    LineComment,
    BlockComment,

    // Keywords
    FunKeyword,
    ValKeyword,
    VarKeyword,
    IfKeyword,
    ElseKeyword,
    ForKeyword,
    WhileKeyword,
    InKeyword,
    TryKeyword,
    CatchKeyword,
    FinallyKeyword,
    ReturnKeyword,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,

    Identifier,
}

impl SyntaxKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunKeyword
                | SyntaxKind::ValKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::IfKeyword
                | SyntaxKind::ElseKeyword
                | SyntaxKind::ForKeyword
                | SyntaxKind::WhileKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::TryKeyword
                | SyntaxKind::CatchKeyword
                | SyntaxKind::FinallyKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::IntegerLiteral | SyntaxKind::FloatLiteral | SyntaxKind::StringLiteral
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::LineComment | SyntaxKind::BlockComment)
    }

    /// Punctuation and operator terminals, `NotIn` included.
    pub fn is_punctuation(self) -> bool {
        (SyntaxKind::LeftParen as u16..=SyntaxKind::NotIn as u16).contains(&(self as u16))
    }

    /// The canonical source spelling of a terminal, used to turn a syntactic
    /// candidate into a suggestion. Terminals whose text is not fixed
    /// (identifiers, literals) have no display and are skipped by callers.
    pub fn display_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::LeftParen => "(",
            SyntaxKind::RightParen => ")",
            SyntaxKind::LeftBrace => "{",
            SyntaxKind::RightBrace => "}",
            SyntaxKind::Comma => ",",
            SyntaxKind::Colon => ":",
            SyntaxKind::Semicolon => ";",
            SyntaxKind::Plus => "+",
            SyntaxKind::Minus => "-",
            SyntaxKind::Star => "*",
            SyntaxKind::Slash => "/",
            SyntaxKind::Bang => "!",
            SyntaxKind::Equals => "=",
            SyntaxKind::EqualsEquals => "==",
            SyntaxKind::BangEquals => "!=",
            SyntaxKind::LessThan => "<",
            SyntaxKind::GreaterThan => ">",
            SyntaxKind::LessThanEquals => "<=",
            SyntaxKind::GreaterThanEquals => ">=",
            SyntaxKind::AmpersandAmpersand => "&&",
            SyntaxKind::BarBar => "||",
            SyntaxKind::PlusPlus => "++",
            SyntaxKind::MinusMinus => "--",
            SyntaxKind::NotIn => "!in",
            SyntaxKind::FunKeyword => "fun",
            SyntaxKind::ValKeyword => "val",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::WhileKeyword => "while",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::TryKeyword => "try",
            SyntaxKind::CatchKeyword => "catch",
            SyntaxKind::FinallyKeyword => "finally",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::NullKeyword => "null",
            _ => return None,
        };
        Some(text)
    }

    /// Map an identifier-shaped word to its keyword kind, if it is one.
    pub fn keyword_kind(word: &str) -> Option<SyntaxKind> {
        let kind = match word {
            "fun" => SyntaxKind::FunKeyword,
            "val" => SyntaxKind::ValKeyword,
            "var" => SyntaxKind::VarKeyword,
            "if" => SyntaxKind::IfKeyword,
            "else" => SyntaxKind::ElseKeyword,
            "for" => SyntaxKind::ForKeyword,
            "while" => SyntaxKind::WhileKeyword,
            "in" => SyntaxKind::InKeyword,
            "try" => SyntaxKind::TryKeyword,
            "catch" => SyntaxKind::CatchKeyword,
            "finally" => SyntaxKind::FinallyKeyword,
            "return" => SyntaxKind::ReturnKeyword,
            "true" => SyntaxKind::TrueKeyword,
            "false" => SyntaxKind::FalseKeyword,
            "null" => SyntaxKind::NullKeyword,
            _ => return None,
        };
        Some(kind)
    }
}
