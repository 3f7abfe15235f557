//! Операторы и разделители SQL

use serde::Serialize;
use std::fmt;

/// Символьный токен (оператор или разделитель)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Semi,         // ;
    Comma,        // ,
    Dot,          // .
    DoubleDot,    // ..
    Plus,         // +
    Sub,          // -
    Star,         // *
    Slash,        // /
    Question,     // ?
    Eq,           // =
    Gt,           // >
    Lt,           // <
    Bang,         // !
    Tilde,        // ~
    Caret,        // ^
    Percent,      // %
    Colon,        // :
    DoubleColon,  // ::
    ColonEq,      // :=
    LtEq,         // <=
    GtEq,         // >=
    LtEqGt,       // <=>
    LtGt,         // <>
    BangEq,       // !=
    BangGt,       // !>
    BangLt,       // !<
    Amp,          // &
    Bar,          // |
    DoubleAmp,    // &&
    DoubleBar,    // ||
    DoubleLt,     // <<
    DoubleGt,     // >>
    Pound,        // #
}

impl Symbol {
    /// Все символы таблицы по умолчанию
    pub const ALL: [Symbol; 39] = [
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBrace,
        Symbol::RightBrace,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::Semi,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::DoubleDot,
        Symbol::Plus,
        Symbol::Sub,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Question,
        Symbol::Eq,
        Symbol::Gt,
        Symbol::Lt,
        Symbol::Bang,
        Symbol::Tilde,
        Symbol::Caret,
        Symbol::Percent,
        Symbol::Colon,
        Symbol::DoubleColon,
        Symbol::ColonEq,
        Symbol::LtEq,
        Symbol::GtEq,
        Symbol::LtEqGt,
        Symbol::LtGt,
        Symbol::BangEq,
        Symbol::BangGt,
        Symbol::BangLt,
        Symbol::Amp,
        Symbol::Bar,
        Symbol::DoubleAmp,
        Symbol::DoubleBar,
        Symbol::DoubleLt,
        Symbol::DoubleGt,
        Symbol::Pound,
    ];

    /// Текст символа в SQL
    pub fn literals(&self) -> &'static str {
        match self {
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Semi => ";",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::DoubleDot => "..",
            Symbol::Plus => "+",
            Symbol::Sub => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Question => "?",
            Symbol::Eq => "=",
            Symbol::Gt => ">",
            Symbol::Lt => "<",
            Symbol::Bang => "!",
            Symbol::Tilde => "~",
            Symbol::Caret => "^",
            Symbol::Percent => "%",
            Symbol::Colon => ":",
            Symbol::DoubleColon => "::",
            Symbol::ColonEq => ":=",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::LtEqGt => "<=>",
            Symbol::LtGt => "<>",
            Symbol::BangEq => "!=",
            Symbol::BangGt => "!>",
            Symbol::BangLt => "!<",
            Symbol::Amp => "&",
            Symbol::Bar => "|",
            Symbol::DoubleAmp => "&&",
            Symbol::DoubleBar => "||",
            Symbol::DoubleLt => "<<",
            Symbol::DoubleGt => ">>",
            Symbol::Pound => "#",
        }
    }

    /// Ищет символ по его тексту
    pub fn literals_of(literals: &str) -> Option<Symbol> {
        Symbol::ALL
            .iter()
            .copied()
            .find(|symbol| symbol.literals() == literals)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literals())
    }
}
