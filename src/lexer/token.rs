//! Токены для SQL лексера rustlex
//!
//! Токен хранит тип, точный текст и смещение, с которого продолжается разбор.

use crate::lexer::keyword::Keyword;
use crate::lexer::symbol::Symbol;
use serde::Serialize;
use std::fmt;

/// Позиция символа в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Вычисляет строку и колонку для смещения во входе
    pub fn of(input: &[char], offset: usize) -> Self {
        let mut position = Self::start();
        for &ch in input.iter().take(offset) {
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }
        position.offset = offset;
        position
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Литеральные типы токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Literals {
    /// Целое число
    Int,
    /// Число с плавающей точкой
    Float,
    /// Шестнадцатеричное число
    Hex,
    /// Строка в кавычках
    Chars,
    /// Идентификатор
    Identifier,
    /// Пользовательская или системная переменная
    Variable,
}

/// Служебные типы токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Assist {
    /// Конец входа
    End,
}

/// Тип токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    Keyword(Keyword),
    Literals(Literals),
    Symbol(Symbol),
    Assist(Assist),
}

impl TokenType {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenType::Keyword(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenType::Literals(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, TokenType::Symbol(_))
    }

    pub fn is_end(&self) -> bool {
        *self == TokenType::Assist(Assist::End)
    }
}

impl From<Keyword> for TokenType {
    fn from(keyword: Keyword) -> Self {
        TokenType::Keyword(keyword)
    }
}

impl From<Literals> for TokenType {
    fn from(literals: Literals) -> Self {
        TokenType::Literals(literals)
    }
}

impl From<Symbol> for TokenType {
    fn from(symbol: Symbol) -> Self {
        TokenType::Symbol(symbol)
    }
}

impl From<Assist> for TokenType {
    fn from(assist: Assist) -> Self {
        TokenType::Assist(assist)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Keyword(keyword) => write!(f, "{}", keyword),
            TokenType::Literals(literals) => write!(f, "{:?}", literals),
            TokenType::Symbol(symbol) => write!(f, "{}", symbol),
            TokenType::Assist(assist) => write!(f, "{:?}", assist),
        }
    }
}

/// Токен: тип, поглощенный текст и смещение сразу за ним
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub end_offset: usize,
}

impl Token {
    pub fn new(token_type: impl Into<TokenType>, value: impl Into<String>, end_offset: usize) -> Self {
        Self {
            token_type: token_type.into(),
            value: value.into(),
            end_offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') until {}", self.token_type, self.value, self.end_offset)
    }
}
