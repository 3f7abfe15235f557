//! Лексический анализ SQL для rustlex

pub mod char_type;
pub mod dialect;
pub mod dictionary;
pub mod keyword;
pub mod lexer;
pub mod symbol;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use dialect::DatabaseType;
pub use dictionary::{Dictionary, KeywordDictionary};
pub use keyword::Keyword;
pub use lexer::Lexer;
pub use symbol::Symbol;
pub use token::{Assist, Literals, Position, Token, TokenType};
pub use tokenizer::Tokenizer;
