//! rustlex - лексический анализатор SQL на Rust
//!
//! Разбивает SQL оператор на классифицированные токены (ключевые слова,
//! идентификаторы, литералы, символы, переменные) для парсера в промежуточном
//! слое маршрутизации запросов к базам данных.

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::error::{Error, Result};
pub use lexer::{DatabaseType, Dictionary, KeywordDictionary, Lexer, Token, TokenType, Tokenizer};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
