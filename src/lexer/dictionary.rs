//! Словарь ключевых слов и символов
//!
//! Сканер не знает конкретных таблиц: он получает словарь через трейт `Dictionary`,
//! поэтому другой диалект может подставить свой набор слов, не меняя сканер.

use crate::lexer::dialect::DatabaseType;
use crate::lexer::keyword::{Keyword, DEFAULT_KEYWORDS};
use crate::lexer::symbol::Symbol;
use crate::lexer::token::TokenType;
use std::collections::HashMap;

/// Поиск типа токена по тексту
pub trait Dictionary: Send + Sync {
    /// Ищет ключевое слово без учета регистра
    fn lookup_keyword(&self, literals: &str) -> Option<Keyword>;

    /// Ищет символ по точному тексту
    fn lookup_symbol(&self, literals: &str) -> Option<Symbol>;

    /// Тип токена для слова: ключевое слово или `default`
    fn find_token_type(&self, literals: &str, default: TokenType) -> TokenType {
        self.lookup_keyword(literals)
            .map(TokenType::Keyword)
            .unwrap_or(default)
    }
}

/// Табличный словарь: общие ключевые слова плюс слова диалекта
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    keywords: HashMap<&'static str, Keyword>,
}

impl KeywordDictionary {
    /// Собирает словарь из общих ключевых слов и слов диалекта
    pub fn new(dialect_keywords: &[Keyword]) -> Self {
        let keywords = DEFAULT_KEYWORDS
            .iter()
            .chain(dialect_keywords)
            .map(|keyword| (keyword.literals(), *keyword))
            .collect();
        Self { keywords }
    }

    /// Общий словарь для типа базы данных
    pub fn for_database(database_type: DatabaseType) -> &'static KeywordDictionary {
        match database_type {
            DatabaseType::MySql => &MYSQL_DICTIONARY,
            DatabaseType::Oracle => &ORACLE_DICTIONARY,
            DatabaseType::PostgreSql => &POSTGRESQL_DICTIONARY,
            DatabaseType::SqlServer => &SQLSERVER_DICTIONARY,
            DatabaseType::H2 => &H2_DICTIONARY,
        }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl Dictionary for KeywordDictionary {
    fn lookup_keyword(&self, literals: &str) -> Option<Keyword> {
        self.keywords
            .get(literals.to_ascii_uppercase().as_str())
            .copied()
    }

    fn lookup_symbol(&self, literals: &str) -> Option<Symbol> {
        Symbol::literals_of(literals)
    }
}

lazy_static::lazy_static! {
    static ref MYSQL_DICTIONARY: KeywordDictionary =
        KeywordDictionary::new(DatabaseType::MySql.keywords());
    static ref ORACLE_DICTIONARY: KeywordDictionary =
        KeywordDictionary::new(DatabaseType::Oracle.keywords());
    static ref POSTGRESQL_DICTIONARY: KeywordDictionary =
        KeywordDictionary::new(DatabaseType::PostgreSql.keywords());
    static ref SQLSERVER_DICTIONARY: KeywordDictionary =
        KeywordDictionary::new(DatabaseType::SqlServer.keywords());
    static ref H2_DICTIONARY: KeywordDictionary =
        KeywordDictionary::new(DatabaseType::H2.keywords());
}
