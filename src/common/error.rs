//! Обработка ошибок для rustlex

use thiserror::Error;

/// Основной тип ошибки для rustlex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Многострочный комментарий или hint не закрыт до конца входа
    #[error("Illegal expression: unterminated block, expected '{expected}'")]
    UnterminatedBlock { expected: &'static str },

    /// Строковый литерал или идентификатор в кавычках не закрыт до конца входа
    #[error("Illegal input, unterminated '{terminator}'")]
    UnterminatedLiteral { terminator: char },

    /// Сканирование начато за концом входа
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// Символ, с которого не начинается ни один токен
    #[error("SQL syntax error: unexpected char '{ch}' at {line}:{column}")]
    UnexpectedChar {
        ch: char,
        line: usize,
        column: usize,
    },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для rustlex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку незакрытого блока
    pub fn unterminated_block(expected: &'static str) -> Self {
        Self::UnterminatedBlock { expected }
    }

    /// Создает ошибку незакрытого литерала
    pub fn unterminated_literal(terminator: char) -> Self {
        Self::UnterminatedLiteral { terminator }
    }

    /// Создает ошибку неожиданного конца входа
    pub fn unexpected_end(offset: usize) -> Self {
        Self::UnexpectedEnd { offset }
    }

    /// Создает ошибку неожиданного символа
    pub fn unexpected_char(ch: char, line: usize, column: usize) -> Self {
        Self::UnexpectedChar { ch, line, column }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Ошибка вызвана некорректным SQL, а не окружением
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedBlock { .. }
                | Error::UnterminatedLiteral { .. }
                | Error::UnexpectedEnd { .. }
                | Error::UnexpectedChar { .. }
        )
    }
}
