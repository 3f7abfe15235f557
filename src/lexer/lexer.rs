//! Лексический анализатор SQL для rustlex
//!
//! Проходит по оператору целиком: пропускает пробелы, комментарии и hint,
//! по текущему символу выбирает операцию сканера и сдвигает курсор на конец
//! полученного токена. Правила hint, комментариев `#`, переменных и строк `N'...'`
//! зависят от диалекта.

use crate::common::{Error, Result};
use crate::lexer::char_type;
use crate::lexer::dialect::DatabaseType;
use crate::lexer::dictionary::{Dictionary, KeywordDictionary};
use crate::lexer::token::{Assist, Position, Token};
use crate::lexer::tokenizer::Tokenizer;

/// Лексический анализатор SQL
pub struct Lexer<'d> {
    /// Исходный текст
    input: Vec<char>,
    /// Словарь ключевых слов и символов
    dictionary: &'d dyn Dictionary,
    /// Диалект
    database_type: DatabaseType,
    /// Текущая позиция в тексте
    offset: usize,
    /// Начало текущего токена
    token_start: usize,
    /// Последний прочитанный токен
    current_token: Option<Token>,
}

impl Lexer<'static> {
    /// Создает лексер со словарем диалекта
    pub fn new(input: &str, database_type: DatabaseType) -> Self {
        Self::with_dictionary(
            input,
            database_type,
            KeywordDictionary::for_database(database_type),
        )
    }
}

impl<'d> Lexer<'d> {
    /// Создает лексер с собственным словарем
    pub fn with_dictionary(
        input: &str,
        database_type: DatabaseType,
        dictionary: &'d dyn Dictionary,
    ) -> Self {
        Self {
            input: input.chars().collect(),
            dictionary,
            database_type,
            offset: 0,
            token_start: 0,
            current_token: None,
        }
    }

    pub fn input(&self) -> &[char] {
        &self.input
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    pub fn dictionary(&self) -> &'d dyn Dictionary {
        self.dictionary
    }

    /// Позиция, с которой начнется следующий токен (до пропуска пробелов)
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Начало текущего токена, после пропущенных пробелов и комментариев
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// Читает следующий токен.
    ///
    /// В конце входа возвращает токен `Assist::End` с пустым текстом, в том числе
    /// при повторных вызовах.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_ignored_token().inspect_err(|e| {
            log::debug!("{} lexing failed at {}: {}", self.database_type, self.offset, e)
        })?;
        self.token_start = self.offset;
        let token = self.scan_token().inspect_err(|e| {
            log::debug!("{} lexing failed at {}: {}", self.database_type, self.offset, e)
        })?;
        log::trace!("{} token {}", self.database_type, token);
        self.offset = token.end_offset;
        self.current_token = Some(token.clone());
        Ok(token)
    }

    /// Возвращает все токены входа без завершающего `Assist::End`
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.token_type.is_end() {
                break;
            }
            tokens.push(token);
        }
        log::debug!(
            "{} statement of {} chars split into {} tokens",
            self.database_type,
            self.input.len(),
            tokens.len()
        );
        Ok(tokens)
    }

    fn skip_ignored_token(&mut self) -> Result<()> {
        self.offset = self.tokenizer(self.offset).skip_whitespace();
        loop {
            if self.is_hint_begin() {
                self.offset = self.tokenizer(self.offset).skip_hint()?;
            } else if self.is_comment_begin() {
                self.offset = self.tokenizer(self.offset).skip_comment()?;
            } else {
                return Ok(());
            }
            self.offset = self.tokenizer(self.offset).skip_whitespace();
        }
    }

    fn scan_token(&self) -> Result<Token> {
        let tokenizer = self.tokenizer(self.offset);
        if self.is_variable_begin() {
            Ok(tokenizer.scan_variable())
        } else if self.is_nchar_begin() {
            self.tokenizer(self.offset + 1).scan_chars()
        } else if self.is_identifier_begin() {
            tokenizer.scan_identifier()
        } else if self.is_hex_decimal_begin() {
            Ok(tokenizer.scan_hex_decimal())
        } else if self.is_number_begin() {
            Ok(tokenizer.scan_number())
        } else if self.is_symbol_begin() {
            Ok(tokenizer.scan_symbol())
        } else if self.is_chars_begin() {
            tokenizer.scan_chars()
        } else if self.is_end() {
            Ok(Token::new(Assist::End, "", self.offset))
        } else {
            let position = Position::of(&self.input, self.offset);
            let ch = self.current_char(0).unwrap_or_default();
            Err(Error::unexpected_char(ch, position.line, position.column))
        }
    }

    fn tokenizer(&self, offset: usize) -> Tokenizer<'_, dyn Dictionary + 'd> {
        Tokenizer::new(&self.input, self.dictionary, offset)
    }

    fn is_hint_begin(&self) -> bool {
        match self.database_type.hint_marker() {
            Some(marker) => {
                self.current_char(0) == Some('/')
                    && self.current_char(1) == Some('*')
                    && self.current_char(2) == Some(marker)
            }
            None => false,
        }
    }

    fn is_comment_begin(&self) -> bool {
        let current = self.current_char(0);
        let next = self.current_char(1);
        (self.database_type.supports_hash_comment() && current == Some('#'))
            || matches!(
                (current, next),
                (Some('/'), Some('/')) | (Some('-'), Some('-')) | (Some('/'), Some('*'))
            )
    }

    fn is_variable_begin(&self) -> bool {
        self.database_type.supports_variables() && self.current_char(0) == Some('@')
    }

    fn is_nchar_begin(&self) -> bool {
        self.database_type.supports_nchars()
            && self.current_char(0) == Some('N')
            && self.current_char(1) == Some('\'')
    }

    fn is_identifier_begin(&self) -> bool {
        is_identifier_begin(self.current_char(0))
    }

    fn is_hex_decimal_begin(&self) -> bool {
        self.current_char(0) == Some('0') && self.current_char(1) == Some('x')
    }

    // `.5` число, только если точка не продолжает имя (`t.col`)
    fn is_number_begin(&self) -> bool {
        let current = self.current_char(0);
        let next = self.current_char(1);
        char_type::is_digit(current)
            || (current == Some('.')
                && char_type::is_digit(next)
                && !is_identifier_begin(self.previous_char()))
            || (current == Some('-') && (next == Some('.') || char_type::is_digit(next)))
    }

    fn is_symbol_begin(&self) -> bool {
        char_type::is_symbol(self.current_char(0))
    }

    fn is_chars_begin(&self) -> bool {
        matches!(self.current_char(0), Some('\'' | '"'))
    }

    fn is_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    fn current_char(&self, ahead: usize) -> Option<char> {
        self.input.get(self.offset + ahead).copied()
    }

    fn previous_char(&self) -> Option<char> {
        self.offset
            .checked_sub(1)
            .and_then(|index| self.input.get(index).copied())
    }
}

fn is_identifier_begin(ch: Option<char>) -> bool {
    char_type::is_alphabet(ch) || matches!(ch, Some('`' | '_' | '$'))
}
