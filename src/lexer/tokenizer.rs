//! Сканер токенов
//!
//! `Tokenizer` создается заново для каждой позиции и ничего не меняет: каждая
//! операция по входу, словарю и смещению определяет, сколько символов занимает
//! следующая лексема и какого она типа. Повторный вызов с теми же аргументами дает
//! тот же результат, поэтому один вход можно сканировать из нескольких потоков.
//!
//! Чтение за пределами входа возвращает `char_type::EOI`, так что все циклы
//! проверяют границу и класс символа одним условием.

use crate::common::{Error, Result};
use crate::lexer::char_type;
use crate::lexer::dictionary::Dictionary;
use crate::lexer::keyword::Keyword;
use crate::lexer::token::{Literals, Token, TokenType};

/// Длина маркера `#`
const MYSQL_SPECIAL_COMMENT_BEGIN_SYMBOL_LENGTH: usize = 1;
/// Длина маркеров `//`, `--` и `/*`
const COMMENT_BEGIN_SYMBOL_LENGTH: usize = 2;
/// Длина маркеров hint `/*!` и `/*+`
const HINT_BEGIN_SYMBOL_LENGTH: usize = 3;
/// Длина маркера `*/`
const COMMENT_AND_HINT_END_SYMBOL_LENGTH: usize = 2;
/// Длина префикса `0x`
const HEX_BEGIN_SYMBOL_LENGTH: usize = 2;

const COMMENT_AND_HINT_END_SYMBOL: &str = "*/";

/// Сканер, привязанный к позиции во входе
pub struct Tokenizer<'a, D: Dictionary + ?Sized> {
    input: &'a [char],
    dictionary: &'a D,
    offset: usize,
}

impl<D: Dictionary + ?Sized> Clone for Tokenizer<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dictionary + ?Sized> Copy for Tokenizer<'_, D> {}

impl<'a, D: Dictionary + ?Sized> Tokenizer<'a, D> {
    pub fn new(input: &'a [char], dictionary: &'a D, offset: usize) -> Self {
        Self {
            input,
            dictionary,
            offset,
        }
    }

    /// Пропускает пробельные символы, возвращает смещение за ними
    pub fn skip_whitespace(&self) -> usize {
        let mut length = 0;
        while char_type::is_whitespace(self.char_at(self.offset + length)) {
            length += 1;
        }
        self.offset + length
    }

    /// Пропускает комментарий.
    ///
    /// Возвращает исходное смещение, если здесь не начинается комментарий.
    pub fn skip_comment(&self) -> Result<usize> {
        let current = self.char_at(self.offset);
        let next = self.char_at(self.offset + 1);
        if is_single_line_comment_begin(current, next) {
            Ok(self.skip_single_line_comment(COMMENT_BEGIN_SYMBOL_LENGTH))
        } else if current == Some('#') {
            Ok(self.skip_single_line_comment(
                MYSQL_SPECIAL_COMMENT_BEGIN_SYMBOL_LENGTH,
            ))
        } else if is_multiple_line_comment_begin(current, next) {
            self.until_comment_and_hint_terminate_sign(COMMENT_BEGIN_SYMBOL_LENGTH)
        } else {
            Ok(self.offset)
        }
    }

    /// Пропускает hint вместе с маркерами
    pub fn skip_hint(&self) -> Result<usize> {
        self.until_comment_and_hint_terminate_sign(HINT_BEGIN_SYMBOL_LENGTH)
    }

    // Перевод строки входит в комментарий; у комментария в конце входа
    // результат на единицу больше длины входа.
    fn skip_single_line_comment(&self, comment_symbol_length: usize) -> usize {
        let mut length = comment_symbol_length;
        loop {
            let ch = self.char_at(self.offset + length);
            if char_type::is_end_of_input(ch) || ch == Some('\n') {
                break;
            }
            length += 1;
        }
        self.offset + length + 1
    }

    fn until_comment_and_hint_terminate_sign(&self, begin_symbol_length: usize) -> Result<usize> {
        let mut length = begin_symbol_length;
        while !self.is_multiple_line_comment_end(self.offset + length) {
            if char_type::is_end_of_input(self.char_at(self.offset + length)) {
                return Err(Error::unterminated_block(COMMENT_AND_HINT_END_SYMBOL));
            }
            length += 1;
        }
        Ok(self.offset + length + COMMENT_AND_HINT_END_SYMBOL_LENGTH)
    }

    fn is_multiple_line_comment_end(&self, index: usize) -> bool {
        self.char_at(index) == Some('*') && self.char_at(index + 1) == Some('/')
    }

    /// Сканирует переменную: `@x` (пользовательская) или `@@x` (системная)
    pub fn scan_variable(&self) -> Token {
        let mut length = 1;
        if self.char_at(self.offset + 1) == Some('@') {
            length += 1;
        }
        while is_variable_char(self.char_at(self.offset + length)) {
            length += 1;
        }
        let end = self.offset + length;
        Token::new(Literals::Variable, self.literals(self.offset, end), end)
    }

    /// Сканирует идентификатор или ключевое слово
    pub fn scan_identifier(&self) -> Result<Token> {
        if self.char_at(self.offset) == Some('`') {
            let length = self.length_until_terminated_char('`')?;
            let end = self.offset + length;
            return Ok(Token::new(
                Literals::Identifier,
                self.literals(self.offset, end),
                end,
            ));
        }
        let mut length = 0;
        while is_identifier_char(self.char_at(self.offset + length)) {
            length += 1;
        }
        let end = self.offset + length;
        let literals = self.literals(self.offset, end);
        let token_type = if is_ambiguous_identifier(&literals) {
            self.process_ambiguous_identifier(end, &literals)
        } else {
            self.dictionary
                .find_token_type(&literals, Literals::Identifier.into())
        };
        Ok(Token::new(token_type, literals, end))
    }

    // ORDER и GROUP становятся ключевыми словами только перед BY.
    // Просмотр вперед не сдвигает конец токена.
    fn process_ambiguous_identifier(&self, offset: usize, literals: &str) -> TokenType {
        let mut i = 0;
        while char_type::is_whitespace(self.char_at(offset + i)) {
            i += 1;
        }
        let follows_by = match (self.char_at(offset + i), self.char_at(offset + i + 1)) {
            (Some(first), Some(second)) => {
                let pair: String = [first, second].iter().collect();
                pair.eq_ignore_ascii_case(Keyword::By.literals())
            }
            _ => false,
        };
        if follows_by {
            self.dictionary
                .find_token_type(literals, Literals::Identifier.into())
        } else {
            Literals::Identifier.into()
        }
    }

    /// Сканирует шестнадцатеричное число после префикса `0x`.
    ///
    /// Пустое тело после префикса не считается ошибкой.
    pub fn scan_hex_decimal(&self) -> Token {
        let mut length = HEX_BEGIN_SYMBOL_LENGTH;
        if self.char_at(self.offset + length) == Some('-') {
            length += 1;
        }
        while is_hex(self.char_at(self.offset + length)) {
            length += 1;
        }
        let end = self.offset + length;
        Token::new(Literals::Hex, self.literals(self.offset, end), end)
    }

    /// Сканирует число: целое, дробное, в научной нотации, с суффиксом `f`/`d`
    pub fn scan_number(&self) -> Token {
        let mut length = 0;
        if self.char_at(self.offset + length) == Some('-') {
            length += 1;
        }
        length += self.digital_length(self.offset + length);
        let mut is_float = false;
        if self.char_at(self.offset + length) == Some('.') {
            is_float = true;
            length += 1;
            length += self.digital_length(self.offset + length);
        }
        if is_scientific_notation(self.char_at(self.offset + length)) {
            is_float = true;
            length += 1;
            if matches!(self.char_at(self.offset + length), Some('+' | '-')) {
                length += 1;
            }
            length += self.digital_length(self.offset + length);
        }
        if is_binary_number(self.char_at(self.offset + length)) {
            is_float = true;
            length += 1;
        }
        let end = self.offset + length;
        let literals = if is_float { Literals::Float } else { Literals::Int };
        Token::new(literals, self.literals(self.offset, end), end)
    }

    fn digital_length(&self, offset: usize) -> usize {
        let mut result = 0;
        while char_type::is_digit(self.char_at(offset + result)) {
            result += 1;
        }
        result
    }

    /// Сканирует строку в кавычках; кавычка берется из текущего символа.
    ///
    /// Текст токена не включает ограничивающие кавычки.
    pub fn scan_chars(&self) -> Result<Token> {
        let terminated_char = self
            .char_at(self.offset)
            .ok_or_else(|| Error::unexpected_end(self.offset))?;
        let length = self.length_until_terminated_char(terminated_char)?;
        let end = self.offset + length;
        Ok(Token::new(
            Literals::Chars,
            self.literals(self.offset + 1, end - 1),
            end,
        ))
    }

    // Две кавычки подряд внутри литерала обозначают одну кавычку.
    // Возвращает длину вместе с обеими ограничивающими кавычками.
    fn length_until_terminated_char(&self, terminated_char: char) -> Result<usize> {
        let mut length = 1;
        while self.char_at(self.offset + length) != Some(terminated_char)
            || self.has_escape_char(terminated_char, self.offset + length)
        {
            if char_type::is_end_of_input(self.char_at(self.offset + length)) {
                return Err(Error::unterminated_literal(terminated_char));
            }
            if self.has_escape_char(terminated_char, self.offset + length) {
                length += 1;
            }
            length += 1;
        }
        Ok(length + 1)
    }

    fn has_escape_char(&self, terminated_char: char, offset: usize) -> bool {
        self.char_at(offset) == Some(terminated_char)
            && self.char_at(offset + 1) == Some(terminated_char)
    }

    /// Сканирует оператор или разделитель.
    ///
    /// Берется самый длинный известный словарю префикс серии символов: `;;` дает
    /// `;`, а `<=` не распадается на `<` и `=`.
    ///
    /// # Panics
    ///
    /// Если словарь не знает ни одного префикса, даже односимвольного.
    pub fn scan_symbol(&self) -> Token {
        let mut length = 0;
        while char_type::is_symbol(self.char_at(self.offset + length)) {
            length += 1;
        }
        let mut literals = self.literals(self.offset, self.offset + length);
        loop {
            assert!(
                length > 0,
                "symbol dictionary has no entry for {:?} at offset {}",
                self.char_at(self.offset),
                self.offset
            );
            if let Some(symbol) = self.dictionary.lookup_symbol(&literals) {
                return Token::new(symbol, literals, self.offset + length);
            }
            literals.pop();
            length -= 1;
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.input.get(index).copied()
    }

    fn literals(&self, from: usize, to: usize) -> String {
        let len = self.input.len();
        self.input[from.min(len)..to.min(len)].iter().collect()
    }
}

fn is_single_line_comment_begin(ch: Option<char>, next: Option<char>) -> bool {
    matches!((ch, next), (Some('/'), Some('/')) | (Some('-'), Some('-')))
}

fn is_multiple_line_comment_begin(ch: Option<char>, next: Option<char>) -> bool {
    ch == Some('/') && next == Some('*')
}

fn is_identifier_char(ch: Option<char>) -> bool {
    char_type::is_alphabet(ch) || char_type::is_digit(ch) || matches!(ch, Some('_' | '$' | '#'))
}

fn is_variable_char(ch: Option<char>) -> bool {
    is_identifier_char(ch) || ch == Some('.')
}

fn is_ambiguous_identifier(literals: &str) -> bool {
    literals.eq_ignore_ascii_case(Keyword::Order.literals())
        || literals.eq_ignore_ascii_case(Keyword::Group.literals())
}

fn is_hex(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_hexdigit())
}

fn is_scientific_notation(ch: Option<char>) -> bool {
    matches!(ch, Some('e' | 'E'))
}

fn is_binary_number(ch: Option<char>) -> bool {
    matches!(ch, Some('f' | 'F' | 'd' | 'D'))
}
