//! Классификация символов для лексического анализатора
//!
//! Все предикаты принимают результат чтения символа по смещению: `None`
//! означает выход за пределы входа и не совпадает ни с одним реальным символом.

/// Маркер конца входа
pub const EOI: Option<char> = None;

/// Пробельный символ: управляющие символы до U+0020 включительно и диапазон U+007F..=U+00A0
pub fn is_whitespace(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c <= '\u{20}' || ('\u{7F}'..='\u{A0}').contains(&c))
}

/// Конец входа
pub fn is_end_of_input(ch: Option<char>) -> bool {
    ch == EOI
}

/// Латинская буква
pub fn is_alphabet(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_alphabetic())
}

/// Десятичная цифра
pub fn is_digit(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_digit())
}

/// Символ, из которого может состоять оператор или разделитель
pub fn is_symbol(ch: Option<char>) -> bool {
    matches!(
        ch,
        Some(
            '(' | ')' | '[' | ']' | '{' | '}' | '+' | '-' | '*' | '/' | '%' | '^' | '=' | '>'
                | '<' | '~' | '!' | '?' | '&' | '|' | '.' | ':' | '#' | ',' | ';'
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for ch in [' ', '\t', '\n', '\r', '\u{0}', '\u{1A}', '\u{7F}', '\u{A0}'] {
            assert!(is_whitespace(Some(ch)), "{:?}", ch);
        }
        assert!(!is_whitespace(Some('a')));
        assert!(!is_whitespace(Some('\u{A1}')));
        assert!(!is_whitespace(EOI));
    }

    #[test]
    fn test_end_of_input_is_not_a_class_member() {
        assert!(is_end_of_input(EOI));
        assert!(!is_end_of_input(Some('\u{1A}')));
        assert!(!is_alphabet(EOI));
        assert!(!is_digit(EOI));
        assert!(!is_symbol(EOI));
    }

    #[test]
    fn test_alphabet_and_digit() {
        assert!(is_alphabet(Some('a')));
        assert!(is_alphabet(Some('Z')));
        assert!(!is_alphabet(Some('_')));
        assert!(!is_alphabet(Some('я')));
        assert!(is_digit(Some('0')));
        assert!(is_digit(Some('9')));
        assert!(!is_digit(Some('x')));
    }

    #[test]
    fn test_symbol() {
        for ch in "()[]{}+-*/%^=><~!?&|.:#,;".chars() {
            assert!(is_symbol(Some(ch)), "{:?}", ch);
        }
        for ch in ['@', '`', '\'', '"', '$', '_', 'a', '1'] {
            assert!(!is_symbol(Some(ch)), "{:?}", ch);
        }
    }
}
