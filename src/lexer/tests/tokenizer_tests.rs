//! Тесты для сканера токенов

use super::chars;
use crate::common::Error;
use crate::lexer::{
    DatabaseType, Dictionary, Keyword, KeywordDictionary, Literals, Symbol, TokenType, Tokenizer,
};

fn mysql() -> &'static KeywordDictionary {
    KeywordDictionary::for_database(DatabaseType::MySql)
}

fn tokenizer(input: &[char], offset: usize) -> Tokenizer<'_, KeywordDictionary> {
    Tokenizer::new(input, mysql(), offset)
}

/// Словарь, в котором есть только `;`
struct SemicolonOnly;

impl Dictionary for SemicolonOnly {
    fn lookup_keyword(&self, _literals: &str) -> Option<Keyword> {
        None
    }

    fn lookup_symbol(&self, literals: &str) -> Option<Symbol> {
        (literals == ";").then_some(Symbol::Semi)
    }
}

// === Пробелы ===

#[test]
fn test_skip_whitespace() {
    let input = chars(" \t\r\n ");
    assert_eq!(tokenizer(&input, 0).skip_whitespace(), 5);

    let input = chars("a  b");
    assert_eq!(tokenizer(&input, 0).skip_whitespace(), 0);
    assert_eq!(tokenizer(&input, 1).skip_whitespace(), 3);
}

#[test]
fn test_skip_whitespace_past_end() {
    let input = chars("ab");
    assert_eq!(tokenizer(&input, 2).skip_whitespace(), 2);
    assert_eq!(tokenizer(&input, 10).skip_whitespace(), 10);
}

// === Комментарии и hint ===

#[test]
fn test_skip_single_line_comment() {
    let input = chars("-- abc\ndef");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 7);

    let input = chars("// abc\ndef");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 7);

    let input = chars("a -- c\nb");
    assert_eq!(tokenizer(&input, 2).skip_comment().unwrap(), 7);
}

#[test]
fn test_skip_single_line_comment_at_end_of_input() {
    let input = chars("-- tail");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 8);
}

#[test]
fn test_skip_hash_comment() {
    let input = chars("# x\ny");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 4);
}

#[test]
fn test_skip_comment_not_a_comment() {
    let input = chars("abc");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 0);

    let input = chars("- 1");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 0);

    let input = chars("/ 2");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 0);
}

#[test]
fn test_skip_multi_line_comment() {
    let input = chars("/* abc */rest");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 9);

    let input = chars("/**/x");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), 4);

    let input = chars("/* line 1\n * line 2\n */x");
    assert_eq!(tokenizer(&input, 0).skip_comment().unwrap(), input.len() - 1);
}

#[test]
fn test_unterminated_multi_line_comment() {
    let input = chars("/* abc");
    let result = tokenizer(&input, 0).skip_comment();
    assert!(matches!(result, Err(Error::UnterminatedBlock { expected: "*/" })));

    // `*/` не может переиспользовать `*` из маркера начала
    let input = chars("/*/");
    assert!(tokenizer(&input, 0).skip_comment().is_err());
}

#[test]
fn test_skip_hint() {
    let input = chars("/*! hint */x");
    assert_eq!(tokenizer(&input, 0).skip_hint().unwrap(), 11);

    let input = chars("/*!*/");
    assert_eq!(tokenizer(&input, 0).skip_hint().unwrap(), 5);
}

#[test]
fn test_unterminated_hint() {
    let input = chars("/*+ INDEX(t)");
    let result = tokenizer(&input, 0).skip_hint();
    assert!(matches!(result, Err(Error::UnterminatedBlock { expected: "*/" })));
}

// === Идентификаторы ===

#[test]
fn test_scan_identifier() {
    let input = chars("user_name, x");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
    assert_eq!(token.value, "user_name");
    assert_eq!(token.end_offset, 9);

    let input = chars("a$b#c1+");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.value, "a$b#c1");
    assert_eq!(token.end_offset, 6);
}

#[test]
fn test_scan_keyword_case_insensitive() {
    for sql in ["SELECT", "select", "SeLeCt"] {
        let input = chars(sql);
        let token = tokenizer(&input, 0).scan_identifier().unwrap();
        assert_eq!(token.token_type, TokenType::Keyword(Keyword::Select));
        assert_eq!(token.value, sql);
    }

    let input = chars("select_1");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
}

#[test]
fn test_scan_dialect_keyword() {
    let input = chars("limit");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Keyword(Keyword::Limit));

    let oracle = KeywordDictionary::for_database(DatabaseType::Oracle);
    let token = Tokenizer::new(&input, oracle, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
}

#[test]
fn test_scan_backtick_identifier() {
    let input = chars("`a``b` x");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
    assert_eq!(token.value, "`a``b`");
    assert_eq!(token.end_offset, 6);

    let input = chars("`select`");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
    assert_eq!(token.value, "`select`");
}

#[test]
fn test_unterminated_backtick_identifier() {
    for sql in ["`abc", "`a``"] {
        let input = chars(sql);
        let result = tokenizer(&input, 0).scan_identifier();
        assert!(
            matches!(result, Err(Error::UnterminatedLiteral { terminator: '`' })),
            "{}",
            sql
        );
    }
}

#[test]
fn test_ambiguous_identifier_followed_by_by() {
    let input = chars("order by x");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Keyword(Keyword::Order));
    assert_eq!(token.value, "order");
    assert_eq!(token.end_offset, 5);

    let input = chars("GROUP\n\tBy id");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Keyword(Keyword::Group));
    assert_eq!(token.end_offset, 5);
}

#[test]
fn test_ambiguous_identifier_as_plain_identifier() {
    for sql in ["order = 1", "group", "order, b", "group b"] {
        let input = chars(sql);
        let token = tokenizer(&input, 0).scan_identifier().unwrap();
        assert_eq!(
            token.token_type,
            TokenType::Literals(Literals::Identifier),
            "{}",
            sql
        );
    }
}

#[test]
fn test_ambiguous_identifier_peeks_two_chars_only() {
    let input = chars("order byte");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Keyword(Keyword::Order));

    let input = chars("orders by");
    let token = tokenizer(&input, 0).scan_identifier().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
}

#[test]
fn test_ambiguous_identifier_unknown_to_dictionary() {
    let input = chars("order by x");
    let token = Tokenizer::new(&input, &SemicolonOnly, 0)
        .scan_identifier()
        .unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Identifier));
}

// === Переменные ===

#[test]
fn test_scan_variable() {
    let input = chars("@@session.autocommit = 1");
    let token = tokenizer(&input, 0).scan_variable();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Variable));
    assert_eq!(token.value, "@@session.autocommit");
    assert_eq!(token.end_offset, 20);

    let input = chars("@name,");
    let token = tokenizer(&input, 0).scan_variable();
    assert_eq!(token.value, "@name");
    assert_eq!(token.end_offset, 5);
}

// === Числа ===

#[test]
fn test_scan_hex_decimal() {
    let input = chars("0x1aF g");
    let token = tokenizer(&input, 0).scan_hex_decimal();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Hex));
    assert_eq!(token.value, "0x1aF");
    assert_eq!(token.end_offset, 5);

    let input = chars("0x-1f");
    let token = tokenizer(&input, 0).scan_hex_decimal();
    assert_eq!(token.value, "0x-1f");
}

#[test]
fn test_scan_hex_decimal_with_empty_body() {
    let input = chars("0x");
    let token = tokenizer(&input, 0).scan_hex_decimal();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Hex));
    assert_eq!(token.value, "0x");
    assert_eq!(token.end_offset, 2);
}

#[test]
fn test_scan_number_full_grammar() {
    let input = chars("-12.5e+3f rest");
    let token = tokenizer(&input, 0).scan_number();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Float));
    assert_eq!(token.value, "-12.5e+3f");
    assert_eq!(token.end_offset, 9);
    assert_eq!(input[token.end_offset], ' ');
}

#[test]
fn test_scan_integer() {
    let input = chars("123 ");
    let token = tokenizer(&input, 0).scan_number();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Int));
    assert_eq!(token.value, "123");
    assert_eq!(token.end_offset, 3);

    let input = chars("-7,");
    let token = tokenizer(&input, 0).scan_number();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Int));
    assert_eq!(token.value, "-7");
}

#[test]
fn test_scan_float_shapes() {
    let cases = [
        ("1.5", "1.5"),
        ("1e10", "1e10"),
        ("2.5E-3)", "2.5E-3"),
        ("7d", "7d"),
        ("3F;", "3F"),
        ("12.", "12."),
        (".5", ".5"),
        ("1.2.3", "1.2"),
    ];
    for (sql, expected) in cases {
        let input = chars(sql);
        let token = tokenizer(&input, 0).scan_number();
        assert_eq!(
            token.token_type,
            TokenType::Literals(Literals::Float),
            "{}",
            sql
        );
        assert_eq!(token.value, expected);
        assert_eq!(token.end_offset, expected.chars().count());
    }
}

#[test]
fn test_scan_number_bare_minus_is_accepted() {
    let input = chars("-");
    let token = tokenizer(&input, 0).scan_number();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Int));
    assert_eq!(token.value, "-");
    assert_eq!(token.end_offset, 1);
}

// === Строки ===

#[test]
fn test_scan_chars() {
    let input = chars("'abc' x");
    let token = tokenizer(&input, 0).scan_chars().unwrap();
    assert_eq!(token.token_type, TokenType::Literals(Literals::Chars));
    assert_eq!(token.value, "abc");
    assert_eq!(token.end_offset, 5);

    let input = chars("\"a b\"");
    let token = tokenizer(&input, 0).scan_chars().unwrap();
    assert_eq!(token.value, "a b");
    assert_eq!(token.end_offset, 5);
}

#[test]
fn test_scan_chars_doubling_escape() {
    let input = chars("'it''s' rest");
    let token = tokenizer(&input, 0).scan_chars().unwrap();
    assert_eq!(token.value, "it''s");
    assert_eq!(token.end_offset, 7);

    let input = chars("''''");
    let token = tokenizer(&input, 0).scan_chars().unwrap();
    assert_eq!(token.value, "''");
    assert_eq!(token.end_offset, 4);
}

#[test]
fn test_scan_empty_chars() {
    let input = chars("'' ,");
    let token = tokenizer(&input, 0).scan_chars().unwrap();
    assert_eq!(token.value, "");
    assert_eq!(token.end_offset, 2);
}

#[test]
fn test_scan_chars_keeps_other_quotes_and_unicode() {
    let input = chars("'say \"привет\"'");
    let token = tokenizer(&input, 0).scan_chars().unwrap();
    assert_eq!(token.value, "say \"привет\"");
    assert_eq!(token.end_offset, input.len());
}

#[test]
fn test_unterminated_chars() {
    for sql in ["'abc", "'''", "'a''"] {
        let input = chars(sql);
        let result = tokenizer(&input, 0).scan_chars();
        assert!(
            matches!(result, Err(Error::UnterminatedLiteral { terminator: '\'' })),
            "{}",
            sql
        );
    }
}

#[test]
fn test_scan_chars_past_end() {
    let input = chars("ab");
    let result = tokenizer(&input, 2).scan_chars();
    assert!(matches!(result, Err(Error::UnexpectedEnd { offset: 2 })));
}

// === Символы ===

#[test]
fn test_scan_symbol_longest_match() {
    let input = chars("<=");
    let token = tokenizer(&input, 0).scan_symbol();
    assert_eq!(token.token_type, TokenType::Symbol(Symbol::LtEq));
    assert_eq!(token.value, "<=");
    assert_eq!(token.end_offset, 2);

    let input = chars("<=>");
    let token = tokenizer(&input, 0).scan_symbol();
    assert_eq!(token.token_type, TokenType::Symbol(Symbol::LtEqGt));
}

#[test]
fn test_scan_symbol_backtracks() {
    let input = chars("<>=");
    let token = tokenizer(&input, 0).scan_symbol();
    assert_eq!(token.token_type, TokenType::Symbol(Symbol::LtGt));
    assert_eq!(token.end_offset, 2);

    let input = chars("(*)");
    let token = tokenizer(&input, 0).scan_symbol();
    assert_eq!(token.token_type, TokenType::Symbol(Symbol::LeftParen));
    assert_eq!(token.end_offset, 1);
}

#[test]
fn test_scan_symbol_splits_semicolons() {
    let input = chars(";;");
    let first = Tokenizer::new(&input, &SemicolonOnly, 0).scan_symbol();
    assert_eq!(first.token_type, TokenType::Symbol(Symbol::Semi));
    assert_eq!(first.value, ";");
    assert_eq!(first.end_offset, 1);

    let second = Tokenizer::new(&input, &SemicolonOnly, first.end_offset).scan_symbol();
    assert_eq!(second.value, ";");
    assert_eq!(second.end_offset, 2);
}

#[test]
#[should_panic(expected = "symbol dictionary has no entry")]
fn test_scan_symbol_without_dictionary_entry() {
    let input = chars("+");
    Tokenizer::new(&input, &SemicolonOnly, 0).scan_symbol();
}

// === Общие свойства ===

#[test]
fn test_scans_always_make_progress() {
    let dictionary = mysql();
    let samples = [
        "select", "`a`", "order by", "@v", "@@v", "0x", "0xff", "1", "-", "-1.5e3d", ".5", "'x'",
        "\"\"", ";", "<=>", "(",
    ];
    for sample in samples {
        let input = chars(sample);
        let tokenizer = Tokenizer::new(&input, dictionary, 0);
        let first = input[0];
        let end = match first {
            '@' => tokenizer.scan_variable().end_offset,
            '\'' | '"' => tokenizer.scan_chars().unwrap().end_offset,
            '0' if input.get(1) == Some(&'x') => tokenizer.scan_hex_decimal().end_offset,
            '0'..='9' | '-' | '.' => tokenizer.scan_number().end_offset,
            'a'..='z' | '`' => tokenizer.scan_identifier().unwrap().end_offset,
            _ => tokenizer.scan_symbol().end_offset,
        };
        assert!(end > 0, "{} made no progress", sample);
    }
}

#[test]
fn test_scans_are_idempotent_and_thread_safe() {
    let input = chars("SELECT `a``b`, 'x''y', -1.5e3 FROM t ORDER BY 1");
    let dictionary = mysql();
    let expected = Tokenizer::new(&input, dictionary, 7).scan_identifier().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let input = &input;
                scope.spawn(move || Tokenizer::new(input, dictionary, 7).scan_identifier().unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    assert_eq!(expected.value, "`a``b`");
}
