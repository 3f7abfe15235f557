//! Тесты для лексического анализатора rustlex

pub mod tokenizer_tests;

/// Переводит строку во вход сканера
pub fn chars(input: &str) -> Vec<char> {
    input.chars().collect()
}
