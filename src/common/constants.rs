//! Константы для rustlex

/// Переменная окружения с типом базы данных
pub const ENV_DATABASE_TYPE: &str = "RUSTLEX_DATABASE_TYPE";

/// Переменная окружения с уровнем логирования
pub const ENV_LOG_LEVEL: &str = "RUSTLEX_LOG_LEVEL";

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Допустимые уровни логирования
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
