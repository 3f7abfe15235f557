//! Конфигурация для rustlex
//!
//! Конфигурация читается из TOML файла и переменных окружения; значения из
//! окружения накладываются поверх файла через `merge`.

use crate::common::constants::{DEFAULT_LOG_LEVEL, ENV_DATABASE_TYPE, ENV_LOG_LEVEL, LOG_LEVELS};
use crate::common::{Error, Result};
use crate::lexer::DatabaseType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Основная конфигурация лексера
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Диалект SQL
    pub database_type: DatabaseType,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config {}: {}", path.display(), e))
        })
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Накладывает переопределения; заданные значения заменяют текущие
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(database_type) = overrides.database_type {
            self.database_type = database_type;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Переопределения конфигурации из окружения или командной строки.
///
/// `None` оставляет значение из файла без изменений.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub database_type: Option<DatabaseType>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Читает переопределения из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Читает переопределения из произвольного источника переменных
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_type = lookup(ENV_DATABASE_TYPE)
            .map(|value| value.parse::<DatabaseType>())
            .transpose()?;
        Ok(Self {
            database_type,
            log_level: lookup(ENV_LOG_LEVEL),
        })
    }
}
