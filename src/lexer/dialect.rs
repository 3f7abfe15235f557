//! Диалекты SQL, которые различает лексер

use crate::common::{Error, Result};
use crate::lexer::keyword::{
    Keyword, H2_KEYWORDS, MYSQL_KEYWORDS, ORACLE_KEYWORDS, POSTGRESQL_KEYWORDS,
    SQLSERVER_KEYWORDS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Тип базы данных, определяющий лексические правила
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseType {
    #[default]
    #[serde(rename = "mysql", alias = "MySQL")]
    MySql,
    #[serde(rename = "oracle", alias = "Oracle")]
    Oracle,
    #[serde(rename = "postgresql", alias = "PostgreSQL", alias = "postgres")]
    PostgreSql,
    #[serde(rename = "sqlserver", alias = "SQLServer")]
    SqlServer,
    #[serde(rename = "h2", alias = "H2")]
    H2,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 5] = [
        DatabaseType::MySql,
        DatabaseType::Oracle,
        DatabaseType::PostgreSql,
        DatabaseType::SqlServer,
        DatabaseType::H2,
    ];

    /// Ключевые слова диалекта поверх общих
    pub fn keywords(&self) -> &'static [Keyword] {
        match self {
            DatabaseType::MySql => MYSQL_KEYWORDS,
            DatabaseType::Oracle => ORACLE_KEYWORDS,
            DatabaseType::PostgreSql => POSTGRESQL_KEYWORDS,
            DatabaseType::SqlServer => SQLSERVER_KEYWORDS,
            DatabaseType::H2 => H2_KEYWORDS,
        }
    }

    /// Третий символ открывающего маркера hint (`/*!` или `/*+`)
    pub fn hint_marker(&self) -> Option<char> {
        match self {
            DatabaseType::MySql => Some('!'),
            DatabaseType::Oracle => Some('+'),
            _ => None,
        }
    }

    /// Поддерживается ли однострочный комментарий `#`
    pub fn supports_hash_comment(&self) -> bool {
        matches!(self, DatabaseType::MySql)
    }

    /// Поддерживаются ли переменные `@x` и `@@x`
    pub fn supports_variables(&self) -> bool {
        matches!(self, DatabaseType::MySql | DatabaseType::SqlServer)
    }

    /// Поддерживаются ли национальные строки `N'...'`
    pub fn supports_nchars(&self) -> bool {
        matches!(self, DatabaseType::SqlServer)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DatabaseType::MySql => "MySQL",
            DatabaseType::Oracle => "Oracle",
            DatabaseType::PostgreSql => "PostgreSQL",
            DatabaseType::SqlServer => "SQLServer",
            DatabaseType::H2 => "H2",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DatabaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::MySql),
            "oracle" => Ok(DatabaseType::Oracle),
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSql),
            "sqlserver" | "mssql" => Ok(DatabaseType::SqlServer),
            "h2" => Ok(DatabaseType::H2),
            _ => Err(Error::configuration(format!(
                "Unsupported database type: {}",
                s
            ))),
        }
    }
}
