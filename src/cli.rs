//! CLI интерфейс для rustlex
//!
//! Разбивает SQL оператор на токены и печатает их в текстовом виде или в JSON

use crate::common::{ConfigOverrides, LexerConfig};
use crate::lexer::{DatabaseType, Lexer, Token};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// RustLex - лексический анализатор SQL
#[derive(Parser, Debug)]
#[command(name = "rustlex")]
#[command(about = "RustLex - SQL lexical analyzer for database-routing middleware")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Разбить SQL на токены
    Tokenize {
        /// SQL оператор
        sql: Option<String>,

        /// Файл с SQL оператором
        #[arg(short, long, conflicts_with = "sql")]
        file: Option<PathBuf>,

        /// Диалект (mysql, oracle, postgresql, sqlserver, h2)
        #[arg(short, long)]
        dialect: Option<String>,

        /// Формат вывода
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Показать поддерживаемые диалекты
    Dialects,

    /// Показать информацию о системе
    Info,
}

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Загружает конфигурацию: файл, поверх него окружение, затем аргументы
    pub fn load_config(&self) -> anyhow::Result<LexerConfig> {
        let mut config = match &self.config {
            Some(path) => LexerConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => LexerConfig::default(),
        };
        let mut overrides = ConfigOverrides::from_env()?;
        if let Some(level) = &self.log_level {
            overrides.log_level = Some(level.clone());
        }
        config = config.merge(overrides);

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute(&self, config: &LexerConfig, out: &mut dyn Write) -> anyhow::Result<()> {
        match &self.command {
            Commands::Tokenize {
                sql,
                file,
                dialect,
                format,
            } => {
                let sql = match (sql, file) {
                    (Some(sql), _) => sql.clone(),
                    (None, Some(path)) => std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read {}", path.display()))?,
                    (None, None) => anyhow::bail!("either SQL or --file must be given"),
                };
                let database_type = match dialect {
                    Some(dialect) => dialect.parse()?,
                    None => config.database_type,
                };
                self.tokenize(&sql, database_type, *format, out)
            }
            Commands::Dialects => self.show_dialects(out),
            Commands::Info => self.show_info(config, out),
        }
    }

    fn tokenize(
        &self,
        sql: &str,
        database_type: DatabaseType,
        format: OutputFormat,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let mut lexer = Lexer::new(sql, database_type);
        let mut spans: Vec<(usize, Token)> = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token.token_type.is_end() {
                break;
            }
            spans.push((lexer.token_start(), token));
        }

        match format {
            OutputFormat::Text => {
                for (start, token) in &spans {
                    writeln!(
                        out,
                        "{}..{}\t{}\t{}",
                        start, token.end_offset, token.token_type, token.value
                    )?;
                }
            }
            OutputFormat::Json => {
                let tokens: Vec<&Token> = spans.iter().map(|(_, token)| token).collect();
                serde_json::to_writer_pretty(&mut *out, &tokens)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn show_dialects(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        for database_type in DatabaseType::ALL {
            let hint = database_type
                .hint_marker()
                .map(|marker| format!("/*{}", marker))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "{}\thint={}\t#comment={}\tvariables={}\tnchars={}\tkeywords={}",
                database_type,
                hint,
                database_type.supports_hash_comment(),
                database_type.supports_variables(),
                database_type.supports_nchars(),
                database_type.keywords().len()
            )?;
        }
        Ok(())
    }

    fn show_info(&self, config: &LexerConfig, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "RustLex {}", crate::VERSION)?;
        writeln!(out, "Dialect: {}", config.database_type)?;
        writeln!(out, "Log level: {}", config.logging.level)?;
        writeln!(out, "OS: {}", std::env::consts::OS)?;
        writeln!(out, "Arch: {}", std::env::consts::ARCH)?;
        Ok(())
    }
}
