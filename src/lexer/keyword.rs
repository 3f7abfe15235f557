//! Ключевые слова SQL
//!
//! Перечисление `Keyword` объединяет ключевые слова стандарта и всех поддерживаемых
//! диалектов. Какие из них распознаются для конкретной базы данных, решает словарь,
//! собранный из `DEFAULT_KEYWORDS` и набора ключевых слов диалекта.

use serde::Serialize;
use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $literal:literal),* $(,)?) => {
        /// Ключевое слово SQL
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum Keyword {
            $($variant),*
        }

        impl Keyword {
            /// Все известные ключевые слова
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),*];

            /// Текст ключевого слова в верхнем регистре
            pub fn literals(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $literal),*
                }
            }
        }
    };
}

keywords! {
    // Объекты схемы
    Schema => "SCHEMA",
    Database => "DATABASE",
    Table => "TABLE",
    Column => "COLUMN",
    View => "VIEW",
    Index => "INDEX",
    Trigger => "TRIGGER",
    Procedure => "PROCEDURE",
    Tablespace => "TABLESPACE",
    Function => "FUNCTION",
    Sequence => "SEQUENCE",
    Cursor => "CURSOR",
    Domain => "DOMAIN",
    Constraint => "CONSTRAINT",
    Primary => "PRIMARY",
    Unique => "UNIQUE",
    Foreign => "FOREIGN",
    Key => "KEY",
    Check => "CHECK",
    References => "REFERENCES",
    Temporary => "TEMPORARY",
    Cascade => "CASCADE",
    Restrict => "RESTRICT",

    // DDL/DML/DCL
    Select => "SELECT",
    Insert => "INSERT",
    Update => "UPDATE",
    Delete => "DELETE",
    Create => "CREATE",
    Alter => "ALTER",
    Drop => "DROP",
    Truncate => "TRUNCATE",
    Replace => "REPLACE",
    Merge => "MERGE",
    Grant => "GRANT",
    Revoke => "REVOKE",
    Add => "ADD",
    Modify => "MODIFY",
    Rename => "RENAME",
    Into => "INTO",
    Values => "VALUES",
    Set => "SET",
    Returning => "RETURNING",

    // Части запроса
    Distinct => "DISTINCT",
    All => "ALL",
    As => "AS",
    From => "FROM",
    Where => "WHERE",
    Order => "ORDER",
    Group => "GROUP",
    By => "BY",
    Having => "HAVING",
    Asc => "ASC",
    Desc => "DESC",
    Join => "JOIN",
    Inner => "INNER",
    Left => "LEFT",
    Right => "RIGHT",
    Full => "FULL",
    Outer => "OUTER",
    Cross => "CROSS",
    Natural => "NATURAL",
    Using => "USING",
    On => "ON",
    Union => "UNION",
    Except => "EXCEPT",
    Intersect => "INTERSECT",
    Minus => "MINUS",
    With => "WITH",
    For => "FOR",
    Of => "OF",
    To => "TO",
    Fetch => "FETCH",
    First => "FIRST",
    Next => "NEXT",
    Row => "ROW",
    Rows => "ROWS",
    Only => "ONLY",
    Lock => "LOCK",
    Nowait => "NOWAIT",
    Share => "SHARE",

    // Выражения
    And => "AND",
    Or => "OR",
    Not => "NOT",
    Null => "NULL",
    Is => "IS",
    In => "IN",
    Between => "BETWEEN",
    Like => "LIKE",
    Escape => "ESCAPE",
    Exists => "EXISTS",
    Any => "ANY",
    Some => "SOME",
    Case => "CASE",
    When => "WHEN",
    Then => "THEN",
    Else => "ELSE",
    End => "END",
    If => "IF",
    Cast => "CAST",
    Interval => "INTERVAL",
    Default => "DEFAULT",
    True => "TRUE",
    False => "FALSE",
    Count => "COUNT",
    Sum => "SUM",
    Avg => "AVG",
    Min => "MIN",
    Max => "MAX",

    // Транзакции
    Transaction => "TRANSACTION",
    Begin => "BEGIN",
    Start => "START",
    Commit => "COMMIT",
    Rollback => "ROLLBACK",
    Savepoint => "SAVEPOINT",

    // MySQL
    Show => "SHOW",
    Dual => "DUAL",
    Limit => "LIMIT",
    Offset => "OFFSET",
    Value => "VALUE",
    Force => "FORCE",
    Partition => "PARTITION",
    Distinctrow => "DISTINCTROW",
    Kill => "KILL",
    Quick => "QUICK",
    Binary => "BINARY",
    Cache => "CACHE",
    SqlCache => "SQL_CACHE",
    SqlNoCache => "SQL_NO_CACHE",
    SqlSmallResult => "SQL_SMALL_RESULT",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlBufferResult => "SQL_BUFFER_RESULT",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
    LowPriority => "LOW_PRIORITY",
    HighPriority => "HIGH_PRIORITY",
    Delayed => "DELAYED",
    Optimize => "OPTIMIZE",
    Analyze => "ANALYZE",
    Ignore => "IGNORE",
    Duplicate => "DUPLICATE",
    StraightJoin => "STRAIGHT_JOIN",
    Change => "CHANGE",
    After => "AFTER",
    Character => "CHARACTER",
    Charset => "CHARSET",
    Collate => "COLLATE",
    Regexp => "REGEXP",
    Rlike => "RLIKE",
    Div => "DIV",
    Mod => "MOD",
    Xor => "XOR",
    Describe => "DESCRIBE",
    Explain => "EXPLAIN",
    Use => "USE",
    Tables => "TABLES",
    Databases => "DATABASES",
    Columns => "COLUMNS",
    Fields => "FIELDS",
    Status => "STATUS",
    Engine => "ENGINE",
    AutoIncrement => "AUTO_INCREMENT",

    // Oracle
    Connect => "CONNECT",
    Prior => "PRIOR",
    Nocycle => "NOCYCLE",
    Siblings => "SIBLINGS",
    Rownum => "ROWNUM",
    Sysdate => "SYSDATE",
    Matched => "MATCHED",
    Pivot => "PIVOT",
    Unpivot => "UNPIVOT",
    Model => "MODEL",
    Nulls => "NULLS",
    Last => "LAST",
    Locked => "LOCKED",
    Skip => "SKIP",
    Wait => "WAIT",
    Purge => "PURGE",
    Flashback => "FLASHBACK",

    // PostgreSQL
    Ilike => "ILIKE",
    Similar => "SIMILAR",
    Symmetric => "SYMMETRIC",
    Lateral => "LATERAL",
    Recursive => "RECURSIVE",
    Conflict => "CONFLICT",
    Do => "DO",
    Nothing => "NOTHING",
    Returns => "RETURNS",
    Window => "WINDOW",
    Over => "OVER",
    Filter => "FILTER",
    Verbose => "VERBOSE",

    // SQLServer
    Top => "TOP",
    Output => "OUTPUT",
    Apply => "APPLY",
    Nolock => "NOLOCK",
    Rowlock => "ROWLOCK",
    Tablock => "TABLOCK",
    Ties => "TIES",
    Percent => "PERCENT",
    Identity => "IDENTITY",
    Option => "OPTION",
    Tran => "TRAN",
    Go => "GO",
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literals())
    }
}

/// Ключевые слова, общие для всех диалектов
pub const DEFAULT_KEYWORDS: &[Keyword] = &[
    Keyword::Schema,
    Keyword::Database,
    Keyword::Table,
    Keyword::Column,
    Keyword::View,
    Keyword::Index,
    Keyword::Trigger,
    Keyword::Procedure,
    Keyword::Tablespace,
    Keyword::Function,
    Keyword::Sequence,
    Keyword::Cursor,
    Keyword::Domain,
    Keyword::Constraint,
    Keyword::Primary,
    Keyword::Unique,
    Keyword::Foreign,
    Keyword::Key,
    Keyword::Check,
    Keyword::References,
    Keyword::Temporary,
    Keyword::Cascade,
    Keyword::Restrict,
    Keyword::Select,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Delete,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
    Keyword::Truncate,
    Keyword::Replace,
    Keyword::Merge,
    Keyword::Grant,
    Keyword::Revoke,
    Keyword::Add,
    Keyword::Modify,
    Keyword::Rename,
    Keyword::Into,
    Keyword::Values,
    Keyword::Set,
    Keyword::Returning,
    Keyword::Distinct,
    Keyword::All,
    Keyword::As,
    Keyword::From,
    Keyword::Where,
    Keyword::Order,
    Keyword::Group,
    Keyword::By,
    Keyword::Having,
    Keyword::Asc,
    Keyword::Desc,
    Keyword::Join,
    Keyword::Inner,
    Keyword::Left,
    Keyword::Right,
    Keyword::Full,
    Keyword::Outer,
    Keyword::Cross,
    Keyword::Natural,
    Keyword::Using,
    Keyword::On,
    Keyword::Union,
    Keyword::Except,
    Keyword::Intersect,
    Keyword::Minus,
    Keyword::With,
    Keyword::For,
    Keyword::Of,
    Keyword::To,
    Keyword::Fetch,
    Keyword::First,
    Keyword::Next,
    Keyword::Row,
    Keyword::Rows,
    Keyword::Only,
    Keyword::Lock,
    Keyword::Nowait,
    Keyword::Share,
    Keyword::And,
    Keyword::Or,
    Keyword::Not,
    Keyword::Null,
    Keyword::Is,
    Keyword::In,
    Keyword::Between,
    Keyword::Like,
    Keyword::Escape,
    Keyword::Exists,
    Keyword::Any,
    Keyword::Some,
    Keyword::Case,
    Keyword::When,
    Keyword::Then,
    Keyword::Else,
    Keyword::End,
    Keyword::If,
    Keyword::Cast,
    Keyword::Interval,
    Keyword::Default,
    Keyword::True,
    Keyword::False,
    Keyword::Count,
    Keyword::Sum,
    Keyword::Avg,
    Keyword::Min,
    Keyword::Max,
    Keyword::Transaction,
    Keyword::Begin,
    Keyword::Start,
    Keyword::Commit,
    Keyword::Rollback,
    Keyword::Savepoint,
];

/// Ключевые слова MySQL
pub const MYSQL_KEYWORDS: &[Keyword] = &[
    Keyword::Show,
    Keyword::Dual,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Value,
    Keyword::Force,
    Keyword::Partition,
    Keyword::Distinctrow,
    Keyword::Kill,
    Keyword::Quick,
    Keyword::Binary,
    Keyword::Cache,
    Keyword::SqlCache,
    Keyword::SqlNoCache,
    Keyword::SqlSmallResult,
    Keyword::SqlBigResult,
    Keyword::SqlBufferResult,
    Keyword::SqlCalcFoundRows,
    Keyword::LowPriority,
    Keyword::HighPriority,
    Keyword::Delayed,
    Keyword::Optimize,
    Keyword::Analyze,
    Keyword::Ignore,
    Keyword::Duplicate,
    Keyword::StraightJoin,
    Keyword::Change,
    Keyword::After,
    Keyword::Character,
    Keyword::Charset,
    Keyword::Collate,
    Keyword::Regexp,
    Keyword::Rlike,
    Keyword::Div,
    Keyword::Mod,
    Keyword::Xor,
    Keyword::Describe,
    Keyword::Explain,
    Keyword::Use,
    Keyword::Tables,
    Keyword::Databases,
    Keyword::Columns,
    Keyword::Fields,
    Keyword::Status,
    Keyword::Engine,
    Keyword::AutoIncrement,
];

/// Ключевые слова Oracle
pub const ORACLE_KEYWORDS: &[Keyword] = &[
    Keyword::Connect,
    Keyword::Prior,
    Keyword::Nocycle,
    Keyword::Siblings,
    Keyword::Rownum,
    Keyword::Sysdate,
    Keyword::Matched,
    Keyword::Pivot,
    Keyword::Unpivot,
    Keyword::Model,
    Keyword::Nulls,
    Keyword::Last,
    Keyword::Locked,
    Keyword::Skip,
    Keyword::Wait,
    Keyword::Purge,
    Keyword::Flashback,
];

/// Ключевые слова PostgreSQL
pub const POSTGRESQL_KEYWORDS: &[Keyword] = &[
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Ilike,
    Keyword::Similar,
    Keyword::Symmetric,
    Keyword::Lateral,
    Keyword::Recursive,
    Keyword::Conflict,
    Keyword::Do,
    Keyword::Nothing,
    Keyword::Returns,
    Keyword::Window,
    Keyword::Over,
    Keyword::Filter,
    Keyword::Verbose,
    Keyword::Nulls,
    Keyword::Last,
    Keyword::Analyze,
    Keyword::Explain,
];

/// Ключевые слова SQLServer
pub const SQLSERVER_KEYWORDS: &[Keyword] = &[
    Keyword::Top,
    Keyword::Output,
    Keyword::Apply,
    Keyword::Nolock,
    Keyword::Rowlock,
    Keyword::Tablock,
    Keyword::Ties,
    Keyword::Percent,
    Keyword::Identity,
    Keyword::Option,
    Keyword::Tran,
    Keyword::Go,
    Keyword::Pivot,
    Keyword::Unpivot,
    Keyword::Over,
];

/// Ключевые слова H2
pub const H2_KEYWORDS: &[Keyword] = &[Keyword::Limit, Keyword::Offset, Keyword::Top];
