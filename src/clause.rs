//! 子句存储：builder 内部累积的 JOIN / WHERE 条目。
//!
//! 这些类型只被 [`SelectBuilder`](crate::SelectBuilder) 持有；嵌套 builder 经 `Arc` 共享，
//! 因为 builder 本身不可变，共享不会让兄弟值互相观察到修改。

use crate::params::ParamClause;
use crate::select::SelectBuilder;
use std::fmt;
use std::sync::Arc;

/// JOIN 类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    InnerLateral,
    LeftLateral,
    CrossLateral,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::InnerLateral => "INNER JOIN LATERAL",
            Self::LeftLateral => "LEFT JOIN LATERAL",
            Self::CrossLateral => "CROSS JOIN LATERAL",
        }
    }

    pub fn is_lateral(self) -> bool {
        matches!(
            self,
            Self::InnerLateral | Self::LeftLateral | Self::CrossLateral
        )
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LATERAL 连接的右侧：嵌套查询加别名。
#[derive(Debug, Clone)]
pub(crate) struct Lateral {
    pub(crate) sub: Arc<SelectBuilder>,
    pub(crate) alias: String,
}

/// 一个 JOIN 条目。普通 JOIN 的 `clause` 是整段片段；LATERAL 的 `clause` 是 ON 片段。
#[derive(Debug, Clone)]
pub(crate) struct JoinClause {
    pub(crate) kind: JoinKind,
    pub(crate) clause: ParamClause,
    pub(crate) lateral: Option<Lateral>,
}

/// 基于子查询的过滤形式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubqueryKind {
    Exists,
    NotExists,
    In(String),
    NotIn(String),
}

impl SubqueryKind {
    /// 把子查询 SQL 包装成过滤表达式。
    pub(crate) fn wrap(&self, sub_sql: &str) -> String {
        match self {
            Self::Exists => format!("EXISTS ({sub_sql})"),
            Self::NotExists => format!("NOT EXISTS ({sub_sql})"),
            Self::In(column) => format!("{column} IN ({sub_sql})"),
            Self::NotIn(column) => format!("{column} NOT IN ({sub_sql})"),
        }
    }
}

/// WHERE 条目：普通片段，或者嵌套子查询。
#[derive(Debug, Clone)]
pub(crate) enum Filter {
    Fragment(ParamClause),
    Subquery {
        kind: SubqueryKind,
        sub: Arc<SelectBuilder>,
    },
}
