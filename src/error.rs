//! 构建错误：所有 fluent 调用与 `build` 共用同一个错误类型。

use crate::clause::JoinKind;

/// builder 错误。
///
/// 错误会被存进 builder 的延迟错误槽并原样传播（包括嵌套子查询），
/// 因此需要 `Clone + PartialEq`。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("builder: SELECT requires at least one column")]
    NoColumns,

    #[error("builder: SELECT requires a FROM clause")]
    NoFrom,

    #[error("builder: HAVING requires a GROUP BY clause")]
    HavingWithoutGroupBy,

    #[error("builder: placeholder {name:?} has no matching value in params map")]
    MissingParam { name: String },

    #[error("builder: params map key {name:?} has no matching placeholder")]
    ExtraParam { name: String },

    #[error("builder: got {placeholders} placeholder(s) but {values} value(s)")]
    ParamCountMismatch { placeholders: usize, values: usize },

    #[error("builder: duplicate parameter {name:?} with conflicting value")]
    DuplicateParam { name: String },

    #[error("builder: mixed parameter prefixes (: and @) in the same query")]
    MixedPrefix,

    #[error("builder: expected at most one params map, got {count}")]
    TooManyParamMaps { count: usize },

    #[error("builder: duplicate join with conflicting clause: {kind} {clause}")]
    DuplicateJoin { kind: JoinKind, clause: String },

    #[error("builder: subquery nesting exceeds {max} levels")]
    SubqueryTooDeep { max: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
