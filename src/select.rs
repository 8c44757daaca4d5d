//! SelectBuilder：不可变的 SELECT builder。
//!
//! 每个 fluent 调用都借用 `&self` 并返回一个新值，接收者保持不变，
//! 因此同一个基础 builder 可以安全地派生出多条独立的链。
//! 调用期的错误不会中断链条，而是存入新值的错误槽，留到 [`SelectBuilder::build`] 再报告；
//! 已出错的值上的后续调用都是 no-op。

use crate::clause::{Filter, JoinClause, JoinKind, Lateral, SubqueryKind};
use crate::error::{Error, Result};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::params::{Bindings, ParamClause, bind};
use crate::placeholder::Prefix;
use crate::structs::{SqlStruct, column_names};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    pub(crate) columns: Vec<String>,
    pub(crate) distinct: bool,
    pub(crate) distinct_on: Vec<String>,
    pub(crate) from: String,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) wheres: Vec<Filter>,
    pub(crate) group_bys: Vec<String>,
    pub(crate) havings: Vec<ParamClause>,
    pub(crate) order_bys: Vec<ParamClause>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
    /// 已钉住的占位符前缀，`None` 表示尚未出现占位符。
    pub(crate) prefix: Option<Prefix>,
    pub(crate) err: Option<Error>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 延迟错误槽中的第一个错误。
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// 当前钉住的占位符前缀。
    pub fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    /// 复制接收者并应用 `f`；`f` 失败时把错误存进新值。
    fn derive(&self, f: impl FnOnce(&mut Self) -> Result<()>) -> Self {
        let mut cp = self.clone();
        if cp.err.is_some() {
            return cp;
        }
        if let Err(err) = f(&mut cp) {
            tracing::trace!(error = %err, "deferring builder error");
            cp.err = Some(err);
        }
        cp
    }

    /// 校验片段并把它的前缀钉到当前 builder 上。
    fn bind_fragment(&mut self, sql: String, bindings: Bindings) -> Result<ParamClause> {
        let (clause, prefix) = bind(sql, bindings)?;
        Prefix::pin(&mut self.prefix, prefix)?;
        Ok(clause)
    }

    pub fn select<T>(&self, cols: T) -> Self
    where
        T: IntoStrings,
    {
        let cols = collect_into_strings(cols);
        self.derive(|b| {
            b.columns.extend(cols);
            Ok(())
        })
    }

    /// 追加 `T` 的列名（由 [`SqlStruct`] 元数据与默认 field mapper 推导）。
    pub fn select_object<T: SqlStruct>(&self) -> Self {
        self.select(column_names::<T>(None))
    }

    /// 同 [`select_object`](Self::select_object)，列名带上 `table.` 前缀。
    pub fn select_object_in<T: SqlStruct>(&self, table: &str) -> Self {
        self.select(column_names::<T>(Some(table)))
    }

    /// 按完全相同的字符串移除已选择的列，其余列保持原有顺序。
    pub fn remove_select<T>(&self, cols: T) -> Self
    where
        T: IntoStrings,
    {
        let remove = collect_into_strings(cols);
        self.derive(|b| {
            b.columns.retain(|c| !remove.contains(c));
            Ok(())
        })
    }

    pub fn distinct(&self) -> Self {
        self.derive(|b| {
            b.distinct = true;
            Ok(())
        })
    }

    /// `DISTINCT ON (...)`；无论调用顺序如何都优先于 [`distinct`](Self::distinct)。
    pub fn distinct_on<T>(&self, cols: T) -> Self
    where
        T: IntoStrings,
    {
        let cols = collect_into_strings(cols);
        self.derive(|b| {
            b.distinct_on.extend(cols);
            Ok(())
        })
    }

    pub fn from(&self, table: impl Into<String>) -> Self {
        let table = table.into();
        self.derive(|b| {
            b.from = table;
            Ok(())
        })
    }

    fn add_join(&self, kind: JoinKind, sql: String, bindings: Bindings) -> Self {
        self.derive(|b| {
            let clause = b.bind_fragment(sql, bindings)?;
            for j in &b.joins {
                if j.kind != kind || j.lateral.is_some() || j.clause.sql != clause.sql {
                    continue;
                }
                if j.clause.params == clause.params {
                    return Ok(());
                }
                return Err(Error::DuplicateJoin {
                    kind,
                    clause: clause.sql,
                });
            }
            b.joins.push(JoinClause {
                kind,
                clause,
                lateral: None,
            });
            Ok(())
        })
    }

    pub fn inner_join(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        self.add_join(JoinKind::Inner, sql.into(), bindings.into())
    }

    pub fn left_join(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        self.add_join(JoinKind::Left, sql.into(), bindings.into())
    }

    pub fn right_join(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        self.add_join(JoinKind::Right, sql.into(), bindings.into())
    }

    pub fn full_join(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        self.add_join(JoinKind::Full, sql.into(), bindings.into())
    }

    pub fn cross_join(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        self.add_join(JoinKind::Cross, sql.into(), bindings.into())
    }

    fn add_join_lateral(
        &self,
        kind: JoinKind,
        sub: &SelectBuilder,
        alias: String,
        on: String,
        bindings: Bindings,
    ) -> Self {
        self.derive(|b| {
            let clause = b.bind_fragment(on, bindings)?;
            for j in &b.joins {
                let Some(lateral) = &j.lateral else {
                    continue;
                };
                if j.kind != kind || lateral.alias != alias {
                    continue;
                }
                // 子查询按组装结果比较，而不是按引用
                if j.clause == clause && lateral.sub.build() == sub.build() {
                    return Ok(());
                }
                return Err(Error::DuplicateJoin {
                    kind,
                    clause: alias,
                });
            }
            b.joins.push(JoinClause {
                kind,
                clause,
                lateral: Some(Lateral {
                    sub: Arc::new(sub.clone()),
                    alias,
                }),
            });
            Ok(())
        })
    }

    /// `INNER JOIN LATERAL (<sub>) alias ON <on>`。
    pub fn inner_join_lateral(
        &self,
        sub: &SelectBuilder,
        alias: impl Into<String>,
        on: impl Into<String>,
        bindings: impl Into<Bindings>,
    ) -> Self {
        self.add_join_lateral(
            JoinKind::InnerLateral,
            sub,
            alias.into(),
            on.into(),
            bindings.into(),
        )
    }

    /// `LEFT JOIN LATERAL (<sub>) alias ON <on>`。
    pub fn left_join_lateral(
        &self,
        sub: &SelectBuilder,
        alias: impl Into<String>,
        on: impl Into<String>,
        bindings: impl Into<Bindings>,
    ) -> Self {
        self.add_join_lateral(
            JoinKind::LeftLateral,
            sub,
            alias.into(),
            on.into(),
            bindings.into(),
        )
    }

    /// `CROSS JOIN LATERAL (<sub>) alias`，没有 ON 子句。
    pub fn cross_join_lateral(&self, sub: &SelectBuilder, alias: impl Into<String>) -> Self {
        self.add_join_lateral(
            JoinKind::CrossLateral,
            sub,
            alias.into(),
            String::new(),
            Bindings::default(),
        )
    }

    /// 追加一个 AND 连接的 WHERE 片段。
    pub fn where_(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        let sql = sql.into();
        let bindings = bindings.into();
        self.derive(|b| {
            let clause = b.bind_fragment(sql, bindings)?;
            b.wheres.push(Filter::Fragment(clause));
            Ok(())
        })
    }

    fn add_subquery_filter(&self, kind: SubqueryKind, sub: &SelectBuilder) -> Self {
        self.derive(|b| {
            b.wheres.push(Filter::Subquery {
                kind,
                sub: Arc::new(sub.clone()),
            });
            Ok(())
        })
    }

    pub fn where_exists(&self, sub: &SelectBuilder) -> Self {
        self.add_subquery_filter(SubqueryKind::Exists, sub)
    }

    pub fn where_not_exists(&self, sub: &SelectBuilder) -> Self {
        self.add_subquery_filter(SubqueryKind::NotExists, sub)
    }

    pub fn where_in(&self, column: impl Into<String>, sub: &SelectBuilder) -> Self {
        self.add_subquery_filter(SubqueryKind::In(column.into()), sub)
    }

    pub fn where_not_in(&self, column: impl Into<String>, sub: &SelectBuilder) -> Self {
        self.add_subquery_filter(SubqueryKind::NotIn(column.into()), sub)
    }

    pub fn group_by<T>(&self, exprs: T) -> Self
    where
        T: IntoStrings,
    {
        let exprs = collect_into_strings(exprs);
        self.derive(|b| {
            b.group_bys.extend(exprs);
            Ok(())
        })
    }

    /// 追加一个 AND 连接的 HAVING 片段；`build` 时要求至少有一个 GROUP BY 键。
    pub fn having(&self, sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        let sql = sql.into();
        let bindings = bindings.into();
        self.derive(|b| {
            let clause = b.bind_fragment(sql, bindings)?;
            b.havings.push(clause);
            Ok(())
        })
    }

    pub fn order_by(&self, expr: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        let expr = expr.into();
        let bindings = bindings.into();
        self.derive(|b| {
            let clause = b.bind_fragment(expr, bindings)?;
            b.order_bys.push(clause);
            Ok(())
        })
    }

    pub fn limit(&self, n: u64) -> Self {
        self.derive(|b| {
            b.limit = Some(n);
            Ok(())
        })
    }

    pub fn offset(&self, n: u64) -> Self {
        self.derive(|b| {
            b.offset = Some(n);
            Ok(())
        })
    }
}
