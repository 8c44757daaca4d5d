//! 组装：把 SelectBuilder 渲染成最终 SQL 文本与合并后的参数表。
//!
//! 子句按固定顺序输出：
//! `SELECT [DISTINCT | DISTINCT ON (..)] cols FROM src [joins] [WHERE ..] [GROUP BY ..]
//! [HAVING ..] [ORDER BY ..] [LIMIT n] [OFFSET n]`。
//! 嵌套子查询（EXISTS / IN / LATERAL）先独立组装，再把 SQL 嵌入外层、参数并入外层。

use crate::clause::Filter;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::placeholder::Prefix;
use crate::select::SelectBuilder;
use crate::string_builder::StringBuilder;

/// 子查询最大嵌套层数。
pub const MAX_SUBQUERY_DEPTH: usize = 32;

/// 一次组装的结果。
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assembled {
    pub(crate) sql: String,
    pub(crate) params: Params,
    pub(crate) prefix: Option<Prefix>,
}

/// 组装过程中累积的参数与前缀。
struct Output {
    params: Params,
    prefix: Option<Prefix>,
    depth: usize,
}

impl Output {
    /// 组装嵌套 builder，并把它的参数与前缀并入外层；返回子查询 SQL。
    fn nested(&mut self, sub: &SelectBuilder) -> Result<String> {
        let out = sub.assemble(self.depth + 1)?;
        Prefix::pin(&mut self.prefix, out.prefix)?;
        self.params.merge(&out.params)?;
        Ok(out.sql)
    }
}

impl SelectBuilder {
    /// 终结调用：返回 SQL 文本与参数表，或第一个错误。不会修改 builder。
    pub fn build(&self) -> Result<(String, Params)> {
        match self.assemble(0) {
            Ok(out) => {
                tracing::debug!(
                    sql_len = out.sql.len(),
                    params = out.params.len(),
                    "select assembled"
                );
                Ok((out.sql, out.params))
            }
            Err(err) => {
                tracing::debug!(error = %err, "select assembly failed");
                Err(err)
            }
        }
    }

    pub(crate) fn assemble(&self, depth: usize) -> Result<Assembled> {
        if depth > MAX_SUBQUERY_DEPTH {
            return Err(Error::SubqueryTooDeep {
                max: MAX_SUBQUERY_DEPTH,
            });
        }
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        if self.columns.is_empty() {
            return Err(Error::NoColumns);
        }
        if self.from.is_empty() {
            return Err(Error::NoFrom);
        }

        let mut out = Output {
            params: Params::new(),
            prefix: self.prefix,
            depth,
        };
        let mut buf = StringBuilder::new();

        buf.write_leading("SELECT");
        if !self.distinct_on.is_empty() {
            buf.write_str(" DISTINCT ON (");
            buf.write_joined(&self.distinct_on, ", ");
            buf.write_char(')');
        } else if self.distinct {
            buf.write_str(" DISTINCT");
        }
        buf.write_char(' ');
        buf.write_joined(&self.columns, ", ");

        buf.write_leading("FROM");
        buf.write_char(' ');
        buf.write_str(&self.from);

        for j in &self.joins {
            buf.write_leading(j.kind.as_str());
            match &j.lateral {
                None => {
                    buf.write_char(' ');
                    buf.write_str(&j.clause.sql);
                }
                Some(lateral) => {
                    let sub_sql = out.nested(&lateral.sub)?;
                    buf.write_str(" (");
                    buf.write_str(&sub_sql);
                    buf.write_str(") ");
                    buf.write_str(&lateral.alias);
                    if !j.clause.sql.is_empty() {
                        buf.write_str(" ON ");
                        buf.write_str(&j.clause.sql);
                    }
                }
            }
            out.params.merge(&j.clause.params)?;
        }

        if !self.wheres.is_empty() {
            let mut ands = Vec::with_capacity(self.wheres.len());
            for w in &self.wheres {
                match w {
                    Filter::Fragment(clause) => {
                        out.params.merge(&clause.params)?;
                        ands.push(clause.sql.clone());
                    }
                    Filter::Subquery { kind, sub } => {
                        let sub_sql = out.nested(sub)?;
                        ands.push(kind.wrap(&sub_sql));
                    }
                }
            }
            buf.write_leading("WHERE");
            buf.write_char(' ');
            buf.write_joined(&ands, " AND ");
        }

        if !self.group_bys.is_empty() {
            buf.write_leading("GROUP BY");
            buf.write_char(' ');
            buf.write_joined(&self.group_bys, ", ");
        }

        if !self.havings.is_empty() {
            if self.group_bys.is_empty() {
                return Err(Error::HavingWithoutGroupBy);
            }
            let mut ands = Vec::with_capacity(self.havings.len());
            for h in &self.havings {
                out.params.merge(&h.params)?;
                ands.push(h.sql.as_str());
            }
            buf.write_leading("HAVING");
            buf.write_char(' ');
            buf.write_joined(&ands, " AND ");
        }

        if !self.order_bys.is_empty() {
            let mut exprs = Vec::with_capacity(self.order_bys.len());
            for o in &self.order_bys {
                out.params.merge(&o.params)?;
                exprs.push(o.sql.as_str());
            }
            buf.write_leading("ORDER BY");
            buf.write_char(' ');
            buf.write_joined(&exprs, ", ");
        }

        if let Some(limit) = self.limit {
            buf.write_leading("LIMIT");
            buf.write_char(' ');
            buf.write_str(&limit.to_string());
        }

        if let Some(offset) = self.offset {
            buf.write_leading("OFFSET");
            buf.write_char(' ');
            buf.write_str(&offset.to_string());
        }

        Ok(Assembled {
            sql: buf.into_string(),
            params: out.params,
            prefix: out.prefix,
        })
    }
}
