//! Params：命名参数表，以及片段级的参数校验与跨子句合并。

use crate::error::{Error, Result};
use crate::placeholder::{Placeholders, Prefix, extract};
use crate::value::SqlValue;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// 命名参数表：占位符名（不含前缀）到值的映射。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, SqlValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数并返回自身，便于链式构造。
    pub fn set(mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> Option<SqlValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SqlValue> {
        self.values.iter()
    }

    /// 把 `other` 合并进来。
    ///
    /// 两边都存在的 key 必须结构相等，否则返回 [`Error::DuplicateParam`]；
    /// 出错时 `self` 可能已部分合并，调用方应丢弃它。
    pub fn merge(&mut self, other: &Params) -> Result<()> {
        for (name, value) in &other.values {
            match self.values.get(name) {
                Some(existing) if existing != value => {
                    return Err(Error::DuplicateParam { name: name.clone() });
                }
                Some(_) => {}
                None => {
                    self.values.insert(name.clone(), value.clone());
                }
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<SqlValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, SqlValue);
    type IntoIter = btree_map::IntoIter<String, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a SqlValue);
    type IntoIter = btree_map::Iter<'a, String, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// 单次子句调用携带的参数。
///
/// 命名模式下允许零个或一个参数表；多于一个在绑定时报错。
/// 位置模式按占位符首次出现顺序依次绑定。
#[derive(Debug, Clone, PartialEq)]
pub enum Bindings {
    Named(Vec<Params>),
    Positional(Vec<SqlValue>),
}

impl Default for Bindings {
    fn default() -> Self {
        Self::Named(Vec::new())
    }
}

impl From<()> for Bindings {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Params> for Bindings {
    fn from(p: Params) -> Self {
        Self::Named(vec![p])
    }
}

impl From<Option<Params>> for Bindings {
    fn from(p: Option<Params>) -> Self {
        Self::Named(p.into_iter().collect())
    }
}

impl From<Vec<Params>> for Bindings {
    fn from(v: Vec<Params>) -> Self {
        Self::Named(v)
    }
}

impl<const N: usize> From<[Params; N]> for Bindings {
    fn from(v: [Params; N]) -> Self {
        Self::Named(v.into())
    }
}

/// 一个已校验的参数化片段：SQL 文本加上它引用的参数。
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ParamClause {
    pub(crate) sql: String,
    pub(crate) params: Params,
}

/// 校验 `sql` 的占位符与 `bindings`，返回片段、参数表与片段使用的前缀。
pub(crate) fn bind(sql: String, bindings: Bindings) -> Result<(ParamClause, Option<Prefix>)> {
    let found = extract(&sql)?;
    let params = match bindings {
        Bindings::Named(maps) => bind_named(&found, maps)?,
        Bindings::Positional(values) => bind_positional(&found, values)?,
    };
    Ok((ParamClause { sql, params }, found.prefix))
}

fn bind_named(found: &Placeholders, mut maps: Vec<Params>) -> Result<Params> {
    if maps.len() > 1 {
        return Err(Error::TooManyParamMaps { count: maps.len() });
    }
    let supplied = maps.pop().unwrap_or_default();

    for name in &found.names {
        if !supplied.contains(name) {
            return Err(Error::MissingParam { name: name.clone() });
        }
    }
    for name in supplied.names() {
        if !found.names.iter().any(|n| n == name) {
            return Err(Error::ExtraParam {
                name: name.to_string(),
            });
        }
    }

    Ok(supplied)
}

fn bind_positional(found: &Placeholders, values: Vec<SqlValue>) -> Result<Params> {
    if found.names.len() != values.len() {
        return Err(Error::ParamCountMismatch {
            placeholders: found.names.len(),
            values: values.len(),
        });
    }
    Ok(found.names.iter().cloned().zip(values).collect())
}
