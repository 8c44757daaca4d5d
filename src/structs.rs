//! Struct 列名推导：为 `select_object` 提供有序的列名列表。
//!
//! Rust 无运行时反射；本实现通过 `sql_struct!` 宏为 struct 生成字段元数据，
//! 列名按以下优先级决定：
//! - 显式列名（`field: "col"`）
//! - 默认 field mapper 作用于字段名（默认 snake_case）
//!
//! `field: -` 跳过该字段；`..Embedded` 把嵌入 struct 的字段按位置展开。
//! 非 struct 类型无法实现 [`SqlStruct`]，因此在编译期就被拒绝。

use crate::field_mapper::{FieldMapperFunc, default_field_mapper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Rust 字段名
    pub rust: &'static str,
    /// 显式列名
    pub db: Option<&'static str>,
    /// 不参与列名推导
    pub skip: bool,
}

impl FieldMeta {
    pub const fn new(rust: &'static str) -> Self {
        Self {
            rust,
            db: None,
            skip: false,
        }
    }

    pub const fn with_db(rust: &'static str, db: &'static str) -> Self {
        Self {
            rust,
            db: Some(db),
            skip: false,
        }
    }

    pub const fn skipped(rust: &'static str) -> Self {
        Self {
            rust,
            db: None,
            skip: true,
        }
    }

    fn column(&self, mapper: &FieldMapperFunc) -> String {
        if let Some(db) = self.db {
            return db.to_string();
        }
        let mapped = mapper(self.rust);
        if mapped.is_empty() {
            self.rust.to_string()
        } else {
            mapped
        }
    }
}

/// 由 `sql_struct!` 为业务 struct 实现的 trait：按声明顺序提供字段元数据。
pub trait SqlStruct {
    fn fields() -> Vec<FieldMeta>;
}

/// 推导 `T` 的列名；给出 `table` 时输出 `table.col`。使用全局默认 field mapper。
pub fn column_names<T: SqlStruct>(table: Option<&str>) -> Vec<String> {
    column_names_with::<T>(&default_field_mapper(), table)
}

/// 同 [`column_names`]，显式指定 mapper。
pub fn column_names_with<T: SqlStruct>(
    mapper: &FieldMapperFunc,
    table: Option<&str>,
) -> Vec<String> {
    T::fields()
        .iter()
        .filter(|f| !f.skip)
        .map(|f| {
            let col = f.column(mapper);
            match table {
                Some(t) if !t.is_empty() => format!("{t}.{col}"),
                _ => col,
            }
        })
        .collect()
}

/// 为 struct 实现 [`SqlStruct`]。
///
/// ```
/// use halo_space::{SelectBuilder, sql_struct};
///
/// struct Audit {
///     created_at: i64,
/// }
///
/// struct User {
///     id: i64,
///     first_name: String,
///     password: String,
///     audit: Audit,
/// }
///
/// sql_struct! {
///     Audit { created_at }
/// }
///
/// sql_struct! {
///     User {
///         id: "user_id",
///         first_name,
///         password: -,
///         ..Audit,
///     }
/// }
///
/// let (sql, _) = SelectBuilder::new()
///     .select_object_in::<User>("u")
///     .from("users u")
///     .build()
///     .unwrap();
/// assert_eq!(sql, "SELECT u.user_id, u.first_name, u.created_at FROM users u");
/// ```
#[macro_export]
macro_rules! sql_struct {
    ($ty:ty { $($body:tt)* }) => {
        impl $crate::structs::SqlStruct for $ty {
            fn fields() -> ::std::vec::Vec<$crate::structs::FieldMeta> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                $crate::__sql_struct_fields!(fields; $($body)*);
                fields
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sql_struct_fields {
    ($acc:ident;) => {};
    ($acc:ident; .. $inner:ty $(, $($rest:tt)*)?) => {
        $acc.extend(<$inner as $crate::structs::SqlStruct>::fields());
        $crate::__sql_struct_fields!($acc; $($($rest)*)?);
    };
    ($acc:ident; $field:ident : - $(, $($rest:tt)*)?) => {
        $acc.push($crate::structs::FieldMeta::skipped(stringify!($field)));
        $crate::__sql_struct_fields!($acc; $($($rest)*)?);
    };
    ($acc:ident; $field:ident : $db:literal $(, $($rest:tt)*)?) => {
        $acc.push($crate::structs::FieldMeta::with_db(stringify!($field), $db));
        $crate::__sql_struct_fields!($acc; $($($rest)*)?);
    };
    ($acc:ident; $field:ident $(, $($rest:tt)*)?) => {
        $acc.push($crate::structs::FieldMeta::new(stringify!($field)));
        $crate::__sql_struct_fields!($acc; $($($rest)*)?);
    };
}
