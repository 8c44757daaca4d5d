//! halo-select-builder：不可变、可组合的 SELECT builder，负责命名参数的提取、校验与合并。
//!
//! ```
//! use halo_space::{SelectBuilder, params};
//!
//! let (sql, args) = SelectBuilder::new()
//!     .select(["u.name", "o.total"])
//!     .from("users u")
//!     .inner_join("orders o ON o.user_id = u.id", ())
//!     .where_("age > :min_age", params! { "min_age" => 18 })
//!     .order_by("u.name ASC", ())
//!     .limit(10)
//!     .offset(20)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT u.name, o.total FROM users u INNER JOIN orders o ON o.user_id = u.id WHERE age > :min_age ORDER BY u.name ASC LIMIT 10 OFFSET 20"
//! );
//! assert_eq!(args.len(), 1);
//! ```

pub mod assemble;
pub mod clause;
#[cfg(test)]
mod distinct_tests;
pub mod error;
pub mod field_mapper;
pub mod macros;
pub use crate::macros::*;
pub mod params;
pub mod placeholder;
#[cfg(test)]
mod placeholder_tests;
pub mod select;
#[cfg(test)]
mod select_tests;
pub(crate) mod string_builder;
pub mod structs;
pub mod value;

pub use crate::assemble::MAX_SUBQUERY_DEPTH;
pub use crate::clause::JoinKind;
pub use crate::error::{Error, Result};
pub use crate::field_mapper::{
    FieldMapperFunc, default_field_mapper, identity_mapper, set_default_field_mapper,
    set_default_field_mapper_scoped, snake_case_mapper,
};
pub use crate::params::{Bindings, Params};
pub use crate::placeholder::{Placeholders, Prefix, extract};
pub use crate::select::SelectBuilder;
pub use crate::structs::{FieldMeta, SqlStruct, column_names, column_names_with};
pub use crate::value::SqlValue;

/// 推荐的便捷命名空间：允许 `use halo_space::sqlbuilder::{...}` 形式导入。
pub mod sqlbuilder {
    pub use crate::*;
}
