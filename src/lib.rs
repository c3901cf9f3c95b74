//! halo-pgsql：可组合的 PostgreSQL 语句拼接库。
//!
//! 片段（[`SqlWriter`]）把自己写进同一个缓冲区，绑定值统一交给参数表（[`Args`]）去重并编号，
//! 最终由 [`build`] 输出 `$1/$2/...` 占位符的 SQL 与对应的参数列表。
//!
//! ```
//! use halo_pgsql::{Arg, where_};
//!
//! let mut sb = where_("id=?", [2_i64]);
//! sb.from("people", ());
//! let (sql, args) = sb.build().unwrap();
//! assert_eq!(sql, "select * from people where (id=$1)");
//! assert_eq!(args, vec![Arg::from(2_i64)]);
//! ```

pub mod arg;
pub mod args;
pub(crate) mod clause;
pub mod delete;
pub mod ident;
pub mod insert;
pub mod macros;
pub mod row_map;
pub mod select;
#[cfg(test)]
mod select_tests;
pub mod update;
pub mod value;
pub mod valuer;
pub mod values;
pub mod writer;

pub use crate::arg::{Arg, IntoArgs};
pub use crate::args::{Args, BuildError, MARKER, Placeholder};
pub use crate::delete::{DeleteStatement, delete};
pub use crate::ident::sanitize_identifier;
pub use crate::insert::{InsertStatement, insert};
pub use crate::row_map::RowMap;
pub use crate::select::{
    SelectStatement, distinct, distinct_on, from, limit, offset, order, replace_order,
    replace_select, select, where_,
};
pub use crate::update::{Assignment, UpdateStatement, update};
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
pub use crate::values::{ValuesStatement, values};
pub use crate::writer::{
    BinaryExpr, BoxedWriter, FormatString, FragmentList, Ident, Param, RawSql, SqlWriter, Subquery,
    build, ident, param, raw, subquery, where_and,
};
