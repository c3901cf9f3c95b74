//! DeleteStatement：构建 DELETE 语句。

use crate::arg::{Arg, IntoArgs};
use crate::args::{Args, BuildError};
use crate::writer::{BoxedWriter, FormatString, FragmentList, SqlWriter, where_and};

/// `delete from <table>[ where ...][ returning ...]`
///
/// 多次 `where_` 通过 `where_and` 合并成 `(a and b)`。
#[derive(Debug, Clone)]
pub struct DeleteStatement {
    table: String,
    where_cond: Option<BoxedWriter>,
    returning: FragmentList,
}

impl DeleteStatement {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_cond: None,
            returning: FragmentList::returning_list(),
        }
    }

    pub fn build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        crate::writer::build(self)
    }

    pub fn where_(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.where_expr(FormatString::new(template, args))
    }

    pub fn where_expr(&mut self, cond: impl SqlWriter + 'static) -> &mut Self {
        self.where_cond = Some(where_and(self.where_cond.take(), Box::new(cond)));
        self
    }

    pub fn returning(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.returning.push(FormatString::new(template, args));
        self
    }

    /// Apply：追加 `other` 的 WHERE 条件与 RETURNING 列表（表名保持不变）。
    pub fn apply(&mut self, other: &DeleteStatement) -> &mut Self {
        if let Some(cond) = &other.where_cond {
            self.where_cond = Some(where_and(self.where_cond.take(), cond.clone()));
        }
        self.returning.extend_from(&other.returning);
        self
    }
}

impl SqlWriter for DeleteStatement {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        buf.push_str("delete from ");
        buf.push_str(&self.table);

        if let Some(cond) = &self.where_cond {
            buf.push_str(" where ");
            cond.write_sql(buf, args)?;
        }

        self.returning.write_sql(buf, args)
    }
}

pub fn delete(table: impl Into<String>) -> DeleteStatement {
    DeleteStatement::new(table)
}
