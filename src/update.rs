//! UpdateStatement：构建 UPDATE 语句。

use crate::arg::{Arg, IntoArgs};
use crate::args::{Args, BuildError};
use crate::row_map::RowMap;
use crate::writer::{BoxedWriter, FormatString, FragmentList, Param, SqlWriter, raw, where_and};

/// `left = right`
#[derive(Debug, Clone)]
pub struct Assignment {
    left: BoxedWriter,
    right: BoxedWriter,
}

impl Assignment {
    pub fn new(left: impl SqlWriter + 'static, right: impl SqlWriter + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl SqlWriter for Assignment {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        self.left.write_sql(buf, args)?;
        buf.push_str(" = ");
        self.right.write_sql(buf, args)
    }
}

/// `update <table> set a = $1, ...[ where ...][ returning ...]`
///
/// 没有任何赋值时 build 失败（[`BuildError::EmptyUpdate`]）。
#[derive(Debug, Clone)]
pub struct UpdateStatement {
    table: String,
    assignments: Vec<Assignment>,
    where_cond: Option<BoxedWriter>,
    returning: FragmentList,
}

impl UpdateStatement {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            where_cond: None,
            returning: FragmentList::returning_list(),
        }
    }

    pub fn build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        crate::writer::build(self)
    }

    /// Set：`column = $n`。
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Arg>) -> &mut Self {
        self.assignments
            .push(Assignment::new(raw(column), Param(value.into())));
        self
    }

    /// SetExpr：右侧是任意片段，例如 `raw("now()")` 或 `FormatString::new("n + ?", [1])`。
    pub fn set_expr(
        &mut self,
        column: impl Into<String>,
        expr: impl SqlWriter + 'static,
    ) -> &mut Self {
        self.assignments.push(Assignment::new(raw(column), expr));
        self
    }

    pub fn data(&mut self, data: &RowMap) -> &mut Self {
        self.assignments.extend(data.update_data());
        self
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
}

impl SqlWriter for UpdateStatement {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        if self.assignments.is_empty() {
            return Err(BuildError::EmptyUpdate {
                table: self.table.clone(),
            });
        }

        buf.push_str("update ");
        buf.push_str(&self.table);
        buf.push_str(" set ");
        for (i, a) in self.assignments.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            a.write_sql(buf, args)?;
        }

        if let Some(cond) = &self.where_cond {
            buf.push_str(" where ");
            cond.write_sql(buf, args)?;
        }

        self.returning.write_sql(buf, args)
    }
}

pub fn update(table: impl Into<String>) -> UpdateStatement {
    UpdateStatement::new(table)
}
