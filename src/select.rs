//! SelectStatement：构建 SELECT 语句，并支持把另一个 SelectStatement 的修改合并进来（`apply`）。

use crate::arg::{Arg, IntoArgs};
use crate::args::{Args, BuildError};
use crate::clause::{Accumulating, Singular};
use crate::writer::{BoxedWriter, FormatString, FragmentList, SqlWriter};

/// SELECT 语句。
///
/// 子句分三类：
/// - 累加：`select`/`distinct_on`/`where_`/`order`，按调用顺序追加；
/// - 先替换再累加：`replace_select`/`replace_order`，清空该子句之前的内容；
/// - 后写覆盖：`distinct`/`from`/`limit`/`offset`。
#[derive(Debug, Clone)]
pub struct SelectStatement {
    distinct: Singular<bool>,
    distinct_on: Accumulating,
    select_list: Accumulating,
    from: Singular<BoxedWriter>,
    where_list: Accumulating,
    order_list: Accumulating,
    limit: Singular<i64>,
    offset: Singular<i64>,
}

impl Default for SelectStatement {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectStatement {
    pub fn new() -> Self {
        Self {
            distinct: Singular::default(),
            distinct_on: Accumulating::new(FragmentList::new(" distinct on (", ", ", ")")),
            select_list: Accumulating::new(FragmentList::new(" ", ", ", "")),
            from: Singular::default(),
            where_list: Accumulating::new(FragmentList::where_list()),
            order_list: Accumulating::new(FragmentList::new(" order by ", ", ", "")),
            limit: Singular::default(),
            offset: Singular::default(),
        }
    }

    pub fn build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        crate::writer::build(self)
    }

    pub fn select(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.select_expr(FormatString::new(template, args))
    }

    pub fn select_expr(&mut self, expr: impl SqlWriter + 'static) -> &mut Self {
        self.select_list.push(Box::new(expr));
        self
    }

    /// ReplaceSelect：丢弃已有的 select 列表，之后的 `select` 会追加在它后面。
    pub fn replace_select(
        &mut self,
        template: impl Into<String>,
        args: impl IntoArgs,
    ) -> &mut Self {
        self.select_list
            .replace(Box::new(FormatString::new(template, args)));
        self
    }

    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct.set(distinct);
        self
    }

    /// DistinctOn：追加到 `distinct on (...)` 列表。
    pub fn distinct_on(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.distinct_on
            .push(Box::new(FormatString::new(template, args)));
        self
    }

    pub fn from(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.from_expr(FormatString::new(template, args))
    }

    /// 用任意片段作为 FROM，比如 `ident(["public", "people"])` 或 `subquery(stmt).alias("t")`。
    pub fn from_expr(&mut self, expr: impl SqlWriter + 'static) -> &mut Self {
        self.from.set(Box::new(expr));
        self
    }

    pub fn where_(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.where_expr(FormatString::new(template, args))
    }

    pub fn where_expr(&mut self, cond: impl SqlWriter + 'static) -> &mut Self {
        self.where_list.push(Box::new(cond));
        self
    }

    pub fn order(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.order_list
            .push(Box::new(FormatString::new(template, args)));
        self
    }

    pub fn replace_order(
        &mut self,
        template: impl Into<String>,
        args: impl IntoArgs,
    ) -> &mut Self {
        self.order_list
            .replace(Box::new(FormatString::new(template, args)));
        self
    }

    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit.set(limit);
        self
    }

    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset.set(offset);
        self
    }

    /// Apply：在当前语句上重放 `other` 的修改。
    ///
    /// `other` 做过替换的子句会先被清空；只累加过的子句只追加；
    /// 后写覆盖的子句只有在 `other` 设置过时才覆盖。
    pub fn apply(&mut self, other: &SelectStatement) -> &mut Self {
        self.distinct.apply(&other.distinct);
        self.distinct_on.apply(&other.distinct_on);
        self.select_list.apply(&other.select_list);
        self.from.apply(&other.from);
        self.where_list.apply(&other.where_list);
        self.order_list.apply(&other.order_list);
        self.limit.apply(&other.limit);
        self.offset.apply(&other.offset);
        self
    }
}

impl SqlWriter for SelectStatement {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        buf.push_str("select");

        // distinct on 本身已隐含 distinct
        if self.distinct_on.is_empty() && self.distinct.get().copied().unwrap_or(false) {
            buf.push_str(" distinct");
        }
        self.distinct_on.write_sql(buf, args)?;

        if self.select_list.is_empty() {
            buf.push_str(" *");
        } else {
            self.select_list.write_sql(buf, args)?;
        }

        if let Some(from) = self.from.get() {
            buf.push_str(" from ");
            from.write_sql(buf, args)?;
        }

        self.where_list.write_sql(buf, args)?;
        self.order_list.write_sql(buf, args)?;

        if let Some(limit) = self.limit.get() {
            buf.push_str(" limit ");
            buf.push_str(&limit.to_string());
        }
        if let Some(offset) = self.offset.get() {
            buf.push_str(" offset ");
            buf.push_str(&offset.to_string());
        }
        Ok(())
    }
}

pub fn select(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.select(template, args);
    s
}

pub fn replace_select(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.replace_select(template, args);
    s
}

pub fn distinct(distinct: bool) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.distinct(distinct);
    s
}

pub fn distinct_on(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.distinct_on(template, args);
    s
}

pub fn from(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.from(template, args);
    s
}

pub fn where_(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.where_(template, args);
    s
}

pub fn order(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.order(template, args);
    s
}

pub fn replace_order(template: impl Into<String>, args: impl IntoArgs) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.replace_order(template, args);
    s
}

pub fn limit(limit: i64) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.limit(limit);
    s
}

pub fn offset(offset: i64) -> SelectStatement {
    let mut s = SelectStatement::new();
    s.offset(offset);
    s
}
