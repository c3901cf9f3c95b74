//! InsertStatement：构建 INSERT 语句。

use crate::arg::{Arg, IntoArgs};
use crate::args::{Args, BuildError};
use crate::row_map::RowMap;
use crate::writer::{BoxedWriter, FormatString, FragmentList, SqlWriter};

/// `insert into <table> [(cols)] <source>[ returning ...]`
///
/// `source` 一般是 [`ValuesStatement`](crate::ValuesStatement)，也可以是一个 SELECT；
/// 没有设置时输出 `default values`。
#[derive(Debug, Clone)]
pub struct InsertStatement {
    table: String,
    columns: Vec<String>,
    source: Option<BoxedWriter>,
    returning: FragmentList,
}

impl InsertStatement {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            source: None,
            returning: FragmentList::returning_list(),
        }
    }

    pub fn build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        crate::writer::build(self)
    }

    pub fn columns(&mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn values(&mut self, source: impl SqlWriter + 'static) -> &mut Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Data：用 RowMap 同时设置列和单行 values；空 RowMap 退化为 `default values`。
    pub fn data(&mut self, data: &RowMap) -> &mut Self {
        if data.is_empty() {
            self.columns.clear();
            self.source = None;
            return self;
        }

        let (columns, values) = data.insert_data();
        self.columns = columns;
        self.source = Some(Box::new(values));
        self
    }

    pub fn returning(&mut self, template: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.returning.push(FormatString::new(template, args));
        self
    }
}

impl SqlWriter for InsertStatement {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        buf.push_str("insert into ");
        buf.push_str(&self.table);

        if !self.columns.is_empty() {
            buf.push_str(" (");
            buf.push_str(&self.columns.join(", "));
            buf.push(')');
        }

        match &self.source {
            Some(source) => {
                buf.push(' ');
                source.write_sql(buf, args)?;
            }
            None => buf.push_str(" default values"),
        }

        self.returning.write_sql(buf, args)
    }
}

pub fn insert(table: impl Into<String>) -> InsertStatement {
    InsertStatement::new(table)
}
