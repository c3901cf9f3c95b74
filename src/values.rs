//! ValuesStatement：`values (...), (...)` 行列表，可作为 INSERT 的数据来源。

use crate::arg::{Arg, IntoArgs};
use crate::args::{Args, BuildError};
use crate::writer::{BoxedWriter, Param, SqlWriter};

/// 没有行或含空行时 build 失败（[`BuildError::EmptyValues`]）。
#[derive(Debug, Clone, Default)]
pub struct ValuesStatement {
    rows: Vec<Vec<BoxedWriter>>,
}

impl ValuesStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row：追加一行，每个值都作为绑定参数。
    pub fn row(&mut self, values: impl IntoArgs) -> &mut Self {
        let row = values
            .into_args()
            .into_iter()
            .map(|v| Box::new(Param(v)) as BoxedWriter)
            .collect();
        self.rows.push(row);
        self
    }

    /// RowExprs：追加一行任意片段（例如 `raw("default")`、`raw("now()")`）。
    pub fn row_exprs(&mut self, exprs: Vec<BoxedWriter>) -> &mut Self {
        self.rows.push(exprs);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        crate::writer::build(self)
    }
}

impl SqlWriter for ValuesStatement {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        if self.rows.is_empty() || self.rows.iter().any(Vec::is_empty) {
            return Err(BuildError::EmptyValues);
        }

        buf.push_str("values ");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push('(');
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    buf.push_str(", ");
                }
                v.write_sql(buf, args)?;
            }
            buf.push(')');
        }
        Ok(())
    }
}

pub fn values() -> ValuesStatement {
    ValuesStatement::new()
}
