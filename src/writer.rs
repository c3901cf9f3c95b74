//! SqlWriter：所有 SQL 片段共用的渲染协议，以及 `build` 入口。
//!
//! 每个片段把自己写进同一个输出缓冲区，需要绑定的值统一交给同一个 [`Args`]，
//! 因此整条语句（包括嵌套的子语句）共享一套 `$N` 编号。

use crate::arg::{Arg, IntoArgs};
use crate::args::{Args, BuildError};
use crate::ident::sanitize_identifier;
use dyn_clone::DynClone;
use std::fmt;

/// 可渲染为 SQL 的片段。
///
/// 渲染过程只通过 `args` 修改共享状态，片段本身不可变，可以在多次 build 之间复用。
pub trait SqlWriter: DynClone + fmt::Debug {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError>;
}

dyn_clone::clone_trait_object!(SqlWriter);

pub type BoxedWriter = Box<dyn SqlWriter>;

impl SqlWriter for Box<dyn SqlWriter> {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        (**self).write_sql(buf, args)
    }
}

/// Build：用一张新的参数表渲染 `writer`，返回 SQL 文本与按占位符排列的参数。
pub fn build<W>(writer: &W) -> Result<(String, Vec<Arg>), BuildError>
where
    W: SqlWriter + ?Sized,
{
    let mut buf = String::new();
    let mut args = Args::new();

    if let Err(err) = writer.write_sql(&mut buf, &mut args) {
        tracing::debug!(error = %err, "failed to build sql");
        return Err(err);
    }

    tracing::trace!(sql = %buf, args = args.len(), "built sql");
    Ok((buf, args.into_values()))
}

/// 原样拼入的 SQL 文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql(pub String);

pub fn raw(sql: impl Into<String>) -> RawSql {
    RawSql(sql.into())
}

impl SqlWriter for RawSql {
    fn write_sql(&self, buf: &mut String, _args: &mut Args) -> Result<(), BuildError> {
        buf.push_str(&self.0);
        Ok(())
    }
}

/// 标识符（支持 `schema.table` 这类多段路径），渲染时逐段加引号。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(pub Vec<String>);

pub fn ident(parts: impl IntoIterator<Item = impl Into<String>>) -> Ident {
    Ident(parts.into_iter().map(Into::into).collect())
}

impl SqlWriter for Ident {
    fn write_sql(&self, buf: &mut String, _args: &mut Args) -> Result<(), BuildError> {
        buf.push_str(&sanitize_identifier(&self.0));
        Ok(())
    }
}

/// 单个绑定参数，渲染为它在参数表中的占位符。
#[derive(Debug, Clone, PartialEq)]
pub struct Param(pub Arg);

pub fn param(value: impl Into<Arg>) -> Param {
    Param(value.into())
}

impl SqlWriter for Param {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        let p = args.use_value(self.0.clone());
        buf.push_str(&p.to_string());
        Ok(())
    }
}

/// `(left op right)`，总是带括号以保证嵌套时的优先级。
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    left: BoxedWriter,
    op: String,
    right: BoxedWriter,
}

impl BinaryExpr {
    pub fn new(
        left: impl SqlWriter + 'static,
        op: impl Into<String>,
        right: impl SqlWriter + 'static,
    ) -> Self {
        Self {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }
}

impl SqlWriter for BinaryExpr {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        buf.push('(');
        self.left.write_sql(buf, args)?;
        buf.push(' ');
        buf.push_str(&self.op);
        buf.push(' ');
        self.right.write_sql(buf, args)?;
        buf.push(')');
        Ok(())
    }
}

/// 子查询：`(inner)` 或 `(inner) as alias`，与外层语句共享参数表。
#[derive(Debug, Clone)]
pub struct Subquery {
    inner: BoxedWriter,
    alias: Option<String>,
}

pub fn subquery(inner: impl SqlWriter + 'static) -> Subquery {
    Subquery {
        inner: Box::new(inner),
        alias: None,
    }
}

impl Subquery {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl SqlWriter for Subquery {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        buf.push('(');
        self.inner.write_sql(buf, args)?;
        buf.push(')');
        if let Some(alias) = &self.alias {
            buf.push_str(" as ");
            buf.push_str(alias);
        }
        Ok(())
    }
}

/// 含 `?` 标记的模板片段，标记按顺序对应 `args`。
#[derive(Debug, Clone, PartialEq)]
pub struct FormatString {
    template: String,
    args: Vec<Arg>,
}

impl FormatString {
    pub fn new(template: impl Into<String>, args: impl IntoArgs) -> Self {
        Self {
            template: template.into(),
            args: args.into_args(),
        }
    }
}

impl SqlWriter for FormatString {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        let sql = args.format(&self.template, &self.args)?;
        buf.push_str(&sql);
        Ok(())
    }
}

/// 子片段列表：非空时输出 `prefix`、以 `separator` 连接的子片段、`suffix`；为空时什么都不输出。
#[derive(Debug, Clone)]
pub struct FragmentList {
    prefix: &'static str,
    separator: &'static str,
    suffix: &'static str,
    parenthesize: bool,
    items: Vec<BoxedWriter>,
}

impl FragmentList {
    pub fn new(prefix: &'static str, separator: &'static str, suffix: &'static str) -> Self {
        Self {
            prefix,
            separator,
            suffix,
            parenthesize: false,
            items: Vec::new(),
        }
    }

    /// ` where (a) and (b)`：每个条件单独加括号。
    pub fn where_list() -> Self {
        Self {
            parenthesize: true,
            ..Self::new(" where ", " and ", "")
        }
    }

    /// ` returning a, b`
    pub fn returning_list() -> Self {
        Self::new(" returning ", ", ", "")
    }

    pub fn push(&mut self, item: impl SqlWriter + 'static) {
        self.items.push(Box::new(item));
    }

    pub(crate) fn push_boxed(&mut self, item: BoxedWriter) {
        self.items.push(item);
    }

    pub fn extend_from(&mut self, other: &FragmentList) {
        self.items.extend(other.items.iter().cloned());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SqlWriter for FragmentList {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        if self.items.is_empty() {
            return Ok(());
        }

        buf.push_str(self.prefix);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                buf.push_str(self.separator);
            }
            if self.parenthesize {
                buf.push('(');
            }
            item.write_sql(buf, args)?;
            if self.parenthesize {
                buf.push(')');
            }
        }
        buf.push_str(self.suffix);
        Ok(())
    }
}

/// 合并 WHERE 条件：没有旧条件时直接返回新条件，否则得到 `(old and new)`。
pub fn where_and(current: Option<BoxedWriter>, cond: BoxedWriter) -> BoxedWriter {
    match current {
        None => cond,
        Some(left) => Box::new(BinaryExpr {
            left,
            op: "and".to_string(),
            right: cond,
        }),
    }
}
