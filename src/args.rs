//! Args：参数表。把绑定值去重并分配 `$1/$2/...` 位置占位符，同时把 `?` 模板编译成最终 SQL。

use crate::arg::Arg;
use crate::value::ValueKey;
use std::collections::HashMap;
use std::fmt;

/// 模板中代表“下一个参数”的标记字符。
pub const MARKER: char = '?';

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("format template `{template}` has {markers} markers but {args} args")]
    ArgCountMismatch {
        template: String,
        markers: usize,
        args: usize,
    },
    #[error("values list has no rows or an empty row")]
    EmptyValues,
    #[error("update of `{table}` has no assignments")]
    EmptyUpdate { table: String },
}

/// 位置占位符（从 1 开始），文本形式为 `$N`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placeholder(pub usize);

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Args 存储一次 build 过程中用到的全部参数。
///
/// 相等的值（按值比较）复用同一个占位符；编号按全局首次使用顺序递增。
/// 无法比较的值（valuer、`NaN`）每次都会分配新占位符。
#[derive(Debug, Default, Clone)]
pub struct Args {
    values: Vec<Arg>,
    index: HashMap<ValueKey, Placeholder>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use：返回 `arg` 的占位符，首次出现时追加到参数列表。
    pub fn use_value(&mut self, arg: impl Into<Arg>) -> Placeholder {
        let arg = arg.into();
        let key = arg.dedup_key();
        if let Some(p) = key.as_ref().and_then(|k| self.index.get(k)) {
            return *p;
        }

        self.values.push(arg);
        let p = Placeholder(self.values.len());
        if let Some(k) = key {
            self.index.insert(k, p);
        }
        p
    }

    /// Values：按首次使用顺序返回参数快照，`values()[i - 1]` 对应 `$i`。
    pub fn values(&self) -> Vec<Arg> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn into_values(self) -> Vec<Arg> {
        self.values
    }

    /// Format：把模板里的 `?` 从左到右依次替换成对应参数的占位符。
    ///
    /// - 编号取决于参数在整条语句中的首次使用，而不是模板内的位置。
    /// - 标记数与参数数不一致时返回 [`BuildError::ArgCountMismatch`]，不截断也不补齐。
    /// - 模板中无法表达字面量 `?`。
    pub fn format(&mut self, template: &str, args: &[Arg]) -> Result<String, BuildError> {
        let markers = template.matches(MARKER).count();
        if markers != args.len() {
            return Err(BuildError::ArgCountMismatch {
                template: template.to_string(),
                markers,
                args: args.len(),
            });
        }

        let mut out = String::with_capacity(template.len() + args.len() * 2);
        let mut it = args.iter();
        for c in template.chars() {
            if c != MARKER {
                out.push(c);
                continue;
            }
            // 数量已校验，这里一定有值
            if let Some(a) = it.next() {
                let p = self.use_value(a.clone());
                out.push_str(&p.to_string());
            }
        }
        Ok(out)
    }
}
