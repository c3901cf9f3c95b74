//! 子句状态：每个子句都带着自己的合并方式，`apply` 因此可以按“重放修改”的语义合并两个 builder。

use crate::args::{Args, BuildError};
use crate::writer::{BoxedWriter, FragmentList, SqlWriter};

/// 可整体替换、之后继续追加的子句（select 列表、order 列表等）。
///
/// `replaced` 记录这个 builder 是否对该子句做过替换；apply 时会先在目标上重放替换。
#[derive(Debug, Clone)]
pub(crate) struct Accumulating {
    replaced: bool,
    list: FragmentList,
}

impl Accumulating {
    pub(crate) fn new(list: FragmentList) -> Self {
        Self {
            replaced: false,
            list,
        }
    }

    pub(crate) fn push(&mut self, item: BoxedWriter) {
        self.list.push_boxed(item);
    }

    /// 丢弃之前累积的内容，以 `item` 作为新的起点。
    pub(crate) fn replace(&mut self, item: BoxedWriter) {
        self.list.clear();
        self.replaced = true;
        self.list.push_boxed(item);
    }

    pub(crate) fn apply(&mut self, other: &Accumulating) {
        if other.replaced {
            self.list.clear();
            self.replaced = true;
        }
        self.list.extend_from(&other.list);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl SqlWriter for Accumulating {
    fn write_sql(&self, buf: &mut String, args: &mut Args) -> Result<(), BuildError> {
        self.list.write_sql(buf, args)
    }
}

/// 后写覆盖的子句（distinct、limit、offset、from 等）；只有真正设置过才会在 apply 时覆盖目标。
#[derive(Debug, Clone)]
pub(crate) struct Singular<T>(Option<T>);

impl<T> Default for Singular<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Clone> Singular<T> {
    pub(crate) fn set(&mut self, v: T) {
        self.0 = Some(v);
    }

    pub(crate) fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub(crate) fn apply(&mut self, other: &Singular<T>) {
        if let Some(v) = &other.0 {
            self.0 = Some(v.clone());
        }
    }
}
