//! RowMap：列名到值的数据包，用来生成 INSERT 的列/值与 UPDATE 的赋值列表。
//!
//! 列按字典序输出，保证生成的 SQL 文本稳定。列名原样拼入，不做转义。

use crate::arg::Arg;
use crate::update::Assignment;
use crate::values::ValuesStatement;
use crate::writer::{Param, raw};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMap(BTreeMap<String, Arg>);

impl RowMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Arg>) -> &mut Self {
        self.0.insert(column.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 有序列名。
    pub fn columns(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// InsertData：返回列名以及只含一行的 `values (...)`。
    pub fn insert_data(&self) -> (Vec<String>, ValuesStatement) {
        let mut vs = ValuesStatement::new();
        vs.row(self.0.values().cloned().collect::<Vec<_>>());
        (self.columns(), vs)
    }

    /// UpdateData：每列一个 `column = $n` 赋值。
    pub fn update_data(&self) -> Vec<Assignment> {
        self.0
            .iter()
            .map(|(k, v)| Assignment::new(raw(k.as_str()), Param(v.clone())))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for RowMap
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
