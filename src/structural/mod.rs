//! 在游标原语之上组合出来的 JSON / XML 查找，不做任何语法校验。

pub mod json;
pub(crate) mod needle;
pub mod xml;
