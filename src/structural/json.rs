use super::needle;
use crate::error::SeekError;
use crate::utils::cursor::{collapse, Cursor, MoveMode};

/// 裸值（数字、true/false/null）在这些字符处结束
pub const JSON_VALUE_TERMINATORS: &str = ", \r\n]}";

impl<'a> Cursor<'a> {
    /// 按名字取 JSON 属性的值：字符串、数字、数组或对象。
    ///
    /// 这是启发式扫描而不是 JSON 解析：取 `"name"` 的第一次文本出现，
    /// 不关心它位于哪一层对象，也不校验整个文档。字符串值不做反转义。
    /// 在副本上操作，`self` 永远不会移动。
    pub fn try_json_property(&self, name: &str) -> Result<Cursor<'a>, SeekError> {
        let mut copy = *self;
        copy.seek_bytes(&needle::quoted(name), MoveMode::MoveAfter)?;

        copy.skip_whitespace();
        if !copy.expect(":") {
            return Err(SeekError::Expected(':'));
        }

        copy.skip_whitespace();
        if copy.expect("\"") {
            return copy.try_extract_to("\"", MoveMode::None);
        }
        if copy.starts_with("[") {
            return copy.try_extract_balanced('[', ']', MoveMode::None);
        }
        if copy.starts_with("{") {
            return copy.try_extract_balanced('{', '}', MoveMode::None);
        }

        copy.try_extract_until_one_of(JSON_VALUE_TERMINATORS, MoveMode::None)
    }

    pub fn json_property(&self, name: &str) -> Cursor<'a> {
        collapse(self.try_json_property(name), "json_property")
    }

    /// 逐层进入：`["a", "b"]` 先取 `a` 的值，再在其中取 `b`
    pub fn json_path(&self, path: &[&str]) -> Cursor<'a> {
        let found = path
            .iter()
            .try_fold(*self, |scope, name| scope.try_json_property(name));
        collapse(found, "json_path")
    }
}
