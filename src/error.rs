use thiserror::Error;

/// 游标操作失败的原因。
///
/// 公开的“宽松”接口（`extract_*`、`json_property` 等）会把错误折叠成空游标或 `None`，
/// 需要区分失败原因时使用对应的 `try_*` 版本。
#[derive(Debug, Error)]
pub enum SeekError {
    /// 剩余视图中找不到字面量、字符或字符集
    #[error("pattern not found in remaining input")]
    NotFound,

    #[error("unbalanced `{open}` opened at byte {at}: input ended before it was closed")]
    Unbalanced { open: char, at: usize },

    #[error("expected `{0}`")]
    Expected(char),

    /// 两端都找到了，但围不出合法的区间
    #[error("malformed structure")]
    Malformed,

    #[error("no digits at current position")]
    NoDigits,

    #[error("number out of range")]
    Overflow,

    #[error("unknown move mode `{0}`")]
    UnknownMoveMode(String),

    #[error("failed to build anchor automaton: {0}")]
    Anchors(#[from] aho_corasick::BuildError),
}
