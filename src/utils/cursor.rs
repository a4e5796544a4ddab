use super::scan;
use crate::error::SeekError;
use std::fmt;
use std::str::FromStr;

/// 匹配成功后游标如何移动。默认不动（peek 语义）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveMode {
    #[default]
    None,
    /// 丢弃匹配之前的内容，匹配本身仍然可见
    MoveBefore,
    /// 连同匹配一起丢弃
    MoveAfter,
}

impl FromStr for MoveMode {
    type Err = SeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(MoveMode::None),
            "before" | "move_before" => Ok(MoveMode::MoveBefore),
            "after" | "move_after" => Ok(MoveMode::MoveAfter),
            other => Err(SeekError::UnknownMoveMode(other.to_string())),
        }
    }
}

/// 对不可变文本的零拷贝游标。
///
/// `source` 是构造时传入的完整缓冲区（锚点），`start..end` 是尚未消费的视图。
/// 游标是 `Copy` 的：复制只复制两个下标和一个引用，从不复制文本，
/// 这也是推测解析的唯一手段（复制、尝试、成功后再采纳）。
///
/// 所有位置都是字节偏移。字面量和分隔符的匹配位置天然落在 char 边界上，
/// 按数量截取的操作会向下取整到 char 边界。
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    #[inline(always)]
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            start: 0,
            end: input.len(),
        }
    }

    /// 调用方保证 `start <= end <= source.len()` 且两端都在 char 边界上
    #[inline(always)]
    pub(crate) fn from_parts(source: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.len());
        Self { source, start, end }
    }

    #[cfg_attr(not(feature = "python"), allow(dead_code))]
    #[inline(always)]
    pub(crate) fn bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// 可见部分
    #[inline(always)]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// 可见部分的拷贝
    pub fn to_text(&self) -> String {
        self.as_str().to_owned()
    }

    /// 构造时传入的完整缓冲区
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// 相对原始缓冲区已经消费了多少字节，例如用于 `buffer.commit(offset)`
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// 与 [`Cursor::offset`] 完全相同，两个名字都保留
    #[inline]
    pub fn original_position(&self) -> usize {
        self.offset()
    }

    /// 跳过 `n` 个字节（超出时截断到末尾，不会切开多字节字符）
    pub fn skip(&mut self, n: usize) {
        self.advance(scan::floor_char_boundary(self.as_str(), n));
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.len());
        self.start += n;
    }

    /// 相对当前视图 `[from, to)` 的子游标，锚点保持不变
    #[inline(always)]
    pub(crate) fn sub(&self, from: usize, to: usize) -> Cursor<'a> {
        Cursor::from_parts(self.source, self.start + from, self.start + to)
    }

    /// 唯一的移动入口：`before` / `after` 是匹配区域相对当前视图的起止位置
    #[inline(always)]
    pub(crate) fn apply(&mut self, mode: MoveMode, before: usize, after: usize) {
        match mode {
            MoveMode::None => {}
            MoveMode::MoveBefore => self.advance(before),
            MoveMode::MoveAfter => self.advance(after),
        }
    }

    /// 检查接下来的内容，匹配则越过 `expected` 并返回 true
    pub fn expect(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.advance(expected.len());
            return true;
        }
        false
    }

    /// 只检查，不移动
    #[inline]
    pub fn starts_with(&self, expected: &str) -> bool {
        self.as_str().starts_with(expected)
    }

    pub fn try_seek_to(&mut self, expected: &str, mode: MoveMode) -> Result<(), SeekError> {
        self.seek_bytes(expected.as_bytes(), mode)
    }

    /// 找到 `expected` 的第一次出现并按 `mode` 移动；找不到时视图不变
    pub fn seek_to(&mut self, expected: &str, mode: MoveMode) -> bool {
        settle(self.try_seek_to(expected, mode), "seek_to").is_some()
    }

    pub(crate) fn seek_bytes(&mut self, needle: &[u8], mode: MoveMode) -> Result<(), SeekError> {
        let pos = scan::find(self.as_str().as_bytes(), needle).ok_or(SeekError::NotFound)?;
        self.apply(mode, pos, pos + needle.len());
        Ok(())
    }

    pub fn try_extract_between(
        &mut self,
        from: &str,
        to: &str,
        mode: MoveMode,
    ) -> Result<Cursor<'a>, SeekError> {
        let view = self.as_str().as_bytes();
        let from_pos = scan::find(view, from.as_bytes()).ok_or(SeekError::NotFound)?;
        let body = from_pos + from.len();
        let to_pos = scan::find(&view[body..], to.as_bytes())
            .map(|rel| body + rel)
            .ok_or(SeekError::NotFound)?;

        let out = self.sub(body, to_pos);
        self.apply(mode, from_pos, to_pos + to.len());
        Ok(out)
    }

    /// 提取 `from` 与 `to` 之间的内容（不含两端）。
    /// `MoveBefore` 停在 `from` 开头，`MoveAfter` 越过 `to`。
    pub fn extract_between(&mut self, from: &str, to: &str, mode: MoveMode) -> Cursor<'a> {
        collapse(self.try_extract_between(from, to, mode), "extract_between")
    }

    pub fn try_extract_to(&mut self, to: &str, mode: MoveMode) -> Result<Cursor<'a>, SeekError> {
        let pos = scan::find(self.as_str().as_bytes(), to.as_bytes()).ok_or(SeekError::NotFound)?;
        let out = self.sub(0, pos);
        self.apply(mode, pos, pos + to.len());
        Ok(out)
    }

    /// 从当前位置提取到 `to` 为止（不含 `to`）
    pub fn extract_to(&mut self, to: &str, mode: MoveMode) -> Cursor<'a> {
        collapse(self.try_extract_to(to, mode), "extract_to")
    }

    pub fn try_extract_until_one_of(
        &mut self,
        charset: &str,
        mode: MoveMode,
    ) -> Result<Cursor<'a>, SeekError> {
        let (pos, width) = scan::find_one_of(self.as_str(), charset).ok_or(SeekError::NotFound)?;
        let out = self.sub(0, pos);
        if mode == MoveMode::MoveAfter {
            self.advance(pos + width);
        }
        Ok(out)
    }

    /// 提取到 `charset` 中任一字符为止。
    ///
    /// 只有 `MoveAfter` 会移动（恰好越过一个分隔符），`MoveBefore` 与 `None` 相同。
    pub fn extract_until_one_of(&mut self, charset: &str, mode: MoveMode) -> Cursor<'a> {
        collapse(
            self.try_extract_until_one_of(charset, mode),
            "extract_until_one_of",
        )
    }

    /// 取前 `count` 个字节，不足时截断，从不失败。只有 `MoveAfter` 会移动。
    pub fn extract_len(&mut self, count: usize, mode: MoveMode) -> Cursor<'a> {
        let n = scan::floor_char_boundary(self.as_str(), count);
        let out = self.sub(0, n);
        if mode == MoveMode::MoveAfter {
            self.advance(n);
        }
        out
    }

    pub fn try_extract_balanced(
        &mut self,
        open: char,
        close: char,
        mode: MoveMode,
    ) -> Result<Cursor<'a>, SeekError> {
        let (from, to) = scan::balanced(self.as_str(), open, close).map_err(|err| match err {
            SeekError::Unbalanced { open, at } => SeekError::Unbalanced {
                open,
                at: self.start + at,
            },
            other => other,
        })?;
        let out = self.sub(from, to);
        self.apply(mode, from, to);
        Ok(out)
    }

    /// 从第一个 `open` 提取到与之配对的 `close`（包含两端）。
    ///
    /// 遇到嵌套的 `open` 时继续寻找对应的 `close`，适合截取方括号/花括号包围的对象。
    /// 不识别字符串字面量，引号里的分隔符同样计入深度。
    pub fn extract_balanced(&mut self, open: char, close: char, mode: MoveMode) -> Cursor<'a> {
        collapse(
            self.try_extract_balanced(open, close, mode),
            "extract_balanced",
        )
    }

    /// 跳过所有前导空白（C locale）
    pub fn skip_whitespace(&mut self) {
        let n = scan::whitespace_len(self.as_str().as_bytes());
        self.advance(n);
    }

    /// 当前状态的快照，配合 [`Cursor::restore`] 手动回滚
    #[inline]
    pub fn snapshot(&self) -> Cursor<'a> {
        *self
    }

    pub fn restore(&mut self, snapshot: Cursor<'a>) {
        debug_assert!(std::ptr::eq(self.source, snapshot.source));
        *self = snapshot;
    }

    /// 在副本上执行一串操作，只有闭包返回 `Some` 时才采纳副本的位置。
    ///
    /// 这是唯一的事务机制，没有自动回滚或撤销日志。
    pub fn transaction<T>(&mut self, f: impl FnOnce(&mut Cursor<'a>) -> Option<T>) -> Option<T> {
        let mut copy = *self;
        let out = f(&mut copy)?;
        *self = copy;
        Some(out)
    }
}

/// 把失败折叠成空游标
#[inline]
pub(crate) fn collapse<'a>(res: Result<Cursor<'a>, SeekError>, op: &str) -> Cursor<'a> {
    settle(res, op).unwrap_or_default()
}

#[inline]
pub(crate) fn settle<T>(res: Result<T, SeekError>, op: &str) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(err) => {
            log::trace!("{}: {}", op, err);
            None
        }
    }
}

impl Default for Cursor<'_> {
    fn default() -> Self {
        Cursor::new("")
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(input: &'a str) -> Self {
        Cursor::new(input)
    }
}

/// 缺失的输入归一化为空游标
impl<'a> From<Option<&'a str>> for Cursor<'a> {
    fn from(input: Option<&'a str>) -> Self {
        input.map(Cursor::new).unwrap_or_default()
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.start)
            .field("view", &self.as_str())
            .finish()
    }
}

impl PartialEq<str> for Cursor<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Cursor<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
