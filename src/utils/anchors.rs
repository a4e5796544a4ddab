use super::cursor::{settle, Cursor, MoveMode};
use crate::error::SeekError;
use aho_corasick::{AhoCorasick, MatchKind};

/// 预编译的一组锚点字面量。
///
/// 字段很少时朴素查找也够快，但锚点集合通常会被复用很多次，
/// 所以这里一次性构建 Aho-Corasick 自动机，之后每次查找都是单遍扫描。
#[derive(Debug, Clone)]
pub struct AnchorSet {
    ac: AhoCorasick,
    patterns: Vec<String>,
}

impl AnchorSet {
    pub fn new<I, P>(patterns: I) -> Result<Self, SeekError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        // LeftmostFirst: 同一位置有多个候选时，按传入顺序取第一个
        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&patterns)?;
        Ok(AnchorSet { ac, patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn pattern(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }
}

impl<'a> Cursor<'a> {
    /// 寻找最近的锚点，返回命中的锚点下标
    pub fn try_seek_any(&mut self, anchors: &AnchorSet, mode: MoveMode) -> Result<usize, SeekError> {
        let mat = anchors
            .ac
            .find(self.as_str().as_bytes())
            .ok_or(SeekError::NotFound)?;
        self.apply(mode, mat.start(), mat.end());
        Ok(mat.pattern().as_usize())
    }

    pub fn seek_any(&mut self, anchors: &AnchorSet, mode: MoveMode) -> Option<usize> {
        settle(self.try_seek_any(anchors, mode), "seek_any")
    }
}
