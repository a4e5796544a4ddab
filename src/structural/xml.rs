use super::needle;
use crate::error::SeekError;
use crate::utils::cursor::{collapse, Cursor, MoveMode};
use crate::utils::scan;

/// 一个标签在当前视图中的位置（相对偏移）
struct TagSpan {
    start: usize,
    close_start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// `<name` 之后第一个 `</name>`。纯文本匹配，`<name` 也会命中 `<names>`。
    fn locate_xml_tag(&self, name: &str) -> Result<TagSpan, SeekError> {
        let view = self.as_str().as_bytes();
        let open = needle::open_tag(name);
        let close = needle::close_tag(name);

        let start = scan::find(view, &open).ok_or(SeekError::NotFound)?;
        let search_from = start + open.len();
        let close_start = scan::find(&view[search_from..], &close)
            .map(|rel| search_from + rel)
            .ok_or(SeekError::NotFound)?;

        Ok(TagSpan {
            start,
            close_start,
            end: close_start + close.len(),
        })
    }

    pub fn try_xml_tag(&mut self, name: &str, mode: MoveMode) -> Result<Cursor<'a>, SeekError> {
        let span = self.locate_xml_tag(name)?;
        let out = self.sub(span.start, span.end);
        self.apply(mode, span.start, span.end);
        Ok(out)
    }

    /// 整个标签，包括标签名、属性和结束标签
    pub fn xml_tag(&mut self, name: &str, mode: MoveMode) -> Cursor<'a> {
        collapse(self.try_xml_tag(name, mode), "xml_tag")
    }

    pub fn try_xml_tag_body(&mut self, name: &str, mode: MoveMode) -> Result<Cursor<'a>, SeekError> {
        let span = self.locate_xml_tag(name)?;
        let tag = &self.as_str().as_bytes()[span.start..span.end];
        // 结束标签以 '>' 结尾，所以这里一定能找到
        let gt = scan::find(tag, b">").ok_or(SeekError::Malformed)?;
        let body_start = span.start + gt + 1;
        if body_start > span.close_start {
            // e.g. `<t</t>`
            return Err(SeekError::Malformed);
        }

        let out = self.sub(body_start, span.close_start);
        self.apply(mode, span.start, span.end);
        Ok(out)
    }

    /// 标签内容：开始标签的第一个 `>` 之后到结束标签之前
    pub fn xml_tag_body(&mut self, name: &str, mode: MoveMode) -> Cursor<'a> {
        collapse(self.try_xml_tag_body(name, mode), "xml_tag_body")
    }

    pub fn try_xml_attr(&self, name: &str) -> Result<Cursor<'a>, SeekError> {
        let mut copy = *self;
        copy.try_seek_to(name, MoveMode::MoveAfter)?;
        copy.skip_whitespace();
        copy.expect("=");
        copy.skip_whitespace();
        copy.try_extract_between("\"", "\"", MoveMode::None)
    }

    /// 属性值（双引号之间的内容，不做反转义）。在副本上操作，`self` 不动。
    pub fn xml_attr(&self, name: &str) -> Cursor<'a> {
        collapse(self.try_xml_attr(name), "xml_attr")
    }
}
