#![allow(non_local_definitions)]
use crate::utils::cursor::{Cursor, MoveMode};
use crate::SeekError;
use pyo3::prelude::*;
use std::sync::Arc;

impl From<SeekError> for PyErr {
    fn from(err: SeekError) -> PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Python 侧的游标。
///
/// pyclass 不能带生命周期，所以这里持有文本的 `Arc<str>` 和视图的下标；
/// 派生出来的游标共享同一个 `Arc`，依然不复制文本。
#[pyclass(name = "PatternSeeker")]
#[derive(Clone)]
pub struct PySeeker {
    text: Arc<str>,
    start: usize,
    end: usize,
}

impl PySeeker {
    fn view(&self) -> Cursor<'_> {
        Cursor::from_parts(&self.text, self.start, self.end)
    }

    /// 在临时游标上执行 `f`，然后把移动后的位置写回
    fn with_cursor<R>(&mut self, f: impl for<'t> FnOnce(&mut Cursor<'t>, &'t Arc<str>) -> R) -> R {
        let text = Arc::clone(&self.text);
        let mut cursor = Cursor::from_parts(&text, self.start, self.end);
        let out = f(&mut cursor, &text);
        (self.start, self.end) = cursor.bounds();
        out
    }

    fn derive(text: &Arc<str>, cursor: Cursor<'_>) -> PySeeker {
        // 失败时得到的是空游标（空源），下标 (0, 0) 对任何文本都合法
        let (start, end) = cursor.bounds();
        PySeeker {
            text: Arc::clone(text),
            start,
            end,
        }
    }
}

#[pymethods]
impl PySeeker {
    #[new]
    fn new(text: &str) -> Self {
        PySeeker {
            text: Arc::from(text),
            start: 0,
            end: text.len(),
        }
    }

    fn __len__(&self) -> usize {
        self.view().len()
    }

    fn __str__(&self) -> String {
        self.view().to_text()
    }

    fn __repr__(&self) -> String {
        format!("PatternSeeker({:?})", self.view().as_str())
    }

    fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    fn offset(&self) -> usize {
        self.view().offset()
    }

    fn expect(&mut self, expected: &str) -> bool {
        self.with_cursor(|c, _| c.expect(expected))
    }

    fn starts_with(&self, expected: &str) -> bool {
        self.view().starts_with(expected)
    }

    fn skip(&mut self, n: usize) {
        self.with_cursor(|c, _| c.skip(n))
    }

    fn skip_whitespace(&mut self) {
        self.with_cursor(|c, _| c.skip_whitespace())
    }

    #[pyo3(signature = (expected, mode = "none"))]
    fn seek_to(&mut self, expected: &str, mode: &str) -> PyResult<bool> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, _| c.seek_to(expected, mode)))
    }

    #[pyo3(signature = (start, end, mode = "none"))]
    fn extract_between(&mut self, start: &str, end: &str, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.extract_between(start, end, mode))))
    }

    #[pyo3(signature = (to, mode = "none"))]
    fn extract_to(&mut self, to: &str, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.extract_to(to, mode))))
    }

    #[pyo3(signature = (charset, mode = "none"))]
    fn extract_until_one_of(&mut self, charset: &str, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.extract_until_one_of(charset, mode))))
    }

    #[pyo3(signature = (count, mode = "none"))]
    fn extract_len(&mut self, count: usize, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.extract_len(count, mode))))
    }

    #[pyo3(signature = (open, close, mode = "none"))]
    fn extract_balanced(&mut self, open: char, close: char, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.extract_balanced(open, close, mode))))
    }

    fn take_u64(&mut self) -> Option<u64> {
        self.with_cursor(|c, _| c.take_u64())
    }

    fn take_i64(&mut self) -> Option<i64> {
        self.with_cursor(|c, _| c.take_i64())
    }

    fn json_property(&mut self, name: &str) -> PySeeker {
        self.with_cursor(|c, text| Self::derive(text, c.json_property(name)))
    }

    #[pyo3(signature = (name, mode = "none"))]
    fn xml_tag(&mut self, name: &str, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.xml_tag(name, mode))))
    }

    #[pyo3(signature = (name, mode = "none"))]
    fn xml_tag_body(&mut self, name: &str, mode: &str) -> PyResult<PySeeker> {
        let mode: MoveMode = mode.parse()?;
        Ok(self.with_cursor(|c, text| Self::derive(text, c.xml_tag_body(name, mode))))
    }

    fn xml_attr(&mut self, name: &str) -> PySeeker {
        self.with_cursor(|c, text| Self::derive(text, c.xml_attr(name)))
    }
}

#[pymodule]
fn pattern_seeker(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySeeker>()?;
    Ok(())
}
