//! 数字前缀解析。
//!
//! 规则与 C locale 下的 `strtoull` / `strtoll` 前缀解析一致：
//! 跳过前导空白，接受可选符号，然后是十进制数字。
//! 游标越过实际扫描到的字符，溢出时数字同样会被消费；
//! 没有数字时什么也不消费，连前导空白也保留。

use crate::error::SeekError;
use crate::utils::cursor::{settle, Cursor};
use crate::utils::scan;

impl<'a> Cursor<'a> {
    /// 扫描数字前缀，越过它并返回对应的文本（可能带符号）
    fn take_numeric_token(&mut self, allow_minus: bool) -> Result<&'a str, SeekError> {
        let view = self.as_str();
        let (start, end) =
            scan::numeric_token(view.as_bytes(), allow_minus).ok_or(SeekError::NoDigits)?;
        self.skip(end);
        Ok(&view[start..end])
    }

    /// 解析无符号数并移动游标。
    ///
    /// 这里有意与 `strtoull` 不同：`-5` 不会被取反回绕成 2^64-5，而是按无数字处理，游标不动。
    pub fn try_take_u64(&mut self) -> Result<u64, SeekError> {
        let token = self.take_numeric_token(false)?;
        // token 的形状已经校验过，这里只可能溢出
        token.parse::<u64>().map_err(|_| SeekError::Overflow)
    }

    pub fn take_u64(&mut self) -> Option<u64> {
        settle(self.try_take_u64(), "take_u64")
    }

    /// 失败时返回 `default`
    pub fn take_u64_or(&mut self, default: u64) -> u64 {
        self.take_u64().unwrap_or(default)
    }

    /// 解析有符号数并移动游标
    pub fn try_take_i64(&mut self) -> Result<i64, SeekError> {
        let token = self.take_numeric_token(true)?;
        token.parse::<i64>().map_err(|_| SeekError::Overflow)
    }

    pub fn take_i64(&mut self) -> Option<i64> {
        settle(self.try_take_i64(), "take_i64")
    }

    pub fn take_i64_or(&mut self, default: i64) -> i64 {
        self.take_i64().unwrap_or(default)
    }
}
