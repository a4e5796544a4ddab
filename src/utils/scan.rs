//! 字节级扫描原语。
//!
//! 所有函数都只返回相对于输入切片的偏移量，不持有也不复制数据。
//! 只要 needle / 分隔符本身是合法 UTF-8，返回的偏移量一定落在 char 边界上。

use crate::error::SeekError;
use memchr::{memchr, memchr2, memchr3, memmem};

/// C locale 下 `isspace` 认可的字符：空格、\t、\n、\v、\f、\r
#[inline(always)]
pub fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// 前导空白的长度
#[inline]
pub fn whitespace_len(input: &[u8]) -> usize {
    input.iter().take_while(|&&b| is_c_space(b)).count()
}

/// 朴素前向子串查找（memmem 内部会按 needle 长度选择策略）
#[inline]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memmem::find(haystack, needle)
}

/// 找到 `set` 中任一字符第一次出现的位置，返回 (位置, 该字符的字节长度)。
pub fn find_one_of(haystack: &str, set: &str) -> Option<(usize, usize)> {
    let bytes = haystack.as_bytes();
    if !set.is_ascii() {
        // 非 ASCII 字符集走逐字符比较
        return haystack
            .char_indices()
            .find(|(_, c)| set.contains(*c))
            .map(|(i, c)| (i, c.len_utf8()));
    }

    let pos = match set.as_bytes() {
        [] => None,
        [a] => memchr(*a, bytes),
        [a, b] => memchr2(*a, *b, bytes),
        [a, b, c] => memchr3(*a, *b, *c, bytes),
        wide => {
            let table = ByteSet::new(wide);
            bytes.iter().position(|&b| table.contains(b))
        }
    };
    pos.map(|i| (i, 1))
}

/// 256 位的字节集合，字符集超过 memchr3 能处理的宽度时使用
struct ByteSet([bool; 256]);

impl ByteSet {
    fn new(members: &[u8]) -> Self {
        let mut table = [false; 256];
        for &b in members {
            table[b as usize] = true;
        }
        ByteSet(table)
    }

    #[inline(always)]
    fn contains(&self, b: u8) -> bool {
        self.0[b as usize]
    }
}

/// 带深度计数的括号匹配。
///
/// 返回从第一个 `open` 开始、到与之配对的 `close` 结束（包含两端）的区间 `(start, end)`，
/// `end` 为开区间。不识别字符串字面量：引号里的分隔符同样计入深度。
/// `open == close` 时深度只增不减，结果总是 `Unbalanced`。
pub fn balanced(haystack: &str, open: char, close: char) -> Result<(usize, usize), SeekError> {
    if open.is_ascii() && close.is_ascii() {
        return balanced_ascii(haystack.as_bytes(), open, close);
    }

    let mut chars = haystack.char_indices();
    let start = chars
        .by_ref()
        .find(|&(_, c)| c == open)
        .map(|(i, _)| i)
        .ok_or(SeekError::NotFound)?;

    let mut depth = 1usize;
    for (i, c) in chars {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok((start, i + c.len_utf8()));
            }
        }
    }
    Err(SeekError::Unbalanced { open, at: start })
}

/// ASCII 快速路径：用 memchr2 直接跳到下一个分隔符
fn balanced_ascii(bytes: &[u8], open: char, close: char) -> Result<(usize, usize), SeekError> {
    let (o, c) = (open as u8, close as u8);
    let start = memchr(o, bytes).ok_or(SeekError::NotFound)?;

    let mut depth = 1usize;
    let mut i = start + 1;
    while let Some(rel) = memchr2(o, c, &bytes[i..]) {
        let at = i + rel;
        i = at + 1;
        if bytes[at] == o {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Ok((start, i));
            }
        }
    }
    Err(SeekError::Unbalanced { open, at: start })
}

/// C locale 数字前缀：空白 + 可选符号 + 十进制数字。
///
/// 返回 `(token_start, token_end)`，`token_start` 已跳过前导空白、指向符号或第一位数字。
/// 没有数字时返回 `None`（此时调用方不应移动游标）。
pub fn numeric_token(input: &[u8], allow_minus: bool) -> Option<(usize, usize)> {
    let start = whitespace_len(input);
    let mut end = start;

    match input.get(end) {
        Some(b'+') => end += 1,
        Some(b'-') if allow_minus => end += 1,
        _ => {}
    }

    let digits = input[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    Some((start, end + digits))
}

/// 把字节数向下取整到 char 边界，保证切片永远是合法 UTF-8
#[inline]
pub fn floor_char_boundary(s: &str, n: usize) -> usize {
    if n >= s.len() {
        return s.len();
    }
    let mut n = n;
    while !s.is_char_boundary(n) {
        n -= 1;
    }
    n
}
