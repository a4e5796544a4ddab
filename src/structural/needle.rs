use smallvec::SmallVec;

/// 绝大多数 key / 标签名都很短，拼出来的 needle 放在栈上即可，超出时才落到堆上
pub(crate) const INLINE_NEEDLE: usize = 64;

pub(crate) type Needle = SmallVec<[u8; INLINE_NEEDLE]>;

/// `prefix + name + suffix`。三段都是合法 UTF-8，所以匹配位置一定在 char 边界上。
pub(crate) fn wrap(prefix: &str, name: &str, suffix: &str) -> Needle {
    let mut out = Needle::with_capacity(prefix.len() + name.len() + suffix.len());
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(suffix.as_bytes());
    out
}

/// `"name"`
#[inline]
pub(crate) fn quoted(name: &str) -> Needle {
    wrap("\"", name, "\"")
}

/// `<name`，后面可能跟属性
#[inline]
pub(crate) fn open_tag(name: &str) -> Needle {
    wrap("<", name, "")
}

/// `</name>`
#[inline]
pub(crate) fn close_tag(name: &str) -> Needle {
    wrap("</", name, ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_needles_stay_inline() {
        let n = quoted("name");
        assert_eq!(n.as_slice(), b"\"name\"");
        assert!(!n.spilled());
        assert_eq!(close_tag("t").as_slice(), b"</t>");
    }

    #[test]
    fn long_needles_spill() {
        let name = "x".repeat(INLINE_NEEDLE);
        let n = open_tag(&name);
        assert!(n.spilled());
        assert_eq!(n.len(), INLINE_NEEDLE + 1);
    }
}
