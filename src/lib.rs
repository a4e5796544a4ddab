//! 对小到中等规模文本做即兴结构化提取的零拷贝游标。
//!
//! [`Cursor`] 只是对调用方持有的字符串的一个视图，复制它没有任何成本；
//! 所有提取结果都是同一块缓冲区上的子视图，从不复制字符数据。
//!
//! ```
//! use pattern_seeker::{Cursor, MoveMode};
//!
//! let text = r#"{"name": "John", "tags": ["a", "b"]} tail 42"#;
//! let mut cursor = Cursor::new(text);
//!
//! assert_eq!(cursor.json_property("name"), "John");
//! assert_eq!(cursor.json_property("tags"), r#"["a", "b"]"#);
//!
//! let object = cursor.extract_balanced('{', '}', MoveMode::MoveAfter);
//! assert_eq!(object.offset(), 0);
//! assert!(cursor.seek_to("tail", MoveMode::MoveAfter));
//! assert_eq!(cursor.take_u64(), Some(42));
//! assert_eq!(cursor.offset(), text.len());
//! ```
//!
//! 失败统一表现为空游标或 `None`，源游标保持不动；需要失败原因时使用 `try_*` 版本。
//! 作者依然建议正式场景使用真正的 JSON / XML 解析器。

pub mod error;
mod numeric;
pub mod structural;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use error::SeekError;
pub use structural::json::JSON_VALUE_TERMINATORS;
pub use utils::anchors::AnchorSet;
pub use utils::cursor::{Cursor, MoveMode};
