pub mod anchors;
pub mod cursor;
pub(crate) mod scan;
