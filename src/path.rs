//! Structural (XPath-like) paths for offsets in raw XML

pub mod resolver;
pub mod state;

pub use self::resolver::{get_path, get_path_at_char, PathResolver};
pub use self::state::{PathSegment, ScanState, SiblingCounters, StructuralPath};
