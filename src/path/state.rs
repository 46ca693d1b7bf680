//! Scan state for path resolution: the open-element stack and per-parent
//! sibling counters

use std::collections::HashMap;
use std::fmt;

/// One `name[index]` step of a structural path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathSegment<'a> {
    pub name: &'a str,
    /// 1-based position among same-named siblings
    pub index: usize,
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.index)
    }
}

/// `/tag1[i1]/tag2[i2]/...` address of an element. The empty path (no
/// segments) renders as an empty string and stands for the document scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuralPath<'a> {
    segments: Vec<PathSegment<'a>>,
}

impl<'a> StructuralPath<'a> {
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[PathSegment<'a>] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn last(&self) -> Option<&PathSegment<'a>> {
        self.segments.last()
    }

    pub fn push(&mut self, segment: PathSegment<'a>) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment<'a>> {
        self.segments.pop()
    }

    /// Copy of this path extended by one segment
    pub fn child(&self, segment: PathSegment<'a>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }
}

impl fmt::Display for StructuralPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Count of same-named children seen so far under one open element
#[derive(Clone, Debug, Default)]
pub struct SiblingCounters<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> SiblingCounters<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Record one more `name` child and return its index
    pub fn increment(&mut self, name: &'a str) -> usize {
        let count = self.counts.entry(name).or_insert(0);
        *count += 1;
        *count
    }
}

/// Structural state threaded through a path-resolution scan.
///
/// `frames` holds one set of counters per open element plus one for the
/// document scope, so `frames.len() == stack.len() + 1`.
#[derive(Clone, Debug)]
pub struct ScanState<'a> {
    stack: StructuralPath<'a>,
    frames: Vec<SiblingCounters<'a>>,
}

impl Default for ScanState<'_> {
    fn default() -> Self {
        Self {
            stack: StructuralPath::new(),
            frames: vec![SiblingCounters::new()],
        }
    }
}

impl<'a> ScanState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the innermost open element
    pub const fn current(&self) -> &StructuralPath<'a> {
        &self.stack
    }

    /// Path a `name` element opening now would get, without recording it
    pub fn peek_child_path(&self, name: &'a str) -> StructuralPath<'a> {
        let seen = self.frames.last().map_or(0, |frame| frame.get(name));
        self.stack.child(PathSegment {
            name,
            index: seen + 1,
        })
    }

    /// Record an opening tag and descend into it
    pub fn commit_open(&mut self, name: &'a str) {
        let index = self.record_child(name);
        self.stack.push(PathSegment { name, index });
        self.frames.push(SiblingCounters::new());
    }

    /// Record a self-closing tag; counts as a sibling but never nests
    pub fn commit_self_closing(&mut self, name: &'a str) {
        self.record_child(name);
    }

    /// Pop the innermost element if `name` matches it, ignore otherwise
    pub fn commit_close(&mut self, name: &str) {
        if self.stack.last().is_some_and(|top| top.name == name) {
            self.stack.pop();
            self.frames.pop();
        }
    }

    fn record_child(&mut self, name: &'a str) -> usize {
        self.frames
            .last_mut()
            .map_or(1, |frame| frame.increment(name))
    }
}
