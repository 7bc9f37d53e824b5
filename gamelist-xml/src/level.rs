//! Per-depth parse frames.

use std::collections::TryReserveError;

use crate::field::Field;

/// Number of nesting levels tracked. Deeper elements are counted but
/// otherwise ignored.
pub const MAX_DEPTH: usize = 5;

/// State kept for one open element or synthesized attribute.
#[derive(Debug, Default)]
pub struct LevelFrame {
    pub tag: String,
    /// Character data seen since the element opened.
    pub data: Vec<u8>,
    /// Handler resolved when the element opened.
    pub field: Option<Field>,
}

/// Fixed-capacity stack of [`LevelFrame`]s.
///
/// `depth` counts every open element, tracked or not, so closes past the
/// bound keep the count balanced.
#[derive(Debug, Default)]
pub struct LevelStack {
    frames: [LevelFrame; MAX_DEPTH],
    depth: usize,
}

impl LevelStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the innermost open element has a frame.
    pub fn is_tracked(&self) -> bool {
        self.depth > 0 && self.depth <= MAX_DEPTH
    }

    /// Open an element. Returns `false` if it is beyond the depth bound.
    pub fn push(&mut self, tag: &str) -> bool {
        self.depth += 1;
        match self.current_mut() {
            Some(frame) => {
                *frame = LevelFrame {
                    tag: tag.to_string(),
                    data: Vec::new(),
                    field: None,
                };
                true
            }
            None => false,
        }
    }

    /// Close the innermost element, handing back its frame if it had one.
    pub fn pop(&mut self) -> Option<LevelFrame> {
        if self.depth == 0 {
            return None;
        }
        let frame = self.current_mut().map(std::mem::take);
        self.depth -= 1;
        frame
    }

    pub fn current(&self) -> Option<&LevelFrame> {
        if self.is_tracked() {
            self.frames.get(self.depth - 1)
        } else {
            None
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut LevelFrame> {
        if self.is_tracked() {
            self.frames.get_mut(self.depth - 1)
        } else {
            None
        }
    }

    /// Bind a handler to the innermost frame.
    pub fn bind(&mut self, field: Option<Field>) {
        if let Some(frame) = self.current_mut() {
            frame.field = field;
        }
    }

    /// Append character data to the innermost frame.
    ///
    /// Data for untracked elements is dropped.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), TryReserveError> {
        if let Some(frame) = self.current_mut() {
            frame.data.try_reserve(bytes.len())?;
            frame.data.extend_from_slice(bytes);
        }
        Ok(())
    }

    /// Call `f` with the root-to-current chain of tag names.
    ///
    /// Only meaningful while the innermost element is tracked.
    pub fn with_path<T>(&self, f: impl FnOnce(&[&str]) -> T) -> T {
        let len = self.depth.min(MAX_DEPTH);
        let mut names = [""; MAX_DEPTH];
        for (slot, frame) in names.iter_mut().zip(&self.frames[..len]) {
            *slot = frame.tag.as_str();
        }
        f(&names[..len])
    }
}

#[cfg(test)]
#[path = "tests/level_tests.rs"]
mod tests;
