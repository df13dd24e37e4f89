//! Code fence tracking for the admonition preprocessor.
//!
//! Admonition syntax (`:::`) inside a fenced code block is literal text
//! and must not open a container. Fences can use backticks or tildes
//! (three or more); the closing fence must use the same character and
//! be at least as long as the opening one.

/// Tracks fence state during line-by-line preprocessing.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the current line is inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Update state with the next line.
    pub(crate) fn update(&mut self, line: &str) {
        let trimmed = line.trim_start();

        match self.open {
            Some((fence_char, min_len)) => {
                if closes_fence(trimmed, fence_char, min_len) {
                    self.open = None;
                }
            }
            None => {
                self.open = detect_fence(trimmed);
            }
        }
    }
}

fn detect_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|&c| c == first).count();
    (len >= 3).then_some((first, len))
}

fn closes_fence(trimmed: &str, fence_char: char, min_len: usize) -> bool {
    let len = trimmed.chars().take_while(|&c| c == fence_char).count();
    len >= min_len && trimmed[len..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_fence_round_trip() {
        let mut tracker = FenceTracker::new();
        tracker.update("```rust");
        assert!(tracker.in_fence());
        tracker.update("::: not a container");
        assert!(tracker.in_fence());
        tracker.update("```");
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_must_match_length_and_char() {
        let mut tracker = FenceTracker::new();
        tracker.update("````");
        tracker.update("```");
        assert!(tracker.in_fence());
        tracker.update("~~~~");
        assert!(tracker.in_fence());
        tracker.update("`````");
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_inline_code_is_not_a_fence() {
        let mut tracker = FenceTracker::new();
        tracker.update("``inline``");
        assert!(!tracker.in_fence());
    }
}
