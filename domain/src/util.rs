//! Text clipping for logs and diagnostic error bodies.

use std::borrow::Cow;

/// Clip `s` to at most `max_bytes` bytes of its own text, backing up to a
/// UTF-8 character boundary.
///
/// Text that fits is borrowed unchanged. Clipped text gets a
/// `... [N more bytes]` marker so a reader can tell the agent's output was
/// cut, not that the agent sent a short body.
pub fn clip(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}... [{} more bytes]", &s[..end], s.len() - end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_text_is_borrowed() {
        assert!(matches!(clip("[FAQ] Where?", 100), Cow::Borrowed("[FAQ] Where?")));
        assert!(matches!(clip("", 0), Cow::Borrowed("")));
    }

    #[test]
    fn test_clip_adds_marker() {
        assert_eq!(
            clip("Internal Server Error", 8),
            "Internal... [13 more bytes]"
        );
    }

    #[test]
    fn test_clip_backs_up_to_char_boundary() {
        // 'é' spans bytes 3..5
        assert_eq!(clip("café au lait", 4), "caf... [10 more bytes]");
        assert_eq!(clip("café au lait", 5), "café... [8 more bytes]");
    }
}
