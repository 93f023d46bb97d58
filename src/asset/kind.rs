//! Content classification: text vs binary sniffing.
//!
//! Classification inspects actual byte content, never the file extension.
//! Decided once per asset during index construction.

/// Number of leading bytes inspected when classifying content.
const SNIFF_WINDOW: usize = 8 * 1024;

/// Control characters tolerated in text content.
const TEXT_CONTROLS: [char; 4] = ['\n', '\r', '\t', '\x0c'];

/// Content classification for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Binary,
}

impl ContentKind {
    /// Classify content by inspecting a bounded prefix of the raw bytes.
    ///
    /// A null byte anywhere in the window marks the content binary, as does
    /// invalid UTF-8 or a high density of non-whitespace control characters.
    /// Empty content counts as text.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::Text;
        }

        let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
        if window.contains(&0) {
            return Self::Binary;
        }

        match std::str::from_utf8(window) {
            Ok(text) => classify_control_density(text),
            // A multi-byte sequence cut off at the window edge is not
            // evidence of binary content; classify the valid prefix.
            Err(err) if err.error_len().is_none() => {
                let text = std::str::from_utf8(&window[..err.valid_up_to()]).unwrap_or("");
                classify_control_density(text)
            }
            Err(_) => Self::Binary,
        }
    }

    /// Check if this classification is text.
    #[inline]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// Text with more than one control character per ten is treated as binary.
fn classify_control_density(text: &str) -> ContentKind {
    let mut control = 0usize;
    let mut total = 0usize;
    for ch in text.chars() {
        total += 1;
        if ch.is_control() && !TEXT_CONTROLS.contains(&ch) {
            control += 1;
        }
    }
    if total > 0 && control * 10 > total {
        ContentKind::Binary
    } else {
        ContentKind::Text
    }
}
