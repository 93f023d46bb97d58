//! Delimiter-aware reference matching.
//!
//! A reference to an asset is its served path surrounded by a recognized
//! delimiter pair: a quote, escaped quote, or opening parenthesis on the
//! left, and a quote, escaped quote, closing parenthesis, `?`, or `#` on the
//! right. Requiring delimiters keeps a path from matching inside a longer
//! path or identifier, and capturing them verbatim lets substitution
//! preserve the surrounding quote/paren style untouched.

use regex::{Captures, Regex};

/// Opening delimiters: `'`, `"`, `\'`, `\"`, or `(` followed by optional whitespace.
const STARTING_DELIMITER: &str = r#"(\\?'|\\?"|\\?\(\s*)"#;

/// Closing delimiters: `'`, `"`, `\'`, `\"`, optional whitespace then `)`, `?`, or `#`.
const ENDING_DELIMITER: &str = r#"(\\?'|\\?"|\s*\\?\)|\?|#)"#;

/// Compiled matcher for one asset's served path.
#[derive(Debug, Clone)]
pub struct ReferencePattern {
    regex: Regex,
}

impl ReferencePattern {
    /// Build a matcher for the literal `served_path`.
    ///
    /// The path is regex-escaped, so metacharacters in filenames match
    /// literally.
    pub fn new(served_path: &str) -> Self {
        let pattern = format!(
            "{STARTING_DELIMITER}{}{ENDING_DELIMITER}",
            regex::escape(served_path)
        );
        Self {
            // The delimiter alternations are fixed and the path is escaped
            regex: Regex::new(&pattern).expect("escaped literal pattern always compiles"),
        }
    }

    /// Test whether `content` contains at least one delimited reference.
    #[inline]
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    /// Replace every delimited reference with `new_path`.
    ///
    /// The captured delimiters are replayed verbatim around the new path.
    /// Returns the rewritten content and the replacement count.
    pub fn replace_all(&self, content: &str, new_path: &str) -> (String, usize) {
        let mut count = 0usize;
        let rewritten = self.regex.replace_all(content, |caps: &Captures<'_>| {
            count += 1;
            format!("{}{}{}", &caps[1], new_path, &caps[2])
        });
        (rewritten.into_owned(), count)
    }
}
