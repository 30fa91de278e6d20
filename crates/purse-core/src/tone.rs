//! Tone formatting for chat responses

use crate::models::{Complexity, Profile, UserType};

/// Column width for wrapped response bodies
pub const WRAP_WIDTH: usize = 80;

pub const SIMPLE_PREFIX: &str = "Hey! Here's a simple version:\n\n";
pub const DETAILED_PREFIX: &str = "Hello — advisory:\n\n";

impl Complexity {
    /// Resolve `Auto` against the profile; other settings pass through
    pub fn resolve(self, profile: &Profile) -> Complexity {
        match (self, profile.user_type) {
            (Complexity::Auto, UserType::Student) => Complexity::Simple,
            (Complexity::Auto, UserType::Professional) => Complexity::Detailed,
            (other, _) => other,
        }
    }
}

/// Prefix a greeting for the resolved complexity and wrap the body
pub fn format_response(text: &str, profile: &Profile, complexity: Complexity) -> String {
    let prefix = match complexity.resolve(profile) {
        Complexity::Simple => SIMPLE_PREFIX,
        _ => DETAILED_PREFIX,
    };
    format!("{}{}", prefix, wrap(text, WRAP_WIDTH))
}

/// Greedy word wrap, line by line
///
/// Existing line breaks are kept. Whitespace runs within a line collapse to a
/// single space and words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    text.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();

        for chunk in chars.chunks(width).map(|c| c.iter().collect::<String>()) {
            let chunk_len = chunk.chars().count();
            if current_len == 0 {
                current = chunk;
                current_len = chunk_len;
            } else if current_len + 1 + chunk_len <= width {
                current.push(' ');
                current.push_str(&chunk);
                current_len += 1 + chunk_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = chunk;
                current_len = chunk_len;
            }
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professional() -> Profile {
        Profile::new("Priya", UserType::Professional, 30, 80_000).unwrap()
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(
            Complexity::Auto.resolve(&Profile::default()),
            Complexity::Simple
        );
        assert_eq!(Complexity::Auto.resolve(&professional()), Complexity::Detailed);
        assert_eq!(
            Complexity::Detailed.resolve(&Profile::default()),
            Complexity::Detailed
        );
        assert_eq!(Complexity::Simple.resolve(&professional()), Complexity::Simple);
    }

    #[test]
    fn test_format_response_prefix() {
        let student = format_response("Body", &Profile::default(), Complexity::Auto);
        assert_eq!(student, "Hey! Here's a simple version:\n\nBody");

        let pro = format_response("Body", &professional(), Complexity::Auto);
        assert_eq!(pro, "Hello — advisory:\n\nBody");
    }

    #[test]
    fn test_wrap_long_line() {
        let text = "word ".repeat(30);
        let wrapped = wrap(&text, 80);
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 80);
        }
        assert_eq!(wrapped.lines().count(), 2);
        // 16 words of "word" fit in 79 columns
        assert_eq!(wrapped.lines().next().unwrap().split(' ').count(), 16);
    }

    #[test]
    fn test_wrap_preserves_line_breaks() {
        let text = "**Top Spending Categories:**\n1. Savings — ₹5,000 (~41.8%)\n\n- tip";
        assert_eq!(wrap(text, 80), text);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("a   b\t c", 80), "a b c");
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let word = "x".repeat(25);
        assert_eq!(
            wrap(&word, 10),
            format!("{}\n{}\n{}", "x".repeat(10), "x".repeat(10), "x".repeat(5))
        );
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let text = "₹₹₹₹ ₹₹₹₹";
        assert_eq!(wrap(text, 9), text);
        assert_eq!(wrap(text, 8), "₹₹₹₹\n₹₹₹₹");
    }
}
