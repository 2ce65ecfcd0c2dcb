//! Intra-line word diff.
//!
//! Modified lines are broken into tokens — runs of non-whitespace and runs
//! of whitespace, both kept — and aligned strictly by token index, the same
//! positional strategy the line engine uses. No common-subsequence search
//! is performed.

use super::result::{WordDiffKind, WordDiffSpan};

/// Compute the token-level diff between the two sides of a modified line.
///
/// Equal tokens at the same index become `Unchanged` spans. Unequal tokens
/// become a `Removed` span for the left token followed by an `Added` span
/// for the right token, skipping whichever side has run out of tokens.
/// Concatenating the left-side spans (removed + unchanged) reproduces
/// `left_line` exactly, and likewise for the right side.
#[must_use]
pub fn diff_words(left_line: &str, right_line: &str) -> Vec<WordDiffSpan> {
    let left_tokens = tokenize(left_line);
    let right_tokens = tokenize(right_line);
    let max_len = left_tokens.len().max(right_tokens.len());

    let mut spans = Vec::with_capacity(max_len);
    for i in 0..max_len {
        let left = left_tokens.get(i).copied().unwrap_or("");
        let right = right_tokens.get(i).copied().unwrap_or("");

        if left == right {
            // Both sides past the end never reach here (i < max_len), so an
            // equal pair is always a real shared token.
            spans.push(WordDiffSpan::new(WordDiffKind::Unchanged, left));
        } else {
            if !left.is_empty() {
                spans.push(WordDiffSpan::new(WordDiffKind::Removed, left));
            }
            if !right.is_empty() {
                spans.push(WordDiffSpan::new(WordDiffKind::Added, right));
            }
        }
    }
    spans
}

/// Split a line into alternating non-whitespace/whitespace runs.
///
/// Whitespace runs are tokens in their own right; joining the returned
/// slices back together yields the input unchanged.
fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, ch) in line.char_indices() {
        let ws = ch.is_whitespace();
        match in_whitespace {
            None => in_whitespace = Some(ws),
            Some(prev) if prev != ws => {
                tokens.push(&line[start..idx]);
                start = idx;
                in_whitespace = Some(ws);
            }
            Some(_) => {}
        }
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct_left(spans: &[WordDiffSpan]) -> String {
        spans
            .iter()
            .filter(|s| s.is_left())
            .map(|s| s.text.as_str())
            .collect()
    }

    fn reconstruct_right(spans: &[WordDiffSpan]) -> String {
        spans
            .iter()
            .filter(|s| s.is_right())
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_tokenize_keeps_separators() {
        assert_eq!(tokenize("The cat sat"), vec!["The", " ", "cat", " ", "sat"]);
        assert_eq!(tokenize("a  b"), vec!["a", "  ", "b"]);
        assert_eq!(tokenize("  leading"), vec!["  ", "leading"]);
        assert_eq!(tokenize("trailing  "), vec!["trailing", "  "]);
        assert_eq!(tokenize(""), Vec::<&str>::new());
    }

    #[test]
    fn test_single_word_substitution() {
        let spans = diff_words("The cat sat", "The dog sat");
        let expected = vec![
            WordDiffSpan::new(WordDiffKind::Unchanged, "The"),
            WordDiffSpan::new(WordDiffKind::Unchanged, " "),
            WordDiffSpan::new(WordDiffKind::Removed, "cat"),
            WordDiffSpan::new(WordDiffKind::Added, "dog"),
            WordDiffSpan::new(WordDiffKind::Unchanged, " "),
            WordDiffSpan::new(WordDiffKind::Unchanged, "sat"),
        ];
        assert_eq!(spans, expected);
    }

    #[test]
    fn test_right_side_longer() {
        let spans = diff_words("one", "one two");
        assert_eq!(
            spans,
            vec![
                WordDiffSpan::new(WordDiffKind::Unchanged, "one"),
                WordDiffSpan::new(WordDiffKind::Added, " "),
                WordDiffSpan::new(WordDiffKind::Added, "two"),
            ]
        );
    }

    #[test]
    fn test_left_side_longer() {
        let spans = diff_words("one two", "one");
        assert_eq!(
            spans,
            vec![
                WordDiffSpan::new(WordDiffKind::Unchanged, "one"),
                WordDiffSpan::new(WordDiffKind::Removed, " "),
                WordDiffSpan::new(WordDiffKind::Removed, "two"),
            ]
        );
    }

    #[test]
    fn test_reconstruction_both_sides() {
        let cases = [
            ("The cat sat", "The dog sat"),
            ("a  b\tc", "a b c d"),
            ("  indent change", "\tindent change"),
            ("", "entirely new"),
            ("entirely gone", ""),
        ];
        for (left, right) in cases {
            let spans = diff_words(left, right);
            assert_eq!(reconstruct_left(&spans), left, "left of {left:?}/{right:?}");
            assert_eq!(
                reconstruct_right(&spans),
                right,
                "right of {left:?}/{right:?}"
            );
        }
    }

    #[test]
    fn test_positional_not_alignment_seeking() {
        // A leading insertion shifts every token; no resynchronization.
        let spans = diff_words("a b", "x a b");
        assert!(spans
            .iter()
            .all(|s| s.kind != WordDiffKind::Unchanged || s.text == " "));
    }
}
