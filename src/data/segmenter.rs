// ============================================================
// Layer 4 — Sentence Segmenter
// ============================================================
// Splits a text buffer into sentences and each sentence into
// tokens, so the sentence normalizer can re-join tokens with
// exactly one space.
//
// Sentence boundaries follow Unicode UAX #29 (via the
// `unicode-segmentation` crate): a break after ". " followed by
// an uppercase letter, after "!" / "?", and at paragraph
// separators such as newlines.
//
// Tokenisation is rule based, in the style of prefix/suffix
// splitting tokenizers:
//   1. Split the sentence on whitespace into words
//   2. Peel leading punctuation off each word as separate tokens
//   3. Peel trailing punctuation off each word as separate tokens
//   4. Whatever is left in the middle is one token
//
// A run of the same punctuation character is one token ("...",
// "**"). Hyphens and slashes are never peeled, and punctuation
// touching a hyphen or slash stays attached, so no whitespace
// can appear next to either character.
//
// Example:
//   "(Agile-based) teams, mostly."
//   → ["(", "Agile-based", ")", "teams", ",", "mostly", "."]

use unicode_segmentation::UnicodeSegmentation;

/// Sentence and token boundary detector.
///
/// Holds no state today; it is still built once and passed by
/// reference so a heavier boundary model could replace it.
#[derive(Debug, Default, Clone)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences of tokens.
    /// Sentences that contain only whitespace are dropped.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<Vec<&'a str>> {
        self.sentence_spans(text)
            .into_iter()
            .map(|(start, end)| self.tokens(&text[start..end]))
            .filter(|tokens| !tokens.is_empty())
            .collect()
    }

    /// Byte ranges of the sentences in `text`.
    ///
    /// A boundary right before or right after a hyphen or slash
    /// ("U.S./Canada", "Done./And") is not a sentence break: the two
    /// sides are merged so the joiner never lands at a line edge.
    fn sentence_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (start, segment) in text.split_sentence_bound_indices() {
            let end = start + segment.len();
            let glued = spans.last().is_some_and(|&(prev_start, prev_end)| {
                text[prev_start..prev_end].chars().next_back().is_some_and(is_joiner)
                    || segment.chars().next().is_some_and(is_joiner)
            });

            match spans.last_mut() {
                Some(last) if glued => last.1 = end,
                _ => spans.push((start, end)),
            }
        }

        spans
    }

    /// Split one sentence into tokens.
    pub fn tokens<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        for word in sentence.split_whitespace() {
            split_affixes(word, &mut out);
        }
        out
    }
}

/// Punctuation that may be split off the edge of a word.
fn is_affix(c: char) -> bool {
    if c == '-' || c == '/' {
        return false;
    }
    c.is_ascii_punctuation()
        || matches!(c, '“' | '”' | '‘' | '’' | '…' | '«' | '»' | '¿' | '¡')
}

fn is_joiner(c: char) -> bool {
    c == '-' || c == '/'
}

/// Push the prefix tokens, core and suffix tokens of `word` to `out`.
fn split_affixes<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    let mut rest = word;

    // ── Leading punctuation ───────────────────────────────────────────────────
    while let Some(first) = rest.chars().next() {
        if !is_affix(first) {
            break;
        }
        let run_len = run_length(rest.chars(), first);
        let (run, tail) = rest.split_at(run_len);
        // Keep the run attached if a hyphen or slash follows it
        if tail.chars().next().is_some_and(is_joiner) {
            break;
        }
        out.push(run);
        rest = tail;
    }

    // ── Trailing punctuation ──────────────────────────────────────────────────
    let mut suffixes = Vec::new();
    while let Some(last) = rest.chars().next_back() {
        if !is_affix(last) {
            break;
        }
        let run_len = run_length(rest.chars().rev(), last);
        let (head, run) = rest.split_at(rest.len() - run_len);
        if head.is_empty() || head.chars().next_back().is_some_and(is_joiner) {
            break;
        }
        suffixes.push(run);
        rest = head;
    }

    if !rest.is_empty() {
        out.push(rest);
    }
    out.extend(suffixes.into_iter().rev());
}

/// Byte length of the leading run of `c` in `chars`.
fn run_length(chars: impl Iterator<Item = char>, c: char) -> usize {
    chars.take_while(|&x| x == c).map(char::len_utf8).sum()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_sentences() {
        let s = SentenceSegmenter::new();
        let sentences = s.sentences("Scrum has sprints. Kanban has flow! Why?");
        assert_eq!(
            sentences,
            vec![
                vec!["Scrum", "has", "sprints", "."],
                vec!["Kanban", "has", "flow", "!"],
                vec!["Why", "?"],
            ]
        );
    }

    #[test]
    fn test_newlines_end_sentences() {
        let s = SentenceSegmenter::new();
        let sentences = s.sentences("**Overview**\n\nAgile is a mindset");
        assert_eq!(
            sentences,
            vec![vec!["**", "Overview", "**"], vec!["Agile", "is", "a", "mindset"]]
        );
    }

    #[test]
    fn test_keeps_hyphens_and_slashes_attached() {
        let s = SentenceSegmenter::new();
        assert_eq!(
            s.tokens("(Agile-based) customer/end user,"),
            vec!["(", "Agile-based", ")", "customer/end", "user", ","]
        );
        // Punctuation touching a hyphen stays glued to it
        assert_eq!(s.tokens("x-) (-y"), vec!["x-)", "(-y"]);
    }

    #[test]
    fn test_punctuation_runs_are_one_token() {
        let s = SentenceSegmenter::new();
        assert_eq!(s.tokens("wait... \"ok\""), vec!["wait", "...", "\"", "ok", "\""]);
        assert_eq!(s.tokens("..."), vec!["..."]);
    }

    #[test]
    fn test_no_break_next_to_slash() {
        let s = SentenceSegmenter::new();
        assert_eq!(
            s.sentences("Teams in the U.S./Canada ship weekly."),
            vec![vec!["Teams", "in", "the", "U.S./Canada", "ship", "weekly", "."]]
        );
        assert_eq!(
            s.sentences("Done./And more"),
            vec![vec!["Done./And", "more"]]
        );
    }

    #[test]
    fn test_whitespace_only_input() {
        let s = SentenceSegmenter::new();
        assert!(s.sentences(" \n\n \t").is_empty());
    }
}
