// ============================================================
// Layer 4 — Text Chunker
// ============================================================
// Splits a cleaned buffer into chunks of at most `width`
// characters using greedy text wrapping.
//
// How greedy wrapping works:
//   - Tabs are expanded to the next multiple of 8 columns and
//     every other whitespace character becomes one space
//   - The text is cut into alternating runs of spaces and words
//   - Runs are appended to the current chunk while it still fits
//     in `width`; the first run that does not fit closes it
//   - Spaces at the end of a chunk, and at the start of every
//     chunk but the first, are dropped
//
// Example with width=10:
//   Text:    "Scrum uses  short sprints"
//   Chunk 1: "Scrum uses"      (10 chars)
//   Chunk 2: "short"           ("short sprints" would be 13)
//   Chunk 3: "sprints"
//
// Whitespace runs inside a chunk are kept as they are, so
// "intro \n\n**Scrum**" stays "intro   **Scrum**".
//
// Chunks never overlap and together hold every word of the
// input in order. A word is only ever cut when it is longer
// than `width` on its own; it then fills what is left of the
// current chunk and continues in width-sized pieces.
//
// Widths count characters (Unicode scalar values), not bytes.

/// Tab stops used when expanding tabs
const TAB_SIZE: usize = 8;

pub struct Chunker {
    /// Maximum number of characters per chunk
    width: usize,
}

impl Chunker {
    /// Create a new Chunker.
    ///
    /// # Panics
    /// Panics if width is 0, since no chunk could hold a character
    pub fn new(width: usize) -> Self {
        assert!(width > 0, "chunk width must be at least 1");
        Self { width }
    }

    /// Wrap `text` into chunks of at most `width` characters.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let spaced = expand_whitespace(text);

        // Runs are popped from the end, so keep them reversed
        let mut runs: Vec<String> = split_runs(&spaced)
            .into_iter()
            .rev()
            .map(str::to_string)
            .collect();

        let mut chunks = Vec::new();

        while !runs.is_empty() {
            let mut line: Vec<String> = Vec::new();
            let mut line_len = 0usize;

            // Leading spaces only survive on the first chunk
            if !chunks.is_empty() && runs.last().is_some_and(|r| is_space(r)) {
                runs.pop();
            }

            // ── Greedily take runs that still fit ─────────────────────────────
            while let Some(run) = runs.last() {
                let run_len = run.chars().count();
                if line_len + run_len > self.width {
                    break;
                }
                line_len += run_len;
                if let Some(run) = runs.pop() {
                    line.push(run);
                }
            }

            // ── A run wider than a whole chunk is cut ─────────────────────────
            if let Some(run) = runs.last_mut() {
                if run.chars().count() > self.width {
                    let room = self.width - line_len;
                    if room > 0 {
                        let (head, tail) = split_at_char(run, room);
                        line.push(head.to_string());
                        *run = tail.to_string();
                    }
                }
            }

            if line.last().is_some_and(|r| is_space(r)) {
                line.pop();
            }
            if !line.is_empty() {
                chunks.push(line.concat());
            }
        }

        chunks
    }
}

/// Expand tabs and turn every other whitespace character into a space.
fn expand_whitespace(text: &str) -> String {
    let mut out    = String::with_capacity(text.len());
    let mut column = 0usize;

    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if c.is_whitespace() => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

/// Cut `text` into maximal runs of spaces and of non-spaces.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs  = Vec::new();
    let mut start = 0usize;
    let mut in_space: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let space = c == ' ';
        if in_space.is_some_and(|s| s != space) {
            runs.push(&text[start..i]);
            start = i;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }

    runs
}

fn is_space(run: &str) -> bool {
    run.starts_with(' ')
}

/// Split `s` after its first `n` characters.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(idx)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_wrapping() {
        let c = Chunker::new(10);
        assert_eq!(
            c.chunk("Scrum uses  short sprints"),
            vec!["Scrum uses", "short", "sprints"]
        );
    }

    #[test]
    fn test_twelve_hundred_chars_give_three_chunks() {
        // 119 nine-letter words and one ten-letter word, single spaced
        let mut words = vec!["abcdefghi"; 119];
        words.push("abcdefghij");
        let text = words.join(" ");
        assert_eq!(text.chars().count(), 1200);

        let chunks = Chunker::new(512).chunk(&text);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 512));

        // Only the separators at the two chunk boundaries are gone
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        assert_eq!(total, 1200 - (chunks.len() - 1));
    }

    #[test]
    fn test_word_sequence_is_preserved() {
        let text = "Agile  software\tdevelopment\n\nis an umbrella term for \
                    approaches, values and practices. Scrum, Kanban and XP.";
        let chunks = Chunker::new(16).chunk(text);

        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
        assert!(chunks.iter().all(|c| c.chars().count() <= 16));
    }

    #[test]
    fn test_inner_whitespace_runs_are_kept() {
        let c = Chunker::new(100);
        assert_eq!(
            c.chunk("intro \n\n**Scrum**\n\n Sprints run"),
            vec!["intro   **Scrum**   Sprints run"]
        );
        assert_eq!(c.chunk("a\tb"), vec!["a       b"]);
    }

    #[test]
    fn test_edge_whitespace() {
        // First chunk keeps its leading spaces, later ones do not
        assert_eq!(Chunker::new(100).chunk("  lead text "), vec!["  lead text"]);
        assert_eq!(Chunker::new(3).chunk("aa   bb"), vec!["aa", "bb"]);
    }

    #[test]
    fn test_width_counts_characters() {
        let c = Chunker::new(5);
        assert_eq!(c.chunk("ééé ü ñññññ"), vec!["ééé ü", "ñññññ"]);
    }

    #[test]
    fn test_oversized_word_is_cut() {
        let c = Chunker::new(4);
        assert_eq!(c.chunk("ab cdefghijk l"), vec!["ab c", "defg", "hijk", "l"]);
    }

    #[test]
    fn test_short_text_gives_one_chunk() {
        let chunks = Chunker::new(512).chunk("just a few words");
        assert_eq!(chunks, vec!["just a few words"]);
    }

    #[test]
    fn test_empty_text_gives_no_chunks() {
        assert!(Chunker::new(5).chunk("").is_empty());
        assert!(Chunker::new(5).chunk(" \n\t ").is_empty());
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Chunker::new(0);
    }
}
