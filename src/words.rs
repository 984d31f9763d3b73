use crate::cost::line_penalty;

/// Precomputed word data shared by every solver: the word sequence, the
/// cumulative word-start offsets, and the width limit.
pub(crate) struct Paragraph<'a> {
    pub words: &'a [&'a str],
    /// `offsets[k]` = total character count of the first k words. The width
    /// of the line spanning words `[i, j)` is
    /// `offsets[j] - offsets[i] + (j - i - 1)`, one space between each
    /// adjacent pair.
    pub offsets: Vec<u64>,
    pub max_width: i64,
}

impl<'a> Paragraph<'a> {
    pub fn new(words: &'a [&'a str], max_width: usize) -> Self {
        let mut offsets = Vec::with_capacity(words.len() + 1);
        offsets.push(0u64);
        let mut running = 0u64;
        for word in words {
            running += word.chars().count() as u64;
            offsets.push(running);
        }
        Paragraph {
            words,
            offsets,
            max_width: max_width as i64,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Rendered width of the line spanning words `[i, j)`. The degenerate
    /// empty span yields -1; the binary-search crossover probe can ask for
    /// it, so the result is signed.
    pub fn line_width(&self, i: usize, j: usize) -> i64 {
        (self.offsets[j] - self.offsets[i]) as i64 + j as i64 - i as i64 - 1
    }

    /// Cost of placing words `[i, j)` on one line after an optimal breaking
    /// of the first i words: accumulated prefix cost plus this line's
    /// penalty. The prefix term is chained for overflowing lines too, so an
    /// over-wide line is only ever chosen when every alternative is worse.
    pub fn cost(&self, minima: &[u64], i: usize, j: usize) -> u64 {
        minima[i].saturating_add(line_penalty(self.line_width(i, j), self.max_width))
    }
}

/// Split on whitespace runs, dropping leading and trailing whitespace.
pub(crate) fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Walk the break-origin table backward from the full word count, then
/// reverse, yielding the lines in forward order with words joined by
/// single spaces. Every solver terminates through this one path.
pub(crate) fn render_lines(words: &[&str], break_from: &[usize]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut end = words.len();
    while end > 0 {
        let start = break_from[end];
        lines.push(words[start..end].join(" "));
        end = start;
    }
    lines.reverse();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_collapses_whitespace_runs() {
        assert_eq!(split_words("  a\t\tbb \n ccc "), vec!["a", "bb", "ccc"]);
        assert_eq!(split_words(""), Vec::<&str>::new());
        assert_eq!(split_words(" \n\t "), Vec::<&str>::new());
    }

    #[test]
    fn offsets_accumulate_word_widths() {
        let words = ["a", "bb", "ccc"];
        let p = Paragraph::new(&words, 10);
        assert_eq!(p.offsets, vec![0, 1, 3, 6]);
        assert_eq!(p.line_width(0, 3), 8); // "a bb ccc"
        assert_eq!(p.line_width(1, 2), 2); // "bb"
        assert_eq!(p.line_width(1, 1), -1);
    }

    #[test]
    fn render_walks_breaks_backward() {
        let words = ["a", "b", "c", "d"];
        // Lines [0,2) and [2,4).
        let break_from = vec![0, 0, 0, 0, 2];
        assert_eq!(render_lines(&words, &break_from), vec!["a b", "c d"]);
    }
}
