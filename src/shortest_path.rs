use crate::cost::UNREACHED;
use crate::words::Paragraph;

/// O(n · width) solver: word boundaries are nodes of a DAG, candidate
/// lines are edges, and one forward pass relaxes every edge. From a given
/// start the inner loop extends the line word by word and stops at the
/// first overflow, so its trip count is bounded by the line width, not by
/// the word count.
pub(crate) fn solve(p: &Paragraph) -> Vec<usize> {
    let count = p.word_count();
    let mut minima = vec![UNREACHED; count + 1];
    minima[0] = 0;
    let mut breaks = vec![0usize; count + 1];

    for i in 0..count {
        for j in i + 1..=count {
            let overflows = p.line_width(i, j) > p.max_width;
            // Width only grows with j, so nothing past the first overflow
            // can improve. A word wider than the limit still has to land
            // somewhere, so the forced single-word line is relaxed before
            // stopping.
            if overflows && j > i + 1 {
                break;
            }
            let candidate = p.cost(&minima, i, j);
            if candidate < minima[j] {
                minima[j] = candidate;
                breaks[j] = i;
            }
            if overflows {
                break;
            }
        }
    }

    breaks
}
