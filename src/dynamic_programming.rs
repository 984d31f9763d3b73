use crate::cost::{line_penalty, UNREACHED};
use crate::words::Paragraph;

/// O(n²) reference solver, written for clarity over speed.
///
/// Precomputes the full slack matrix (space remaining on the line holding
/// words i..=j, negative once it overflows), then fills the prefix-cost
/// table bottom-up, scanning every candidate start for each line end.
pub(crate) fn solve(p: &Paragraph) -> Vec<usize> {
    let count = p.word_count();
    let max_width = p.max_width;

    let mut slack = vec![vec![0i64; count]; count];
    for i in 0..count {
        slack[i][i] = max_width - p.line_width(i, i + 1);
        for j in i + 1..count {
            slack[i][j] = slack[i][j - 1] - p.line_width(j, j + 1) - 1;
        }
    }

    let mut minima = vec![UNREACHED; count + 1];
    minima[0] = 0;
    let mut breaks = vec![0usize; count + 1];

    for j in 1..=count {
        for i in (0..j).rev() {
            let width = max_width - slack[i][j - 1];
            let candidate = minima[i].saturating_add(line_penalty(width, max_width));
            if candidate < minima[j] {
                minima[j] = candidate;
                breaks[j] = i;
            }
        }
    }

    breaks
}
