use crate::cost::UNREACHED;
use crate::words::Paragraph;

/// O(n) solver: SMAWK column-minima search over the implicit totally
/// monotone cost matrix, inside the same doubling-window outer loop as the
/// divide & conquer variant. Fastest and most intricate of the family.
pub(crate) fn solve(p: &Paragraph) -> Vec<usize> {
    let count = p.word_count();
    let mut minima = vec![UNREACHED; count + 1];
    minima[0] = 0;
    let mut breaks = vec![0usize; count + 1];

    let mut n = count + 1;
    let mut level = 0usize;
    let mut offset = 0usize;
    loop {
        let r = n.min(1 << (level + 1));
        let edge = (1 << level) + offset;
        let rows: Vec<usize> = (offset..edge).collect();
        let columns: Vec<usize> = (edge..r + offset).collect();
        column_minima(p, &mut minima, &mut breaks, &rows, &columns);
        let window_best = minima[r - 1 + offset];
        let mut committed = false;
        for j in (1 << level)..(r - 1) {
            if p.cost(&minima, j + offset, r - 1 + offset) <= window_best {
                n -= j;
                level = 0;
                offset += j;
                committed = true;
                break;
            }
        }
        if !committed {
            if r == n {
                break;
            }
            level += 1;
        }
    }

    breaks
}

/// One SMAWK pass: reduce the rows to at most one survivor per column via
/// stack elimination, recurse on the odd-indexed columns, then recover the
/// even-indexed columns in a single merge sweep whose row range is bounded
/// by the break origins the recursion settled. Rows and columns must be
/// walked in exactly this order; the linear bound depends on it.
fn column_minima(
    p: &Paragraph,
    minima: &mut [u64],
    breaks: &mut [usize],
    rows: &[usize],
    columns: &[usize],
) {
    let mut survivors: Vec<usize> = Vec::with_capacity(rows.len().min(columns.len()));
    let mut i = 0;
    while i < rows.len() {
        if let Some(&top) = survivors.last() {
            let col = columns[survivors.len() - 1];
            if p.cost(minima, top, col) < p.cost(minima, rows[i], col) {
                if survivors.len() < columns.len() {
                    survivors.push(rows[i]);
                }
                i += 1;
            } else {
                survivors.pop();
            }
        } else {
            survivors.push(rows[i]);
            i += 1;
        }
    }
    let rows = survivors;

    if columns.len() > 1 {
        let odd: Vec<usize> = columns.iter().copied().skip(1).step_by(2).collect();
        column_minima(p, minima, breaks, &rows, &odd);
    }

    let mut i = 0;
    let mut j = 0;
    while j < columns.len() {
        let row_bound = if j + 1 < columns.len() {
            breaks[columns[j + 1]]
        } else {
            rows[rows.len() - 1]
        };
        let candidate = p.cost(minima, rows[i], columns[j]);
        if candidate < minima[columns[j]] {
            minima[columns[j]] = candidate;
            breaks[columns[j]] = rows[i];
        }
        if rows[i] < row_bound {
            i += 1;
        } else {
            j += 2;
        }
    }
}
