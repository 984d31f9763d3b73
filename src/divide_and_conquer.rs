use smallvec::SmallVec;

use crate::cost::UNREACHED;
use crate::words::Paragraph;

/// A pending rectangle of the cost matrix: the rows (candidate line
/// starts) still admissible for a half-open range of columns (line ends).
#[derive(Debug, Clone, Copy)]
struct Block {
    row_start: usize,
    col_start: usize,
    row_end: usize,
    col_end: usize,
}

/// O(n log n) monotone matrix search. Each block is resolved by locating
/// the arg-min of its middle column, then splitting into two blocks whose
/// row ranges shrink around that arg-min (arg-min position is monotone
/// across columns). The split recursion is kept as an explicit block
/// stack. An outer doubling-window loop commits a prefix of the table,
/// and restarts behind it, whenever the best break reaching the window's
/// last column settles.
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
        search(
            p,
            &mut minima,
            &mut breaks,
            Block {
                row_start: offset,
                col_start: edge,
                row_end: edge,
                col_end: r + offset,
            },
        );
        let window_best = minima[r - 1 + offset];
        let mut committed = false;
        for j in (1 << level)..(r - 1) {
            // A line from j+offset to the window edge already matches the
            // window's best, so every break before it is settled. Commit
            // that prefix and restart the window past it.
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

fn search(p: &Paragraph, minima: &mut [u64], breaks: &mut [usize], top: Block) {
    let mut pending: SmallVec<[Block; 32]> = SmallVec::new();
    pending.push(top);
    while let Some(block) = pending.pop() {
        if block.col_start >= block.col_end {
            continue;
        }
        let mid = (block.col_start + block.col_end) / 2;
        for row in block.row_start..block.row_end {
            let candidate = p.cost(minima, row, mid);
            if candidate <= minima[mid] {
                minima[mid] = candidate;
                breaks[mid] = row;
            }
        }
        pending.push(Block {
            row_start: breaks[mid],
            col_start: mid + 1,
            row_end: block.row_end,
            col_end: block.col_end,
        });
        pending.push(Block {
            row_start: block.row_start,
            col_start: block.col_start,
            row_end: breaks[mid] + 1,
            col_end: mid,
        });
    }
}
