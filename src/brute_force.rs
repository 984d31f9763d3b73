use crate::cost::line_penalty;
use crate::words::Paragraph;

/// Hard cap on brute-force input size. Past this the 2^(n-1) subsets stop
/// being enumerable in tolerable time, and the subset mask is a u32.
pub(crate) const WORD_LIMIT: usize = 32;

/// Ground-truth solver: scores every subset of interior break positions
/// and keeps the cheapest. The dispatcher rejects inputs over WORD_LIMIT
/// words before this is reached.
pub(crate) fn solve(p: &Paragraph) -> Vec<usize> {
    let count = p.word_count();
    debug_assert!((1..=WORD_LIMIT).contains(&count));

    let mut best_mask = 0u32;
    let mut best_total = total_for_mask(p, 0);
    for mask in 1..(1u32 << (count - 1)) {
        let total = total_for_mask(p, mask);
        if total < best_total {
            best_total = total;
            best_mask = mask;
        }
    }

    breaks_for_mask(count, best_mask)
}

/// Total penalty of the breaking described by `mask`, where bit k-1 set
/// means a break before word k.
fn total_for_mask(p: &Paragraph, mask: u32) -> u64 {
    let count = p.word_count();
    let mut total = 0u64;
    let mut start = 0usize;
    for k in 1..count {
        if mask & (1 << (k - 1)) != 0 {
            total = total.saturating_add(line_penalty(p.line_width(start, k), p.max_width));
            start = k;
        }
    }
    total.saturating_add(line_penalty(p.line_width(start, count), p.max_width))
}

/// Express a winning mask as a break-origin table so reconstruction runs
/// through the same backward walk as every other solver.
fn breaks_for_mask(count: usize, mask: u32) -> Vec<usize> {
    let mut breaks = vec![0usize; count + 1];
    let mut start = 0usize;
    for k in 1..count {
        if mask & (1 << (k - 1)) != 0 {
            breaks[k] = start;
            start = k;
        }
    }
    breaks[count] = start;
    breaks
}
