/// Scale applied per character of overflow on a line wider than the limit.
///
/// Overflow must cost proportionally to how far the line overshoots, not a
/// flat infinity: the concave-cost variants compare two over-wide candidates
/// and need the less-bad one to win, otherwise they pick wrong break points
/// on inputs containing unbreakable words.
pub const OVERFLOW_SCALE: u64 = 10_000_000_000;

/// Sentinel for prefix costs no breaking has reached yet. Kept at a quarter
/// of the `u64` range so adding a real penalty to it cannot wrap.
pub(crate) const UNREACHED: u64 = u64::MAX / 4;

/// Penalty of a single rendered line: squared slack when it fits, scaled
/// overflow when it does not. `width` may be negative (an empty probe span
/// has width -1); `max_width` is always at least 1.
pub(crate) fn line_penalty(width: i64, max_width: i64) -> u64 {
    if width > max_width {
        OVERFLOW_SCALE.saturating_mul((width - max_width) as u64)
    } else {
        let slack = (max_width - width) as u64;
        slack.saturating_mul(slack)
    }
}

/// Recompute the total penalty of an already-rendered breaking, summing
/// each line's penalty under the same model the solvers minimize.
pub fn total_penalty(lines: &[String], max_width: usize) -> u64 {
    lines.iter().fold(0u64, |total, line| {
        let width = line.chars().count() as i64;
        total.saturating_add(line_penalty(width, max_width as i64))
    })
}
