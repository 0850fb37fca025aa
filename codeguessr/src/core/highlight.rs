// src/core/highlight.rs
use rand::Rng;
use rand::seq::SliceRandom as _;

/// Picks the line the reveal grows around.
///
/// Prefers lines from the middle 80% of the file with at least
/// `min_chars` non-whitespace characters, so the anchor is rarely an import
/// block or a closing brace. Falls back to any non-blank line, then to any
/// line. Always returns a valid index for a non-empty `lines`, and `0` for an
/// empty one.
pub fn pick_highlight<S, R>(lines: &[S], min_chars: usize, rng: &mut R) -> usize
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let count = lines.len();
    if count == 0 {
        return 0;
    }

    let (low, high) = match (count / 10, count * 9 / 10) {
        (low, high) if low < high => (low, high),
        _ => (0, count - 1),
    };

    let mut candidates: Vec<usize> = (low..=high)
        .filter(|&idx| non_space_chars(lines[idx].as_ref()) >= min_chars)
        .collect();
    if candidates.is_empty() {
        candidates = (0..count)
            .filter(|&idx| non_space_chars(lines[idx].as_ref()) > 0)
            .collect();
    }
    if candidates.is_empty() {
        candidates = (0..count).collect();
    }

    candidates.choose(rng).copied().unwrap_or(0)
}

fn non_space_chars(line: &str) -> usize {
    line.chars().filter(|c| !c.is_whitespace()).count()
}
