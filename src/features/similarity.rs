//! Indel similarity on a 0-100 scale.
//!
//! The score is `2 * M / (len_a + len_b)`, where `M` is the length of the
//! longest common subsequence. Only insertions and deletions count as edits, so
//! a dropped or doubled letter (`gogle`, `paypall`) costs half as much as under
//! Levenshtein distance.

/// Length of the longest common subsequence, counted in chars.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Score how similar two strings are, from 0 (nothing in common) to 100 (identical).
///
/// An empty side always scores 0. Half-way scores round to the even integer.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    let similarity = (2 * lcs_length(&a, &b)) as f64 / total as f64;
    (similarity * 100.0).round_ties_even() as u8
}

/// Find the highest-scoring candidate for `needle`.
///
/// Ties keep the earliest candidate. Returns `None` for an empty candidate list.
pub fn best_match<'a, I>(needle: &str, candidates: I) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u8)> = None;
    for candidate in candidates {
        let score = ratio(needle, candidate);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best
}
