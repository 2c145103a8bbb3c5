//! Approximate name matching.
//!
//! Scores are integers in `0..=100`. `ratio` is the indel similarity
//! `2 * lcs / (len_a + len_b)`; `partial_ratio` slides the shorter string over
//! the longer one and keeps the best window, so a submitted first name alone
//! still scores 100 against the full name it is part of.

/// Lower-cases, trims and collapses internal whitespace.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

fn to_score(r: f64) -> u8 {
    (r * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Whole-string similarity of the two normalized inputs.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_score(ratio_chars(&a, &b))
}

/// Best similarity of the shorter input against any equally long window of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let mut best = 0.0f64;
    for start in 0..=(long.len() - short.len()) {
        let window = &long[start..start + short.len()];
        let r = ratio_chars(&short, window);
        if r > best {
            best = r;
            if best >= 0.995 {
                break;
            }
        }
    }
    to_score(best)
}

/// Picks the candidate whose name scores highest against `query`.
///
/// Candidates are visited in the given order and only a strictly higher score
/// replaces the current best, so the first of several equal scores wins.
/// Returns `None` unless the best score is strictly above `threshold`.
pub fn best_match<'a, T, F>(
    query: &str,
    candidates: &'a [T],
    name_of: F,
    threshold: u8,
) -> Option<(&'a T, u8)>
where
    F: Fn(&T) -> &str,
{
    let mut best: Option<(&T, u8)> = None;
    for candidate in candidates {
        let score = partial_ratio(query, name_of(candidate));
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.filter(|(_, score)| *score > threshold)
}
