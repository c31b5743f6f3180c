//! Levenshtein edit distance.
//!
//! Wagner-Fischer dynamic programming over Unicode scalar values, keeping a
//! single rolling row sized to the shorter input. Time is O(m × n), space is
//! O(min(m, n)). Fully iterative.

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// ```
/// use lexical::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Row runs over the shorter string.
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        // `diagonal` holds row[j] from the previous iteration before it is overwritten.
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(lc != sc);
            let deletion = above + 1;
            let insertion = row[j] + 1;
            row[j + 1] = substitution.min(deletion).min(insertion);
            diagonal = above;
        }
    }

    row[short.len()]
}
