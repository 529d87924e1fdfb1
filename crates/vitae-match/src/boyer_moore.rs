//! Boyer-Moore exact matching, bad-character rule only.
//!
//! The last-occurrence table covers a fixed 128-entry alphabet; characters
//! outside that range share class 0. After each full match the search
//! restarts on the text suffix one position past the match start, so
//! overlapping occurrences are counted exactly like the KMP scan — a
//! deliberate policy, not an optimization opportunity.

use vitae_core::defaults::ALPHABET_SIZE;

/// Count occurrences of each keyword in the text.
///
/// Empty keywords contribute zero. Text and keywords are expected to be
/// pre-lowercased by the caller.
pub fn match_counts(text: &str, keywords: &[String]) -> Vec<u32> {
    let chars: Vec<char> = text.chars().collect();
    keywords
        .iter()
        .map(|keyword| {
            let pattern: Vec<char> = keyword.chars().collect();
            count_occurrences(&chars, &pattern)
        })
        .collect()
}

fn count_occurrences(text: &[char], pattern: &[char]) -> u32 {
    if pattern.is_empty() {
        return 0;
    }

    let mut count = 0u32;
    let mut start = 0;

    while start + pattern.len() <= text.len() {
        match find_first(&text[start..], pattern) {
            Some(pos) => {
                count += 1;
                // Restart one past the match start to keep overlap
                // semantics identical to KMP.
                start += pos + 1;
            }
            None => break,
        }
    }

    count
}

/// Find the first occurrence of `pattern` in `text` using the
/// bad-character heuristic, scanning right-to-left within each alignment.
fn find_first(text: &[char], pattern: &[char]) -> Option<usize> {
    let last = last_occurrence_table(pattern);
    let n = text.len();
    let m = pattern.len();

    if m > n {
        return None;
    }

    let mut i = m - 1; // text index
    let mut j = m - 1; // pattern index

    while i < n {
        if pattern[j] == text[i] {
            if j == 0 {
                return Some(i);
            }
            i -= 1;
            j -= 1;
        } else {
            // Bad-character shift: realign so the mismatched text char
            // lines up under its last occurrence in the pattern. The
            // shift is always at least 1 because min(j, 1 + last) < m.
            let lo = last[char_class(text[i])];
            i += m - j.min((1 + lo) as usize);
            j = m - 1;
        }
    }

    None
}

/// Rightmost position of each character class in the pattern, -1 if absent.
fn last_occurrence_table(pattern: &[char]) -> [i64; ALPHABET_SIZE] {
    let mut last = [-1i64; ALPHABET_SIZE];
    for (i, &c) in pattern.iter().enumerate() {
        last[char_class(c)] = i as i64;
    }
    last
}

/// Map a character to its table slot. Characters beyond the 7-bit range
/// all share class 0.
fn char_class(c: char) -> usize {
    let v = c as usize;
    if v < ALPHABET_SIZE {
        v
    } else {
        0
    }
}
