//! Knuth-Morris-Pratt exact matching.
//!
//! Each keyword is matched independently with a border-table scan, so the
//! total cost is O(k · |text|) for k keywords. Overlapping occurrences are
//! counted: after a full match the pattern cursor falls back through the
//! border table instead of restarting, so "aa" occurs twice in "aaa".

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

/// Count (possibly overlapping) occurrences of `pattern` in `text`.
fn count_occurrences(text: &[char], pattern: &[char]) -> u32 {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return 0;
    }

    let border = compute_border(pattern);
    let mut count = 0u32;
    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
        }

        if j == m {
            count += 1;
            j = border[j - 1];
        } else if i < n && text[i] != pattern[j] {
            if j != 0 {
                j = border[j - 1];
            } else {
                i += 1;
            }
        }
    }

    count
}

/// Border table: `border[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
fn compute_border(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut border = vec![0usize; m];
    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            border[i] = len;
            i += 1;
        } else if len != 0 {
            len = border[len - 1];
        } else {
            border[i] = 0;
            i += 1;
        }
    }

    border
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(text: &str, keywords: &[&str]) -> Vec<u32> {
        let owned: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        match_counts(text, &owned)
    }

    #[test]
    fn test_single_occurrence() {
        assert_eq!(counts("python developer", &["python"]), vec![1]);
    }

    #[test]
    fn test_no_occurrence() {
        assert_eq!(counts("java developer", &["python"]), vec![0]);
    }

    #[test]
    fn test_overlapping_matches_counted() {
        // Positions 0, 1, 2.
        assert_eq!(counts("aaaa", &["aa"]), vec![3]);
        assert_eq!(counts("aaa", &["aa"]), vec![2]);
    }

    #[test]
    fn test_empty_keyword_is_zero() {
        assert_eq!(counts("anything", &[""]), vec![0]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(counts("", &["sql"]), vec![0]);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(counts("ab", &["abc"]), vec![0]);
    }

    #[test]
    fn test_multiple_keywords_keep_index_order() {
        assert_eq!(
            counts("sql and python and sql", &["python", "sql", "rust"]),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_border_table_periodic_pattern() {
        let pattern: Vec<char> = "abab".chars().collect();
        assert_eq!(compute_border(&pattern), vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_substring_hits_inside_words() {
        // Matching is substring-based on the normalized text stream.
        assert_eq!(counts("javascript and java", &["java"]), vec![2]);
    }
}
