use std::collections::HashMap;

/// True when both strings use exactly the same characters the same number
/// of times. Case and whitespace are significant.
pub fn is_anagram(first: &str, second: &str) -> bool {
    let mut seen: HashMap<char, i64> = HashMap::new();

    for ch in first.chars() {
        *seen.entry(ch).or_insert(0) += 1;
    }

    for ch in second.chars() {
        match seen.get_mut(&ch) {
            Some(count) => *count -= 1,
            None => return false,
        }
    }

    seen.values().all(|&count| count == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_anagram() {
        assert!(is_anagram("listen", "silent"));
        assert!(is_anagram("", ""));
        assert!(is_anagram("aab", "aba"));
        assert!(!is_anagram("aab", "abb"));
        assert!(!is_anagram("abc", "abcd"));
        assert!(!is_anagram("Listen", "silent"));
        assert!(is_anagram("çava", "avaç"));
    }
}
