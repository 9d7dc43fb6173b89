/// Turns the string form of a key into a raw hash. The map reduces the
/// result modulo its bucket count.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

/// Sum of the character codes of the key. Cheap and deterministic, and
/// badly distributed: anagrams always collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCodeSum;

impl KeyHasher for CharCodeSum {
    fn hash_key(&self, key: &str) -> u64 {
        key.chars().map(|c| c as u64).sum()
    }
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_char_codes() {
        // '5' = 53, '4' = 52
        assert_eq!(CharCodeSum.hash_key("54"), 105);
        assert_eq!(CharCodeSum.hash_key(""), 0);
        assert_eq!(CharCodeSum.hash_key("é"), 0xe9);
    }

    #[test]
    fn anagrams_collide() {
        assert_eq!(CharCodeSum.hash_key("344"), CharCodeSum.hash_key("434"));
        assert_eq!(CharCodeSum.hash_key("listen"), CharCodeSum.hash_key("silent"));
    }

    #[test]
    fn closures_are_hashers() {
        let by_len = |key: &str| key.len() as u64;
        assert_eq!(by_len.hash_key("Marina"), 6);
    }
}
