// src/generators/charset.rs
//! Named symbol sets and the pools built from them.

pub const SPECIAL_CHARACTERS: &str = "+-/*!&$#?=@<>";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "1234567890";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolSet {
    Special,
    Letters,
    Digits,
}

impl SymbolSet {
    pub const ALL: [SymbolSet; 3] = [SymbolSet::Special, SymbolSet::Letters, SymbolSet::Digits];

    pub fn symbols(&self) -> &'static str {
        match self {
            SymbolSet::Special => SPECIAL_CHARACTERS,
            SymbolSet::Letters => LETTERS,
            SymbolSet::Digits => DIGITS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SymbolSet::Special => "Special characters",
            SymbolSet::Letters => "Letters",
            SymbolSet::Digits => "Digits",
        }
    }
}

impl std::fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The characters a password may be drawn from.
///
/// Each character appears once, in first-seen order, so sampling an index
/// uniformly is the same as sampling the set uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolPool {
    chars: Vec<char>,
}

impl SymbolPool {
    pub fn from_sets(sets: &[SymbolSet]) -> Self {
        let mut pool = Self::default();
        for set in sets {
            pool.extend(set.symbols());
        }
        pool
    }

    pub fn custom(symbols: &str) -> Self {
        let mut pool = Self::default();
        pool.extend(symbols);
        pool
    }

    pub fn extend(&mut self, symbols: &str) {
        for c in symbols.chars() {
            if !self.chars.contains(&c) {
                self.chars.push(c);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_selected_sets() {
        let pool = SymbolPool::from_sets(&[SymbolSet::Letters, SymbolSet::Digits]);
        assert_eq!(pool.len(), 62);
        assert!(pool.as_chars().contains(&'m'));
        assert!(pool.as_chars().contains(&'0'));
        assert!(!pool.as_chars().contains(&'#'));
    }

    #[test]
    fn all_sets_are_disjoint() {
        let pool = SymbolPool::from_sets(&SymbolSet::ALL);
        let expected: usize = SymbolSet::ALL.iter().map(|s| s.symbols().chars().count()).sum();
        assert_eq!(pool.len(), expected);
    }

    #[test]
    fn custom_pool_drops_duplicates() {
        let pool = SymbolPool::custom("aabbc");
        assert_eq!(pool.as_chars(), &['a', 'b', 'c']);
    }

    #[test]
    fn no_sets_means_empty_pool() {
        assert!(SymbolPool::from_sets(&[]).is_empty());
        assert!(SymbolPool::custom("").is_empty());
    }
}
