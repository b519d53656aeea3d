//! Character classes and the similar-character filter.
//!
//! Every class is a fixed ASCII string. The order of [`CharClass::ALL`] is
//! the order in which the generator places its guaranteed characters.

/// Characters that are easy to confuse with one another when read back.
pub const SIMILAR: &str = "0OolI18B9q";

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A named set of characters a password may draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }

    /// The characters of this class, minus [`SIMILAR`] when `exclude_similar`
    /// is set. May be empty.
    pub fn filtered(self, exclude_similar: bool) -> Vec<char> {
        let mut set: Vec<char> = self.chars().chars().collect();
        if exclude_similar {
            set.retain(|c| !is_similar(*c));
        }
        set
    }
}

pub fn is_similar(c: char) -> bool {
    SIMILAR.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes() {
        assert_eq!(CharClass::Uppercase.chars().len(), 26);
        assert_eq!(CharClass::Lowercase.chars().len(), 26);
        assert_eq!(CharClass::Digits.chars().len(), 10);
        assert_eq!(CharClass::Symbols.chars().len(), 26);
    }

    #[test]
    fn filter_removes_similar_characters() {
        let digits = CharClass::Digits.filtered(true);
        assert_eq!(digits.iter().collect::<String>(), "234567");

        let upper = CharClass::Uppercase.filtered(true);
        assert_eq!(upper.len(), 26 - 3);
        assert!(!upper.contains(&'O'));
        assert!(!upper.contains(&'I'));
        assert!(!upper.contains(&'B'));

        let lower = CharClass::Lowercase.filtered(true);
        assert_eq!(lower.len(), 26 - 3);
        assert!(!lower.contains(&'o'));
        assert!(!lower.contains(&'l'));
        assert!(!lower.contains(&'q'));
    }

    #[test]
    fn symbols_unaffected_by_filter() {
        assert_eq!(CharClass::Symbols.filtered(true).len(), 26);
    }

    #[test]
    fn no_filter_keeps_everything() {
        for class in CharClass::ALL {
            assert_eq!(class.filtered(false).len(), class.chars().len());
        }
    }
}
