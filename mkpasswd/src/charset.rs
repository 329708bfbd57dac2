//! Character tables used for password generation.
//!
//! Seven hand-enumerated base tables split the usable ASCII printable space
//! by character class and by which hand types the character on a QWERTY
//! keyboard. Everything else (upper-case variants, per-class unions, per-hand
//! unions) is derived from these.

/// Lower-case letters typed with the left hand.
pub const LEFT_LOWER: &str = "qwertasdfgzxvb";

/// Lower-case letters typed with the right hand.
pub const RIGHT_LOWER: &str = "yuiophjklnm";

/// Digits typed with the left hand.
pub const LEFT_DIGIT: &str = "123456";

/// Digits typed with the right hand.
pub const RIGHT_DIGIT: &str = "7890";

/// Special characters typed with the left hand.
pub const LEFT_SPECIAL: &str = "`!#$%@~";

/// Special characters typed with the right hand.
pub const RIGHT_SPECIAL: &str = "\"&'()*+,-./:;<=>?[\\]^_{|}";

/// Characters visually confusable with one another in many fonts.
pub const AMBIGUOUS: &str = "01IOl|";

/// The character class a password character counts toward.
///
/// The four classes are disjoint; a character belongs to at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Lower,
    Upper,
    Digit,
    Special,
}

/// Pools derived from the base tables.
///
/// Built once per generation call. The base tables are constant, so this is
/// observably equivalent to building the pools once at process start.
#[derive(Debug)]
pub struct Pools {
    /// Every usable character.
    pub all: Vec<char>,
    /// Every left-hand character.
    pub left: Vec<char>,
    /// Every right-hand character.
    pub right: Vec<char>,
    /// All lower-case letters.
    pub lower: Vec<char>,
    /// All upper-case letters.
    pub upper: Vec<char>,
    /// All digits.
    pub digits: Vec<char>,
    /// All special characters.
    pub special: Vec<char>,
}

impl Pools {
    /// Derives the full set of pools from the base tables.
    pub fn new() -> Self {
        let left_lower: Vec<char> = LEFT_LOWER.chars().collect();
        let right_lower: Vec<char> = RIGHT_LOWER.chars().collect();
        let left_upper: Vec<char> =
            LEFT_LOWER.chars().map(|c| c.to_ascii_uppercase()).collect();
        let right_upper: Vec<char> =
            RIGHT_LOWER.chars().map(|c| c.to_ascii_uppercase()).collect();
        let left_digit: Vec<char> = LEFT_DIGIT.chars().collect();
        let right_digit: Vec<char> = RIGHT_DIGIT.chars().collect();
        let left_special: Vec<char> = LEFT_SPECIAL.chars().collect();
        let right_special: Vec<char> = RIGHT_SPECIAL.chars().collect();

        let lower = [left_lower.as_slice(), right_lower.as_slice()].concat();
        let upper = [left_upper.as_slice(), right_upper.as_slice()].concat();
        let digits = [left_digit.as_slice(), right_digit.as_slice()].concat();
        let special = [left_special.as_slice(), right_special.as_slice()].concat();

        let left = [left_lower, left_upper, left_digit, left_special].concat();
        let right = [right_lower, right_upper, right_digit, right_special].concat();
        let all = [left.as_slice(), right.as_slice()].concat();

        Self { all, left, right, lower, upper, digits, special }
    }

    /// Returns the class of `c`, or `None` for a character outside every
    /// base table.
    ///
    /// Membership is a set lookup against the derived unions, not a generic
    /// character-class predicate, so only characters the tables enumerate
    /// ever count toward a tally.
    pub fn class_of(&self, c: char) -> Option<Class> {
        if self.lower.contains(&c) {
            Some(Class::Lower)
        } else if self.upper.contains(&c) {
            Some(Class::Upper)
        } else if self.digits.contains(&c) {
            Some(Class::Digit)
        } else if self.special.contains(&c) {
            Some(Class::Special)
        } else {
            None
        }
    }
}

impl Default for Pools {
    fn default() -> Self {
        Self::new()
    }
}
