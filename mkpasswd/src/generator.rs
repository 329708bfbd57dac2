//! Password generation by windowed search over an oversized random field.
//!
//! Rather than constructively assembling a password (inject the required
//! characters, then shuffle — which needs its own argument about placement
//! bias), generation builds a random character field [`FIELD_MULTIPLIER`]
//! times the requested length and slides a password-sized window across it
//! until one window meets every per-class minimum. If no window passes, the
//! field is discarded and rebuilt, up to [`MAX_ATTEMPTS`] times.

use std::collections::BTreeSet;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use tracing::{debug, trace};

use crate::charset::{AMBIGUOUS, Class, Pools};
use crate::error::Error;

/// The character field is this many times longer than the requested password.
pub const FIELD_MULTIPLIER: usize = 20;

/// Maximum number of field rebuilds before generation gives up.
///
/// Satisfiable constraints essentially always succeed on the first field;
/// the cap exists so constraints that validate but can never be met (say, a
/// special-character minimum with every special character excluded) surface
/// an error instead of looping forever.
pub const MAX_ATTEMPTS: usize = 100;

/// Constraints for a single generated password.
#[derive(Debug, Clone)]
pub struct Constraints {
    /// Password length.
    pub length: usize,
    /// Minimum number of lower-case letters.
    pub lower: usize,
    /// Minimum number of upper-case letters.
    pub upper: usize,
    /// Minimum number of digits.
    pub digits: usize,
    /// Minimum number of special characters.
    pub special: usize,
    /// Alternate the hand of origin of successive characters.
    pub alternate: bool,
    /// Exclude the visually ambiguous characters `01IOl|`.
    pub distinct: bool,
    /// Additional characters to never use. Duplicates and ordering are
    /// irrelevant; matching is case-sensitive.
    pub skip_characters: Vec<char>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            length: 12,
            lower: 2,
            upper: 2,
            digits: 2,
            special: 1,
            alternate: false,
            distinct: false,
            skip_characters: Vec::new(),
        }
    }
}

impl Constraints {
    /// Union of the ambiguous table (when `distinct` is set) and the
    /// explicit skip list.
    fn exclusions(&self) -> BTreeSet<char> {
        let mut skip: BTreeSet<char> = self.skip_characters.iter().copied().collect();
        if self.distinct {
            skip.extend(AMBIGUOUS.chars());
        }
        skip
    }

    fn validate(&self, pools: &Pools, skip: &BTreeSet<char>) -> Result<(), Error> {
        if self.length == 0 {
            return Err(Error::ZeroLength);
        }

        let required = self.lower + self.upper + self.digits + self.special;
        if required > self.length {
            return Err(Error::MinimumsExceedLength { required, length: self.length });
        }

        // Rejection sampling only terminates if something survives the
        // exclusions in every pool it draws from.
        let usable = |pool: &[char]| pool.iter().any(|c| !skip.contains(c));
        if self.alternate {
            if !usable(&pools.left) {
                return Err(Error::EmptyPool { pool: "left-hand" });
            }
            if !usable(&pools.right) {
                return Err(Error::EmptyPool { pool: "right-hand" });
            }
        } else if !usable(&pools.all) {
            return Err(Error::EmptyPool { pool: "combined" });
        }

        Ok(())
    }
}

/// Generates one password satisfying `constraints`, drawing randomness from
/// the operating system's CSPRNG.
pub fn generate(constraints: &Constraints) -> Result<String, Error> {
    generate_with(constraints, &mut OsRng)
}

/// Generates one password from a caller-supplied cryptographically secure
/// RNG. Tests use this with a seeded [`rand::rngs::StdRng`].
pub fn generate_with<R>(constraints: &Constraints, rng: &mut R) -> Result<String, Error>
where
    R: Rng + CryptoRng,
{
    let pools = Pools::new();
    let skip = constraints.exclusions();
    constraints.validate(&pools, &skip)?;

    if !skip.is_empty() {
        debug!(skip = %skip.iter().collect::<String>(), "character exclusions active");
    }

    for attempt in 1..=MAX_ATTEMPTS {
        debug!(attempt, "generation attempt");
        let field = build_field(constraints, &pools, &skip, rng);
        if let Some(password) = scan_field(&field, constraints, &pools) {
            return Ok(password);
        }
    }

    Err(Error::AttemptsExhausted { attempts: MAX_ATTEMPTS })
}

/// Builds the oversized random character field.
///
/// Each draw is rejection-sampled against the exclusion set: excluded
/// characters are discarded and redrawn. In alternate mode the hand side is
/// seeded by a fair coin and only an *accepted* character flips it, so a
/// rejected draw is retried from the same side.
fn build_field<R>(
    constraints: &Constraints,
    pools: &Pools,
    skip: &BTreeSet<char>,
    rng: &mut R,
) -> Vec<char>
where
    R: Rng + CryptoRng,
{
    let field_length = FIELD_MULTIPLIER * constraints.length;
    let mut field = Vec::with_capacity(field_length);
    let mut next_is_left = rng.gen_bool(0.5);

    while field.len() < field_length {
        let pool: &[char] = if !constraints.alternate {
            &pools.all
        } else if next_is_left {
            &pools.left
        } else {
            &pools.right
        };

        let next = pool[rng.gen_range(0..pool.len())];
        if skip.contains(&next) {
            trace!(character = %next, "skipping excluded character");
            continue;
        }

        field.push(next);
        next_is_left = !next_is_left;
    }

    field
}

/// Slides a password-sized window across `field`, returning the first window
/// whose per-class tallies meet every configured minimum.
///
/// The tallies are maintained incrementally: each one-position slide removes
/// the character leaving the window and adds the one entering it. The window
/// whose right edge sits exactly at the end of the field is never tested;
/// reaching it ends the scan without a result.
fn scan_field(field: &[char], constraints: &Constraints, pools: &Pools) -> Option<String> {
    let length = constraints.length;
    let mut counts = ClassCounts::of(&field[..length], pools);

    for left in 0..(field.len() - length) {
        trace!(
            window = left + 1,
            lower = counts.lower,
            upper = counts.upper,
            digits = counts.digits,
            special = counts.special,
            "window tallies"
        );

        if counts.satisfies(constraints) {
            return Some(field[left..left + length].iter().collect());
        }

        counts.remove(field[left], pools);
        counts.add(field[left + length], pools);
    }

    None
}

/// Per-class character tallies for one candidate window.
#[derive(Debug, Default, Clone, Copy)]
struct ClassCounts {
    lower: usize,
    upper: usize,
    digits: usize,
    special: usize,
}

impl ClassCounts {
    fn of(window: &[char], pools: &Pools) -> Self {
        let mut counts = Self::default();
        for &c in window {
            counts.add(c, pools);
        }
        counts
    }

    fn add(&mut self, c: char, pools: &Pools) {
        match pools.class_of(c) {
            Some(Class::Lower) => self.lower += 1,
            Some(Class::Upper) => self.upper += 1,
            Some(Class::Digit) => self.digits += 1,
            Some(Class::Special) => self.special += 1,
            None => {}
        }
    }

    fn remove(&mut self, c: char, pools: &Pools) {
        match pools.class_of(c) {
            Some(Class::Lower) => self.lower -= 1,
            Some(Class::Upper) => self.upper -= 1,
            Some(Class::Digit) => self.digits -= 1,
            Some(Class::Special) => self.special -= 1,
            None => {}
        }
    }

    fn satisfies(&self, constraints: &Constraints) -> bool {
        self.lower >= constraints.lower
            && self.upper >= constraints.upper
            && self.digits >= constraints.digits
            && self.special >= constraints.special
    }
}
