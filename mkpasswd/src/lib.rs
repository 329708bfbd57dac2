//! Random password generation with per-class character-count minimums.
//!
//! A password is produced by brute-force windowed search: build a random
//! character field twenty times the requested length, then slide a
//! password-sized window across it until one window contains at least the
//! configured number of lower-case, upper-case, digit, and special
//! characters. Options exclude the visually ambiguous characters `01IOl|`,
//! exclude an arbitrary list of characters, or alternate which hand types
//! each successive character on a QWERTY keyboard.
//!
//! Randomness comes from the operating system's CSPRNG by default;
//! [`generate_with`] accepts any `Rng + CryptoRng` for deterministic tests.
//!
//! # Usage
//!
//! ```
//! use mkpasswd::{Constraints, generate};
//!
//! let constraints = Constraints { length: 16, ..Constraints::default() };
//! let password = generate(&constraints)?;
//! assert_eq!(password.chars().count(), 16);
//! # Ok::<(), mkpasswd::Error>(())
//! ```

pub mod charset;
pub mod error;
pub mod generator;

pub use error::Error;
pub use generator::{Constraints, FIELD_MULTIPLIER, MAX_ATTEMPTS, generate, generate_with};
