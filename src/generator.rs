//! Password generation.
//!
//! A password is built in three passes: one guaranteed character from each
//! enabled class, a fill from the combined pool, then a shuffle so the
//! guaranteed characters don't sit at the front.

use std::fmt;

use zeroize::Zeroizing;

use crate::charset::CharClass;
use crate::error::GenerateError;
use crate::random::RandomSource;

/// Longest password [`generate`] will build.
pub const MAX_LENGTH: usize = 4096;

/// What to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
            exclude_similar: true,
        }
    }
}

impl GeneratorConfig {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in fixed order, each already filtered. Classes the
    /// filter emptied are left out.
    pub fn class_sets(&self) -> Vec<(CharClass, Vec<char>)> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .map(|class| (class, class.filtered(self.exclude_similar)))
            .filter(|(_, set)| !set.is_empty())
            .collect()
    }
}

/// A generated password. The buffer is wiped on drop.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Generate one password for `config`.
///
/// Fails with [`GenerateError::EmptyPool`] when no usable characters remain
/// and with [`GenerateError::InvalidLength`] when `length` is zero, above
/// [`MAX_LENGTH`], or too short to hold one character from each enabled
/// class.
pub fn generate<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Password, GenerateError>
where
    R: RandomSource + ?Sized,
{
    let sets = config.class_sets();
    let pool: Vec<char> = sets.iter().flat_map(|(_, set)| set.iter().copied()).collect();

    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let minimum = sets.len();
    if config.length < minimum || config.length > MAX_LENGTH {
        return Err(GenerateError::InvalidLength {
            length: config.length,
            minimum,
            maximum: MAX_LENGTH,
        });
    }

    tracing::debug!(
        pool = pool.len(),
        classes = sets.len(),
        length = config.length,
        "building password"
    );

    let mut chars = Zeroizing::new(Vec::with_capacity(config.length));

    for (_, set) in &sets {
        chars.push(set[rng.uniform(set.len())]);
    }

    let remaining = config.length - chars.len();
    for _ in 0..remaining {
        chars.push(pool[rng.uniform(pool.len())]);
    }

    rng.shuffle(&mut chars);

    Ok(Password(Zeroizing::new(chars.iter().collect())))
}
