//! Password generation from a union of selectable character classes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("select at least one character class")]
    NoClassesSelected,
}

/// Requested length and character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSpec {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordSpec {
    /// Union of the selected classes, in class order.
    pub fn charset(&self) -> String {
        let mut pool = String::new();
        if self.uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        pool
    }
}

/// Draw `spec.length` characters independently and uniformly from the pool.
///
/// The RNG is injected so tests can run deterministically; callers pass
/// `rand::thread_rng()`.
pub fn generate<R: Rng>(spec: &PasswordSpec, rng: &mut R) -> Result<String, PasswordError> {
    let pool: Vec<char> = spec.charset().chars().collect();
    if pool.is_empty() {
        return Err(PasswordError::NoClassesSelected);
    }
    Ok((0..spec.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}
