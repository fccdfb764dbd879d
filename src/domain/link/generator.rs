//! Random alias generation
//!
//! Produces aliases for users who do not pick one themselves. Generated
//! aliases satisfy the length and format rules of
//! [`super::validation::validate_alias`] at any configured length, since
//! custom lengths are clamped to the alias bounds; callers that need
//! uniqueness against existing links retry on collision.

use rand::Rng;

use super::validation::{MAX_ALIAS_LENGTH, MIN_ALIAS_LENGTH};

/// Alphabet the generator draws from
const ALIAS_ALPHABET: &[u8] = b"1234567890abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated aliases
pub const GENERATED_ALIAS_LENGTH: usize = 8;

/// Generator for random short-link aliases
#[derive(Debug, Clone)]
pub struct AliasGenerator {
    length: usize,
}

impl AliasGenerator {
    pub fn new() -> Self {
        Self {
            length: GENERATED_ALIAS_LENGTH,
        }
    }

    /// Set the alias length, clamped to the valid alias bounds
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.clamp(MIN_ALIAS_LENGTH, MAX_ALIAS_LENGTH);
        self
    }

    /// Generate a new alias
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.gen_range(0..ALIAS_ALPHABET.len());
                ALIAS_ALPHABET[idx] as char
            })
            .collect()
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an alias of the default length
pub fn generate_alias() -> String {
    AliasGenerator::new().generate()
}
