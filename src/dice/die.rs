//! A single die with `n` faces.

use crate::core::error::{GameError, Result};
use crate::core::GameRng;

/// A die that remembers the value it last showed.
///
/// Randomness comes from the `GameRng` handed over at construction, so a
/// seeded stream gives a reproducible sequence of faces.
#[derive(Clone, Debug)]
pub struct Die {
    faces: u32,
    last: Option<u32>,
    rng: GameRng,
}

impl Die {
    /// Create a die. `faces` must be at least 1.
    pub fn new(faces: u32, rng: GameRng) -> Result<Self> {
        if faces == 0 {
            return Err(GameError::InvalidConfig("a die needs at least one face".into()));
        }
        Ok(Self {
            faces,
            last: None,
            rng,
        })
    }

    /// Roll the die. Always in `1..=faces`.
    pub fn roll(&mut self) -> u32 {
        let value = self.rng.roll_face(self.faces);
        self.last = Some(value);
        value
    }

    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Value shown by the last roll; `None` before the first one.
    #[must_use]
    pub fn last_value(&self) -> Option<u32> {
        self.last
    }

    /// Forget the last value, as if never rolled.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("-"),
        }
    }
}
