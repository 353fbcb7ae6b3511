//! Random plate numbers, e.g. "KQX 408"

use garage_types::Plate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Attempts before giving up on finding an unused plate
const MAX_ATTEMPTS: usize = 64;

pub struct PlateGenerator {
    rng: StdRng,
}

impl PlateGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Three letters, a space, three digits
    pub fn generate(&mut self) -> Plate {
        let mut plate = String::with_capacity(7);
        for _ in 0..3 {
            plate.push(LETTERS[self.rng.gen_range(0..LETTERS.len())] as char);
        }
        plate.push(' ');
        for _ in 0..3 {
            plate.push(DIGITS[self.rng.gen_range(0..DIGITS.len())] as char);
        }
        Plate::from(plate)
    }

    /// A plate not in `taken`. Falls back to the last candidate if every
    /// attempt collides.
    pub fn generate_unused(&mut self, taken: &[Plate]) -> Plate {
        let mut candidate = self.generate();
        for _ in 1..MAX_ATTEMPTS {
            if !taken.contains(&candidate) {
                break;
            }
            candidate = self.generate();
        }
        candidate
    }
}
