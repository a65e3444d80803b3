//! Random password generation.

use rand::Rng;
use rand::seq::SliceRandom;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Symbols a generated password may contain.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Shortest password [`generate_password`] will produce; one slot per class.
pub const MIN_GENERATED_LENGTH: usize = 4;

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}

/// Generates a password with at least one uppercase letter, lowercase
/// letter, digit and symbol, the rest drawn from all four sets, shuffled.
///
/// Lengths below [`MIN_GENERATED_LENGTH`] are raised to it.
pub fn generate_password(length: usize) -> String {
    let length = length.max(MIN_GENERATED_LENGTH);
    let mut rng = rand::thread_rng();
    let symbols = PASSWORD_SYMBOLS.as_bytes();

    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, symbols].concat();

    let mut bytes = Vec::with_capacity(length);
    bytes.push(pick(&mut rng, UPPERCASE));
    bytes.push(pick(&mut rng, LOWERCASE));
    bytes.push(pick(&mut rng, DIGITS));
    bytes.push(pick(&mut rng, symbols));
    bytes.extend((MIN_GENERATED_LENGTH..length).map(|_| pick(&mut rng, &all)));

    bytes.shuffle(&mut rng);
    bytes.into_iter().map(char::from).collect()
}
