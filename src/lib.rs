//! Standard Base64 codec over in-memory byte buffers: a fixed 64-character
//! alphabet with `=` padding on encode, and a permissive decoder that skips
//! bytes outside the alphabet.

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod serde;

pub use alphabet::{Alphabet, PAD};
pub use decode::{decode, decode_into, decoded_capacity, Decoder};
pub use encode::{encode, encode_into, encoded_len, Encoder};

pub const ALPHABET: Alphabet = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
