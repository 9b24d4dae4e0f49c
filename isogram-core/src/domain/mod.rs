//! Pure text-processing stages
//!
//! Data flows strictly forward:
//! raw text → [`HexPairDecoder`] (optional) → [`Normalizer`] → [`Tokenizer`]
//! → [`RepetitionFilter`].

pub mod classifier;
pub mod hex;
pub mod normalizer;
pub mod repetition;
pub mod tokenizer;

pub use classifier::{AsciiClassifier, CharClass, CharacterClassifier};
pub use hex::HexPairDecoder;
pub use normalizer::Normalizer;
pub use repetition::{DuplicatePolicy, FilterPass, RepetitionFilter, Verdict};
pub use tokenizer::Tokenizer;
