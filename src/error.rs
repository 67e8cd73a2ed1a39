//! Error types for the entropic library.
//!
//! Every fallible operation returns a structured error to its immediate
//! caller. The codecs are pure transformations with no external failure
//! sources, so there is no retry or recovery logic anywhere in the crate.

use thiserror::Error;

/// Failures reported by the Huffman and arithmetic codecs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input sequence was empty. Neither codec defines an encoding for
    /// a zero-length message.
    #[error("cannot encode an empty sequence")]
    EmptyInput,

    /// Huffman decode was called before any compress built a dictionary.
    #[error("no dictionary available: decode called before compress")]
    EmptyDictionary,

    /// The bit string could not be resolved against the current dictionary.
    /// `position` is the offset of the first undecodable bit.
    #[error("malformed bit string at position {position}")]
    MalformedInput { position: usize },

    /// A symbol or encoded value is not covered by the codec's model.
    #[error("symbol or value not present in the model")]
    UnknownSymbol,

    /// Dictionary derivation assigned the same codeword twice. The merge
    /// tree guarantees this cannot happen; seeing it means the tree was
    /// corrupted.
    #[error("corrupt dictionary: duplicate codeword {codeword:?}")]
    CorruptDictionary { codeword: String },

    /// The arithmetic working interval underflowed to zero width after
    /// `processed` symbols. Intrinsic limit of the finite-precision design.
    #[error("interval width underflowed to zero after {processed} symbols")]
    PrecisionLoss { processed: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
