//! Classical entropy coding: Huffman and arithmetic coders for finite
//! symbol sequences.
//!
//! Both codecs exploit the frequency distribution of the input and recover
//! the original sequence exactly. They are independent strategies for the
//! same problem and share nothing but the frequency counter:
//!
//! - `huffman`: builds a prefix-free codeword per symbol from a binary
//!   merge tree, compresses by substitution, decodes by greedy prefix
//!   matching against the dictionary the compress call derived.
//! - `arithmetic`: models the message once, encodes it as a single `f64`
//!   inside a nested real interval, decodes given that value and the
//!   original length.
//!
//! Encoded output stays text-like (a bit string, or one `f64`); packing
//! into binary storage, adaptive models, and renormalized arithmetic are
//! all out of scope. Codec instances hold their derived model as plain
//! fields; distinct instances are fully independent, and mutating calls
//! take `&mut self`.

pub mod arithmetic;
pub mod error;
pub mod huffman;
pub mod tools;

pub use error::{Error, Result};
