//! The huffman module implements classical Huffman coding for the entropic
//! library.
//!
//! Huffman coding assigns each symbol a prefix-free codeword whose length
//! shrinks as the symbol's frequency grows. Codewords come from a binary
//! merge tree: the two lightest nodes are merged until one root remains,
//! and the path from root to leaf spells the codeword.
//!
//! Output stays a text bit string of `'0'`/`'1'` characters. Packing it
//! into actual binary storage is out of scope here.

pub mod codec;
pub mod tree;

pub use codec::HuffmanCodec;
