//! The Huffman codec: compress a symbol sequence to a bit string and decode
//! it back with the dictionary derived during compression.

use std::hash::Hash;

use log::debug;

use crate::error::{Error, Result};
use crate::huffman::tree::{build_tree, derive_dictionary, Dictionary, ReverseDictionary};
use crate::tools::freq_count::freqs;

/// A Huffman coder holding the dictionary pair derived by its most recent
/// [`compress`](HuffmanCodec::compress) call.
///
/// The dictionary and its inverse are rebuilt together on every compress;
/// decoding is only defined against the dictionary produced by the latest
/// compress on the same instance. Feeding a bit string produced elsewhere
/// is outside the contract and surfaces as [`Error::MalformedInput`] at
/// best.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    dictionary: Dictionary<S>,
    reverse: ReverseDictionary<S>,
}

impl<S: Copy + Eq + Hash> Default for HuffmanCodec<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy + Eq + Hash> HuffmanCodec<S> {
    pub fn new() -> HuffmanCodec<S> {
        HuffmanCodec {
            dictionary: Dictionary::default(),
            reverse: ReverseDictionary::default(),
        }
    }

    /// Compress the input by codeword substitution.
    ///
    /// Counts frequencies over `data`, builds the merge tree, derives a
    /// fresh dictionary pair (replacing this codec's current one), then
    /// concatenates each symbol's codeword in input order.
    pub fn compress(&mut self, data: &[S]) -> Result<String> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (order, counts) = freqs(data);
        let root = build_tree(&order, &counts);
        let (dictionary, reverse) = derive_dictionary(&root)?;
        self.dictionary = dictionary;
        self.reverse = reverse;

        let mut out = String::with_capacity(data.len());
        for sym in data {
            out.push_str(&self.dictionary[sym]);
        }
        debug!(
            "compressed {} symbols ({} distinct) into {} bits",
            data.len(),
            order.len(),
            out.len()
        );
        Ok(out)
    }

    /// The codeword dictionary from the most recent compress. Empty until
    /// compress has run.
    pub fn dictionary(&self) -> &Dictionary<S> {
        &self.dictionary
    }

    /// Decode a bit string by greedy prefix matching.
    ///
    /// Accumulates bits until the accumulator matches a complete entry in
    /// the reverse dictionary, emits that symbol, and resets. The prefix
    /// property makes the match unambiguous.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        if self.reverse.is_empty() {
            return Err(Error::EmptyDictionary);
        }

        let mut out = Vec::new();
        let mut current = String::new();
        for (position, bit) in bits.chars().enumerate() {
            if bit != '0' && bit != '1' {
                return Err(Error::MalformedInput { position });
            }
            current.push(bit);
            if let Some(&sym) = self.reverse.get(current.as_str()) {
                out.push(sym);
                current.clear();
            }
        }

        // Leftover bits matching no codeword mean the input was truncated
        // or produced by a different dictionary.
        if !current.is_empty() {
            return Err(Error::MalformedInput {
                position: bits.len() - current.len(),
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanCodec;
    use crate::error::Error;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn abac_round_trip() {
        let data = chars("abac");
        let mut codec = HuffmanCodec::new();
        let bits = codec.compress(&data).unwrap();
        assert_eq!(bits, "010011");
        assert_eq!(codec.decode(&bits).unwrap(), data);
    }

    #[test]
    fn text_round_trip() {
        let data = chars("walk with a pair of lovers beneath a starry night");
        let mut codec = HuffmanCodec::new();
        let bits = codec.compress(&data).unwrap();
        assert!(bits.len() < data.len() * 8);
        assert_eq!(codec.decode(&bits).unwrap(), data);
    }

    #[test]
    fn single_symbol_round_trip() {
        let data = chars("aaaa");
        let mut codec = HuffmanCodec::new();
        let bits = codec.compress(&data).unwrap();
        assert_eq!(bits, "0000");
        assert_eq!(codec.dictionary()[&'a'], "0");
        assert_eq!(codec.decode(&bits).unwrap(), data);
    }

    #[test]
    fn byte_symbols_round_trip() {
        let data: Vec<u8> = b"binary symbols work the same way".to_vec();
        let mut codec = HuffmanCodec::new();
        let bits = codec.compress(&data).unwrap();
        assert_eq!(codec.decode(&bits).unwrap(), data);
    }

    #[test]
    fn empty_input_rejected() {
        let mut codec: HuffmanCodec<char> = HuffmanCodec::new();
        assert_eq!(codec.compress(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn decode_before_compress_rejected() {
        let codec: HuffmanCodec<char> = HuffmanCodec::new();
        assert_eq!(codec.decode("0"), Err(Error::EmptyDictionary));
    }

    #[test]
    fn trailing_partial_code_rejected() {
        let mut codec = HuffmanCodec::new();
        let bits = codec.compress(&chars("abac")).unwrap();
        // "abac" ends with c = "11"; dropping one bit leaves a partial code.
        let truncated = &bits[..bits.len() - 1];
        assert_eq!(
            codec.decode(truncated),
            Err(Error::MalformedInput { position: 4 })
        );
    }

    #[test]
    fn non_bit_character_rejected() {
        let mut codec = HuffmanCodec::new();
        codec.compress(&chars("abac")).unwrap();
        assert_eq!(
            codec.decode("01x0"),
            Err(Error::MalformedInput { position: 2 })
        );
    }

    #[test]
    fn decode_empty_bit_string_is_empty() {
        let mut codec = HuffmanCodec::new();
        codec.compress(&chars("abac")).unwrap();
        assert_eq!(codec.decode("").unwrap(), vec![]);
    }

    #[test]
    fn compress_replaces_dictionary() {
        let mut codec = HuffmanCodec::new();
        codec.compress(&chars("abac")).unwrap();
        let bits = codec.compress(&chars("xyzzy")).unwrap();
        assert!(!codec.dictionary().contains_key(&'a'));
        assert_eq!(codec.decode(&bits).unwrap(), chars("xyzzy"));
    }
}
