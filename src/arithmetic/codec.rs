//! The arithmetic codec: encode a whole message as one `f64` inside a
//! nested real interval, and reverse the narrowing to decode.

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::arithmetic::model::{Interval, SymbolModel};
use crate::error::{Error, Result};

/// Slack granted past either end of the unit interval when resolving a
/// normalized decode position. Covers the floating-point edge at `t ≈ 1.0`.
const EDGE_TOLERANCE: f64 = 1e-9;

/// An arithmetic coder for one message.
///
/// Construction builds the probability and interval tables from the message
/// itself; the same statistics drive both encode and decode. This is a
/// static two-pass model: the decoder must hold the model built from the
/// encoded message, and must be told the original message length, since the
/// encoded value carries no terminator.
///
/// Uses plain `f64` arithmetic with no renormalization. The working
/// interval shrinks geometrically, so messages beyond roughly 50 symbols
/// exhaust the mantissa and stop round-tripping; a fully collapsed interval
/// is reported as [`Error::PrecisionLoss`].
#[derive(Debug, Clone)]
pub struct ArithmeticCodec<S> {
    message: Vec<S>,
    model: SymbolModel<S>,
}

impl<S: Copy + Eq + Hash + Debug> ArithmeticCodec<S> {
    /// Model the given message. Fails with [`Error::EmptyInput`] on an
    /// empty message.
    pub fn new(message: &[S]) -> Result<ArithmeticCodec<S>> {
        let model = SymbolModel::from_message(message)?;
        for (sym, probability, interval) in model.iter() {
            trace!(
                "p({:?}) = {:.6} -> [{:.6}, {:.6})",
                sym,
                probability,
                interval.low,
                interval.high
            );
        }
        Ok(ArithmeticCodec {
            message: message.to_vec(),
            model,
        })
    }

    /// The model built at construction time.
    pub fn model(&self) -> &SymbolModel<S> {
        &self.model
    }

    /// Encode the stored message.
    pub fn encode(&self) -> Result<f64> {
        self.encode_sequence(&self.message)
    }

    /// Encode an explicit sequence against this codec's model.
    ///
    /// Narrows the working interval `[0,1)` once per symbol and returns the
    /// midpoint of the final interval, the value with the widest numeric
    /// margin on both sides.
    pub fn encode_sequence(&self, data: &[S]) -> Result<f64> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut low = 0.0_f64;
        let mut high = 1.0_f64;
        for (processed, sym) in data.iter().enumerate() {
            let range = high - low;
            if range <= 0.0 {
                return Err(Error::PrecisionLoss { processed });
            }
            let interval = self.model.interval_of(sym).ok_or(Error::UnknownSymbol)?;
            let next_low = low + range * interval.low;
            let next_high = low + range * interval.high;
            low = next_low;
            high = next_high;
        }
        if high <= low {
            return Err(Error::PrecisionLoss {
                processed: data.len(),
            });
        }

        let value = (low + high) / 2.0;
        debug!(
            "encoded {} symbols into {} within [{:e}, {:e})",
            data.len(),
            value,
            low,
            high
        );
        Ok(value)
    }

    /// Decode `length` symbols from an encoded value.
    ///
    /// Repeats the narrowing the encoder performed, each round normalizing
    /// the value into the working interval and scanning the interval table
    /// in model order for the symbol whose sub-interval contains it.
    pub fn decode(&self, value: f64, length: usize) -> Result<Vec<S>> {
        // NaN fails this containment check as well.
        if !(0.0..1.0).contains(&value) {
            return Err(Error::UnknownSymbol);
        }

        let mut low = 0.0_f64;
        let mut high = 1.0_f64;
        let mut out = Vec::with_capacity(length);
        for processed in 0..length {
            let range = high - low;
            if range <= 0.0 {
                return Err(Error::PrecisionLoss { processed });
            }
            let t = (value - low) / range;
            let (sym, interval) = self.resolve(t)?;
            out.push(sym);
            let next_low = low + range * interval.low;
            let next_high = low + range * interval.high;
            low = next_low;
            high = next_high;
        }
        Ok(out)
    }

    /// Map a normalized position to its symbol. Positions within
    /// [`EDGE_TOLERANCE`] outside the unit interval clamp to the nearest
    /// end interval; anything further out cannot come from rounding alone.
    fn resolve(&self, t: f64) -> Result<(S, Interval)> {
        if let Some(hit) = self.model.locate(t) {
            return Ok(hit);
        }
        if (1.0..=1.0 + EDGE_TOLERANCE).contains(&t) {
            trace!("clamping t = {} to the final interval", t);
            return self.model.last().ok_or(Error::UnknownSymbol);
        }
        if (-EDGE_TOLERANCE..0.0).contains(&t) {
            trace!("clamping t = {} to the first interval", t);
            return self.model.first().ok_or(Error::UnknownSymbol);
        }
        Err(Error::UnknownSymbol)
    }
}
