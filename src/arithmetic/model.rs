//! Static symbol model for arithmetic coding: probabilities and cumulative
//! sub-intervals of `[0,1)`.

use std::hash::Hash;

use log::trace;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::tools::freq_count::freqs;

/// A symbol's half-open share `[low, high)` of the unit interval. The width
/// equals the symbol's probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    /// True when `t` falls inside the half-open interval.
    pub fn contains(&self, t: f64) -> bool {
        self.low <= t && t < self.high
    }
}

/// The probability and interval tables for one message, laid out in
/// first-seen symbol order.
///
/// Built once from the message to be encoded and immutable afterward. The
/// intervals are contiguous and cover exactly `[0,1)`; the final boundary
/// is pinned to 1.0 since the accumulated probability sum can land a hair
/// off in floating point.
#[derive(Debug, Clone)]
pub struct SymbolModel<S> {
    entries: Vec<(S, f64, Interval)>,
    index: FxHashMap<S, usize>,
}

impl<S: Copy + Eq + Hash> SymbolModel<S> {
    /// Build the model from the message statistics: one counting pass, then
    /// consecutive probability mass accumulated into contiguous intervals.
    pub fn from_message(message: &[S]) -> Result<SymbolModel<S>> {
        if message.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (order, counts) = freqs(message);
        let total = message.len() as f64;
        let mut entries = Vec::with_capacity(order.len());
        let mut index = FxHashMap::default();

        let mut low = 0.0;
        for (i, &sym) in order.iter().enumerate() {
            let probability = f64::from(counts[&sym]) / total;
            let high = if i == order.len() - 1 { 1.0 } else { low + probability };
            entries.push((sym, probability, Interval { low, high }));
            index.insert(sym, i);
            low = high;
        }
        trace!("symbol model carries {} intervals", entries.len());

        Ok(SymbolModel { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sub-interval assigned to `sym`, if the model covers it.
    pub fn interval_of(&self, sym: &S) -> Option<Interval> {
        self.index.get(sym).map(|&i| self.entries[i].2)
    }

    /// The probability assigned to `sym`, if the model covers it.
    pub fn probability_of(&self, sym: &S) -> Option<f64> {
        self.index.get(sym).map(|&i| self.entries[i].1)
    }

    /// Scan the intervals in model order for the one containing `t`.
    pub fn locate(&self, t: f64) -> Option<(S, Interval)> {
        self.entries
            .iter()
            .find(|(_, _, interval)| interval.contains(t))
            .map(|&(sym, _, interval)| (sym, interval))
    }

    /// The final entry in model order.
    pub fn last(&self) -> Option<(S, Interval)> {
        self.entries.last().map(|&(sym, _, interval)| (sym, interval))
    }

    /// The first entry in model order.
    pub fn first(&self) -> Option<(S, Interval)> {
        self.entries.first().map(|&(sym, _, interval)| (sym, interval))
    }

    /// Iterate `(symbol, probability, interval)` in model order.
    pub fn iter(&self) -> impl Iterator<Item = (S, f64, Interval)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::SymbolModel;
    use crate::error::Error;

    fn model_for(text: &str) -> SymbolModel<char> {
        SymbolModel::from_message(&text.chars().collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn abac_probabilities() {
        let model = model_for("abac");
        assert_eq!(model.probability_of(&'a'), Some(0.5));
        assert_eq!(model.probability_of(&'b'), Some(0.25));
        assert_eq!(model.probability_of(&'c'), Some(0.25));
        assert_eq!(model.probability_of(&'z'), None);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let model = model_for("the rain in spain stays mainly in the plain");
        let sum: f64 = model.iter().map(|(_, p, _)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn intervals_partition_the_unit_interval() {
        let model = model_for("entropy coding lays out cumulative intervals");
        let entries: Vec<_> = model.iter().collect();
        assert_eq!(entries.first().unwrap().2.low, 0.0);
        assert_eq!(entries.last().unwrap().2.high, 1.0);
        for pair in entries.windows(2) {
            // Contiguous and non-overlapping: each high is the next low.
            assert_eq!(pair[0].2.high, pair[1].2.low);
        }
        for (_, probability, interval) in &entries {
            assert!((interval.high - interval.low - probability).abs() < 1e-9);
        }
    }

    #[test]
    fn intervals_laid_out_in_first_seen_order() {
        let model = model_for("cba");
        let symbols: Vec<char> = model.iter().map(|(sym, _, _)| sym).collect();
        assert_eq!(symbols, vec!['c', 'b', 'a']);
    }

    #[test]
    fn locate_is_half_open() {
        let model = model_for("abac");
        // a [0, 0.5), b [0.5, 0.75), c [0.75, 1.0)
        assert_eq!(model.locate(0.0).unwrap().0, 'a');
        assert_eq!(model.locate(0.5).unwrap().0, 'b');
        assert_eq!(model.locate(0.75).unwrap().0, 'c');
        assert!(model.locate(1.0).is_none());
    }

    #[test]
    fn empty_message_rejected() {
        let result = SymbolModel::<char>::from_message(&[]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }
}
