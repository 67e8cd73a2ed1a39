//! Frequency counting shared by both entropy coders.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Returns a frequency count of the input data, plus the distinct symbols
/// in order of first appearance. Sum of the counts equals the input length.
///
/// Both codecs lay their tables out in first-seen order, so the order vec
/// is what makes repeated runs on identical input reproducible.
pub fn freqs<S: Copy + Eq + Hash>(data: &[S]) -> (Vec<S>, FxHashMap<S, u32>) {
    let mut order = Vec::new();
    let mut counts: FxHashMap<S, u32> = FxHashMap::default();
    for &sym in data {
        let count = counts.entry(sym).or_insert(0);
        if *count == 0 {
            order.push(sym);
        }
        *count += 1;
    }
    (order, counts)
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn counts_and_order() {
        let data: Vec<char> = "abacabad".chars().collect();
        let (order, counts) = freqs(&data);
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
        assert_eq!(counts[&'a'], 4);
        assert_eq!(counts[&'b'], 2);
        assert_eq!(counts[&'c'], 1);
        assert_eq!(counts[&'d'], 1);
        assert_eq!(counts.values().sum::<u32>() as usize, data.len());
    }

    #[test]
    fn empty_input() {
        let (order, counts) = freqs::<char>(&[]);
        assert!(order.is_empty());
        assert!(counts.is_empty());
    }
}
