use crate::ds_n_a::cmp;
use itertools::Itertools;
use memsnap_types::types::{Key, Value};
use std::vec;

/// The result of a prefix scan.
///
/// Entries are captured when the scan is created, so the iterator is unaffected by writes that
/// happen while it is being consumed. Entries are yielded in unsigned byte-wise key order.
#[derive(Debug)]
pub struct ScanIterator {
    entries: vec::IntoIter<(Key, Value)>,
}

impl ScanIterator {
    /// @arg entries: Entries in any order.
    pub fn from_unordered<'a>(
        entries: impl Iterator<Item = (&'a Key, &'a Value)>,
        prefix: &[u8],
    ) -> Self {
        let entries = entries
            .filter(|(k, _v)| cmp::starts_with(k, prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .sorted_by(|(a_k, _), (b_k, _)| cmp::cmp_bytes(a_k, b_k));
        Self { entries }
    }
}

impl Iterator for ScanIterator {
    type Item = (Key, Value);
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
impl ExactSizeIterator for ScanIterator {}
