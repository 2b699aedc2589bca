use std::collections::BTreeMap;

use itertools::Itertools;

/// Occurrence count of every byte value present in an input buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable(BTreeMap<u8, usize>);

impl FrequencyTable {
    pub fn new(content: &[u8]) -> Self {
        let counts = content
            .iter()
            .copied()
            .into_grouping_map_by(|&byte| byte)
            .fold(0, |acc, _key, _value| acc + 1);

        Self(counts.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, symbol: u8) -> Option<usize> {
        self.0.get(&symbol).copied()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(u8, usize)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (u8, usize)>>(iter: T) -> Self {
        Self(iter.into_iter().filter(|(_, count)| *count > 0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::FrequencyTable;

    #[test]
    fn test_counts_every_occurring_byte() {
        let table = FrequencyTable::new(b"aabbbcc");

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'a'), Some(2));
        assert_eq!(table.get(b'b'), Some(3));
        assert_eq!(table.get(b'c'), Some(2));
        assert_eq!(table.get(b'd'), None);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = FrequencyTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_iterates_in_symbol_order() {
        let table = FrequencyTable::new(&[0xff, b'\n', 0x00, b'\n']);
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(0x00, 1), (b'\n', 2), (0xff, 1)]);
    }
}
