//! Filtered dataset view.

use florestal_shared::Record;

/// Borrowed view over the records that survived filtering, in final
/// presentation order.
#[derive(Debug, Clone, Default)]
pub struct FilteredDataset<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredDataset<'a> {
    pub(crate) fn new(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    /// The surviving records, in presentation order.
    #[must_use]
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Number of surviving records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record matched; a valid state, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the surviving records.
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }
}

impl<'a> IntoIterator for &FilteredDataset<'a> {
    type Item = &'a Record;
    type IntoIter = std::vec::IntoIter<&'a Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.clone().into_iter()
    }
}
