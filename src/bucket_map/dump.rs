use std::iter::FusedIterator;

/// Iterator over the non-empty buckets of a map, in array order. Each item
/// is the bucket's chain in insertion order.
///
/// Each call to `FixedBucketMap::dump` starts a fresh walk over the table as
/// it is at that moment.
#[derive(Debug)]
pub struct Dump<'a, K, V> {
    slots: std::slice::Iter<'a, Option<Vec<(K, V)>>>,
}

impl<'a, K, V> Dump<'a, K, V> {
    pub(crate) fn new(slots: &'a [Option<Vec<(K, V)>>]) -> Dump<'a, K, V> {
        Dump {
            slots: slots.iter(),
        }
    }
}

impl<'a, K, V> Clone for Dump<'a, K, V> {
    fn clone(&self) -> Self {
        Dump {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Dump<'a, K, V> {
    type Item = &'a [(K, V)];

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().map(Vec::as_slice).next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<'a, K, V> FusedIterator for Dump<'a, K, V> {}
