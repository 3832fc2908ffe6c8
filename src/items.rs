use std::ops::Index;

use crate::error::CarouselError;

/// Ordered, immutable list of records a carousel rotates through.
///
/// Holds at least one item, so every index arithmetic done on it has a
/// defined result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSequence<T> {
    items: Box<[T]>,
}

impl<T> ItemSequence<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptySequence);
        }
        Ok(Self {
            items: items.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for ItemSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_vec() {
        let result = ItemSequence::<u8>::new(Vec::new());
        assert_eq!(result, Err(CarouselError::EmptySequence));
    }

    #[test]
    fn keeps_order() {
        let items = ItemSequence::new(vec!["a", "b", "c"]).expect("non-empty");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], "a");
        assert_eq!(items.get(2), Some(&"c"));
        assert_eq!(items.get(3), None);
        assert_eq!(items.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
