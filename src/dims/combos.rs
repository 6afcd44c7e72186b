use crate::dims::defs::DimensionSet;
use crate::table::filter::Predicate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub predicate: Predicate,
    pub id: String,
}

/// Cartesian product of a dimension set, last dimension varying fastest.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    set: &'a DimensionSet,
    cursor: Vec<usize>,
    remaining: usize,
}

impl<'a> Combinations<'a> {
    pub fn new(set: &'a DimensionSet) -> Self {
        Self {
            set,
            cursor: vec![0; set.dimensions.len()],
            remaining: set.n_combinations(),
        }
    }

    fn current(&self) -> Combination {
        let mut predicate = Predicate::new();
        let mut parts = Vec::with_capacity(self.cursor.len() * 2);
        for (dim, &pos) in self.set.dimensions.iter().zip(&self.cursor) {
            let value = &dim.values[pos];
            predicate.push(dim.column.as_str(), value.as_str());
            parts.push(dim.key.as_str());
            parts.push(value.as_str());
        }
        Combination {
            predicate,
            id: parts.join("_"),
        }
    }

    fn advance(&mut self) {
        for (pos, dim) in self.cursor.iter_mut().zip(&self.set.dimensions).rev() {
            *pos += 1;
            if *pos < dim.values.len() {
                return;
            }
            *pos = 0;
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let combination = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

#[cfg(test)]
#[path = "../../tests/src_inline/dims/combos.rs"]
mod tests;
