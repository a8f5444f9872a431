/// Binary indexed tree over `0..n` counting inserted positions.
#[derive(Debug, Clone)]
pub(crate) struct Fenwick {
    tree: Vec<usize>,
}

impl Fenwick {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            tree: vec![0; n + 1],
        }
    }

    /// Marks `position` as present.
    pub(crate) fn insert(&mut self, position: usize) {
        let mut i = position + 1;
        while i < self.tree.len() {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
    }

    /// Counts present positions strictly below `position`.
    pub(crate) fn count_below(&self, position: usize) -> usize {
        let mut i = position;
        let mut count = 0;
        while i > 0 {
            count += self.tree[i];
            i &= i - 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut tree = Fenwick::new(8);
        assert_eq!(tree.count_below(8), 0);

        for position in [5, 1, 7, 2] {
            tree.insert(position);
        }

        let expected = [0, 0, 1, 2, 2, 2, 3, 3, 4];
        for (position, &count) in expected.iter().enumerate() {
            assert_eq!(tree.count_below(position), count, "below {position}");
        }
    }
}
