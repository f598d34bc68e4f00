//! In-place mutation helpers for slices and vectors.

/// Mutate every element matching a predicate.
pub trait MutateWhere<T> {
    /// Calls `mutate` on each element for which `predicate` holds.
    ///
    /// Returns the number of elements that were mutated.
    fn mutate_where<P, M>(&mut self, predicate: P, mutate: M) -> usize
    where
        P: FnMut(&T) -> bool,
        M: FnMut(&mut T);
}

impl<T> MutateWhere<T> for [T] {
    fn mutate_where<P, M>(&mut self, mut predicate: P, mut mutate: M) -> usize
    where
        P: FnMut(&T) -> bool,
        M: FnMut(&mut T),
    {
        let mut mutated = 0;
        for element in self.iter_mut() {
            if predicate(element) {
                mutate(element);
                mutated += 1;
            }
        }
        mutated
    }
}

/// Replace matching elements, or insert when nothing matches.
pub trait UpsertWhere<T> {
    /// Replaces every element for which `predicate` holds with a clone of
    /// `element`; if none matched, inserts `element` at `index`.
    fn upsert_where<P>(&mut self, element: T, index: usize, predicate: P)
    where
        P: FnMut(&T) -> bool;
}

impl<T: Clone> UpsertWhere<T> for Vec<T> {
    fn upsert_where<P>(&mut self, element: T, index: usize, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        if self.mutate_where(predicate, |slot| *slot = element.clone()) == 0 {
            self.insert(index, element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MutateWhere, UpsertWhere};

    #[test]
    fn mutate_where_touches_only_matches() {
        let mut numbers = vec![1, 2, 3, 4];

        let mutated = numbers.mutate_where(|n| n % 2 == 0, |n| *n *= 10);

        assert_eq!(mutated, 2);
        assert_eq!(numbers, vec![1, 20, 3, 40]);
    }

    #[test]
    fn mutate_where_reports_zero_without_matches() {
        let mut numbers = vec![1, 3, 5];

        let mutated = numbers.mutate_where(|n| *n > 100, |n| *n = 0);

        assert_eq!(mutated, 0);
        assert_eq!(numbers, vec![1, 3, 5]);
    }

    #[test]
    fn upsert_replaces_every_match() {
        let mut names = vec!["a".to_string(), "b".to_string(), "a".to_string()];

        names.upsert_where("z".to_string(), 0, |name| name == "a");

        assert_eq!(names, vec!["z", "b", "z"]);
    }

    #[test]
    fn upsert_inserts_at_index_without_matches() {
        let mut names = vec!["a".to_string(), "b".to_string()];

        names.upsert_where("z".to_string(), 1, |name| name == "missing");

        assert_eq!(names, vec!["a", "z", "b"]);
    }
}
