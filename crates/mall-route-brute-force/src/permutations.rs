/// Lazy enumeration of every ordering of a list.
///
/// Orderings come out in lexicographic order of the input positions, starting
/// with the input order itself, each exactly once. An empty list has exactly
/// one ordering, the empty one. Cloning or [`Permutations::reset`] restarts
/// the sequence.
#[derive(Clone, Debug)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    current: Vec<T>,
    started: bool,
    done: bool,
    yielded: usize,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        Self {
            current: Vec::with_capacity(n),
            indices: (0..n).collect(),
            items,
            started: false,
            done: false,
            yielded: 0,
        }
    }

    pub fn reset(&mut self) {
        for (slot, i) in self.indices.iter_mut().zip(0..) {
            *slot = i;
        }
        self.started = false;
        self.done = false;
        self.yielded = 0;
    }

    /// Total number of orderings, `None` if `n!` overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        (1..=self.items.len()).try_fold(1usize, |acc, k| acc.checked_mul(k))
    }

    /// Advances to the next ordering and borrows it, without allocating.
    pub fn next_ordering(&mut self) -> Option<&[T]> {
        if !self.advance() {
            return None;
        }
        self.current.clear();
        self.current
            .extend(self.indices.iter().map(|&i| self.items[i].clone()));
        Some(self.current.as_slice())
    }

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            self.yielded = 1;
            return true;
        }

        // Rightmost ascent; none means the last ordering was already produced.
        let Some(i) = (1..self.indices.len())
            .rev()
            .find(|&k| self.indices[k - 1] < self.indices[k])
            .map(|k| k - 1)
        else {
            self.done = true;
            return false;
        };

        let pivot = self.indices[i];
        let j = (i + 1..self.indices.len())
            .rev()
            .find(|&k| self.indices[k] > pivot)
            .unwrap_or(i + 1);
        self.indices.swap(i, j);
        self.indices[i + 1..].reverse();
        self.yielded += 1;
        true
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_ordering().map(<[T]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.total() {
            Some(total) => {
                let left = total - self.yielded;
                (left, Some(left))
            }
            None => (usize::MAX, None),
        }
    }
}
