use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.iter_mut().for_each(|v| *v *= c);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        pairwise_sum(self.len(), &|i| self[i] * y[i])
    }

    fn dist(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        let d2 = pairwise_sum(self.len(), &|i| {
            let d = self[i] - y[i];
            d * d
        });
        d2.sqrt()
    }

    fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    // NaN entries are skipped by T::max, which is
    // acceptable since this is only used in tests
    fn norm_inf_diff(&self, b: &[T]) -> T {
        assert_eq!(self.len(), b.len());
        zip(self, b).fold(T::zero(), |acc, (&x, &y)| T::max(acc, (x - y).abs()))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());
        for (y, &x) in zip(&mut *self, x) {
            *y = a * x + b * (*y);
        }
        self
    }
}

// Sum of term(i) over 0..n, split in halves down to short runs
// so that rounding error grows with log(n) rather than n.
fn pairwise_sum<T, F>(n: usize, term: &F) -> T
where
    T: FloatT,
    F: Fn(usize) -> T,
{
    const RUN: usize = 16;

    fn inner<T, F>(lo: usize, hi: usize, term: &F) -> T
    where
        T: FloatT,
        F: Fn(usize) -> T,
    {
        if hi - lo <= RUN {
            (lo..hi).fold(T::zero(), |acc, i| acc + term(i))
        } else {
            let mid = lo + (hi - lo) / 2;
            inner(lo, mid, term) + inner(mid, hi, term)
        }
    }

    inner(0, n, term)
}

#[test]
fn test_pairwise_dot_long() {
    // lengths around the run size and well past it
    for n in [0, 1, 15, 16, 17, 33, 1000] {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y = vec![2.0; n];
        let expected = (n * n.saturating_sub(1)) as f64;
        assert_eq!(x.dot(&y), expected);
    }
}
