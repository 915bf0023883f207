//! Correctly rounded summation and mean.
//!
//! Sums are tracked exactly as a list of non-overlapping partials (Shewchuk's
//! algorithm), so the mean is the exact average of the inputs rounded once to
//! the nearest `f64` (ties to even). A naive left-to-right sum can land one
//! ulp away from that, which is enough to flip a `>` comparison downstream.
//!
//! Numerical notes:
//! - products `a * b` are split into `p + e` with `mul_add`, which is exact
//!   barring overflow/underflow
//! - the sign of a partials list is the sign of its largest nonzero partial,
//!   because the partials do not overlap

use std::cmp::Ordering;

/// Exact running sum of `f64` values.
#[derive(Debug, Clone, Default)]
pub struct ExactSum {
    partials: Vec<f64>,
}

impl ExactSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `x` without rounding.
    pub fn add(&mut self, mut x: f64) {
        let mut i = 0;
        for j in 0..self.partials.len() {
            let mut y = self.partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                self.partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        self.partials.truncate(i);
        self.partials.push(x);
    }

    /// Subtract `a * b` without rounding.
    fn sub_product(&mut self, a: f64, b: f64) {
        let p = a * b;
        let e = a.mul_add(b, -p);
        self.add(-p);
        self.add(-e);
    }

    /// Sign of the exact sum.
    pub fn sign(&self) -> Ordering {
        match self.partials.iter().rev().find(|p| **p != 0.0) {
            Some(p) if *p > 0.0 => Ordering::Greater,
            Some(_) => Ordering::Less,
            None => Ordering::Equal,
        }
    }

    /// Approximate value (partials added largest-last); used as a starting guess.
    fn approx(&self) -> f64 {
        self.partials.iter().sum()
    }
}

/// Mean of `values`, rounded once from the exact average.
///
/// Returns `NaN` for an empty input. Non-finite inputs fall back to the
/// naive mean, which already propagates `inf`/`NaN`.
pub fn exact_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = ExactSum::new();
    let mut n = 0usize;
    let mut naive = 0.0;
    for v in values {
        sum.add(v);
        naive += v;
        n += 1;
    }
    if n == 0 {
        return f64::NAN;
    }
    let n = n as f64;

    let mut q = sum.approx() / n;
    if !q.is_finite() || !naive.is_finite() {
        return naive / n;
    }

    // q is within an ulp or two of the answer; walk it onto the nearest double.
    loop {
        let up = next_up(q);
        let half = (up - q) / 2.0;
        match cmp_with_midpoint(&sum, n, q, half) {
            Ordering::Greater => q = up,
            Ordering::Equal if is_odd(q) => q = up,
            _ => break,
        }
    }
    loop {
        let down = next_down(q);
        let half = (q - down) / 2.0;
        match cmp_with_midpoint(&sum, n, q, -half) {
            Ordering::Less => q = down,
            Ordering::Equal if is_odd(q) => q = down,
            _ => break,
        }
    }
    q
}

/// Sign of `sum / n - (q + offset)`, computed exactly.
fn cmp_with_midpoint(sum: &ExactSum, n: f64, q: f64, offset: f64) -> Ordering {
    let mut diff = sum.clone();
    diff.sub_product(q, n);
    diff.sub_product(offset, n);
    diff.sign()
}

fn is_odd(x: f64) -> bool {
    x.to_bits() & 1 == 1
}

fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 { f64::from_bits(bits + 1) } else { f64::from_bits(bits - 1) }
}

fn next_down(x: f64) -> f64 {
    -next_up(-x)
}
