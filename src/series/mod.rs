//! Periodic term series evaluation
//!
//! The nutation and lunar position models are both sums of trigonometric
//! terms. Each term pairs a tuple of integer multipliers over a set of
//! fundamental arguments with one or more amplitude coefficients. The phase of
//! a term is the multiplier-weighted sum of the arguments, and a series value
//! is the sum of each amplitude times the sine or cosine of that phase.
//!
//! Tables are built once, validated at construction, and never mutated after
//! that. Anything that needs per-call amplitudes (the lunar eccentricity
//! correction) takes a [`TermTable::scaled`] copy.

/// Σ value·scalar over `values`
///
/// ```rust
/// use moonfield::series::weighted_sum;
///
/// assert_eq!(weighted_sum(&[1.0, 2.0, 3.0], 0.5), 3.0);
/// ```
pub fn weighted_sum(values: &[f64], scalar: f64) -> f64 {
    values.iter().map(|v| v * scalar).sum()
}

/// Σ (primary·scalar + secondary) over two parallel columns
///
/// Combines a time-derivative column (`primary`, scaled by `scalar`) with a
/// constant column.
///
/// # Panics
///
/// Panics if the columns differ in length. Both come from the same validated
/// table, so a mismatch is a bug in the caller.
pub fn blend(primary: &[f64], secondary: &[f64], scalar: f64) -> f64 {
    assert_eq!(
        primary.len(),
        secondary.len(),
        "blend columns must have equal length"
    );
    primary
        .iter()
        .zip(secondary)
        .map(|(p, s)| p * scalar + s)
        .sum()
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + ...` by Horner's rule
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Integer linear combination of fundamental arguments
pub fn phase_argument(multipliers: &[i32], arguments: &[f64]) -> f64 {
    multipliers
        .iter()
        .zip(arguments)
        .map(|(&m, &arg)| m as f64 * arg)
        .sum()
}

/// One row of a periodic series
///
/// `N` multipliers over the fundamental arguments, `A` amplitude coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm<const N: usize, const A: usize> {
    pub multipliers: [i32; N],
    pub coefficients: [f64; A],
}

impl<const N: usize, const A: usize> PeriodicTerm<N, A> {
    /// Phase angle of this term for the given arguments
    pub fn phase(&self, arguments: &[f64; N]) -> f64 {
        phase_argument(&self.multipliers, arguments)
    }
}

/// An ordered, validated table of periodic terms
#[derive(Debug, Clone, PartialEq)]
pub struct TermTable<const N: usize, const A: usize> {
    terms: Vec<PeriodicTerm<N, A>>,
}

impl<const N: usize, const A: usize> TermTable<N, A> {
    /// Build a table from complete rows
    pub fn from_rows(rows: &[([i32; N], [f64; A])]) -> Self {
        TermTable {
            terms: rows
                .iter()
                .map(|&(multipliers, coefficients)| PeriodicTerm {
                    multipliers,
                    coefficients,
                })
                .collect(),
        }
    }

    /// Build a table from parallel columns
    ///
    /// # Panics
    ///
    /// Panics naming the table if any column length differs from the first
    /// multiplier column. Tables are compiled-in constants, so this fires the
    /// first time a malformed table is touched.
    pub fn from_columns(name: &str, multipliers: [&[i32]; N], coefficients: [&[f64]; A]) -> Self {
        let len = multipliers.first().map_or(0, |col| col.len());

        for (i, col) in multipliers.iter().enumerate() {
            assert_eq!(
                col.len(),
                len,
                "term table {name}: multiplier column {i} has {} rows, expected {len}",
                col.len()
            );
        }
        for (i, col) in coefficients.iter().enumerate() {
            assert_eq!(
                col.len(),
                len,
                "term table {name}: coefficient column {i} has {} rows, expected {len}",
                col.len()
            );
        }

        let terms = (0..len)
            .map(|row| PeriodicTerm {
                multipliers: std::array::from_fn(|j| multipliers[j][row]),
                coefficients: std::array::from_fn(|j| coefficients[j][row]),
            })
            .collect();

        TermTable { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[PeriodicTerm<N, A>] {
        &self.terms
    }

    /// Copy of the table with every coefficient multiplied by `factor(term)`
    pub fn scaled<F>(&self, factor: F) -> Self
    where
        F: Fn(&PeriodicTerm<N, A>) -> f64,
    {
        let terms = self
            .terms
            .iter()
            .map(|term| {
                let k = factor(term);
                PeriodicTerm {
                    multipliers: term.multipliers,
                    coefficients: term.coefficients.map(|c| c * k),
                }
            })
            .collect();
        TermTable { terms }
    }

    /// Per-term contributions `coefficient[column]·wave(phase)`
    ///
    /// `arguments` are in radians; `wave` is usually `f64::sin` or `f64::cos`.
    pub fn contributions<F>(&self, column: usize, arguments: &[f64; N], wave: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.terms
            .iter()
            .map(|term| term.coefficients[column] * wave(term.phase(arguments)))
            .collect()
    }
}
