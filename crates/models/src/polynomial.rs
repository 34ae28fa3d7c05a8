//! Dense polynomials with fixed degree.

/// A polynomial `Σ cᵢ·xⁱ` with `N` coefficients in ascending order of degree.
///
/// `coefficients[0]` is the constant term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<const N: usize> {
    coefficients: [f64; N],
}

impl<const N: usize> Polynomial<N> {
    /// Creates a polynomial from coefficients ordered constant-first.
    #[must_use]
    pub const fn new(coefficients: [f64; N]) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, constant term first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64; N] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    ///
    /// A polynomial with no coefficients evaluates to zero everywhere.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_polynomial_is_zero() {
        assert_eq!(Polynomial::<0>::new([]).evaluate(3.0), 0.0);
    }

    #[test]
    fn constant_term_comes_first() {
        // 1 + 2x + 3x²
        let p = Polynomial::new([1.0, 2.0, 3.0]);
        assert_eq!(p.evaluate(0.0), 1.0);
        assert_eq!(p.evaluate(1.0), 6.0);
        assert_eq!(p.evaluate(2.0), 17.0);
        assert_eq!(p.evaluate(-1.0), 2.0);
    }

    #[test]
    fn matches_power_sum() {
        let c = [2652.675, -2639.917, 1019.486, -197.903, 20.840, -1.093, 0.022];
        let p = Polynomial::new(c);

        for x in [3.0_f64, 7.5, 10.0, 14.5] {
            let expected: f64 = c
                .iter()
                .enumerate()
                .map(|(i, ci)| ci * x.powi(i32::try_from(i).unwrap()))
                .sum();
            assert_relative_eq!(p.evaluate(x), expected, max_relative = 1e-10);
        }
    }
}
