/// Floating point type used throughout the toolkit.
pub type Real = f64;

/// One tolerance pair for everything.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Absolute-then-relative comparison of two scalars.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Elementwise [`nearly_equal`] over two equal-length slices.
pub fn nearly_equal_all(a: &[Real], b: &[Real], tol: Tolerances) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&x, &y)| nearly_equal(x, y, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_all_rejects_length_mismatch() {
        let tol = Tolerances::default();
        assert!(nearly_equal_all(&[1.0, 2.0], &[1.0, 2.0], tol));
        assert!(!nearly_equal_all(&[1.0, 2.0], &[1.0], tol));
    }

}
