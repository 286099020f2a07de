pub fn div_or_zero(lhs: f32, rhs: f32) -> f32 {
    if rhs == 0.0 {
        0.0
    } else {
        lhs / rhs
    }
}

/// Scales the values so they sum to one. Returns `None` when there is no mass to scale.
pub fn normalize(values: &[f32]) -> Option<Vec<f32>> {
    let sum: f32 = values.iter().sum();

    if sum <= 0.0 || !sum.is_finite() {
        return None;
    }

    Some(values.iter().map(|v| v / sum).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_div_or_zero() {
        assert_eq!(div_or_zero(3.0, 0.0), 0.0);
        assert_approx_eq!(div_or_zero(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_normalize_sums_to_one() {
        let normalized = normalize(&[1.0, 0.0, 3.0]).unwrap();

        assert_approx_eq!(normalized[0], 0.25);
        assert_approx_eq!(normalized[1], 0.0);
        assert_approx_eq!(normalized[2], 0.75);
    }

    #[test]
    fn test_normalize_without_mass() {
        assert!(normalize(&[0.0, 0.0]).is_none());
        assert!(normalize(&[]).is_none());
    }
}
