//! Monod growth kinetics.
//!
//! μ(S) = μmax · S / (Ks + S)
//!
//! Saturating in S: half of μmax is reached at S = Ks, and μ approaches but
//! never equals μmax.

/// Specific growth rate (1/h) at the given substrate concentration.
///
/// Substrate at or below zero yields zero growth.
#[inline]
pub fn specific_growth_rate(substrate_g_per_L: f64, max_growth_rate_per_h: f64, half_saturation_g_per_L: f64) -> f64 {
    if substrate_g_per_L <= 0.0 {
        return 0.0;
    }
    max_growth_rate_per_h * substrate_g_per_L / (half_saturation_g_per_L + substrate_g_per_L)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_substrate_gives_zero_growth() {
        assert_eq!(specific_growth_rate(0.0, 0.4, 0.5), 0.0);
    }

    #[test]
    fn test_half_max_at_half_saturation() {
        let mu = specific_growth_rate(0.5, 0.4, 0.5);
        assert!((mu - 0.2).abs() < 1e-12, "μ(Ks) should be μmax/2, got {}", mu);
    }

    #[test]
    fn test_bounded_and_monotonic() {
        let mut previous = 0.0;
        for i in 0..2000 {
            let s = i as f64 * 0.25;
            let mu = specific_growth_rate(s, 0.4, 0.5);
            assert!(mu >= previous, "μ must not decrease: μ({}) = {} < {}", s, mu, previous);
            assert!(mu < 0.4, "μ must stay below μmax, got {}", mu);
            previous = mu;
        }
    }

    #[test]
    fn test_approaches_max_at_high_substrate() {
        let mu = specific_growth_rate(1e6, 0.4, 0.5);
        assert!((0.4 - mu) < 1e-6);
    }
}
