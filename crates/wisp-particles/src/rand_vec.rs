//! Uniform random vector sampling

use rand::Rng;
use wisp_core::Vec2;

/// A vector whose x and y are sampled independently and uniformly from
/// [min, max) — two draws, never one scalar applied to both axes.
///
/// An inverted range (min > max) flips the sampled interval instead of
/// failing: live tuning can legitimately drive a range through zero, and
/// negative drift rates are valid configuration.
pub fn random_vector(min: f64, max: f64) -> Vec2 {
    let mut rng = rand::thread_rng();
    Vec2::new(
        min + rng.gen::<f64>() * (max - min),
        min + rng.gen::<f64>() * (max - min),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        for _ in 0..1000 {
            let v = random_vector(-1.3, 1.3);
            assert!(v.x >= -1.3 && v.x < 1.3);
            assert!(v.y >= -1.3 && v.y < 1.3);
        }
    }

    #[test]
    fn inverted_range_flips_interval() {
        for _ in 0..1000 {
            let v = random_vector(0.5, -0.5);
            assert!(v.x > -0.5 && v.x <= 0.5);
            assert!(v.y > -0.5 && v.y <= 0.5);
        }
    }

    #[test]
    fn collapsed_range_is_constant() {
        let v = random_vector(2.0, 2.0);
        assert_eq!(v, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn axes_are_sampled_independently() {
        // one shared scalar would make x == y on every draw
        let differs = (0..100).any(|_| {
            let v = random_vector(-1.0, 1.0);
            v.x != v.y
        });
        assert!(differs);
    }
}
