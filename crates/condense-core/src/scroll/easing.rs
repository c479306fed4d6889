//! L4 Atomic Layer: Easing curve for smooth scrolling
//!
//! The driver uses a single quadratic ease-out expressed in the classic
//! `(t, b, c, d)` form: elapsed time, start value, change, duration.

/// Quadratic ease-out from `b` to `b + c` over duration `d`.
///
/// # Arguments
/// * `t` - Elapsed time, in the same unit as `d`
/// * `b` - Start value
/// * `c` - Total change
/// * `d` - Duration
#[inline]
pub fn ease_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quad_boundaries() {
        assert!((ease_out_quad(0.0, 0.0, 100.0, 200.0) - 0.0).abs() < 1e-9);
        assert!((ease_out_quad(200.0, 0.0, 100.0, 200.0) - 100.0).abs() < 1e-9);
        assert!((ease_out_quad(200.0, 40.0, -40.0, 200.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_ease_out_quad_midpoint() {
        // -100 * 0.5 * (0.5 - 2) = 75
        assert!((ease_out_quad(100.0, 0.0, 100.0, 200.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_ease_out_quad_monotonic() {
        let mut prev = 0.0;
        for i in 0..=20 {
            let v = ease_out_quad(i as f64 * 10.0, 0.0, 100.0, 200.0);
            assert!(v >= prev, "not monotonic at step {}", i);
            prev = v;
        }
    }
}
