//! Utility functions for the rating engine

/// Canonical key for an unordered pair of player names: sorted, joined with
/// `" + "`. The same two players always map to the same key regardless of
/// slot order.
pub fn team_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{} + {}", a, b)
    } else {
        format!("{} + {}", b, a)
    }
}

/// Check if two floats are within the given tolerance
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_key_is_order_insensitive() {
        assert_eq!(team_key("bob", "ann"), "ann + bob");
        assert_eq!(team_key("ann", "bob"), "ann + bob");
        assert_eq!(team_key("ann", "ann"), "ann + ann");
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(0.5, 0.5, 0.0));
        assert!(within_tolerance(0.5, 0.50001, 0.001));
        assert!(!within_tolerance(0.5, 0.6, 0.001));
    }
}
