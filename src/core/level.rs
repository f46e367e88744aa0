//! Level math.
//!
//! A level is a positive integer; the only thing it controls in this crate
//! is the magnitude ceiling for cards and target draws. Difficulty ramps by
//! one every two levels and caps at [`MAX_CARD_MAGNITUDE`].

/// Largest magnitude any card or target value can reach, at any level.
pub const MAX_CARD_MAGNITUDE: u8 = 5;

/// Magnitude ceiling for a level: `min(level / 2 + 3, 5)`.
///
/// Levels 1-2 cap at 3, levels 3-4 at 4, level 5 and up at 5.
///
/// ```
/// use reactor_core::max_magnitude;
///
/// assert_eq!(max_magnitude(1), 3);
/// assert_eq!(max_magnitude(4), 5);
/// assert_eq!(max_magnitude(100), 5);
/// ```
#[must_use]
pub fn max_magnitude(level: u32) -> u8 {
    (level / 2 + 3).min(MAX_CARD_MAGNITUDE as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp() {
        assert_eq!(max_magnitude(1), 3);
        assert_eq!(max_magnitude(2), 4);
        assert_eq!(max_magnitude(3), 4);
        assert_eq!(max_magnitude(4), 5);
        assert_eq!(max_magnitude(5), 5);
    }

    #[test]
    fn test_cap() {
        for level in 4..200 {
            assert_eq!(max_magnitude(level), MAX_CARD_MAGNITUDE);
        }
    }
}
