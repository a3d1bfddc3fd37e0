//! Colouring policies.

use crate::{escape::Escape, pixel::Rgba};

/// How an [`Escape`] result becomes a pixel colour. Interior points are black under
/// every policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Colouring {
    /// Escaped points are white.
    #[default]
    Binary,
    /// Escaped points are split into two bands by escape speed: black when the point
    /// escaped at `n <= max_iterations / 2 - 1`, red otherwise.
    Graded,
}

impl Colouring {
    pub fn colour(&self, escape: Escape, max_iterations: u32) -> Rgba {
        match (self, escape) {
            (_, Escape::Interior) => Rgba::BLACK,
            (Colouring::Binary, Escape::Escaped(_)) => Rgba::WHITE,
            (Colouring::Graded, Escape::Escaped(n)) => {
                // `n <= N/2 - 1`, without underflowing when N < 2.
                if n < max_iterations / 2 {
                    Rgba::BLACK
                } else {
                    Rgba::RED
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_interior_is_black() {
        assert_eq!(Colouring::Binary.colour(Escape::Interior, 30), Rgba::BLACK);
        assert_eq!(Colouring::Graded.colour(Escape::Interior, 30), Rgba::BLACK);
    }

    #[test]
    fn test_binary_ignores_escape_speed() {
        for n in [0, 14, 15, 29] {
            assert_eq!(Colouring::Binary.colour(Escape::Escaped(n), 30), Rgba::WHITE);
        }
    }

    #[test]
    fn test_graded_threshold() {
        let graded = Colouring::Graded;
        assert_eq!(graded.colour(Escape::Escaped(0), 30), Rgba::BLACK);
        assert_eq!(graded.colour(Escape::Escaped(14), 30), Rgba::BLACK);
        assert_eq!(graded.colour(Escape::Escaped(15), 30), Rgba::RED);
        assert_eq!(graded.colour(Escape::Escaped(29), 30), Rgba::RED);

        assert_eq!(graded.colour(Escape::Escaped(48), 100), Rgba::BLACK);
        assert_eq!(graded.colour(Escape::Escaped(49), 100), Rgba::BLACK);
        assert_eq!(graded.colour(Escape::Escaped(50), 100), Rgba::RED);
    }

    #[test]
    fn test_graded_with_tiny_cap() {
        assert_eq!(Colouring::Graded.colour(Escape::Escaped(0), 1), Rgba::RED);
        assert_eq!(Colouring::Graded.colour(Escape::Escaped(0), 2), Rgba::BLACK);
    }
}
