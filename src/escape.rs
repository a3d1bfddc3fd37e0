//! Escape-time iteration of `z ← z² + c`.

use crate::pixel::Complex;

/// Squared escape radius; `|z| > 2` is tested as `|z|² > 4`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating a single point.
///
/// `Interior` means the point did not escape within the iteration cap. That is an
/// approximation of set membership: a point that escapes after more iterations than
/// the cap is still classified as interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Escape {
    /// `|z|` exceeded the escape radius at the start of iteration `n`.
    Escaped(u32),
    Interior,
}

/// Iterate the quadratic map starting from `z = c` for at most `max_iterations` steps.
pub fn escape_time(c: Complex, max_iterations: u32) -> Escape {
    let mut z = c;

    for n in 0..max_iterations {
        let real_squared = z.real * z.real;
        let imaginary_squared = z.imaginary * z.imaginary;

        if real_squared + imaginary_squared > ESCAPE_RADIUS_SQUARED {
            return Escape::Escaped(n);
        }

        z.imaginary = 2.0 * z.real * z.imaginary + c.imaginary;
        z.real = real_squared - imaginary_squared + c.real;
    }

    Escape::Interior
}
