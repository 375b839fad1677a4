//! Seeded 2D gradient noise with fractal octaves.
//!
//! Classic Perlin construction: a shuffled 256-entry permutation table,
//! quintic fade, and four diagonal gradients. The table is drawn from the
//! caller's RNG so terrain is reproducible from the world seed. Output of
//! [`GradientNoise::fractal`] lies in `[-1, 1]`.

use rand::seq::SliceRandom;
use rand::Rng;

/// Contrast stretch applied to normalised fractal output.
///
/// Amplitude-normalised Perlin octaves cluster near zero; the stretch
/// widens them so terrain thresholds such as 0.7 and 0.5 fire on a few
/// percent of cells.
pub const FRACTAL_CONTRAST: f64 = 1.35;

/// A seeded, periodic (period 256) 2D gradient noise function.
#[derive(Clone, Debug)]
pub struct GradientNoise {
    perm: [u8; 512],
}

impl GradientNoise {
    /// Draw a fresh permutation table from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut base: Vec<u8> = (0..=255u8).collect();
        base.shuffle(rng);
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = base[i & 255];
        }
        Self { perm }
    }

    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    fn grad(hash: u8, x: f64, y: f64) -> f64 {
        match hash & 3 {
            0 => x + y,
            1 => -x + y,
            2 => x - y,
            _ => -x - y,
        }
    }

    /// Single-octave noise at `(x, y)`. Zero at every lattice point.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let xf0 = x.floor();
        let yf0 = y.floor();
        let xi = (xf0 as i64).rem_euclid(256) as usize;
        let yi = (yf0 as i64).rem_euclid(256) as usize;
        let xf = x - xf0;
        let yf = y - yf0;

        let u = Self::fade(xf);
        let v = Self::fade(yf);

        let p = &self.perm;
        let aa = p[p[xi] as usize + yi];
        let ab = p[p[xi] as usize + yi + 1];
        let ba = p[p[xi + 1] as usize + yi];
        let bb = p[p[xi + 1] as usize + yi + 1];

        Self::lerp(
            Self::lerp(Self::grad(aa, xf, yf), Self::grad(ba, xf - 1.0, yf), u),
            Self::lerp(
                Self::grad(ab, xf, yf - 1.0),
                Self::grad(bb, xf - 1.0, yf - 1.0),
                u,
            ),
            v,
        )
    }

    /// Sum of `octaves` layers (lacunarity 2, persistence 0.5),
    /// normalised by total amplitude, stretched by [`FRACTAL_CONTRAST`]
    /// and clamped to `[-1, 1]`.
    pub fn fractal(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves.max(1) {
            value += self.sample(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        (value / max_value * FRACTAL_CONTRAST).clamp(-1.0, 1.0)
    }
}
