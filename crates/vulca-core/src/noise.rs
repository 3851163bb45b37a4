//! Coherent noise for the wind field.
//!
//! [`NoiseField`] is the seam: physics only ever samples through the trait,
//! so tests can swap in a constant field and the gallery can be reseeded.

use rand::prelude::*;

/// A smooth scalar field in three dimensions, sampled in `[-1, 1]`.
pub trait NoiseField {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<F> NoiseField for F
where
    F: Fn(f32, f32, f32) -> f32,
{
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self(x, y, z)
    }
}

/// Improved Perlin noise with a seeded permutation table.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perm: [u8; 512],
}

impl PerlinNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p: [u8; 256] = [0; 256];
        for (i, v) in p.iter_mut().enumerate() {
            *v = i as u8;
        }
        p.shuffle(&mut rng);
        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn hash(&self, i: usize) -> usize {
        self.perm[i & 511] as usize
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

impl NoiseField for PerlinNoise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return 0.0;
        }
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        // wrap cell coordinates onto the 256 lattice, negative inputs included
        let xi = (xf as i64).rem_euclid(256) as usize;
        let yi = (yf as i64).rem_euclid(256) as usize;
        let zi = (zf as i64).rem_euclid(256) as usize;
        let (x, y, z) = (x - xf, y - yf, z - zf);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let a = self.hash(xi) + yi;
        let aa = self.hash(a) + zi;
        let ab = self.hash(a + 1) + zi;
        let b = self.hash(xi + 1) + yi;
        let ba = self.hash(b) + zi;
        let bb = self.hash(b + 1) + zi;

        let value = lerp(
            w,
            lerp(
                v,
                lerp(u, grad(self.hash(aa), x, y, z), grad(self.hash(ba), x - 1.0, y, z)),
                lerp(
                    u,
                    grad(self.hash(ab), x, y - 1.0, z),
                    grad(self.hash(bb), x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(self.hash(aa + 1), x, y, z - 1.0),
                    grad(self.hash(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(self.hash(ab + 1), x, y - 1.0, z - 1.0),
                    grad(self.hash(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        );
        value.clamp(-1.0, 1.0)
    }
}
