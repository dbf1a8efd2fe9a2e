use crate::NoiseGenerator;
use crate::fbm::FractalParams;
use crate::math::{dot2, lerp, smoothstep};
use crate::rng::KernelRng;
use crate::texture::{Dim2, Texture2D};

// 2D Perlin gradient noise with fractal octaves.
// The kernel is a set of unit gradients plus a shuffled permutation table
// duplicated to twice its length, so corner hashing needs a single modulo
// reduction per axis and no further wraparound.
pub struct PerlinNoise2D {
    dim: Dim2,
    kernel_size: usize,
    fractal: FractalParams,
    gradients: Vec<[f32; 2]>,
    perm: Vec<usize>,
}

impl PerlinNoise2D {
    pub fn new(dim: Dim2, kernel_size: usize, layers: usize, scale_factor: f32, seed: u64) -> Self {
        assert!(kernel_size > 0, "kernel size must be positive");
        let mut rng = KernelRng::new(seed);
        let gradients = (0..kernel_size).map(|_| rng.unit_circle()).collect();
        let perm = rng.doubled_permutation(kernel_size);

        Self {
            dim,
            kernel_size,
            fractal: FractalParams::new(layers, scale_factor),
            gradients,
            perm,
        }
    }

    pub fn dim(&self) -> Dim2 {
        self.dim
    }

    // Classic permutation hash; x and y are already reduced mod kernel_size,
    // and the doubled table keeps `perm[x] + y` in range.
    #[inline]
    fn hash(&self, x: usize, y: usize) -> usize {
        self.perm[self.perm[x] + y]
    }

    // Single-octave gradient sample at a frequency-scaled coordinate,
    // remapped from [-1, 1] to [0, 1]
    fn lattice(&self, x: f32, y: f32) -> f32 {
        let xi = x.floor() as usize;
        let yi = y.floor() as usize;
        let tx = x - x.floor();
        let ty = y - y.floor();

        let n = self.kernel_size;
        let rx0 = xi % n;
        let rx1 = (rx0 + 1) % n;
        let ry0 = yi % n;
        let ry1 = (ry0 + 1) % n;

        // Gradients at the corners of the cell
        let d00 = self.gradients[self.hash(rx0, ry0)];
        let d10 = self.gradients[self.hash(rx1, ry0)];
        let d01 = self.gradients[self.hash(rx0, ry1)];
        let d11 = self.gradients[self.hash(rx1, ry1)];

        // Vectors going from the grid corners to the sample point
        let (x0, x1) = (tx, tx - 1.0);
        let (y0, y1) = (ty, ty - 1.0);

        let sx = smoothstep(tx);
        let sy = smoothstep(ty);

        let a = lerp(dot2(d00, [x0, y0]), dot2(d10, [x1, y0]), sx);
        let b = lerp(dot2(d01, [x0, y1]), dot2(d11, [x1, y1]), sx);
        (lerp(a, b, sy) + 1.0) / 2.0
    }

    fn sample(&self, x: f32, y: f32) -> f32 {
        self.fractal.sum(|freq| self.lattice(x * freq, y * freq))
    }

    // Point query at integer pixel coordinates, result in [0, 1]
    pub fn evaluate(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.dim.width && y < self.dim.height);
        self.sample(x as f32, y as f32)
    }

    // Full-grid batch query, row-major
    pub fn generate_texture(&self) -> Texture2D {
        Texture2D::from_fn(self.dim, |x, y| self.evaluate(x, y))
    }
}

impl NoiseGenerator for PerlinNoise2D {
    fn evaluate2(&self, x: u32, y: u32) -> f32 {
        self.evaluate(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::PerlinNoise2D;
    use crate::fbm::BASE_FREQUENCY;
    use crate::texture::Dim2;

    #[test]
    fn perlin2_determinism() {
        let p1 = PerlinNoise2D::new(Dim2::new(128, 128), 256, 4, 1.0, 2025);
        let p2 = PerlinNoise2D::new(Dim2::new(128, 128), 256, 4, 1.0, 2025);
        for &(x, y) in &[(0, 0), (17, 98), (127, 127)] {
            assert_eq!(p1.evaluate(x, y), p2.evaluate(x, y));
        }
    }

    #[test]
    fn perlin2_range() {
        // Unit gradients bound a single octave to about +/- sqrt(2)/2 before
        // the [0,1] remap, so the fractal sum never leaves the unit interval
        let p = PerlinNoise2D::new(Dim2::new(100, 100), 64, 5, 2.0, 31);
        for y in 0..100 {
            for x in 0..100 {
                let v = p.evaluate(x, y);
                assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
            }
        }
    }

    #[test]
    fn perlin2_permutation_is_bijective() {
        for seed in [0u64, 42, 9999] {
            let p = PerlinNoise2D::new(Dim2::new(8, 8), 128, 1, 1.0, seed);
            let mut seen = vec![false; 128];
            for &v in &p.perm[..128] {
                assert!(!seen[v]);
                seen[v] = true;
            }
            assert_eq!(&p.perm[..128], &p.perm[128..]);
        }
    }

    #[test]
    fn perlin2_batch_matches_point_queries() {
        let p = PerlinNoise2D::new(Dim2::new(24, 24), 32, 3, 1.0, 11);
        let tex = p.generate_texture();
        for y in 0..24 {
            for x in 0..24 {
                assert_eq!(tex.get(x, y), p.evaluate(x, y));
            }
        }
    }

    #[test]
    fn perlin2_single_layer_is_base_octave() {
        let p = PerlinNoise2D::new(Dim2::new(16, 16), 32, 1, 1.0, 3);
        for &(x, y) in &[(0u32, 0u32), (9, 2), (15, 15)] {
            let expected = p.lattice(x as f32 * BASE_FREQUENCY, y as f32 * BASE_FREQUENCY);
            assert!((p.evaluate(x, y) - expected).abs() < 1e-7);
        }
    }

    #[test]
    #[should_panic]
    fn perlin2_evaluate3_panics() {
        use crate::NoiseGenerator;
        let p = PerlinNoise2D::new(Dim2::new(8, 8), 16, 1, 1.0, 0);
        let _ = p.evaluate3(1, 2, 3);
    }
}
