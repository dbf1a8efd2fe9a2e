use crate::NoiseGenerator;
use crate::fbm::FractalParams;
use crate::math::{dot3, lerp, smoothstep};
use crate::rng::KernelRng;
use crate::texture::{Dim3, Texture3D};

// 3D Perlin gradient noise, the volumetric counterpart of PerlinNoise2D.
// Gradients are drawn uniformly on the sphere and the permutation hash gains
// one more level of indirection for the third axis.
pub struct PerlinNoise3D {
    dim: Dim3,
    kernel_size: usize,
    fractal: FractalParams,
    gradients: Vec<[f32; 3]>,
    perm: Vec<usize>,
}

impl PerlinNoise3D {
    pub fn new(dim: Dim3, kernel_size: usize, layers: usize, scale_factor: f32, seed: u64) -> Self {
        assert!(kernel_size > 0, "kernel size must be positive");
        let mut rng = KernelRng::new(seed);
        let gradients = (0..kernel_size).map(|_| rng.unit_sphere()).collect();
        let perm = rng.doubled_permutation(kernel_size);

        Self {
            dim,
            kernel_size,
            fractal: FractalParams::new(layers, scale_factor),
            gradients,
            perm,
        }
    }

    pub fn dim(&self) -> Dim3 {
        self.dim
    }

    #[inline]
    fn hash(&self, x: usize, y: usize, z: usize) -> usize {
        self.perm[self.perm[self.perm[x] + y] + z]
    }

    // Single-octave gradient sample, remapped from [-1, 1] to [0, 1]
    fn lattice(&self, x: f32, y: f32, z: f32) -> f32 {
        let xi = x.floor() as usize;
        let yi = y.floor() as usize;
        let zi = z.floor() as usize;
        let tx = x - x.floor();
        let ty = y - y.floor();
        let tz = z - z.floor();

        let n = self.kernel_size;
        let rx0 = xi % n;
        let rx1 = (rx0 + 1) % n;
        let ry0 = yi % n;
        let ry1 = (ry0 + 1) % n;
        let rz0 = zi % n;
        let rz1 = (rz0 + 1) % n;

        // Gradients at the eight corners of the cell
        let d000 = self.gradients[self.hash(rx0, ry0, rz0)];
        let d100 = self.gradients[self.hash(rx1, ry0, rz0)];
        let d010 = self.gradients[self.hash(rx0, ry1, rz0)];
        let d110 = self.gradients[self.hash(rx1, ry1, rz0)];
        let d001 = self.gradients[self.hash(rx0, ry0, rz1)];
        let d101 = self.gradients[self.hash(rx1, ry0, rz1)];
        let d011 = self.gradients[self.hash(rx0, ry1, rz1)];
        let d111 = self.gradients[self.hash(rx1, ry1, rz1)];

        // Vectors going from the cube corners to the sample point
        let (x0, x1) = (tx, tx - 1.0);
        let (y0, y1) = (ty, ty - 1.0);
        let (z0, z1) = (tz, tz - 1.0);

        let sx = smoothstep(tx);
        let sy = smoothstep(ty);
        let sz = smoothstep(tz);

        let a = lerp(dot3(d000, [x0, y0, z0]), dot3(d100, [x1, y0, z0]), sx);
        let b = lerp(dot3(d010, [x0, y1, z0]), dot3(d110, [x1, y1, z0]), sx);
        let c = lerp(dot3(d001, [x0, y0, z1]), dot3(d101, [x1, y0, z1]), sx);
        let d = lerp(dot3(d011, [x0, y1, z1]), dot3(d111, [x1, y1, z1]), sx);

        let e = lerp(a, b, sy);
        let f = lerp(c, d, sy);
        (lerp(e, f, sz) + 1.0) / 2.0
    }

    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.fractal
            .sum(|freq| self.lattice(x * freq, y * freq, z * freq))
    }

    // Point query at integer voxel coordinates, result in [0, 1]
    pub fn evaluate(&self, x: u32, y: u32, z: u32) -> f32 {
        debug_assert!(x < self.dim.width && y < self.dim.height && z < self.dim.depth);
        self.sample(x as f32, y as f32, z as f32)
    }

    // Full-grid batch query, slice-row-major
    pub fn generate_texture(&self) -> Texture3D {
        Texture3D::from_fn(self.dim, |x, y, z| self.evaluate(x, y, z))
    }
}

impl NoiseGenerator for PerlinNoise3D {
    fn evaluate3(&self, x: u32, y: u32, z: u32) -> f32 {
        self.evaluate(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::PerlinNoise3D;
    use crate::fbm::BASE_FREQUENCY;
    use crate::texture::Dim3;

    #[test]
    fn perlin3_determinism() {
        let p1 = PerlinNoise3D::new(Dim3::new(32, 32, 32), 128, 3, 1.0, 2025);
        let p2 = PerlinNoise3D::new(Dim3::new(32, 32, 32), 128, 3, 1.0, 2025);
        for &(x, y, z) in &[(0, 0, 0), (5, 17, 29), (31, 31, 31)] {
            assert_eq!(p1.evaluate(x, y, z), p2.evaluate(x, y, z));
        }
    }

    #[test]
    fn perlin3_range() {
        let p = PerlinNoise3D::new(Dim3::new(25, 25, 16), 64, 4, 2.0, 77);
        for z in 0..16 {
            for y in 0..25 {
                for x in 0..25 {
                    let v = p.evaluate(x, y, z);
                    assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
                }
            }
        }
    }

    #[test]
    fn perlin3_batch_matches_point_queries() {
        let p = PerlinNoise3D::new(Dim3::new(8, 8, 8), 32, 2, 1.0, 4);
        let tex = p.generate_texture();
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    assert_eq!(tex.get(x, y, z), p.evaluate(x, y, z));
                }
            }
        }
    }

    #[test]
    fn perlin3_single_layer_is_base_octave() {
        let p = PerlinNoise3D::new(Dim3::new(8, 8, 8), 32, 1, 1.0, 6);
        let expected = p.lattice(
            3.0 * BASE_FREQUENCY,
            5.0 * BASE_FREQUENCY,
            7.0 * BASE_FREQUENCY,
        );
        assert!((p.evaluate(3, 5, 7) - expected).abs() < 1e-7);
    }

    #[test]
    #[should_panic]
    fn perlin3_evaluate2_panics() {
        use crate::NoiseGenerator;
        let p = PerlinNoise3D::new(Dim3::new(8, 8, 8), 16, 1, 1.0, 0);
        let _ = p.evaluate2(1, 2);
    }
}
