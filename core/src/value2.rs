use crate::NoiseGenerator;
use crate::fbm::FractalParams;
use crate::math::{lerp, smoothstep};
use crate::rng::KernelRng;
use crate::texture::{Dim2, Texture2D};

// 2D value noise: one uniform random scalar per kernel cell, bilinearly
// interpolated with smoothstep weights and summed over fractal octaves.
pub struct ValueNoise2D {
    dim: Dim2,
    kernel_dim: Dim2,
    fractal: FractalParams,
    kernel: Vec<f32>,
}

impl ValueNoise2D {
    pub fn new(dim: Dim2, kernel_dim: Dim2, layers: usize, scale_factor: f32, seed: u64) -> Self {
        let mut rng = KernelRng::new(seed);
        // One independent uniform scalar per kernel cell, row-major
        let kernel = (0..kernel_dim.len()).map(|_| rng.uniform()).collect();

        Self {
            dim,
            kernel_dim,
            fractal: FractalParams::new(layers, scale_factor),
            kernel,
        }
    }

    pub fn dim(&self) -> Dim2 {
        self.dim
    }

    // Single-octave lattice sample at an already frequency-scaled coordinate.
    // Coordinates are non-negative, so plain modulo wraps the lattice.
    fn lattice(&self, x: f32, y: f32) -> f32 {
        let xi = x.floor() as usize;
        let yi = y.floor() as usize;
        let tx = x - x.floor();
        let ty = y - y.floor();

        let kw = self.kernel_dim.width as usize;
        let kh = self.kernel_dim.height as usize;
        let rx0 = xi % kw;
        let rx1 = (rx0 + 1) % kw;
        let ry0 = yi % kh;
        let ry1 = (ry0 + 1) % kh;

        // Random values at the four corners of the cell
        let c00 = self.kernel[ry0 * kw + rx0];
        let c10 = self.kernel[ry0 * kw + rx1];
        let c01 = self.kernel[ry1 * kw + rx0];
        let c11 = self.kernel[ry1 * kw + rx1];

        let sx = smoothstep(tx);
        let sy = smoothstep(ty);

        let nx0 = lerp(c00, c10, sx);
        let nx1 = lerp(c01, c11, sx);
        lerp(nx0, nx1, sy)
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

impl NoiseGenerator for ValueNoise2D {
    fn evaluate2(&self, x: u32, y: u32) -> f32 {
        self.evaluate(x, y)
    }
}
