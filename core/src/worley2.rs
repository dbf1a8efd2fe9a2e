use crate::NoiseGenerator;
use crate::math::length2;
use crate::rng::KernelRng;
use crate::texture::{Dim2, Texture2D};

// 2D Worley (cellular) noise, F1 metric: the value at a pixel is the
// distance to the nearest jittered feature point among the 3x3 neighborhood
// of kernel cells, with toroidal wraparound at the grid edges so the texture
// tiles without seams.
pub struct WorleyNoise2D {
    dim: Dim2,
    subdivisions: u32,
    col_width: u32,
    row_height: u32,
    kernel: Vec<[f32; 2]>,
}

impl WorleyNoise2D {
    pub fn new(dim: Dim2, subdivisions: u32, seed: u64) -> Self {
        assert!(subdivisions > 0, "subdivision count must be positive");
        assert!(
            dim.width % subdivisions == 0 && dim.height % subdivisions == 0,
            "subdivision count must divide both texture axes"
        );

        // One feature point per cell, components uniform in [0, 1), row-major
        let mut rng = KernelRng::new(seed);
        let n = subdivisions as usize;
        let mut kernel = Vec::with_capacity(n * n);
        for _ in 0..n * n {
            kernel.push([rng.uniform(), rng.uniform()]);
        }

        Self {
            dim,
            subdivisions,
            col_width: dim.width / subdivisions,
            row_height: dim.height / subdivisions,
            kernel,
        }
    }

    pub fn dim(&self) -> Dim2 {
        self.dim
    }

    // Minimum distance from the local offset to the feature points of the
    // nine surrounding cells, each point shifted by its cell delta
    fn sample(&self, row: u32, col: u32, offset: [f32; 2]) -> f32 {
        let n = self.subdivisions as i32;
        let mut min_dist = f32::MAX;

        for dy in -1..=1 {
            let mut sampled_row = row as i32 + dy;
            sampled_row = if sampled_row < 0 { n - 1 } else { sampled_row };
            sampled_row = if sampled_row >= n { 0 } else { sampled_row };
            for dx in -1..=1 {
                let mut sampled_col = col as i32 + dx;
                sampled_col = if sampled_col < 0 { n - 1 } else { sampled_col };
                sampled_col = if sampled_col >= n { 0 } else { sampled_col };

                let jitter = self.kernel[(sampled_row * n + sampled_col) as usize];
                let point = [dx as f32 + jitter[0], dy as f32 + jitter[1]];
                let dist = length2([point[0] - offset[0], point[1] - offset[1]]);
                if dist < min_dist {
                    min_dist = dist;
                }
            }
        }

        min_dist.min(1.0)
    }

    // Point query at integer pixel coordinates, result in [0, 1]
    pub fn evaluate(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.dim.width && y < self.dim.height);
        let row = y / self.row_height;
        let col = x / self.col_width;
        let yoffset = (y - row * self.row_height) as f32 / self.row_height as f32;
        let xoffset = (x - col * self.col_width) as f32 / self.col_width as f32;
        self.sample(row, col, [xoffset, yoffset])
    }

    // Full-grid batch query; row/col and offsets are recomputed incrementally
    // instead of per pixel
    pub fn generate_texture(&self) -> Texture2D {
        let mut data = Vec::with_capacity(self.dim.len());
        for y in 0..self.dim.height {
            let row = y / self.row_height;
            let yoffset = (y - row * self.row_height) as f32 / self.row_height as f32;
            for x in 0..self.dim.width {
                let col = x / self.col_width;
                let xoffset = (x - col * self.col_width) as f32 / self.col_width as f32;
                data.push(self.sample(row, col, [xoffset, yoffset]));
            }
        }
        Texture2D::from_raw(self.dim, data)
    }
}

impl NoiseGenerator for WorleyNoise2D {
    fn evaluate2(&self, x: u32, y: u32) -> f32 {
        self.evaluate(x, y)
    }
}
