use crate::NoiseGenerator;
use crate::math::length3;
use crate::rng::KernelRng;
use crate::texture::{Dim3, Texture3D};

// 3D Worley (cellular) noise, F1 metric over the 3x3x3 neighborhood of
// kernel cells with toroidal wraparound on every axis.
pub struct WorleyNoise3D {
    dim: Dim3,
    subdivisions: u32,
    col_width: u32,
    row_height: u32,
    slice_depth: u32,
    kernel: Vec<[f32; 3]>,
}

impl WorleyNoise3D {
    pub fn new(dim: Dim3, subdivisions: u32, seed: u64) -> Self {
        assert!(subdivisions > 0, "subdivision count must be positive");
        assert!(
            dim.width % subdivisions == 0
                && dim.height % subdivisions == 0
                && dim.depth % subdivisions == 0,
            "subdivision count must divide all texture axes"
        );

        // One feature point per cell, slice-major
        let mut rng = KernelRng::new(seed);
        let n = subdivisions as usize;
        let mut kernel = Vec::with_capacity(n * n * n);
        for _ in 0..n * n * n {
            kernel.push([rng.uniform(), rng.uniform(), rng.uniform()]);
        }

        Self {
            dim,
            subdivisions,
            col_width: dim.width / subdivisions,
            row_height: dim.height / subdivisions,
            slice_depth: dim.depth / subdivisions,
            kernel,
        }
    }

    pub fn dim(&self) -> Dim3 {
        self.dim
    }

    fn sample(&self, slice: u32, row: u32, col: u32, offset: [f32; 3]) -> f32 {
        let n = self.subdivisions as i32;
        let page = (n * n) as usize;
        let mut min_dist = f32::MAX;

        for dz in -1..=1 {
            let mut sampled_slice = slice as i32 + dz;
            sampled_slice = if sampled_slice < 0 {
                n - 1
            } else {
                sampled_slice
            };
            sampled_slice = if sampled_slice >= n { 0 } else { sampled_slice };

            for dy in -1..=1 {
                let mut sampled_row = row as i32 + dy;
                sampled_row = if sampled_row < 0 { n - 1 } else { sampled_row };
                sampled_row = if sampled_row >= n { 0 } else { sampled_row };

                for dx in -1..=1 {
                    let mut sampled_col = col as i32 + dx;
                    sampled_col = if sampled_col < 0 { n - 1 } else { sampled_col };
                    sampled_col = if sampled_col >= n { 0 } else { sampled_col };

                    let jitter = self.kernel
                        [sampled_slice as usize * page + (sampled_row * n + sampled_col) as usize];
                    let point = [
                        dx as f32 + jitter[0],
                        dy as f32 + jitter[1],
                        dz as f32 + jitter[2],
                    ];
                    let dist = length3([
                        point[0] - offset[0],
                        point[1] - offset[1],
                        point[2] - offset[2],
                    ]);
                    if dist < min_dist {
                        min_dist = dist;
                    }
                }
            }
        }

        min_dist.min(1.0)
    }

    // Point query at integer voxel coordinates, result in [0, 1]
    pub fn evaluate(&self, x: u32, y: u32, z: u32) -> f32 {
        debug_assert!(x < self.dim.width && y < self.dim.height && z < self.dim.depth);
        let slice = z / self.slice_depth;
        let row = y / self.row_height;
        let col = x / self.col_width;
        let zoffset = (z - slice * self.slice_depth) as f32 / self.slice_depth as f32;
        let yoffset = (y - row * self.row_height) as f32 / self.row_height as f32;
        let xoffset = (x - col * self.col_width) as f32 / self.col_width as f32;
        self.sample(slice, row, col, [xoffset, yoffset, zoffset])
    }

    // Full-grid batch query; cell indices and offsets are recomputed
    // incrementally per loop level
    pub fn generate_texture(&self) -> Texture3D {
        let mut data = Vec::with_capacity(self.dim.len());
        for z in 0..self.dim.depth {
            let slice = z / self.slice_depth;
            let zoffset = (z - slice * self.slice_depth) as f32 / self.slice_depth as f32;
            for y in 0..self.dim.height {
                let row = y / self.row_height;
                let yoffset = (y - row * self.row_height) as f32 / self.row_height as f32;
                for x in 0..self.dim.width {
                    let col = x / self.col_width;
                    let xoffset = (x - col * self.col_width) as f32 / self.col_width as f32;
                    data.push(self.sample(slice, row, col, [xoffset, yoffset, zoffset]));
                }
            }
        }
        Texture3D::from_raw(self.dim, data)
    }
}

impl NoiseGenerator for WorleyNoise3D {
    fn evaluate3(&self, x: u32, y: u32, z: u32) -> f32 {
        self.evaluate(x, y, z)
    }
}
