// noise-core holds the coherent-noise generators and their shared glue:
// the seeded kernel stream, the fractal octave combiner, and the texture
// materializer. Everything is CPU-side, deterministic per (seed, params,
// coordinate), and immutable after construction, so any generator can be
// queried concurrently.
pub mod fbm;
pub mod math;
pub mod perlin2;
pub mod perlin3;
pub mod rng;
pub mod texture;
pub mod value2;
pub mod white2;
pub mod worley2;
pub mod worley3;

pub use fbm::FractalParams;
pub use perlin2::PerlinNoise2D;
pub use perlin3::PerlinNoise3D;
pub use rng::DEFAULT_SEED;
pub use texture::{Dim2, Dim3, Texture2D, Texture3D};
pub use value2::ValueNoise2D;
pub use white2::WhiteNoise2D;
pub use worley2::WorleyNoise2D;
pub use worley3::WorleyNoise3D;

// Point sampler over pixel/voxel coordinates.
// 2D-only generators override `evaluate2(...)`.
// 3D-only generators override `evaluate3(...)`.
pub trait NoiseGenerator {
    // Sample 2D noise at pixel (x, y).
    fn evaluate2(&self, _x: u32, _y: u32) -> f32 {
        panic!("evaluate2 not implemented for this generator");
    }

    // Sample 3D noise at voxel (x, y, z).
    fn evaluate3(&self, _x: u32, _y: u32, _z: u32) -> f32 {
        panic!("evaluate3 not implemented for this generator");
    }
}
