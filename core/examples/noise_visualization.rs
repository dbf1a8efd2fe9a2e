use image::GrayImage;
use noise_core::{
    DEFAULT_SEED, Dim2, Dim3, PerlinNoise2D, PerlinNoise3D, Texture2D, Texture3D, ValueNoise2D,
    WhiteNoise2D, WorleyNoise2D, WorleyNoise3D,
};

const SIZE: u32 = 256;

fn save_texture2d(tex: &Texture2D, filename: &str) {
    let img = GrayImage::from_raw(tex.dim().width, tex.dim().height, tex.to_luma8())
        .expect("buffer length matches extent");
    img.save(filename).unwrap();
    println!("Saved {}", filename);
}

// Pull one depth slice out of a volume texture for inspection
fn save_slice(tex: &Texture3D, z: u32, filename: &str) {
    let dim = tex.dim();
    let slice = Texture2D::from_fn(Dim2::new(dim.width, dim.height), |x, y| tex.get(x, y, z));
    save_texture2d(&slice, filename);
}

fn main() {
    let dim = Dim2::new(SIZE, SIZE);

    let value = ValueNoise2D::new(dim, Dim2::new(16, 16), 5, 1.0, DEFAULT_SEED);
    save_texture2d(&value.generate_texture(), "value2d.png");

    let perlin = PerlinNoise2D::new(dim, 256, 5, 1.0, DEFAULT_SEED);
    save_texture2d(&perlin.generate_texture(), "perlin2d.png");

    let worley = WorleyNoise2D::new(dim, 8, DEFAULT_SEED);
    save_texture2d(&worley.generate_texture(), "worley2d.png");

    let white = WhiteNoise2D::new(dim, DEFAULT_SEED);
    save_texture2d(&white.generate_texture(), "white2d.png");

    // Mid-depth slices of the volume generators
    let dim3 = Dim3::new(64, 64, 64);
    let perlin3 = PerlinNoise3D::new(dim3, 256, 4, 2.0, DEFAULT_SEED);
    save_slice(&perlin3.generate_texture(), 32, "perlin3d_slice.png");

    let worley3 = WorleyNoise3D::new(dim3, 4, DEFAULT_SEED);
    save_slice(&worley3.generate_texture(), 32, "worley3d_slice.png");
}
