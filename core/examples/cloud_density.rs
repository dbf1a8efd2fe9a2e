// Renders a cloud-density field the way a volumetric cloud renderer feeds
// its shape texture: low-frequency Perlin fBm carved by inverted Worley,
// then mapped through a sky-to-cloud color gradient.
use image::{Rgb, RgbImage};
use noise_core::{DEFAULT_SEED, Dim2, PerlinNoise2D, WorleyNoise2D};
use palette::{Gradient, LinSrgb};
use std::path::Path;

fn main() {
    let size = 512;
    let dim = Dim2::new(size, size);

    let shape = PerlinNoise2D::new(dim, 256, 5, 1.0, DEFAULT_SEED);
    let detail = WorleyNoise2D::new(dim, 8, DEFAULT_SEED.wrapping_add(1));

    // Sky blue through wisp gray to cloud white
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.25, 0.45, 0.85)),
        (0.45, LinSrgb::new(0.55, 0.65, 0.90)),
        (0.70, LinSrgb::new(0.85, 0.87, 0.92)),
        (1.00, LinSrgb::new(1.00, 1.00, 1.00)),
    ]);

    let mut img = RgbImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            // Inverted Worley erodes the Perlin base into billowy shapes
            let base = shape.evaluate(x, y);
            let erosion = 1.0 - detail.evaluate(x, y);
            let density = (base * erosion).clamp(0.0, 1.0);

            let col: LinSrgb = gradient.get(density);
            let rgb = col.into_format::<u8>();
            img.put_pixel(x, y, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }

    let path = Path::new("cloud_density.png");
    img.save(path).unwrap();
    println!("Saved cloud density render to {:?}", path);
}
