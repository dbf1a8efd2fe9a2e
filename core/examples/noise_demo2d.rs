use noise_core::{DEFAULT_SEED, Dim2, ValueNoise2D, WorleyNoise2D};

fn main() {
    // 128x128 value noise over an 8x8 kernel, 3 octaves
    let value = ValueNoise2D::new(Dim2::new(128, 128), Dim2::new(8, 8), 3, 1.0, DEFAULT_SEED);
    let tex = value.generate_texture();

    // Print the top-left 16x16 corner of the grid
    println!("value noise:");
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>6.3} ", tex.get(x, y));
        }
        println!();
    }

    // Same corner of a 4-subdivision Worley field
    let worley = WorleyNoise2D::new(Dim2::new(128, 128), 4, DEFAULT_SEED);
    let tex = worley.generate_texture();

    println!("worley noise:");
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>6.3} ", tex.get(x, y));
        }
        println!();
    }
}
