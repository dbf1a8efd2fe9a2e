// Fractal Brownian motion combiner shared by the lattice generators.
// Each octave doubles in amplitude and frequency; contributions are divided
// by their amplitude and the sum is renormalized, so the result keeps the
// base sampler's range regardless of layer count.

// Frequency of the first octave before scaling
pub const BASE_FREQUENCY: f32 = 0.05;
// Per-octave amplitude/frequency growth rate
pub const RATE_OF_CHANGE: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct FractalParams {
    layers: usize,
    scale_factor: f32,
}

impl FractalParams {
    pub fn new(layers: usize, scale_factor: f32) -> Self {
        assert!(layers >= 1, "fractal sum needs at least one layer");
        Self {
            layers,
            scale_factor,
        }
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    // Amplitude-weighted octave average. `sample` receives the frequency to
    // scale the coordinate by and returns the base noise value at that scale.
    pub fn sum(&self, mut sample: impl FnMut(f32) -> f32) -> f32 {
        let mut brownian = 0.0;
        let mut noise_max = 0.0;
        for i in 0..self.layers {
            let amplitude = RATE_OF_CHANGE.powi(i as i32);
            let frequency = BASE_FREQUENCY * amplitude * self.scale_factor;
            brownian += sample(frequency) / amplitude;
            noise_max += 1.0 / amplitude;
        }
        brownian / noise_max
    }
}
