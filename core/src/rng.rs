// Seeded random stream used to build kernel tables.
// Every generator owns its own stream, consumed once at construction time;
// there is no process-wide random state anywhere in the crate.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Seed the original demo textures were generated with
pub const DEFAULT_SEED: u64 = 42;

// ChaCha keeps the stream identical across platforms and rustc versions,
// which the determinism tests rely on.
pub struct KernelRng {
    inner: ChaCha8Rng,
}

impl KernelRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // Uniform f32 in [0, 1)
    #[inline]
    pub fn uniform(&mut self) -> f32 {
        self.inner.r#gen()
    }

    // Unit vector with angle uniform on the circle
    pub fn unit_circle(&mut self) -> [f32; 2] {
        let theta = 2.0 * std::f32::consts::PI * self.uniform();
        [theta.cos(), theta.sin()]
    }

    // Unit vector uniform on the sphere via inverse-transform sampling
    pub fn unit_sphere(&mut self) -> [f32; 3] {
        let theta = (2.0 * self.uniform() - 1.0).acos();
        let phi = 2.0 * std::f32::consts::PI * self.uniform();
        [
            phi.cos() * theta.sin(),
            phi.sin() * theta.sin(),
            theta.cos(),
        ]
    }

    // Fisher-Yates shuffle of [0, n), duplicated into a table of length 2n
    // so lattice hashing can index `perm[perm[x] + y]` without wrapping twice.
    pub fn doubled_permutation(&mut self, n: usize) -> Vec<usize> {
        let mut p: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = self.inner.gen_range(0..=i);
            p.swap(i, j);
        }
        let mut table = Vec::with_capacity(2 * n);
        table.extend_from_slice(&p);
        table.extend_from_slice(&p);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::KernelRng;

    #[test]
    fn stream_is_deterministic() {
        let mut a = KernelRng::new(1234);
        let mut b = KernelRng::new(1234);
        for _ in 0..64 {
            assert_eq!(a.uniform(), b.uniform());
        }
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut rng = KernelRng::new(0);
        for _ in 0..10_000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn unit_vectors_have_unit_length() {
        let mut rng = KernelRng::new(7);
        for _ in 0..100 {
            let [x, y] = rng.unit_circle();
            assert!((x * x + y * y - 1.0).abs() < 1e-5);
            let [x, y, z] = rng.unit_sphere();
            assert!((x * x + y * y + z * z - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn doubled_permutation_is_a_bijection() {
        for seed in [0u64, 42, 2025] {
            let mut rng = KernelRng::new(seed);
            let table = rng.doubled_permutation(256);
            assert_eq!(table.len(), 512);
            let mut seen = vec![false; 256];
            for &v in &table[..256] {
                assert!(!seen[v], "index {} appears twice", v);
                seen[v] = true;
            }
            assert_eq!(&table[..256], &table[256..]);
        }
    }
}
