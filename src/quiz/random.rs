use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
    fn chance(&mut self, probability: f64) -> bool;
}

pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0, len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.0.gen_bool(probability.max(0.0).min(1.0))
    }
}

pub fn from_thread() -> RngSource<ThreadRng> {
    RngSource(rand::thread_rng())
}

pub fn from_seed(seed: u64) -> RngSource<StdRng> {
    RngSource(StdRng::seed_from_u64(seed))
}

pub fn shuffle<T>(items: &mut [T], random: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = random.index(i + 1);
        items.swap(i, j);
    }
}
