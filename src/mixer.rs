//! Adaptive bit predictor ("neuron"): a logistic mixer combining several
//! stretched-domain feature activations into one probability.
//!
//! Weights are organised as `m` independent sets of `n` weights; [`Mixer::set`]
//! picks which set the next [`Mixer::p`]/[`Mixer::update`] pair trains,
//! letting a coarse context (e.g. the high bits of the previous byte)
//! select a specialised mixing strategy without maintaining `m` separate
//! `Mixer`s.

use crate::tables::squash;

fn train(inputs: &[i32], weights: &mut [i32], error: i32) {
    for (input, weight) in inputs.iter().zip(weights.iter_mut()) {
        *weight += ((*input * error) + 0x8000) >> 16;
    }
}

fn dot_product(inputs: &[i32], weights: &[i32]) -> i32 {
    inputs
        .iter()
        .zip(weights.iter())
        .map(|(i, w)| i * w)
        .sum::<i32>()
        >> 16
}

pub struct Mixer {
    max_in: usize,
    inputs: Vec<i32>,
    weights: Vec<i32>,
    weight_set: usize,
    pr: i32,
}

impl Mixer {
    /// `n` feature inputs per prediction, `m` independently-trained weight sets.
    pub fn new(n: usize, m: usize) -> Mixer {
        Mixer {
            max_in: n,
            inputs: Vec::with_capacity(n),
            weights: vec![0; n * m],
            weight_set: 0,
            pr: 2048,
        }
    }

    /// Add one stretched-domain feature activation for the current bit.
    pub fn add(&mut self, pr: i32) {
        assert!(self.inputs.len() < self.inputs.capacity());
        self.inputs.push(pr);
    }

    /// Select the weight set used by the next `p`/`update` pair.
    pub fn set(&mut self, cxt: u32) {
        self.weight_set = (cxt as usize) * self.max_in;
    }

    /// Mix the accumulated inputs into a probability in `[0, 4096)`.
    pub fn p(&mut self) -> i32 {
        let d = dot_product(&self.inputs, &self.weights[self.weight_set..]);
        self.pr = squash(d);
        self.pr
    }

    /// Train the active weight set toward the observed bit, then clear
    /// inputs for the next prediction.
    pub fn update(&mut self, bit: i32) {
        let error = ((bit << 12) - self.pr) * 7;
        assert!((-32768..32768).contains(&error));
        train(&self.inputs, &mut self.weights[self.weight_set..], error);
        self.inputs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_stay_bounded_under_long_training() {
        let mut mx = Mixer::new(3, 2);
        for i in 0..50_000 {
            mx.set((i % 2) as u32);
            mx.add(500);
            mx.add(-500);
            mx.add(250);
            let _ = mx.p();
            mx.update((i % 2) as i32);
        }
        for w in &mx.weights {
            assert!((-(1 << 20)..(1 << 20)).contains(w), "weight escaped bound: {w}");
        }
    }

    #[test]
    fn converges_toward_a_constant_bit() {
        let mut mx = Mixer::new(1, 1);
        let mut last = 2048;
        for _ in 0..2000 {
            mx.set(0);
            mx.add(2000);
            last = mx.p();
            mx.update(1);
        }
        assert!(last > 3000);
    }
}
