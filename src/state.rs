//! Bit-history state machine.
//!
//! Each context model indexes a single byte per slot: a compressed
//! representation of a saturating `(n0, n1)` bit-count pair. Neither the
//! teacher crate nor the retained `original_source/` files ship the literal
//! state-transition table used by real PAQ/lpaq derivatives (it's generated
//! data, external to every file in the retrieval pack). It's rebuilt here
//! by a bounded breadth-first enumeration over reachable `(n0, n1)` pairs,
//! starting from `(0, 0)`, so that `(0, 0)` always lands on index 0, the
//! same value a zero-initialised state array already holds.
//!
//! Transition rule: the observed count saturates at `N_MAX`; the opposing
//! count decays (`n -> n/2 + 1`) once it exceeds `T`, so a long run of one
//! bit doesn't let a stale opposite count keep dragging the prediction back
//! toward 50/50.

use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

const N_MAX: u32 = 30;
const T: u32 = 2;

struct StateTables {
    next0: Vec<u8>,
    next1: Vec<u8>,
}

fn decay(n_opposite: u32) -> u32 {
    if n_opposite > T {
        n_opposite / 2 + 1
    } else {
        n_opposite
    }
}

fn on_bit0(n0: u32, n1: u32) -> (u32, u32) {
    ((n0 + 1).min(N_MAX), decay(n1))
}

fn on_bit1(n0: u32, n1: u32) -> (u32, u32) {
    (decay(n0), (n1 + 1).min(N_MAX))
}

fn build_tables() -> StateTables {
    let mut index_of: HashMap<(u32, u32), u8> = HashMap::new();
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
    let mut trans: HashMap<u8, (u8, u8)> = HashMap::new();
    let mut count = 0u8;

    index_of.insert((0, 0), 0);
    queue.push_back((0, 0));
    count += 1;

    while let Some(state) = queue.pop_front() {
        let id = index_of[&state];

        let t0 = on_bit0(state.0, state.1);
        let id0 = *index_of.entry(t0).or_insert_with(|| {
            let i = count;
            count += 1;
            queue.push_back(t0);
            i
        });

        let t1 = on_bit1(state.0, state.1);
        let id1 = *index_of.entry(t1).or_insert_with(|| {
            let i = count;
            count += 1;
            queue.push_back(t1);
            i
        });

        trans.insert(id, (id0, id1));
    }

    let n = index_of.len();
    let mut next0 = vec![0u8; n];
    let mut next1 = vec![0u8; n];
    for (id, (a, b)) in trans {
        next0[id as usize] = a;
        next1[id as usize] = b;
    }

    StateTables { next0, next1 }
}

static TABLES: OnceLock<StateTables> = OnceLock::new();

/// The state a freshly-allocated (zeroed) context slot starts in.
pub const INITIAL_STATE: u8 = 0;

/// Transition a bit-history state on an observed bit.
pub fn next_state(state: u8, bit: i32) -> u8 {
    debug_assert!(bit == 0 || bit == 1);
    let t = TABLES.get_or_init(build_tables);
    if bit == 1 {
        t.next1[state as usize]
    } else {
        t.next0[state as usize]
    }
}

/// Number of distinct reachable states (used only by tests and sizing checks).
pub fn state_count() -> usize {
    TABLES.get_or_init(build_tables).next0.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_in_a_byte_and_matches_spec_count() {
        let n = state_count();
        assert!(n <= 256);
        assert_eq!(n, 216, "spec.md Open Question resolution expects 216 reachable states");
    }

    #[test]
    fn initial_state_is_zero() {
        assert_eq!(INITIAL_STATE, 0);
    }

    #[test]
    fn long_run_of_ones_does_not_panic_or_escape_table() {
        let mut s = INITIAL_STATE;
        for _ in 0..10_000 {
            s = next_state(s, 1);
        }
        assert!((s as usize) < state_count());
    }

    #[test]
    fn alternating_bits_stay_in_bounds() {
        let mut s = INITIAL_STATE;
        for i in 0..10_000 {
            s = next_state(s, i % 2);
        }
        assert!((s as usize) < state_count());
    }
}
