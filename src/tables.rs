//! Fixed-point logistic tables shared by every predictor in a process.
//!
//! `stretch` is built once from the closed-form logit of each probability's
//! bucket midpoint, rounded to the nearest integer and patched so it is
//! strictly increasing (ties happen near p=2048, where the logit's slope is
//! shallowest). `squash`, its inverse, is then derived by tabulating that
//! bijection directly rather than recomputed from a separate formula: every
//! stretch knot is written back at its own index, and the handful of gaps
//! left by multi-unit jumps near the tails are forward-filled. This is what
//! makes `squash(stretch(p)) == p` hold for every p, not just approximately.

use std::sync::OnceLock;

const P_DOMAIN: usize = 4096;

struct Tables {
    /// stretch[p] for p in 0..4096.
    stretch: Box<[i32; P_DOMAIN]>,
    /// squash[s - lo] for s in lo..=hi.
    squash: Box<[i32]>,
    lo: i32,
    hi: i32,
}

fn build_tables() -> Tables {
    let scale = 2047.0 / ((P_DOMAIN as f64 - 0.5) / 0.5).ln();

    let mut stretch = Box::new([0i32; P_DOMAIN]);
    for (p, slot) in stretch.iter_mut().enumerate() {
        let raw = ((p as f64 + 0.5) / (P_DOMAIN as f64 - 0.5 - p as f64)).ln();
        *slot = (raw * scale).round() as i32;
    }
    for p in 1..P_DOMAIN {
        if stretch[p] <= stretch[p - 1] {
            stretch[p] = stretch[p - 1] + 1;
        }
    }

    let lo = stretch[0];
    let hi = stretch[P_DOMAIN - 1];
    let mut squash = vec![0i32; (hi - lo + 1) as usize].into_boxed_slice();
    for (p, &s) in stretch.iter().enumerate() {
        squash[(s - lo) as usize] = p as i32;
    }
    let mut last = 0;
    for slot in squash.iter_mut() {
        if *slot == 0 && last != 0 {
            *slot = last;
        } else {
            last = *slot;
        }
    }

    Tables { stretch, squash, lo, hi }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Returns p = 1 / (1 + exp(-d)) in fixed point, d unrestricted, p in 0..4096.
///
/// Exact left inverse of [`stretch`]: `squash(stretch(p)) == p` for every p.
pub fn squash(d: i32) -> i32 {
    let t = TABLES.get_or_init(build_tables);
    if d < t.lo {
        return 0;
    }
    if d > t.hi {
        return (P_DOMAIN - 1) as i32;
    }
    t.squash[(d - t.lo) as usize]
}

/// Returns the logit of p's bucket midpoint, scaled to fixed point. p in 0..4096.
pub fn stretch(p: i32) -> i32 {
    debug_assert!((0..P_DOMAIN as i32).contains(&p));
    TABLES.get_or_init(build_tables).stretch[p as usize]
}
