#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[lo, hi]`; returns `lo` for an empty or degenerate range.
pub(super) fn range_f32(state: &mut u32, lo: f32, hi: f32) -> f32 {
    if !(hi > lo) {
        return lo;
    }
    let unit = xorshift32(state) as f32 / u32::MAX as f32;
    lo + (hi - lo) * unit
}

/// xorshift has a fixed point at zero.
pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 {
        0x9E37_79B9
    } else {
        seed
    }
}
