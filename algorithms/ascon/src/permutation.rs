//! The Ascon permutation over the 320-bit state.
//!
//! Five 64-bit words, twelve rounds. Each round XORs a constant into word 2,
//! runs the chi-like nonlinear layer across neighbouring words, and diffuses
//! every word with a fixed pair of right rotations. Reduced-round calls
//! (6 or 8) execute the *tail* of the schedule, matching the a/b round split
//! of the AEAD modes.

// =============================================================================
// ROUND SCHEDULE
// =============================================================================

/// Number of rounds in the full permutation schedule.
pub const FULL_ROUNDS: usize = 12;

/// Round constants for the full schedule: `0xf0 - 0x10*r + 0x01*r` for
/// round index r in 0..12.
const ROUND_CONSTANTS: [u64; FULL_ROUNDS] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

// =============================================================================
// PERMUTATION
// =============================================================================

/// Apply `rounds` rounds of the Ascon permutation to `state` in place.
///
/// Round counts below 12 run the last `rounds` entries of the schedule
/// (round indices `12 - rounds .. 11`), not the first.
///
/// # Panics
/// Panics if `rounds > 12`.
pub fn permute(state: &mut [u64; 5], rounds: usize) {
    assert!(rounds <= FULL_ROUNDS, "round count exceeds the schedule");
    for &rc in &ROUND_CONSTANTS[FULL_ROUNDS - rounds..] {
        round(state, rc);
    }
}

/// One permutation round.
#[inline]
fn round(s: &mut [u64; 5], rc: u64) {
    // Round constant layer.
    s[2] ^= rc;

    // Linear pre-mix feeding the substitution layer.
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];

    // Nonlinear layer: t[i] = !s[i] & s[i+1], then s[i] ^= t[i+1].
    let t0 = !s[0] & s[1];
    let t1 = !s[1] & s[2];
    let t2 = !s[2] & s[3];
    let t3 = !s[3] & s[4];
    let t4 = !s[4] & s[0];
    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;

    // Linear post-mix.
    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];

    // Per-word rotate-XOR diffusion.
    s[0] ^= s[0].rotate_right(19) ^ s[0].rotate_right(28);
    s[1] ^= s[1].rotate_right(61) ^ s[1].rotate_right(39);
    s[2] ^= s[2].rotate_right(1) ^ s[2].rotate_right(6);
    s[3] ^= s[3].rotate_right(10) ^ s[3].rotate_right(17);
    s[4] ^= s[4].rotate_right(7) ^ s[4].rotate_right(41);
}

// =============================================================================
// TESTS
// =============================================================================
