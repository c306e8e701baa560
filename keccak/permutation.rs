//! The 1600-bit permutation underlying the sponge.
//!
//! The state is 25 lanes of 64 bits laid out flat, lane `(x, y)` at index
//! `x + 5 * y`. Each round applies theta, a lane-wise rotation (rho, operating
//! directly on the flat layout), chi and iota.

#![allow(clippy::identity_op)]

/// Number of rounds applied by [`keccak_f`].
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Round constants, XORed into lane 0 by iota.
pub const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Per-lane rotation offsets in flat index order.
pub const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// 64-bit left rotation. A zero offset leaves the lane untouched.
#[inline(always)]
pub fn rotl(x: u64, n: u32) -> u64 {
    if n == 0 {
        x
    } else {
        x.rotate_left(n)
    }
}

/// Chi over one row of five lanes starting at `$i`, reading from `$b`.
macro_rules! chi_row {
    ($a:expr, $b:expr, $i:expr) => {{
        $a[$i + 0] = $b[$i + 0] ^ ((!$b[$i + 1]) & $b[$i + 2]);
        $a[$i + 1] = $b[$i + 1] ^ ((!$b[$i + 2]) & $b[$i + 3]);
        $a[$i + 2] = $b[$i + 2] ^ ((!$b[$i + 3]) & $b[$i + 4]);
        $a[$i + 3] = $b[$i + 3] ^ ((!$b[$i + 4]) & $b[$i + 0]);
        $a[$i + 4] = $b[$i + 4] ^ ((!$b[$i + 0]) & $b[$i + 1]);
    }};
}

/// One full round on `a` with round constant `rc`.
#[inline(always)]
fn round(a: &mut [u64; LANES], rc: u64) {
    // Theta
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    let d = [
        c[4] ^ rotl(c[1], 1),
        c[0] ^ rotl(c[2], 1),
        c[1] ^ rotl(c[3], 1),
        c[2] ^ rotl(c[4], 1),
        c[3] ^ rotl(c[0], 1),
    ];
    for row in a.chunks_exact_mut(5) {
        for (lane, dx) in row.iter_mut().zip(d.iter()) {
            *lane ^= dx;
        }
    }

    // Rho on the flat layout
    let mut b = [0u64; LANES];
    for (i, lane) in b.iter_mut().enumerate() {
        *lane = rotl(a[i], RHO[i]);
    }

    // Chi
    chi_row!(a, b, 0);
    chi_row!(a, b, 5);
    chi_row!(a, b, 10);
    chi_row!(a, b, 15);
    chi_row!(a, b, 20);

    // Iota
    a[0] ^= rc;
}

/// Applies the last `NROUNDS` rounds of the permutation to `state` in place.
///
/// # Type Parameters
/// * `NROUNDS` - The number of rounds, at most 24. The sponge always uses 24.
#[inline]
pub fn p1600<const NROUNDS: usize>(state: &mut [u64; LANES]) {
    debug_assert!(NROUNDS <= ROUNDS, "at most 24 rounds");
    // Work on a local copy for better register allocation
    let mut a = *state;
    for &rc in &RC[ROUNDS - NROUNDS..] {
        round(&mut a, rc);
    }
    *state = a;
}

/// The full 24-round permutation used by the sponge.
#[inline]
pub fn keccak_f(state: &mut [u64; LANES]) {
    p1600::<ROUNDS>(state);
}
