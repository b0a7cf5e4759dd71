use std::array;

use crate::expand::{NarrowMask, WideMask};
use crate::ops::MaskIsa;

// Lane `i` of the product keeps only bit `i` of the replicated mask byte.
const LANE_BITS: u64 = 0x8040_2010_0804_0201;
const REPEAT_BYTE: u64 = 0x0101_0101_0101_0101;

/// Portable mask ISA, usable on any system.
///
/// The broadcast operations are implemented with scalar bit manipulation on a
/// 64-bit word, which is cheaper than the lane-by-lane fallback construction,
/// so they are marked as native.
#[derive(Copy, Clone)]
pub struct GenericIsa {
    _private: (),
}

impl GenericIsa {
    pub fn new() -> Self {
        GenericIsa { _private: () }
    }
}

impl Default for GenericIsa {
    fn default() -> Self {
        Self::new()
    }
}

/// Spread the 8 bits of `mask` into the 8 bytes of a `u64`, with byte `i`
/// being `0xff` if bit `i` is set.
#[inline]
pub(crate) fn spread_bits_to_bytes(mask: u8) -> u64 {
    // Byte `i` is `1 << i` if bit `i` is set, or zero otherwise.
    let picked = (mask as u64).wrapping_mul(REPEAT_BYTE) & LANE_BITS;

    // Adding 0x7f sets the top bit of every non-zero byte. No byte exceeds
    // 0x80, so the sum cannot carry into the next byte.
    let top_bits = (picked + 0x7f * REPEAT_BYTE) & (0x80 * REPEAT_BYTE);
    (top_bits >> 7) * 0xff
}

// Safety: Generic operations are always supported.
unsafe impl MaskIsa for GenericIsa {
    const NATIVE_BYTE_BROADCAST: bool = true;
    const NATIVE_QWORD_BROADCAST: bool = true;

    #[inline]
    fn broadcast_i8(self, mask: u8) -> NarrowMask {
        let lanes = spread_bits_to_bytes(mask).to_le_bytes().map(|x| x as i8);
        NarrowMask::from_lanes_unchecked(lanes)
    }

    #[inline]
    fn broadcast_i64(self, mask: u8) -> WideMask {
        let lanes = array::from_fn(|i| -(((mask >> i) & 1) as i64));
        WideMask::from_lanes_unchecked(lanes)
    }

    #[inline]
    fn splat_i64(self, x: i64) -> WideMask {
        WideMask::from_lanes_unchecked([x; 8])
    }

    #[inline]
    fn mask_or_i64(self, src: WideMask, mask: u8, a: WideMask, b: WideMask) -> WideMask {
        let (src, a, b) = (src.to_array(), a.to_array(), b.to_array());
        let lanes = array::from_fn(|i| {
            if mask & (1 << i) != 0 {
                a[i] | b[i]
            } else {
                src[i]
            }
        });
        WideMask::from_lanes_unchecked(lanes)
    }

    #[inline]
    fn narrow_i64_i8(self, x: WideMask) -> NarrowMask {
        NarrowMask::from_lanes_unchecked(x.to_array().map(|x| x as i8))
    }
}
