//! Expanded mask forms, where each mask bit occupies a whole vector lane.

use std::array;

use crate::errors::MaskError;
use crate::mask::BoolMask8;
use crate::ops::MaskIsa;

/// Algorithm used to expand a [`BoolMask8`] into a vector mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExpandPath {
    /// Map each mask bit to a lane using the ISA's broadcast operation.
    Broadcast,

    /// Select between all-zeros and all-ones 64-bit lanes using a masked OR,
    /// then truncate each lane to the target width.
    SelectNarrow,
}

impl ExpandPath {
    /// Return the default path for expanding to byte lanes on ISA `I`.
    ///
    /// This is [`Broadcast`](ExpandPath::Broadcast) if the ISA has a native
    /// byte broadcast, unless the `fallback-expand` feature is enabled.
    pub const fn for_bytes<I: MaskIsa>() -> Self {
        if cfg!(feature = "fallback-expand") || !I::NATIVE_BYTE_BROADCAST {
            ExpandPath::SelectNarrow
        } else {
            ExpandPath::Broadcast
        }
    }

    /// Return the default path for expanding to 64-bit lanes on ISA `I`.
    pub const fn for_qwords<I: MaskIsa>() -> Self {
        if cfg!(feature = "fallback-expand") || !I::NATIVE_QWORD_BROADCAST {
            ExpandPath::SelectNarrow
        } else {
            ExpandPath::Broadcast
        }
    }
}

/// Expand `mask` into one all-zeros or all-ones byte per lane.
#[inline]
pub fn expand_i8<I: MaskIsa>(isa: I, mask: BoolMask8, path: ExpandPath) -> NarrowMask {
    match path {
        ExpandPath::Broadcast => isa.broadcast_i8(mask.to_raw()),
        ExpandPath::SelectNarrow => isa.narrow_i64_i8(select_ones_i64(isa, mask.to_raw())),
    }
}

/// Expand `mask` into one all-zeros or all-ones 64-bit word per lane.
#[inline]
pub fn expand_i64<I: MaskIsa>(isa: I, mask: BoolMask8, path: ExpandPath) -> WideMask {
    match path {
        ExpandPath::Broadcast => isa.broadcast_i64(mask.to_raw()),
        ExpandPath::SelectNarrow => select_ones_i64(isa, mask.to_raw()),
    }
}

#[inline(always)]
fn select_ones_i64<I: MaskIsa>(isa: I, bits: u8) -> WideMask {
    let zeros = isa.splat_i64(0);
    let ones = isa.splat_i64(-1);
    isa.mask_or_i64(zeros, bits, ones, ones)
}

/// Mask for a vector of eight 8-bit lanes.
///
/// Each lane is either `0` (false) or `-1` (true).
#[repr(C, align(8))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NarrowMask([i8; 8]);

impl NarrowMask {
    /// Wrap lanes which are already known to be all-zeros or all-ones.
    #[inline]
    pub(crate) const fn from_lanes_unchecked(lanes: [i8; 8]) -> Self {
        NarrowMask(lanes)
    }

    /// Create a mask from lane values, which must each be `0` or `-1`.
    pub fn try_from_lanes(lanes: [i8; 8]) -> Result<Self, MaskError> {
        match lanes.iter().position(|&x| x != 0 && x != -1) {
            Some(lane) => Err(MaskError::PartialLane { lane }),
            None => Ok(NarrowMask(lanes)),
        }
    }

    #[inline]
    pub fn to_array(self) -> [i8; 8] {
        self.0
    }

    /// Collapse this mask to one bit per lane, using the sign bit of each
    /// lane.
    #[inline]
    pub fn to_bool_mask(self) -> BoolMask8 {
        let bits = self
            .0
            .iter()
            .enumerate()
            .fold(0u8, |bits, (i, &x)| bits | (((x as u8) >> 7) << i));
        BoolMask8::from_raw(bits)
    }

    /// Take lanes from `b` where the mask is set and from `a` elsewhere.
    #[inline]
    pub fn blend_u8(self, a: [u8; 8], b: [u8; 8]) -> [u8; 8] {
        array::from_fn(|i| {
            let m = self.0[i] as u8;
            (a[i] & !m) | (b[i] & m)
        })
    }
}

impl From<NarrowMask> for BoolMask8 {
    #[inline]
    fn from(mask: NarrowMask) -> BoolMask8 {
        mask.to_bool_mask()
    }
}

/// Mask for a vector of eight 64-bit lanes.
///
/// Each lane is either `0` (false) or `-1` (true). The alignment matches a
/// 512-bit vector register.
#[repr(C, align(64))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WideMask([i64; 8]);

impl WideMask {
    #[inline]
    pub(crate) const fn from_lanes_unchecked(lanes: [i64; 8]) -> Self {
        WideMask(lanes)
    }

    /// Create a mask from lane values, which must each be `0` or `-1`.
    pub fn try_from_lanes(lanes: [i64; 8]) -> Result<Self, MaskError> {
        match lanes.iter().position(|&x| x != 0 && x != -1) {
            Some(lane) => Err(MaskError::PartialLane { lane }),
            None => Ok(WideMask(lanes)),
        }
    }

    #[inline]
    pub fn to_array(self) -> [i64; 8] {
        self.0
    }

    /// Collapse this mask to one bit per lane, using the sign bit of each
    /// lane.
    #[inline]
    pub fn to_bool_mask(self) -> BoolMask8 {
        let bits = self
            .0
            .iter()
            .enumerate()
            .fold(0u8, |bits, (i, &x)| bits | ((((x as u64) >> 63) as u8) << i));
        BoolMask8::from_raw(bits)
    }

    /// Take lanes from `b` where the mask is set and from `a` elsewhere.
    #[inline]
    pub fn blend_i64(self, a: [i64; 8], b: [i64; 8]) -> [i64; 8] {
        array::from_fn(|i| (a[i] & !self.0[i]) | (b[i] & self.0[i]))
    }

    /// Take lanes from `b` where the mask is set and from `a` elsewhere.
    ///
    /// The selection is bitwise, so NaN payloads and signed zeros are
    /// preserved.
    #[inline]
    pub fn blend_f64(self, a: [f64; 8], b: [f64; 8]) -> [f64; 8] {
        let bits = self.blend_i64(a.map(|x| x.to_bits() as i64), b.map(|x| x.to_bits() as i64));
        bits.map(|x| f64::from_bits(x as u64))
    }
}

impl From<WideMask> for BoolMask8 {
    #[inline]
    fn from(mask: WideMask) -> BoolMask8 {
        mask.to_bool_mask()
    }
}
