//! Mask register instructions used to expand 8-lane masks.

use crate::expand::{NarrowMask, WideMask};

/// Instructions for converting an 8-bit mask register into vectors whose
/// lanes are all-zeros or all-ones.
///
/// Two groups of operations are provided. The broadcast operations
/// ([`broadcast_i8`](MaskIsa::broadcast_i8),
/// [`broadcast_i64`](MaskIsa::broadcast_i64)) map each mask bit directly to a
/// lane, like the AVX-512 `vpmovm2b` and `vpmovm2q` instructions. The
/// remaining operations are the building blocks of the fallback construction
/// used on ISAs where those instructions are missing: a 64-bit masked OR
/// between constant vectors followed by an optional truncation to bytes.
///
/// Whether the broadcast operations are native is fixed at compile time by
/// [`NATIVE_BYTE_BROADCAST`](MaskIsa::NATIVE_BYTE_BROADCAST) and
/// [`NATIVE_QWORD_BROADCAST`](MaskIsa::NATIVE_QWORD_BROADCAST). All operations
/// must be implemented either way, so that both expansion paths can be
/// compared on any system.
///
/// # Safety
///
/// Implementations must ensure they can only be constructed if the
/// instructions they use are supported on the current system.
pub unsafe trait MaskIsa: Copy {
    /// True if [`broadcast_i8`](MaskIsa::broadcast_i8) is preferred over the
    /// fallback construction on this ISA.
    const NATIVE_BYTE_BROADCAST: bool;

    /// True if [`broadcast_i64`](MaskIsa::broadcast_i64) is preferred over the
    /// fallback construction on this ISA.
    const NATIVE_QWORD_BROADCAST: bool;

    /// Set byte lane `i` to all-ones if bit `i` of `mask` is set, or zero
    /// otherwise.
    fn broadcast_i8(self, mask: u8) -> NarrowMask;

    /// Set 64-bit lane `i` to all-ones if bit `i` of `mask` is set, or zero
    /// otherwise.
    fn broadcast_i64(self, mask: u8) -> WideMask;

    /// Create a vector with all 64-bit lanes set to `x`.
    fn splat_i64(self, x: i64) -> WideMask;

    /// Compute `a | b` in lanes where `mask` is set, and take the lane from
    /// `src` elsewhere.
    fn mask_or_i64(self, src: WideMask, mask: u8, a: WideMask, b: WideMask) -> WideMask;

    /// Truncate each 64-bit lane to its low 8 bits.
    fn narrow_i64_i8(self, x: WideMask) -> NarrowMask;
}
