//! Boolean masks for SIMD vectors with eight 64-bit lanes.
//!
//! [`BoolMask8`] holds the result of a lane-wise comparison or predicate over
//! 8-wide vectors of `f64`, `i64` or `u64` elements. It is stored as one bit
//! per lane, which is the representation AVX-512 uses for its `__mmask8`
//! mask registers, and supports:
//!
//! - Logical operators (`!`, `&`, `|`, `^` and their assigning variants) and
//!   [`andn`](BoolMask8::andn)
//! - Lane-wise comparison of masks ([`lanes_eq`](BoolMask8::lanes_eq),
//!   [`lanes_ne`](BoolMask8::lanes_ne)) and selection
//!   ([`select`](BoolMask8::select))
//! - Reductions to a scalar ([`all`](BoolMask8::all),
//!   [`any`](BoolMask8::any), [`popcount`](BoolMask8::popcount) etc.),
//!   optionally restricted to a set of valid lanes
//! - Reading and updating individual lanes
//!
//! ## Expanded masks
//!
//! Instruction sets without mask registers select between vectors using a
//! vector mask, where every bit of a lane is set or clear. A `BoolMask8` can
//! be expanded into one of two such forms:
//!
//! - [`NarrowMask`], with one byte per lane, via
//!   [`to_narrow_mask`](BoolMask8::to_narrow_mask)
//! - [`WideMask`], with one 64-bit word per lane, via
//!   [`to_wide_mask`](BoolMask8::to_wide_mask)
//!
//! Each expansion has two implementations, selected by [`ExpandPath`]. The
//! broadcast path maps bits to lanes directly (eg. using `vpmovm2q` on
//! AVX-512DQ). The fallback path does a masked OR between all-zeros and
//! all-ones 64-bit vectors, then truncates lanes to bytes if needed. Both
//! produce the same results. The path is chosen at compile time from the
//! capabilities of the [`MaskIsa`] in use, and can be forced to the fallback
//! with the `fallback-expand` feature.
//!
//! ## Example
//!
//! ```
//! use vmask::BoolMask8;
//!
//! let xs = [1.0f64, -2.0, 3.0, -4.0, 5.0, 6.0, -7.0, 8.0];
//! let positive = BoolMask8::from_array(xs.map(|x| x > 0.0));
//! assert_eq!(positive.to_string(), "<10101101>");
//! assert_eq!(positive.popcount(), 5);
//!
//! // Replace negative values with zero.
//! let clamped = positive.to_wide_mask().blend_f64([0.0; 8], xs);
//! assert_eq!(clamped, [1.0, 0.0, 3.0, 0.0, 5.0, 6.0, 0.0, 8.0]);
//!
//! // Check a predicate only over the first four lanes.
//! let valid = BoolMask8::from_raw(0b0000_1111);
//! assert!(!positive.all_in(valid));
//! assert!(positive.any_in(valid));
//! ```
//!
//! ## Lane indices
//!
//! [`get`](BoolMask8::get), [`set`](BoolMask8::set) and
//! [`clear`](BoolMask8::clear) only check that the lane index is less than 8
//! in debug builds. Use [`try_get`](BoolMask8::try_get) and friends to get a
//! [`MaskError`] instead.

mod arch;
mod errors;
mod expand;
#[cfg(feature = "avx512")]
#[cfg(target_arch = "x86_64")]
pub mod isa_detection;
mod mask;
pub mod ops;

/// Mask ISA implementations.
///
/// [`BoolMask8`]'s conversion methods use [`DefaultIsa`](isa::DefaultIsa).
/// The `_with` variants of those methods accept any ISA.
pub mod isa {
    pub use super::arch::generic::GenericIsa;
    pub use super::arch::{default_isa, DefaultIsa};

    #[cfg(feature = "avx512")]
    #[cfg(target_arch = "x86_64")]
    pub use super::arch::x86_64::Avx512Isa;
}

pub use errors::MaskError;
pub use expand::{expand_i64, expand_i8, ExpandPath, NarrowMask, WideMask};
pub use mask::BoolMask8;
pub use ops::MaskIsa;
