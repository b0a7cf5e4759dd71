//! 8-lane boolean mask.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::arch::default_isa;
use crate::errors::MaskError;
use crate::expand::{expand_i64, expand_i8, ExpandPath, NarrowMask, WideMask};
use crate::ops::MaskIsa;

/// Mask with one boolean lane for each element of an 8-lane vector with
/// 64-bit elements, such as `[f64; 8]` or an AVX-512 `__m512d`.
///
/// Lane `i` is stored in bit `i` of a `u8`, which is the same representation
/// as an AVX-512 `__mmask8` mask register. Logical operators and reductions
/// work directly on this form. The lane-per-element forms needed to select
/// between vectors are computed on demand by
/// [`to_narrow_mask`](BoolMask8::to_narrow_mask) and
/// [`to_wide_mask`](BoolMask8::to_wide_mask).
///
/// The `Debug` and `Display` forms list lanes in ascending order, so
/// `BoolMask8::from_raw(0b101)` is formatted as `<10100000>`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BoolMask8(u8);

impl BoolMask8 {
    /// Number of lanes in the mask.
    pub const LANES: usize = 8;

    /// Mask with all lanes false.
    pub const FALSE: BoolMask8 = BoolMask8(0x00);

    /// Mask with all lanes true.
    pub const TRUE: BoolMask8 = BoolMask8(0xff);

    /// Create a mask from a mask register value, where bit `i` is lane `i`.
    #[inline]
    pub const fn from_raw(bits: u8) -> Self {
        BoolMask8(bits)
    }

    /// Return the mask register value for this mask.
    #[inline]
    pub const fn to_raw(self) -> u8 {
        self.0
    }

    /// Create a mask from a bit pattern. Only the low 8 bits are used.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        BoolMask8(bits as u8)
    }

    /// Create a mask with all lanes set to `value`.
    #[inline]
    pub const fn splat(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Create a mask from lane values, starting with lane 0.
    #[inline]
    pub fn from_array(lanes: [bool; 8]) -> Self {
        let bits = lanes
            .iter()
            .enumerate()
            .fold(0u8, |bits, (i, &lane)| bits | ((lane as u8) << i));
        BoolMask8(bits)
    }

    /// Return the lane values, starting with lane 0.
    #[inline]
    pub fn to_array(self) -> [bool; 8] {
        std::array::from_fn(|i| self.get(i))
    }

    /// Return an iterator over lane values, starting with lane 0.
    pub fn iter(self) -> impl ExactSizeIterator<Item = bool> {
        self.to_array().into_iter()
    }

    /// Return the bit pattern as an integer. Bits above the lane count are
    /// zero.
    #[inline]
    pub const fn to_int(self) -> u32 {
        self.0 as u32
    }

    /// Return the bit pattern as an integer, with lane `i` in bit `i`.
    ///
    /// This is the same as [`to_int`](BoolMask8::to_int).
    #[inline]
    pub const fn movemask(self) -> u32 {
        self.to_int()
    }

    /// Expand the mask into one all-zeros or all-ones byte per lane, for use
    /// with vectors of 8-bit elements.
    #[inline]
    pub fn to_narrow_mask(self) -> NarrowMask {
        self.to_narrow_mask_with(default_isa())
    }

    /// Variant of [`to_narrow_mask`](BoolMask8::to_narrow_mask) which uses a
    /// given ISA, with the expansion path chosen by the ISA's capabilities.
    #[inline]
    pub fn to_narrow_mask_with<I: MaskIsa>(self, isa: I) -> NarrowMask {
        expand_i8(isa, self, ExpandPath::for_bytes::<I>())
    }

    /// Expand the mask into one all-zeros or all-ones 64-bit word per lane,
    /// for use with vectors of 64-bit elements.
    #[inline]
    pub fn to_wide_mask(self) -> WideMask {
        self.to_wide_mask_with(default_isa())
    }

    /// Variant of [`to_wide_mask`](BoolMask8::to_wide_mask) which uses a
    /// given ISA, with the expansion path chosen by the ISA's capabilities.
    #[inline]
    pub fn to_wide_mask_with<I: MaskIsa>(self, isa: I) -> WideMask {
        expand_i64(isa, self, ExpandPath::for_qwords::<I>())
    }

    /// Compute `b & !a`.
    ///
    /// Note the operand order, which matches the AVX-512 `kandn` instruction:
    /// the result is `b` with the lanes that are set in `a` cleared. This is
    /// the reverse of "`a` and not `b`". Code written for an `andn(a, b)`
    /// that means `a & !b` must swap the arguments.
    #[inline]
    pub const fn andn(a: Self, b: Self) -> Self {
        BoolMask8(!a.0 & b.0)
    }

    /// Return a mask which is true in lanes where `self` and `other` are
    /// equal (XNOR).
    #[inline]
    pub const fn lanes_eq(self, other: Self) -> Self {
        BoolMask8(!(self.0 ^ other.0))
    }

    /// Return a mask which is true in lanes where `self` and `other` differ
    /// (XOR).
    #[inline]
    pub const fn lanes_ne(self, other: Self) -> Self {
        BoolMask8(self.0 ^ other.0)
    }

    /// Take lanes from `a` where `selector` is true and from `b` elsewhere.
    #[inline]
    pub const fn select(selector: Self, a: Self, b: Self) -> Self {
        BoolMask8((selector.0 & a.0) | Self::andn(selector, b).0)
    }

    /// Take elements from `b` in lanes where the mask is true and from `a`
    /// elsewhere.
    ///
    /// This follows the operand order of the AVX-512 `mask_blend`
    /// intrinsics.
    #[inline]
    pub fn blend<T: Copy>(self, a: [T; 8], b: [T; 8]) -> [T; 8] {
        std::array::from_fn(|i| if self.get(i) { b[i] } else { a[i] })
    }

    /// Return true if all lanes are true.
    #[inline]
    pub const fn all(self) -> bool {
        self.0 == 0xff
    }

    /// Return true if any lane is true.
    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Return true if no lane is true.
    #[inline]
    pub const fn none(self) -> bool {
        self.0 == 0
    }

    /// Return true if `self` is true in every lane where `valid` is true.
    ///
    /// Lanes outside `valid` are ignored, so this is true if `valid` has no
    /// lanes set.
    #[inline]
    pub const fn all_in(self, valid: Self) -> bool {
        BoolMask8(!valid.0 | self.0).all()
    }

    /// Return true if `self` is true in some lane where `valid` is true.
    #[inline]
    pub const fn any_in(self, valid: Self) -> bool {
        BoolMask8(valid.0 & self.0).any()
    }

    /// Return true if `self` is false in every lane where `valid` is true.
    #[inline]
    pub const fn none_in(self, valid: Self) -> bool {
        BoolMask8(valid.0 & self.0).none()
    }

    /// Return the number of true lanes.
    #[inline]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Return the index of the lowest true lane, or `None` if no lane is true.
    #[inline]
    pub const fn first_set(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    #[inline]
    fn lane_bit(index: usize) -> Self {
        BoolMask8(1 << index)
    }

    /// Return the value of lane `index`.
    ///
    /// `index` must be less than 8. This is only checked in debug builds. See
    /// [`try_get`](BoolMask8::try_get) for a checked version.
    #[inline]
    pub fn get(self, index: usize) -> bool {
        debug_assert!(index < Self::LANES, "lane index out of range");
        (self.0 >> index) & 1 != 0
    }

    /// Set lane `index` to true.
    ///
    /// `index` must be less than 8. This is only checked in debug builds.
    #[inline]
    pub fn set(&mut self, index: usize) -> &mut Self {
        debug_assert!(index < Self::LANES, "lane index out of range");
        *self |= Self::lane_bit(index);
        self
    }

    /// Set lane `index` to false.
    ///
    /// `index` must be less than 8. This is only checked in debug builds.
    #[inline]
    pub fn clear(&mut self, index: usize) -> &mut Self {
        debug_assert!(index < Self::LANES, "lane index out of range");
        *self = Self::andn(Self::lane_bit(index), *self);
        self
    }

    /// Checked version of [`get`](BoolMask8::get).
    pub fn try_get(self, index: usize) -> Result<bool, MaskError> {
        check_index(index)?;
        Ok(self.get(index))
    }

    /// Checked version of [`set`](BoolMask8::set).
    pub fn try_set(&mut self, index: usize) -> Result<&mut Self, MaskError> {
        check_index(index)?;
        Ok(self.set(index))
    }

    /// Checked version of [`clear`](BoolMask8::clear).
    pub fn try_clear(&mut self, index: usize) -> Result<&mut Self, MaskError> {
        check_index(index)?;
        Ok(self.clear(index))
    }

    /// Compute `self &= other` and return `self` for chaining.
    #[inline]
    pub fn and_assign(&mut self, other: Self) -> &mut Self {
        *self &= other;
        self
    }

    /// Compute `self |= other` and return `self` for chaining.
    #[inline]
    pub fn or_assign(&mut self, other: Self) -> &mut Self {
        *self |= other;
        self
    }

    /// Compute `self ^= other` and return `self` for chaining.
    #[inline]
    pub fn xor_assign(&mut self, other: Self) -> &mut Self {
        *self ^= other;
        self
    }
}

fn check_index(index: usize) -> Result<(), MaskError> {
    if index < BoolMask8::LANES {
        Ok(())
    } else {
        Err(MaskError::IndexOutOfRange { index })
    }
}

impl Not for BoolMask8 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        BoolMask8(!self.0)
    }
}

macro_rules! impl_bit_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for BoolMask8 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                BoolMask8(self.0 $op rhs.0)
            }
        }

        impl $assign_trait for BoolMask8 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl From<bool> for BoolMask8 {
    #[inline]
    fn from(value: bool) -> Self {
        Self::splat(value)
    }
}

impl From<[bool; 8]> for BoolMask8 {
    #[inline]
    fn from(lanes: [bool; 8]) -> Self {
        Self::from_array(lanes)
    }
}

// Conversions from integers keep only the low 8 bits.
macro_rules! impl_from_int {
    ($int:ty) => {
        impl From<$int> for BoolMask8 {
            #[inline]
            fn from(bits: $int) -> Self {
                BoolMask8(bits as u8)
            }
        }
    };
}

impl_from_int!(u8);
impl_from_int!(u16);
impl_from_int!(u32);
impl_from_int!(u64);
impl_from_int!(usize);
impl_from_int!(i32);

impl From<BoolMask8> for u8 {
    #[inline]
    fn from(mask: BoolMask8) -> u8 {
        mask.0
    }
}

impl From<BoolMask8> for u32 {
    #[inline]
    fn from(mask: BoolMask8) -> u32 {
        mask.to_int()
    }
}

impl From<BoolMask8> for usize {
    #[inline]
    fn from(mask: BoolMask8) -> usize {
        mask.0 as usize
    }
}

impl fmt::Display for BoolMask8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for lane in self.iter() {
            write!(f, "{}", if lane { '1' } else { '0' })?;
        }
        write!(f, ">")
    }
}

impl fmt::Debug for BoolMask8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use vmask_testing::{all_pattern_pairs, all_patterns, random_patterns, TestCases};

    use super::BoolMask8;
    use crate::errors::MaskError;
    use crate::expand::{expand_i64, expand_i8, ExpandPath};
    use crate::isa::GenericIsa;

    #[test]
    fn test_construct() {
        assert_eq!(BoolMask8::default(), BoolMask8::FALSE);
        assert_eq!(BoolMask8::splat(true).to_raw(), 0xff);
        assert_eq!(BoolMask8::splat(false).to_raw(), 0x00);
        assert_eq!(BoolMask8::from(true), BoolMask8::TRUE);
        assert_eq!(BoolMask8::from(false), BoolMask8::FALSE);

        let lanes = [true, false, true, false, false, false, false, true];
        let mask = BoolMask8::from_array(lanes);
        assert_eq!(mask.to_raw(), 0b1000_0101);
        assert_eq!(mask.to_array(), lanes);
        assert_eq!(BoolMask8::from(lanes), mask);
        assert_eq!(mask.iter().len(), 8);
    }

    #[test]
    fn test_int_round_trip() {
        for bits in all_patterns() {
            assert_eq!(BoolMask8::from_bits(bits as u32).to_int(), bits as u32);
            assert_eq!(u8::from(BoolMask8::from(bits)), bits);
        }

        // Only the low 8 bits are kept.
        assert_eq!(BoolMask8::from_bits(0x1234_5605).to_int(), 0x05);
        assert_eq!(BoolMask8::from(0xff0fu16).to_int(), 0x0f);
        assert_eq!(BoolMask8::from(0xabcd_ef00_0000_0181u64).to_int(), 0x81);
        assert_eq!(BoolMask8::from(0x300usize), BoolMask8::FALSE);

        let mask = BoolMask8::from_raw(0b0110_0000);
        assert_eq!(mask.movemask(), mask.to_int());
        assert_eq!(u32::from(mask), 0b0110_0000);
        assert_eq!(usize::from(mask), 0b0110_0000);
    }

    #[test]
    fn test_not() {
        for bits in all_patterns() {
            let a = BoolMask8::from_raw(bits);
            assert_eq!((!a).to_raw(), !bits);
            assert_eq!(!!a, a);
        }
        assert_eq!(!BoolMask8::TRUE, BoolMask8::FALSE);
    }

    #[test]
    fn test_de_morgan() {
        for (x, y) in all_pattern_pairs() {
            let (a, b) = (BoolMask8::from_raw(x), BoolMask8::from_raw(y));
            assert_eq!(!(a & b), !a | !b);
            assert_eq!(!(a | b), !a & !b);
        }
    }

    #[test]
    fn test_andn() {
        for (x, y) in all_pattern_pairs() {
            let (a, b) = (BoolMask8::from_raw(x), BoolMask8::from_raw(y));
            assert_eq!(BoolMask8::andn(a, b), b & !a);
        }

        // Operand order is significant.
        let a = BoolMask8::from_raw(0b1100);
        let b = BoolMask8::from_raw(0b1010);
        assert_eq!(BoolMask8::andn(a, b).to_raw(), 0b0010);
        assert_eq!(BoolMask8::andn(b, a).to_raw(), 0b0100);
    }

    #[test]
    fn test_andn_is_not_a_and_not_b() {
        let a = BoolMask8::from_raw(0b0000_1111);
        let b = BoolMask8::from_raw(0b0011_1100);

        // `a & !b` is obtained by swapping the arguments.
        assert_eq!(BoolMask8::andn(b, a), a & !b);
        assert_eq!(BoolMask8::andn(b, a).to_raw(), 0b0000_0011);
        assert_ne!(BoolMask8::andn(a, b), a & !b);
    }

    #[test]
    fn test_from_signed_int() {
        assert_eq!(BoolMask8::from(-1i32), BoolMask8::TRUE);
        assert_eq!(BoolMask8::from(0i32), BoolMask8::FALSE);
        assert_eq!(BoolMask8::from(0x105i32).to_raw(), 0b0000_0101);
        assert_eq!(BoolMask8::from(-256i32), BoolMask8::FALSE);
    }

    #[test]
    fn test_bit_ops() {
        let a = BoolMask8::from_raw(0b1100_1100);
        let b = BoolMask8::from_raw(0b1010_1010);
        assert_eq!((a & b).to_raw(), 0b1000_1000);
        assert_eq!((a | b).to_raw(), 0b1110_1110);
        assert_eq!((a ^ b).to_raw(), 0b0110_0110);

        let mut c = a;
        c &= b;
        assert_eq!(c, a & b);
        let mut c = a;
        c |= b;
        assert_eq!(c, a | b);
        let mut c = a;
        c ^= b;
        assert_eq!(c, a ^ b);
    }

    #[test]
    fn test_chained_assign() {
        let mut mask = BoolMask8::from_raw(0b1111_0000);
        mask.or_assign(BoolMask8::from_raw(0b0000_0011))
            .and_assign(BoolMask8::from_raw(0b0011_1111))
            .xor_assign(BoolMask8::from_raw(0b0000_0001));
        assert_eq!(mask.to_raw(), 0b0011_0010);
    }

    #[test]
    fn test_lanes_eq_ne() {
        let a = BoolMask8::from_raw(0b1100_1100);
        let b = BoolMask8::from_raw(0b1010_1010);
        assert_eq!(a.lanes_eq(b).to_raw(), 0b1001_1001);
        assert_eq!(a.lanes_ne(b).to_raw(), 0b0110_0110);

        for (x, y) in all_pattern_pairs() {
            let (a, b) = (BoolMask8::from_raw(x), BoolMask8::from_raw(y));
            assert_eq!(a.lanes_eq(b), !a.lanes_ne(b));
            assert_eq!(a.lanes_eq(b).all(), a == b);
            assert_eq!(a.lanes_ne(b).any(), a != b);
        }
    }

    #[test]
    fn test_select() {
        let mut rng = fastrand::Rng::with_seed(1234);
        for [s, a, b] in random_patterns::<3>(&mut rng, 4096) {
            let (s, a, b) = (
                BoolMask8::from_raw(s),
                BoolMask8::from_raw(a),
                BoolMask8::from_raw(b),
            );
            let result = BoolMask8::select(s, a, b);
            for i in 0..BoolMask8::LANES {
                let expected = if s.get(i) { a.get(i) } else { b.get(i) };
                assert_eq!(result.get(i), expected, "select({:?}, {:?}, {:?})", s, a, b);
            }
        }

        let a = BoolMask8::from_raw(0b1010_1010);
        let b = BoolMask8::from_raw(0b0101_0101);
        for s in all_patterns().map(BoolMask8::from_raw) {
            assert_eq!(BoolMask8::select(s, a, b), (s & a) | (!s & b));
        }
        assert_eq!(BoolMask8::select(BoolMask8::TRUE, a, b), a);
        assert_eq!(BoolMask8::select(BoolMask8::FALSE, a, b), b);
    }

    #[test]
    fn test_blend() {
        let mask = BoolMask8::from_raw(0b0000_1001);
        let a = [1, 2, 3, 4, 5, 6, 7, 8];
        let b = [-1, -2, -3, -4, -5, -6, -7, -8];
        assert_eq!(mask.blend(a, b), [-1, 2, 3, -4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_reductions() {
        #[derive(Debug)]
        struct Case {
            bits: u8,
            all: bool,
            any: bool,
            popcount: u32,
        }

        let cases = [
            Case {
                bits: 0xff,
                all: true,
                any: true,
                popcount: 8,
            },
            Case {
                bits: 0x00,
                all: false,
                any: false,
                popcount: 0,
            },
            Case {
                bits: 0b0100_0001,
                all: false,
                any: true,
                popcount: 2,
            },
            Case {
                bits: 0x7f,
                all: false,
                any: true,
                popcount: 7,
            },
        ];

        cases.test_each(|case| {
            let mask = BoolMask8::from_raw(case.bits);
            assert_eq!(mask.all(), case.all);
            assert_eq!(mask.any(), case.any);
            assert_eq!(mask.none(), !case.any);
            assert_eq!(mask.popcount(), case.popcount);
        })
    }

    #[test]
    fn test_scoped_reductions() {
        let valid = BoolMask8::from_raw(0b0000_1111);
        let mask = BoolMask8::from_raw(0b0000_1010);
        assert!(mask.any_in(valid));
        assert!(!mask.all_in(valid));
        assert!(!mask.none_in(valid));

        // Lanes outside `valid` are ignored.
        let mask = BoolMask8::from_raw(0b1111_0000);
        assert!(!mask.any_in(valid));
        assert!(mask.none_in(valid));
        assert!(BoolMask8::from_raw(0b0000_1111).all_in(valid));
        assert!(BoolMask8::FALSE.all_in(BoolMask8::FALSE));

        for (v, m) in all_pattern_pairs() {
            let (valid, mask) = (BoolMask8::from_raw(v), BoolMask8::from_raw(m));
            assert_eq!(mask.all_in(valid), (valid & mask) == valid);
            assert_eq!(mask.any_in(valid), (valid & mask).popcount() > 0);
            assert_eq!(mask.none_in(valid), !mask.any_in(valid));
        }
    }

    #[test]
    fn test_first_set() {
        assert_eq!(BoolMask8::FALSE.first_set(), None);
        assert_eq!(BoolMask8::TRUE.first_set(), Some(0));
        assert_eq!(BoolMask8::from_raw(0b1010_0000).first_set(), Some(5));
    }

    #[test]
    fn test_get_set_clear() {
        let mut mask = BoolMask8::FALSE;
        mask.set(3);
        assert_eq!(mask.to_raw(), 0b0000_1000);
        assert!(mask.get(3));
        mask.clear(3);
        assert_eq!(mask, BoolMask8::FALSE);

        for bits in all_patterns() {
            for i in 0..BoolMask8::LANES {
                let orig = BoolMask8::from_raw(bits);
                let others = !BoolMask8::from_raw(1 << i);

                let mut mask = orig;
                mask.set(i);
                assert!(mask.get(i));
                assert_eq!(mask & others, orig & others);

                let mut mask = orig;
                mask.clear(i);
                assert!(!mask.get(i));
                assert_eq!(mask & others, orig & others);
            }
        }

        let mut mask = BoolMask8::FALSE;
        mask.set(0).set(7).clear(0);
        assert_eq!(mask.to_raw(), 0b1000_0000);
    }

    #[test]
    fn test_checked_access() {
        let mut mask = BoolMask8::from_raw(0b0000_0100);
        assert_eq!(mask.try_get(2), Ok(true));
        assert_eq!(mask.try_get(1), Ok(false));
        assert_eq!(
            mask.try_get(8),
            Err(MaskError::IndexOutOfRange { index: 8 })
        );

        assert!(mask.try_set(5).is_ok());
        assert!(mask.try_clear(2).is_ok());
        assert_eq!(mask.to_raw(), 0b0010_0000);

        assert_eq!(
            mask.try_set(100).map(|m| *m),
            Err(MaskError::IndexOutOfRange { index: 100 })
        );
        assert_eq!(
            mask.try_clear(8).map(|m| *m),
            Err(MaskError::IndexOutOfRange { index: 8 })
        );
        assert_eq!(mask.to_raw(), 0b0010_0000);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "lane index out of range")]
    fn test_get_out_of_range() {
        BoolMask8::TRUE.get(8);
    }

    #[test]
    fn test_format() {
        #[derive(Debug)]
        struct Case {
            bits: u8,
            expected: &'static str,
        }

        let cases = [
            Case {
                bits: 0b0000_0101,
                expected: "<10100000>",
            },
            Case {
                bits: 0x00,
                expected: "<00000000>",
            },
            Case {
                bits: 0xff,
                expected: "<11111111>",
            },
            Case {
                bits: 0b1000_0000,
                expected: "<00000001>",
            },
        ];

        cases.test_each(|case| {
            let mask = BoolMask8::from_raw(case.bits);
            assert_eq!(mask.to_string(), case.expected);
            assert_eq!(format!("{:?}", mask), case.expected);
        })
    }

    #[test]
    fn test_to_expanded_mask() {
        let isa = GenericIsa::new();
        for bits in all_patterns() {
            let mask = BoolMask8::from_raw(bits);

            let narrow = mask.to_narrow_mask();
            assert_eq!(narrow, expand_i8(isa, mask, ExpandPath::Broadcast));
            assert_eq!(narrow, expand_i8(isa, mask, ExpandPath::SelectNarrow));
            assert_eq!(narrow, mask.to_narrow_mask_with(isa));

            let wide = mask.to_wide_mask();
            assert_eq!(wide, expand_i64(isa, mask, ExpandPath::Broadcast));
            assert_eq!(wide, expand_i64(isa, mask, ExpandPath::SelectNarrow));
            assert_eq!(wide, mask.to_wide_mask_with(isa));

            for i in 0..BoolMask8::LANES {
                let expected = if mask.get(i) { -1 } else { 0 };
                assert_eq!(narrow.to_array()[i], expected as i8);
                assert_eq!(wide.to_array()[i], expected);
            }
        }
    }

    #[test]
    fn test_default_expand_path() {
        let expected = if cfg!(feature = "fallback-expand") {
            ExpandPath::SelectNarrow
        } else {
            ExpandPath::Broadcast
        };
        assert_eq!(ExpandPath::for_bytes::<GenericIsa>(), expected);
        assert_eq!(ExpandPath::for_qwords::<GenericIsa>(), expected);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<BoolMask8>();
    }
}
