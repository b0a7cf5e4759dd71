use std::arch::x86_64::{
    __m128i, __m512i, _mm512_cvtepi64_epi8, _mm512_mask_or_epi64, _mm512_set1_epi64,
    _mm_cvtsi128_si64,
};
use std::mem::transmute;

use crate::expand::{NarrowMask, WideMask};
use crate::ops::MaskIsa;

/// Mask ISA using AVX-512 instructions.
///
/// Only AVX-512F is required to construct this ISA. The byte and 64-bit
/// broadcasts use `vpmovm2b` and `vpmovm2q` if the crate is compiled with the
/// AVX512BW + AVX512VL and AVX512DQ target features respectively. Otherwise
/// they fall back to the portable implementations, and the default expansion
/// path is the masked OR construction.
#[derive(Copy, Clone)]
pub struct Avx512Isa {
    _private: (),
}

impl Avx512Isa {
    pub fn new() -> Option<Self> {
        if crate::isa_detection::is_avx512_supported() {
            Some(Avx512Isa { _private: () })
        } else {
            None
        }
    }

    /// Construct the ISA without checking for CPU support.
    ///
    /// # Safety
    ///
    /// The caller must ensure AVX-512F is supported, eg. because it is
    /// enabled as a target feature.
    #[allow(dead_code)]
    pub(crate) const unsafe fn new_unchecked() -> Self {
        Avx512Isa { _private: () }
    }
}

#[inline]
fn to_m512i(x: WideMask) -> __m512i {
    // Safety: `WideMask` and `__m512i` are both 64 bytes of plain integer data.
    unsafe { transmute::<[i64; 8], __m512i>(x.to_array()) }
}

#[inline]
fn from_m512i(x: __m512i) -> WideMask {
    // Safety: See `to_m512i`.
    WideMask::from_lanes_unchecked(unsafe { transmute::<__m512i, [i64; 8]>(x) })
}

/// Extract the low 8 bytes of `x`.
#[inline]
fn low_bytes(x: __m128i) -> NarrowMask {
    let low = unsafe { _mm_cvtsi128_si64(x) };
    NarrowMask::from_lanes_unchecked(low.to_le_bytes().map(|x| x as i8))
}

// Safety: AVX-512F is supported as `Avx512Isa::new` checks this. The
// byte and 64-bit broadcasts only use instructions beyond AVX-512F when the
// corresponding target features are enabled at compile time.
unsafe impl MaskIsa for Avx512Isa {
    const NATIVE_BYTE_BROADCAST: bool =
        cfg!(all(target_feature = "avx512bw", target_feature = "avx512vl"));
    const NATIVE_QWORD_BROADCAST: bool = cfg!(target_feature = "avx512dq");

    #[inline]
    fn broadcast_i8(self, mask: u8) -> NarrowMask {
        #[cfg(all(target_feature = "avx512bw", target_feature = "avx512vl"))]
        {
            use std::arch::x86_64::_mm_movm_epi8;
            low_bytes(unsafe { _mm_movm_epi8(mask as u16) })
        }
        #[cfg(not(all(target_feature = "avx512bw", target_feature = "avx512vl")))]
        {
            super::generic::GenericIsa::new().broadcast_i8(mask)
        }
    }

    #[inline]
    fn broadcast_i64(self, mask: u8) -> WideMask {
        #[cfg(target_feature = "avx512dq")]
        {
            use std::arch::x86_64::_mm512_movm_epi64;
            from_m512i(unsafe { _mm512_movm_epi64(mask) })
        }
        #[cfg(not(target_feature = "avx512dq"))]
        {
            super::generic::GenericIsa::new().broadcast_i64(mask)
        }
    }

    #[inline]
    fn splat_i64(self, x: i64) -> WideMask {
        from_m512i(unsafe { _mm512_set1_epi64(x) })
    }

    #[inline]
    fn mask_or_i64(self, src: WideMask, mask: u8, a: WideMask, b: WideMask) -> WideMask {
        from_m512i(unsafe { _mm512_mask_or_epi64(to_m512i(src), mask, to_m512i(a), to_m512i(b)) })
    }

    #[inline]
    fn narrow_i64_i8(self, x: WideMask) -> NarrowMask {
        low_bytes(unsafe { _mm512_cvtepi64_epi8(to_m512i(x)) })
    }
}
