//! Architecture-specific mask ISAs.

pub mod generic;

#[cfg(feature = "avx512")]
#[cfg(target_arch = "x86_64")]
pub mod x86_64;

/// ISA used by [`BoolMask8`](crate::BoolMask8)'s conversion methods.
///
/// This is chosen at compile time. The AVX-512 ISA is used when the `avx512`
/// feature is enabled and AVX-512F is a target feature, otherwise the
/// generic ISA is used.
#[cfg(all(feature = "avx512", target_arch = "x86_64", target_feature = "avx512f"))]
pub type DefaultIsa = x86_64::Avx512Isa;

#[cfg(not(all(feature = "avx512", target_arch = "x86_64", target_feature = "avx512f")))]
pub type DefaultIsa = generic::GenericIsa;

/// Return an instance of [`DefaultIsa`].
#[inline]
pub fn default_isa() -> DefaultIsa {
    #[cfg(all(feature = "avx512", target_arch = "x86_64", target_feature = "avx512f"))]
    {
        // Safety: AVX-512F is enabled as a target feature.
        unsafe { x86_64::Avx512Isa::new_unchecked() }
    }
    #[cfg(not(all(feature = "avx512", target_arch = "x86_64", target_feature = "avx512f")))]
    {
        generic::GenericIsa::new()
    }
}
