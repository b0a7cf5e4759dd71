//! Functions for testing the availability of instruction sets at runtime.

/// Detect availability of AVX-512F on macOS, where `is_x86_feature_detected`
/// can return false even if AVX-512 is available.
///
/// See https://github.com/golang/go/issues/43089.
#[cfg(target_os = "macos")]
fn test_for_avx512_on_macos() -> bool {
    use std::sync::OnceLock;

    static AVX512_AVAILABLE: OnceLock<bool> = OnceLock::new();

    *AVX512_AVAILABLE.get_or_init(|| unsafe { get_sysctl_bool(c"hw.optional.avx512f") })
}

/// Get a sysctl int value by name and interpret it as a boolean.
#[cfg(target_os = "macos")]
unsafe fn get_sysctl_bool(name: &std::ffi::CStr) -> bool {
    use std::os::raw::{c_char, c_int, c_void};

    #[link(name = "c")]
    extern "C" {
        /// See https://developer.apple.com/documentation/kernel/1387446-sysctlbyname.
        fn sysctlbyname(
            name: *const c_char,
            oldp: *mut c_void,
            oldlenp: *mut usize,
            newp: *const c_void,
            newlen: usize,
        ) -> c_int;
    }

    let mut value = 0u64;
    let mut size = std::mem::size_of::<u64>();

    let status = sysctlbyname(
        name.as_ptr(),
        (&mut value as *mut u64).cast(),
        &mut size,
        std::ptr::null(),
        0,
    );

    status == 0 && value == 1
}

/// Test if the current system supports the AVX-512 foundation instructions
/// used by [`Avx512Isa`](crate::isa::Avx512Isa).
///
/// The byte and 64-bit mask broadcasts additionally need AVX512BW, AVX512VL
/// and AVX512DQ, but those are selected at compile time via target features
/// and so are not tested here.
pub fn is_avx512_supported() -> bool {
    if is_x86_feature_detected!("avx512f") {
        true
    } else {
        #[cfg(target_os = "macos")]
        {
            test_for_avx512_on_macos()
        }
        #[cfg(not(target_os = "macos"))]
        {
            false
        }
    }
}
