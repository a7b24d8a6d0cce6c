//! FFI binding for the C baseline parser.

use crate::token::{Classification, PaddedToken};

#[cfg(c_implementation_active)]
mod ffi {
    use std::ffi::c_char;

    extern "C" {
        pub fn parse_bool_c_strcmp_table(token: *const c_char) -> i32;
    }
}

/// C keyword-table scan with `strcmp`.
#[cfg(c_implementation_active)]
pub fn parse_bool_c_strcmp_table(token: Option<&PaddedToken>) -> Classification {
    let ptr = token.map_or(std::ptr::null(), PaddedToken::as_c_ptr);
    // SAFETY: `ptr` is null or points at a NUL-terminated buffer that outlives the call.
    Classification::from_raw(unsafe { ffi::parse_bool_c_strcmp_table(ptr) })
}

/// Check if the C implementation is available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn parse_bool_c_strcmp_table(_token: Option<&PaddedToken>) -> Classification {
    unreachable!("C implementation not compiled (requires GCC, Clang or MSVC)")
}
