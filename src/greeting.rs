//! The greeting payload.

use core::ffi::CStr;

/// The greeting, NUL-terminated.
pub const GREETING_CSTR: &CStr = c"Hello world!\n";

/// The number of bytes before the NUL terminator of [`GREETING_CSTR`].
pub const GREETING_LEN: usize = GREETING_CSTR.count_bytes();

/// The bytes of the greeting, without the NUL terminator.
pub const GREETING: &[u8] = GREETING_CSTR.to_bytes();

const _: () = assert!(GREETING.len() == GREETING_LEN);
