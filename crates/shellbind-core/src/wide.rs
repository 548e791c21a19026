//! UTF-16 conversion at the native boundary.
//!
//! Win32 `W` entry points take NUL-terminated UTF-16. Optional string
//! parameters distinguish "absent" (a null pointer) from "empty", so
//! [`to_wide_opt`] maps the empty string to `None`.

/// Encodes a string as NUL-terminated UTF-16.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Encodes a string as NUL-terminated UTF-16, or `None` if it is empty.
///
/// `None` must reach the native call as a null pointer: the shell resolves
/// defaults (such as the default verb) only when the pointer is null.
pub fn to_wide_opt(s: &str) -> Option<Vec<u16>> {
    if s.is_empty() { None } else { Some(to_wide(s)) }
}

/// Decodes UTF-16 up to the first NUL (or the end of the buffer).
///
/// Unpaired surrogates are replaced with U+FFFD.
pub fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

/// Copies `s` into a fixed-size UTF-16 field, always leaving a NUL.
///
/// Text that does not fit is silently truncated. A surrogate pair is never
/// split: if only its high half would fit, it is dropped too.
pub fn copy_truncated(s: &str, dst: &mut [u16]) {
    let Some(capacity) = dst.len().checked_sub(1) else {
        return;
    };

    let mut written = 0;
    for ch in s.chars() {
        let mut units = [0u16; 2];
        let encoded = ch.encode_utf16(&mut units);
        if written + encoded.len() > capacity {
            break;
        }
        dst[written..written + encoded.len()].copy_from_slice(encoded);
        written += encoded.len();
    }

    dst[written..].fill(0);
}
