//! Byte rendering helpers for verbose traces.

use std::fmt::Write;

/// Lowercase hex with a single space between bytes.
///
/// Example: `&[0x1b, 0x30]` -> `"1b 30"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Render protocol bytes the way the manual writes them: printable ASCII
/// as-is, ESC and FS by name, anything else as `<xx>`.
///
/// Example: `&[0x1b, b'o', 0x05]` -> `"<ESC>o<05>"`
pub fn bytes_to_display(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            crate::constants::ESC => s.push_str("<ESC>"),
            crate::constants::FS => s.push_str("<FS>"),
            0x20..=0x7e => s.push(b as char),
            other => {
                let _ = write!(&mut s, "<{:02x}>", other);
            }
        }
    }
    s
}
