// libmsr/src/protocol/parser.rs

use crate::error::ProtocolError;

type Result<T> = std::result::Result<T, ProtocolError>;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(ProtocolError::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Fixed-size copy of `N` bytes starting at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice_at(data, idx, N)?);
    Ok(out)
}

/// Strip a required prefix, reporting what was found otherwise.
pub fn strip_prefix<'a>(data: &'a [u8], prefix: &[u8], what: &str) -> Result<&'a [u8]> {
    data.strip_prefix(prefix).ok_or_else(|| {
        ProtocolError::MalformedBlock(format!(
            "expected {} {:02x?}, found {:02x?}",
            what,
            prefix,
            &data[..data.len().min(prefix.len())]
        ))
    })
}

/// Strip a required suffix.
pub fn strip_suffix<'a>(data: &'a [u8], suffix: &[u8], what: &str) -> Result<&'a [u8]> {
    data.strip_suffix(suffix).ok_or_else(|| {
        ProtocolError::MalformedBlock(format!(
            "expected {} {:02x?} at end of block",
            what, suffix
        ))
    })
}
