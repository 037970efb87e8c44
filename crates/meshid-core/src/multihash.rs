//! Minimal multihash framing: varint code ‖ varint length ‖ digest bytes.
//!
//! Only the framing layer lives here. Nothing in this module hashes;
//! callers supply the digest bytes (or, for the legacy digest form, the raw
//! canonical payload).

use crate::error::{CodecError, Result};

/// Multihash code for SHA2-256.
pub const SHA2_256: u64 = 0x12;

/// Multihash code for SHA2-512.
pub const SHA2_512: u64 = 0x13;

/// Frame digest bytes under the given multihash code.
pub fn wrap(code: u64, digest: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(digest.len() + 4);
    write_varint(&mut out, code);
    write_varint(&mut out, digest.len() as u64);
    out.extend_from_slice(digest);
    out
}

/// Parse a multihash frame, returning the code and digest bytes.
///
/// The declared length must match the remaining bytes exactly; truncated
/// frames and trailing garbage are both rejected.
pub fn unwrap(bytes: &[u8]) -> Result<(u64, Vec<u8>)> {
    let (code, rest) = read_varint(bytes)?;
    let (len, rest) = read_varint(rest)?;
    if rest.len() as u64 != len {
        return Err(CodecError::MalformedText(format!(
            "multihash declares {len} digest bytes, found {}",
            rest.len()
        )));
    }
    Ok((code, rest.to_vec()))
}

// Unsigned LEB128.
fn write_varint(out: &mut Vec<u8>, mut n: u64) {
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

fn read_varint(bytes: &[u8]) -> Result<(u64, &[u8])> {
    let mut n = 0u64;
    for (i, &byte) in bytes.iter().enumerate() {
        let shift = 7 * i;
        if shift >= 64 {
            return Err(CodecError::MalformedText("varint too long".into()));
        }
        n |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((n, &bytes[i + 1..]));
        }
    }
    Err(CodecError::MalformedText("truncated varint".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_layout() {
        let framed = wrap(SHA2_256, &[0xaa; 32]);
        assert_eq!(framed[0], 0x12);
        assert_eq!(framed[1], 0x20);
        assert_eq!(&framed[2..], &[0xaa; 32]);
    }

    #[test]
    fn test_wrap_unwrap_roundtrip() {
        let digest = b"arbitrary digest bytes".to_vec();
        let framed = wrap(SHA2_512, &digest);
        let (code, unwrapped) = unwrap(&framed).unwrap();
        assert_eq!(code, SHA2_512);
        assert_eq!(unwrapped, digest);
    }

    #[test]
    fn test_unwrap_rejects_truncated() {
        let mut framed = wrap(SHA2_256, &[0xaa; 32]);
        framed.pop();
        assert!(matches!(
            unwrap(&framed),
            Err(CodecError::MalformedText(_))
        ));
    }

    #[test]
    fn test_unwrap_rejects_trailing_garbage() {
        let mut framed = wrap(SHA2_256, &[0xaa; 32]);
        framed.push(0x00);
        assert!(matches!(
            unwrap(&framed),
            Err(CodecError::MalformedText(_))
        ));
    }

    #[test]
    fn test_unwrap_empty_input() {
        assert!(matches!(unwrap(&[]), Err(CodecError::MalformedText(_))));
    }

    #[test]
    fn test_varint_multi_byte() {
        // 300 = 0b10_0101100 -> 0xac 0x02
        let mut out = Vec::new();
        write_varint(&mut out, 300);
        assert_eq!(out, vec![0xac, 0x02]);
        let (n, rest) = read_varint(&out).unwrap();
        assert_eq!(n, 300);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_varint_unterminated() {
        assert!(matches!(
            read_varint(&[0x80, 0x80]),
            Err(CodecError::MalformedText(_))
        ));
    }
}
