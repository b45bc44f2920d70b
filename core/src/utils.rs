use crate::constants::BYTES_PER_PIXEL;

/// Render a short byte string for error messages: printable ASCII as `b"..."`,
/// anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Byte length of a `width x height` RGBA image, or `None` when
/// `width * height * 4` does not fit in `usize`.
///
/// Computed in `u64` first, so 32-bit targets still reject instead of wrapping.
#[inline]
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as u64)
        .checked_mul(height as u64)?
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|n| usize::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_len_small_and_empty() {
        assert_eq!(rgba_len(10, 10), Some(400));
        assert_eq!(rgba_len(0, 4096), Some(0));
        assert_eq!(rgba_len(4096, 0), Some(0));
    }

    #[test]
    fn rgba_len_handles_65536_squared() {
        // 2^16 * 2^16 * 4 = 2^34, larger than u32
        let n = rgba_len(1 << 16, 1 << 16);
        if usize::BITS >= 64 {
            assert_eq!(n, Some(1usize << 34));
        } else {
            assert_eq!(n, None);
        }
    }

    #[test]
    fn rgba_len_overflows_u64() {
        assert_eq!(rgba_len(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn fmt_bytes_printable_and_binary() {
        assert_eq!(fmt_bytes(b"RGBA"), "b\"RGBA\"");
        assert_eq!(fmt_bytes(&[0x00, 0xff, 0x10, 0x01]), "0x00ff1001");
    }
}
