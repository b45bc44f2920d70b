// Payload decompressor suite: pass-through for raw bodies, gzip for
// compressed ones, and distinguishable failures for corrupt streams.

mod common;

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use rgba_core::compression::{create_decompressor, decompress_payload, PayloadCodec};
    use rgba_core::DecodeError;

    use crate::common::{frames_payload, gzip, sample_frames};

    #[test]
    fn raw_is_borrowed_unchanged() {
        let body = frames_payload(&sample_frames());
        match decompress_payload(PayloadCodec::Raw, &body).unwrap() {
            Cow::Borrowed(b) => assert!(std::ptr::eq(b, &body[..])),
            Cow::Owned(_) => panic!("raw payload must not be copied"),
        }
        assert!(create_decompressor(PayloadCodec::Raw).is_none());
    }

    #[test]
    fn gzip_roundtrip() {
        let body = frames_payload(&sample_frames());
        let blob = gzip(&body);
        let out = decompress_payload(PayloadCodec::Gzip, &blob).unwrap();
        assert_eq!(&out[..], &body[..]);
    }

    #[test]
    fn concatenated_members_are_joined() {
        let mut blob = gzip(b"first ");
        blob.extend_from_slice(&gzip(b"second"));
        let out = decompress_payload(PayloadCodec::Gzip, &blob).unwrap();
        assert_eq!(&out[..], b"first second");
    }

    #[test]
    fn empty_gzip_body_is_empty_payload() {
        let out = decompress_payload(PayloadCodec::Gzip, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn not_gzip_fails() {
        let err = decompress_payload(PayloadCodec::Gzip, b"definitely not a gzip stream").unwrap_err();
        assert!(matches!(err, DecodeError::DecompressionFailed { .. }));
    }

    #[test]
    fn truncated_gzip_fails() {
        let blob = gzip(&[0xAB; 4096]);
        let cut = &blob[..blob.len() / 2];
        assert!(matches!(
            decompress_payload(PayloadCodec::Gzip, cut),
            Err(DecodeError::DecompressionFailed { .. })
        ));
    }

    #[test]
    fn crc_mismatch_fails() {
        let mut blob = gzip(b"some frame bytes that will be checksummed");
        // footer is CRC32 (4) + ISIZE (4)
        let crc_at = blob.len() - 8;
        blob[crc_at] ^= 0xFF;
        assert!(matches!(
            decompress_payload(PayloadCodec::Gzip, &blob),
            Err(DecodeError::DecompressionFailed { .. })
        ));
    }

    #[test]
    fn codec_names() {
        assert_eq!(PayloadCodec::Raw.to_string(), "raw");
        assert_eq!(PayloadCodec::Gzip.name(), "gzip");
    }
}
