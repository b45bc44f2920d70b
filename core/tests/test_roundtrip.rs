// Property suite: any well-formed container decodes back to its frames,
// compressed or not, and any truncation decodes to a prefix of them.

mod common;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use rgba_core::prelude::*;

    use crate::common::{container, container_declaring, TestFrame};

    fn frame_strategy() -> impl Strategy<Value = TestFrame> {
        (any::<i64>(), 0u32..6, 0u32..6).prop_flat_map(|(ts, w, h)| {
            let len = (w * h * 4) as usize;
            proptest::collection::vec(any::<u8>(), len).prop_map(move |pixels| TestFrame {
                timestamp_ms: ts,
                width: w,
                height: h,
                pixels,
            })
        })
    }

    fn assert_frames_match(got: &[OwnedFrame], want: &[TestFrame]) {
        assert_eq!(got.len(), want.len());
        for (i, (g, w)) in got.iter().zip(want).enumerate() {
            assert_eq!(g.index as usize, i);
            assert_eq!(g.timestamp_ms, w.timestamp_ms);
            assert_eq!((g.width, g.height), (w.width, w.height));
            assert_eq!(g.pixels, w.pixels);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn container_roundtrip(
            frames in proptest::collection::vec(frame_strategy(), 0..8),
            compressed in any::<bool>(),
        ) {
            let bytes = container(2, compressed, &frames);
            let out = decode_container(&bytes, &DecodeOptions::strict()).unwrap();

            prop_assert_eq!(out.header.frame_count as usize, frames.len());
            prop_assert!(out.early_stop.is_none());
            assert_frames_match(&out.frames, &frames);
        }

        #[test]
        fn truncation_yields_prefix(
            frames in proptest::collection::vec(frame_strategy(), 1..6),
            cut in 0usize..256,
        ) {
            let full = container(2, false, &frames);
            let end = full.len().saturating_sub(cut).max(19);
            let out = decode_container(&full[..end], &DecodeOptions::default()).unwrap();

            let n = out.frames.len();
            prop_assert!(n <= frames.len());
            assert_frames_match(&out.frames, &frames[..n]);
            prop_assert_eq!(out.early_stop.is_none(), n == frames.len());
        }

        #[test]
        fn over_declared_counts_stop_after_last_frame(
            frames in proptest::collection::vec(frame_strategy(), 0..5),
            extra in 1u32..4,
            compressed in any::<bool>(),
        ) {
            let declared = frames.len() as u32 + extra;
            let bytes = container_declaring(2, compressed, declared, &frames);
            let out = decode_container(&bytes, &DecodeOptions::default()).unwrap();

            assert_frames_match(&out.frames, &frames);
            prop_assert_eq!(
                out.early_stop,
                Some(EarlyStop::RecordHeader { index: frames.len() as u32, available: 0 })
            );
        }
    }
}
