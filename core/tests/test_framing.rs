// Frame record parser suite: correctness, zero-copy slicing, and the
// early-stop policy for short payloads.

mod common;

#[cfg(test)]
mod tests {
    use rgba_core::framing::{parse_frames, EarlyStop, FrameReader};

    use crate::common::{frame_record, frames_payload, sample_frames, TestFrame};

// # ✅ 1. Complete payloads

    #[test]
    fn parses_all_declared_frames() {
        let frames = sample_frames();
        let payload = frames_payload(&frames);

        let set = parse_frames(&payload, frames.len() as u32);
        assert!(set.is_complete());
        assert_eq!(set.len(), frames.len());
        assert_eq!(set.trailing_bytes, 0);

        for (i, (got, want)) in set.iter().zip(&frames).enumerate() {
            assert_eq!(got.index, i as u32);
            assert_eq!(got.timestamp_ms, want.timestamp_ms);
            assert_eq!(got.width, want.width);
            assert_eq!(got.height, want.height);
            assert_eq!(got.pixels, &want.pixels[..]);
        }
    }

    #[test]
    fn pixels_borrow_the_payload() {
        let frames = vec![TestFrame::patterned(5, 2, 2)];
        let payload = frames_payload(&frames);
        let set = parse_frames(&payload, 1);
        let px = set.frames[0].pixels;
        // the slice starts right after the 16-byte record header
        assert!(std::ptr::eq(px.as_ptr(), payload[16..].as_ptr()));
    }

    #[test]
    fn zero_sized_frames_are_recorded() {
        let frames = vec![
            TestFrame::patterned(1, 0, 0),
            TestFrame::patterned(2, 0, 7),
            TestFrame::patterned(3, 9, 0),
        ];
        let payload = frames_payload(&frames);
        assert_eq!(payload.len(), 48);

        let set = parse_frames(&payload, 3);
        assert!(set.is_complete());
        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|f| f.is_empty()));
        assert_eq!(set.frames[1].height, 7);
        assert_eq!(set.frames[2].timestamp_ms, 3);
    }

    #[test]
    fn negative_timestamps_survive() {
        let frames = vec![TestFrame::patterned(-42, 1, 1)];
        let payload = frames_payload(&frames);
        let set = parse_frames(&payload, 1);
        assert_eq!(set.frames[0].timestamp_ms, -42);
    }

    #[test]
    fn stops_at_declared_count_and_reports_leftover() {
        let frames = sample_frames();
        let payload = frames_payload(&frames);
        let set = parse_frames(&payload, 2);
        assert!(set.is_complete());
        assert_eq!(set.len(), 2);
        let used: usize = frames[..2].iter().map(|f| 16 + f.pixels.len()).sum();
        assert_eq!(set.trailing_bytes, payload.len() - used);
    }

    #[test]
    fn zero_declared_reads_nothing() {
        let payload = frames_payload(&sample_frames());
        let set = parse_frames(&payload, 0);
        assert!(set.is_empty());
        assert!(set.is_complete());
    }

// # ⚠️ 2. Early stop (partial success)

    #[test]
    fn three_declared_two_present() {
        let frames = vec![TestFrame::patterned(10, 3, 3), TestFrame::patterned(20, 1, 2)];
        let payload = frames_payload(&frames);

        let set = parse_frames(&payload, 3);
        assert_eq!(set.len(), 2);
        assert_eq!(set.declared, 3);
        assert_eq!(set.early_stop, Some(EarlyStop::RecordHeader { index: 2, available: 0 }));
    }

    #[test]
    fn partial_record_header_stops() {
        let mut payload = frames_payload(&[TestFrame::patterned(1, 1, 1)]);
        payload.extend_from_slice(&[0u8; 15]);

        let set = parse_frames(&payload, 2);
        assert_eq!(set.len(), 1);
        assert_eq!(set.early_stop, Some(EarlyStop::RecordHeader { index: 1, available: 15 }));
    }

    #[test]
    fn short_pixel_data_stops() {
        let good = TestFrame::patterned(1, 2, 2);
        let bad = TestFrame::patterned(2, 4, 4);
        let mut payload = frame_record(&good);
        let bad_record = frame_record(&bad);
        payload.extend_from_slice(&bad_record[..bad_record.len() - 1]);

        let set = parse_frames(&payload, 2);
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.early_stop,
            Some(EarlyStop::PixelData { index: 1, width: 4, height: 4, needed: 64, available: 63 })
        );
    }

    #[test]
    fn huge_dimensions_stop_without_panicking() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&7i64.to_le_bytes());
        payload.extend_from_slice(&u32::MAX.to_le_bytes());
        payload.extend_from_slice(&u32::MAX.to_le_bytes());
        payload.extend_from_slice(&[0u8; 32]);

        let set = parse_frames(&payload, 1);
        assert!(set.is_empty());
        assert_eq!(
            set.early_stop,
            Some(EarlyStop::PixelSizeOverflow { index: 0, width: u32::MAX, height: u32::MAX })
        );
    }

    #[test]
    fn large_but_representable_dimensions_are_truncation() {
        // 65536 x 65536 needs 16 GiB; the payload is tiny
        let mut payload = Vec::new();
        payload.extend_from_slice(&0i64.to_le_bytes());
        payload.extend_from_slice(&65_536u32.to_le_bytes());
        payload.extend_from_slice(&65_536u32.to_le_bytes());

        let set = parse_frames(&payload, 1);
        assert!(set.is_empty());
        match set.early_stop {
            Some(EarlyStop::PixelData { index: 0, available: 0, .. }) => {}
            Some(EarlyStop::PixelSizeOverflow { index: 0, .. }) if usize::BITS < 64 => {}
            other => panic!("unexpected stop: {:?}", other),
        }
    }

    #[test]
    fn empty_payload_with_declared_frames() {
        let set = parse_frames(&[], 5);
        assert!(set.is_empty());
        assert_eq!(set.early_stop.map(|s| s.index()), Some(0));
    }

    #[test]
    fn early_stop_display_is_descriptive() {
        let s = EarlyStop::PixelData { index: 3, width: 2, height: 2, needed: 16, available: 4 };
        assert_eq!(s.to_string(), "frame 3: 2x2 pixels need 16 bytes, 4 available");
    }

// # 🔁 3. Lazy reader

    #[test]
    fn reader_is_lazy_and_fused() {
        let frames = sample_frames();
        let payload = frames_payload(&frames);
        let mut reader = FrameReader::new(&payload, 10);

        assert_eq!(reader.size_hint(), (0, Some(10)));
        let first = reader.next().unwrap();
        assert_eq!(first.timestamp_ms, frames[0].timestamp_ms);
        assert_eq!(reader.decoded(), 1);

        let rest: Vec<_> = reader.by_ref().collect();
        assert_eq!(rest.len(), frames.len() - 1);
        assert!(reader.early_stop().is_some());
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }
}
