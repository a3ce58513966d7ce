//! Property-based tests for the PCM -> WAV pipeline using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p voxforge-tests --test proptest_properties
//! ```

use proptest::prelude::*;

use voxforge_audio::wav::{
    decode_wav, read_wav, sample_to_i16, WavFormat, WavHeader, HEADER_SIZE,
};
use voxforge_audio::{decode_base64, encode_wav, interpret_pcm16, AudioBuffer};
use voxforge_tests::fixtures::pcm16_from_samples;

// ============================================================================
// 1. Output Length
// ============================================================================

fn buffer_strategy() -> impl Strategy<Value = AudioBuffer> {
    (1u16..=6, 0usize..200, 8000u32..=96000).prop_flat_map(|(channels, frames, rate)| {
        prop::collection::vec(
            prop::collection::vec(-1.5f32..1.5, frames),
            usize::from(channels),
        )
        .prop_map(move |data| AudioBuffer::from_channels(data, rate).unwrap())
    })
}

proptest! {
    /// WAV length is always the header plus two bytes per sample.
    #[test]
    fn wav_length_invariant(buffer in buffer_strategy()) {
        let wav = encode_wav(&buffer);
        let expected = HEADER_SIZE
            + buffer.len() * usize::from(buffer.number_of_channels()) * 2;
        prop_assert_eq!(wav.len(), expected);

        let view = read_wav(&wav).unwrap();
        prop_assert_eq!(view.frame_count(), buffer.len());
        prop_assert_eq!(view.format.sample_rate, buffer.sample_rate());
    }

    /// Trailing bytes that do not fill a frame are dropped.
    #[test]
    fn partial_frames_are_truncated(
        bytes in prop::collection::vec(any::<u8>(), 0..512),
        channels in 1u16..=8,
    ) {
        let buffer = interpret_pcm16(&bytes, 24000, channels).unwrap();
        let frame = usize::from(channels) * 2;
        prop_assert_eq!(buffer.len(), bytes.len() / frame);
    }
}

// ============================================================================
// 2. Sample Conversion
// ============================================================================

proptest! {
    /// Out-of-range and non-finite floats never panic and stay in range.
    #[test]
    fn conversion_clamps(sample in any::<f32>()) {
        let value = sample_to_i16(sample);
        if sample.is_nan() {
            prop_assert_eq!(value, 0);
        } else if sample >= 1.0 {
            prop_assert_eq!(value, i16::MAX);
        } else if sample <= -1.0 {
            prop_assert_eq!(value, i16::MIN);
        }
    }

    /// Non-positive samples come back byte-exact.
    #[test]
    fn non_positive_samples_are_exact(samples in prop::collection::vec(i16::MIN..=0, 1..256)) {
        let pcm = pcm16_from_samples(&samples);
        let wav = encode_wav(&interpret_pcm16(&pcm, 24000, 1).unwrap());
        prop_assert_eq!(&wav[HEADER_SIZE..], pcm.as_slice());
    }

    /// Positive samples come back exactly one step lower.
    #[test]
    fn positive_samples_lose_one_step(sample in 1i16..=i16::MAX) {
        let pcm = pcm16_from_samples(&[sample]);
        let wav = encode_wav(&interpret_pcm16(&pcm, 24000, 1).unwrap());
        let (_, decoded) = decode_wav(&wav).unwrap();
        prop_assert_eq!(decoded, vec![sample - 1]);
    }

    /// Float samples survive encode and decode within two quantization steps.
    #[test]
    fn float_roundtrip_is_bounded(samples in prop::collection::vec(-1.0f32..=1.0, 1..256)) {
        let buffer = AudioBuffer::mono(samples.clone(), 24000).unwrap();
        let (_, decoded) = decode_wav(&encode_wav(&buffer)).unwrap();
        for (original, value) in samples.iter().zip(decoded) {
            let restored = f32::from(value) / 32768.0;
            prop_assert!((original - restored).abs() <= 2.0 / 32768.0);
        }
    }
}

// ============================================================================
// 3. Robustness
// ============================================================================

proptest! {
    /// Arbitrary text never panics the base64 decoder.
    #[test]
    fn decode_never_panics(s in "\\PC{0,200}") {
        let _ = decode_base64(&s);
    }

    /// Arbitrary bytes never panic the WAV reader.
    #[test]
    fn read_wav_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Ok(view) = read_wav(&bytes) {
            let _ = view.frame_count();
            let _ = view.duration_seconds();
        }
    }

    /// Arbitrary `fmt ` fields either fail to parse or describe a usable format.
    #[test]
    fn crafted_fmt_fields_never_panic(
        channels in any::<u16>(),
        rate in any::<u32>(),
        bits in any::<u16>(),
    ) {
        let mut wav = WavHeader::for_frames(WavFormat::mono(24000), 4).to_bytes().to_vec();
        wav.extend_from_slice(&[0u8; 8]);
        wav[22..24].copy_from_slice(&channels.to_le_bytes());
        wav[24..28].copy_from_slice(&rate.to_le_bytes());
        wav[34..36].copy_from_slice(&bits.to_le_bytes());

        if let Ok(view) = read_wav(&wav) {
            prop_assert!(view.format.validate().is_ok());
            prop_assert_eq!(view.frame_count(), 8 / (usize::from(channels) * 2));
            prop_assert!(view.duration_seconds().is_finite());
        }
    }

    /// Any layout the constructor accepts can be encoded.
    #[test]
    fn accepted_layouts_encode(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        channels in any::<u16>(),
        rate in any::<u32>(),
    ) {
        if let Ok(buffer) = interpret_pcm16(&bytes, rate, channels) {
            let wav = encode_wav(&buffer);
            let frame = usize::from(channels) * 2;
            prop_assert_eq!(wav.len(), HEADER_SIZE + bytes.len() / frame * frame);
            prop_assert!(read_wav(&wav).is_ok());
        }
    }

    /// A valid file with arbitrary bytes appended after the data chunk still parses.
    #[test]
    fn trailing_chunks_are_tolerated(tail in prop::collection::vec(any::<u8>(), 0..64)) {
        let pcm = pcm16_from_samples(&[0, -1, -2, -3]);
        let mut wav = encode_wav(&interpret_pcm16(&pcm, 24000, 1).unwrap());
        wav.extend_from_slice(&tail);
        let view = read_wav(&wav).unwrap();
        prop_assert_eq!(view.data, pcm.as_slice());
    }
}
