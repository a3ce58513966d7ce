//! Cross-checks encoder output against an independent WAV reader.

use std::io::Cursor;

use voxforge_audio::wav::{decode_wav, WavHeader, HEADER_SIZE};
use voxforge_audio::{encode_wav, interpret_pcm16, AudioBuffer};
use voxforge_tests::fixtures::sine_pcm16;

fn read_with_hound(wav: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let reader = hound::WavReader::new(Cursor::new(wav)).expect("hound should accept the file");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("samples should decode");
    (spec, samples)
}

#[test]
fn hound_reads_mono_output() {
    let pcm = sine_pcm16(2400, 1, 24000, 440.0);
    let buffer = interpret_pcm16(&pcm, 24000, 1).unwrap();
    let wav = encode_wav(&buffer);

    let (spec, samples) = read_with_hound(&wav);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 24000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 2400);

    let (_, ours) = decode_wav(&wav).unwrap();
    assert_eq!(samples, ours);
}

#[test]
fn hound_reads_multichannel_output() {
    for channels in [2u16, 4, 6] {
        let data: Vec<Vec<f32>> = (0..channels)
            .map(|c| (0..100).map(|i| ((i + c as usize) as f32 * 0.05).sin() * 0.7).collect())
            .collect();
        let buffer = AudioBuffer::from_channels(data, 48000).unwrap();
        let wav = encode_wav(&buffer);

        let (spec, samples) = read_with_hound(&wav);
        assert_eq!(spec.channels, channels);
        assert_eq!(spec.sample_rate, 48000);
        assert_eq!(samples.len(), 100 * usize::from(channels));

        // hound yields interleaved samples: frame-major, channel-minor.
        for (i, sample) in samples.iter().enumerate() {
            let frame = i / usize::from(channels);
            let channel = i % usize::from(channels);
            let expected = voxforge_audio::wav::sample_to_i16(buffer.sample(frame, channel).unwrap());
            assert_eq!(*sample, expected);
        }
    }
}

#[test]
fn our_header_matches_hound_writer() {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 24000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let samples: Vec<i16> = vec![0, -1, -32768, 32767, 12, -12];

    let mut hound_bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut hound_bytes), spec).unwrap();
        for &s in &samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    // hound writes a canonical 44-byte header for 16-bit PCM.
    let ours = WavHeader::parse(&hound_bytes).unwrap();
    assert_eq!(ours.format.channels, 2);
    assert_eq!(ours.format.sample_rate, 24000);
    assert_eq!(ours.data_size as usize, samples.len() * 2);
    assert_eq!(&ours.to_bytes()[..], &hound_bytes[..HEADER_SIZE]);
}
