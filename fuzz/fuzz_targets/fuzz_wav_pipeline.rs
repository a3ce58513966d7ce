#![no_main]

use libfuzzer_sys::fuzz_target;
use voxforge_audio::wav::{read_wav, HEADER_SIZE};
use voxforge_audio::{decode_base64, encode_wav, interpret_pcm16};

fuzz_target!(|data: &[u8]| {
    // Raw bytes as a WAV stream.
    if let Ok(view) = read_wav(data) {
        assert!(view.format.validate().is_ok());
        let _ = view.frame_count();
        let _ = view.duration_seconds();
    }

    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let channels = u16::from(first % 8) + 1;

    // Raw bytes as a PCM16 payload.
    if let Ok(buffer) = interpret_pcm16(rest, 24000, channels) {
        let wav = encode_wav(&buffer);
        let frame = usize::from(channels) * 2;
        assert_eq!(wav.len(), HEADER_SIZE + rest.len() / frame * frame);
        let view = read_wav(&wav).expect("encoded output must parse");
        assert_eq!(view.frame_count(), buffer.len());
    }

    // Raw bytes as base64 text.
    let text = String::from_utf8_lossy(rest);
    if let Ok(pcm) = decode_base64(&text) {
        let _ = interpret_pcm16(&pcm, 24000, channels).map(|b| encode_wav(&b));
    }
});
