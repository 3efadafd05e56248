#![no_main]

use libfuzzer_sys::fuzz_target;
use symcodec::{Codec, CodecConfig, EncodedBlock};

fuzz_target!(|data: &[u8]| {
    let Ok(block) = serde_json::from_slice::<EncodedBlock>(data) else {
        return;
    };

    // Decoding may fail on invalid blocks - that's OK
    // We're looking for panics/crashes, not errors
    if let Ok(codec) = Codec::new(block.kind(), &CodecConfig::default()) {
        let _ = codec.decompress(&block);
    }
});
