#![no_main]

use libfuzzer_sys::fuzz_target;
use symcodec::{compress, decompress, CodecConfig, CodecKind};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the window size, the rest is the symbol sequence
    let window_size = data[0] as usize + 1;
    let symbols = &data[1..];

    for kind in CodecKind::all() {
        let config = match kind {
            CodecKind::Lz77 => CodecConfig::with_window_size(window_size),
            _ => CodecConfig::default(),
        };
        let block = compress(kind.name(), symbols, &config).unwrap();
        let decoded = decompress(kind.name(), &block, &config).unwrap();
        assert_eq!(decoded, symbols);
    }
});
