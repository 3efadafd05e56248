#![no_main]

use libfuzzer_sys::fuzz_target;
use symcodec::{HuffmanCodec, SymbolCodec};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Build a valid table from a prefix of the input, then decode the rest
    // as an arbitrary packed stream against it
    let split = (data[0] as usize).min(data.len() - 1) + 1;
    let Ok(mut block) = HuffmanCodec.compress(&data[1..split]) else {
        return;
    };
    block.bytes = data[split..].to_vec();

    let _ = HuffmanCodec.decompress(&block);
});
