#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_pif::zune_core::bytestream::ZCursor;

    let mut decoder = zune_pif::PifDecoder::new(ZCursor::new(data));
    if decoder.decode().is_ok() {
        if let Some(metadata) = decoder.metadata() {
            let _ = metadata.to_string();
        }
    }
});
