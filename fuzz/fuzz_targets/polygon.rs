#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = linecross::arbitrary::arbtests::polygon_is_sound(&mut Unstructured::new(data));
});
