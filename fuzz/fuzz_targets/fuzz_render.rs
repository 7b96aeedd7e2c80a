#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simpleicon::{icon_decode, render_with, RenderOptions};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    chunked: bool,
    bits: Vec<bool>,
    set_glyph: char,
    unset_glyph: char,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).max(1);
    let height = (input.height as usize).max(1);
    let version = if input.chunked { 2 } else { 1 };
    let data: String = input.bits.iter().map(|&b| if b { '1' } else { '0' }).collect();

    let text = format!("fuzz;;{version};;{width}x{height};;{data}");
    let icon = match icon_decode(&text) {
        Ok(icon) => icon,
        Err(_) => {
            assert!(data.len() < width * height, "Only short data may fail");
            return;
        }
    };

    let opts = RenderOptions {
        set_glyph: input.set_glyph,
        unset_glyph: input.unset_glyph,
        header: false,
    };
    let rendered = render_with(&icon, &opts);
    assert_eq!(rendered.chars().count(), (width + 1) * height);
    // Both layouts consume exactly the first width * height characters
    assert_eq!(icon.set_pixel_count(), data[..width * height].matches('1').count());
});
