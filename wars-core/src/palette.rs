use crate::engine::Rgb;

/// Fixed player palette. Colors are stable and cycle by index.
const PLAYER_PALETTE: [u32; 8] = [
    0xAA1111, // crimson
    0x11AA11, // green
    0x1155CC, // blue
    0xCC9911, // ochre
    0x8811AA, // purple
    0x11AAAA, // teal
    0xCC5511, // rust
    0x555555, // slate
];

pub fn player_color(i: usize) -> Rgb {
    Rgb(PLAYER_PALETTE[i % PLAYER_PALETTE.len()])
}

/// Number of distinct 24-bit colors.
const COLOR_SLOTS: u64 = 0x100_0000;

/// Hit-test color for the territory at `index`.
///
/// Colors count upward from `background + 1` and wrap within 24 bits, so for
/// fewer than `2^24 - 1` territories none of them equals the background.
pub fn pick_color(index: usize, background: Rgb) -> Rgb {
    let bg = (background.0 as u64) % COLOR_SLOTS;
    Rgb(((bg + 1 + index as u64) % COLOR_SLOTS) as u32)
}

/// Inverse of [`pick_color`]; `None` for the background and for colors
/// beyond `count` territories.
pub fn index_for_pick_color(color: Rgb, background: Rgb, count: usize) -> Option<usize> {
    let bg = (background.0 as u64) % COLOR_SLOTS;
    let c = (color.0 as u64) % COLOR_SLOTS;
    let offset = (c + COLOR_SLOTS - bg) % COLOR_SLOTS;
    if offset == 0 {
        return None;
    }
    let idx = (offset - 1) as usize;
    (idx < count).then_some(idx)
}
