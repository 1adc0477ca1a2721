/// The colors cycled through by the debug visualization of collision boxes.
///
/// In order: red, green, blue, yellow, magenta, cyan, orange, purple.
pub const DEBUG_PALETTE: [[f32; 3]; 8] = [
    [1.0, 0.3, 0.3],
    [0.3, 1.0, 0.3],
    [0.3, 0.3, 1.0],
    [1.0, 1.0, 0.3],
    [1.0, 0.3, 1.0],
    [0.3, 1.0, 1.0],
    [1.0, 0.6, 0.3],
    [0.6, 0.3, 1.0],
];

/// The color of the aggregate envelope, when it is displayed instead of the boxes.
pub const FALLBACK_DEBUG_COLOR: [f32; 3] = [0.0, 0.5, 1.0];

/// The debug color of the `index`-th collision box.
///
/// Colors only depend on the position of the box in the decomposition, and wrap
/// around after eight boxes.
#[inline]
pub fn debug_color(index: usize) -> [f32; 3] {
    DEBUG_PALETTE[index % DEBUG_PALETTE.len()]
}

#[cfg(test)]
mod test {
    use super::{debug_color, DEBUG_PALETTE};

    #[test]
    fn palette_wraps_around() {
        assert_eq!(debug_color(0), [1.0, 0.3, 0.3]);
        assert_eq!(debug_color(7), [0.6, 0.3, 1.0]);
        for i in 0..DEBUG_PALETTE.len() {
            assert_eq!(debug_color(i + 8), debug_color(i));
            assert_eq!(debug_color(i + 80), DEBUG_PALETTE[i]);
        }
    }
}
