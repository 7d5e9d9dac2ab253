//! Drawn fallback icon
//!
//! Minimal icon themes may not ship `weather-clear-night` or
//! `weather-clear`. The tray then also publishes a filled disc as a pixmap,
//! amber while the filter is on and white while it is off.

/// Edge length of the drawn icon in pixels
pub const ICON_SIZE: i32 = 32;

/// Transparent margin around the disc
const MARGIN: i32 = 4;

/// Draw a filled disc of `rgb` as a `ksni` pixmap.
///
/// `ksni` expects ARGB32 in network byte order: `[A, R, G, B]` per pixel.
pub fn disc_icon(rgb: [u8; 3]) -> ksni::Icon {
    ksni::Icon {
        width: ICON_SIZE,
        height: ICON_SIZE,
        data: disc_pixels(ICON_SIZE, rgb),
    }
}

fn disc_pixels(size: i32, [r, g, b]: [u8; 3]) -> Vec<u8> {
    // Work in doubled coordinates so pixel centers stay integral
    let diameter = 2 * (size - 2 * MARGIN);
    let radius_sq = (diameter / 2) * (diameter / 2);

    let mut pixels = Vec::with_capacity((size * size * 4).unsigned_abs() as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = 2 * x + 1 - size;
            let dy = 2 * y + 1 - size;
            if dx * dx + dy * dy <= radius_sq {
                pixels.extend_from_slice(&[0xFF, r, g, b]);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(icon: &ksni::Icon, x: i32, y: i32) -> &[u8] {
        let start = ((y * icon.width + x) * 4).unsigned_abs() as usize;
        &icon.data[start..start + 4]
    }

    #[test]
    fn test_disc_dimensions() {
        let icon = disc_icon([0xFF, 0xCC, 0x00]);
        assert_eq!(icon.width, ICON_SIZE);
        assert_eq!(icon.height, ICON_SIZE);
        assert_eq!(icon.data.len(), (ICON_SIZE * ICON_SIZE * 4).unsigned_abs() as usize);
    }

    #[test]
    fn test_disc_center_is_opaque_color() {
        let icon = disc_icon([0xFF, 0xCC, 0x00]);
        assert_eq!(pixel(&icon, 16, 16), &[0xFF, 0xFF, 0xCC, 0x00]);
        assert_eq!(pixel(&icon, MARGIN, 16), &[0xFF, 0xFF, 0xCC, 0x00]);
    }

    #[test]
    fn test_disc_corners_and_margin_are_transparent() {
        let icon = disc_icon([0xFF, 0xFF, 0xFF]);
        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31), (MARGIN - 1, 16), (16, 2)] {
            assert_eq!(pixel(&icon, x, y)[0], 0, "pixel ({x}, {y}) should be transparent");
        }
    }
}
