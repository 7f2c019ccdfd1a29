//! UI Components
//!
//! Software-rendered widgets drawn into the ARGB framebuffer.

pub mod field;
pub mod font;
pub mod panel;
pub mod preview;
pub mod report_card;

pub use panel::{Layout, Panel, PanelAction};

use ck_color::Color;

/// Pixel rectangle in buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x as i32
            && y >= self.y as i32
            && (x as i64) < (self.x + self.width) as i64
            && (y as i64) < (self.y + self.height) as i64
    }
}

/// UI palette (ARGB format)
pub mod colors {
    pub const WINDOW_BG: u32 = 0xFF1A1A1A;
    pub const INPUT_BG: u32 = 0xFF0D0D0D;
    pub const BORDER: u32 = 0xFF404040;
    pub const BORDER_FOCUS: u32 = 0xFF4A9EFF;
    pub const TEXT: u32 = 0xFFE0E0E0;
    pub const TEXT_DIM: u32 = 0xFF808080;
    pub const BUTTON_BG: u32 = 0xFF2D2D2D;
    pub const PASS_BG: u32 = 0xFF2E7D32;
    pub const FAIL_BG: u32 = 0xFFC62828;
}

/// Pack a color into the 0xAARRGGBB framebuffer format.
pub fn argb(color: Color) -> u32 {
    0xFF00_0000 | ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Fill a rectangle, clipped to the buffer.
pub fn fill_rect(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    rect: Rect,
    color: u32,
) {
    for dy in 0..rect.height {
        for dx in 0..rect.width {
            let px = rect.x + dx;
            let py = rect.y + dy;
            if px < buffer_width && py < buffer_height {
                buffer[py * buffer_width + px] = color;
            }
        }
    }
}

/// Draw a 1px rectangle outline.
pub fn stroke_rect(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    rect: Rect,
    color: u32,
) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    fill_rect(buffer, buffer_width, buffer_height, Rect::new(rect.x, rect.y, rect.width, 1), color);
    fill_rect(
        buffer,
        buffer_width,
        buffer_height,
        Rect::new(rect.x, rect.y + rect.height - 1, rect.width, 1),
        color,
    );
    fill_rect(buffer, buffer_width, buffer_height, Rect::new(rect.x, rect.y, 1, rect.height), color);
    fill_rect(
        buffer,
        buffer_width,
        buffer_height,
        Rect::new(rect.x + rect.width - 1, rect.y, 1, rect.height),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 10, 20, 10);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(29, 19));
        assert!(!rect.contains(30, 10));
        assert!(!rect.contains(10, 20));
        assert!(!rect.contains(-1, -1));
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(argb(Color::rgb(0xAC, 0xC8, 0xE5)), 0xFFACC8E5);
        assert_eq!(argb(Color::BLACK), 0xFF000000);
        assert_eq!(argb(Color::WHITE), 0xFFFFFFFF);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = vec![0u32; 4 * 4];
        fill_rect(&mut buffer, 4, 4, Rect::new(2, 2, 10, 10), 0xFFFFFFFF);
        assert_eq!(buffer[2 * 4 + 2], 0xFFFFFFFF);
        assert_eq!(buffer[0], 0);
        assert_eq!(buffer.iter().filter(|&&p| p != 0).count(), 4);
    }
}
