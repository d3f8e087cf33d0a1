//! CPU framebuffer (RGBA8) with a few fill helpers.

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    /// `None` for a zero-sized surface.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Some(Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
        })
    }

    /// Reallocates for a new surface size; contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        self.color_buffer = vec![self.background_color; (width * height) as usize];
        true
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_background_color(&mut self, c: Color) { self.background_color = c; }

    /// Mixes `color` over the existing pixel with opacity `alpha` (0..1).
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color, alpha: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let idx = (y * self.width + x) as usize;
        let dst = self.color_buffer[idx];
        let mix = |s: u8, d: u8| -> u8 { ((s as f32) * a + (d as f32) * (1.0 - a)).round().clamp(0.0, 255.0) as u8 };
        self.color_buffer[idx] = Color::new(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b), 255);
    }

    /// Fills a rectangle given in float screen coordinates, clipped to the
    /// surface. Edges round to the nearest pixel boundary.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x0 = x.round().max(0.0) as u32;
        let y0 = y.round().max(0.0) as u32;
        let x1 = (x + w).round().clamp(0.0, self.width as f32) as u32;
        let y1 = (y + h).round().clamp(0.0, self.height as f32) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel_color(px, py, color);
            }
        }
    }

    /// Alpha-blended disc centred on (`cx`, `cy`).
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let x0 = (cx - radius).floor().max(0.0) as u32;
        let y0 = (cy - radius).floor().max(0.0) as u32;
        let x1 = (cx + radius).ceil().clamp(0.0, self.width as f32) as u32;
        let y1 = (cy + radius).ceil().clamp(0.0, self.height as f32) as u32;
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(px, py, color, alpha);
                }
            }
        }
    }

    /// Raw RGBA8 bytes, row-major, for texture upload.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        // SAFETY: Color is repr(C) with four u8 fields, so a slice of it is a
        // valid, aligned byte slice of 4 * len bytes.
        unsafe { std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_has_no_surface() {
        assert!(Framebuffer::new(0, 10).is_none());
        assert!(Framebuffer::new(10, 0).is_none());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.fill_rect(-2.0, 2.0, 10.0, 10.0, Color::WHITE);
        assert_eq!(fb.get_pixel(0, 1), Color::BLACK);
        assert_eq!(fb.get_pixel(0, 2), Color::WHITE);
        assert_eq!(fb.get_pixel(3, 3), Color::WHITE);
    }

    #[test]
    fn test_fill_rect_rounds_edges() {
        let mut fb = Framebuffer::new(6, 1).unwrap();
        fb.fill_rect(1.4, 0.0, 2.2, 1.0, Color::WHITE);
        assert_eq!(fb.get_pixel(0, 0), Color::BLACK);
        assert_eq!(fb.get_pixel(1, 0), Color::WHITE);
        assert_eq!(fb.get_pixel(3, 0), Color::WHITE);
        assert_eq!(fb.get_pixel(4, 0), Color::BLACK);
    }

    #[test]
    fn test_blend_half() {
        let mut fb = Framebuffer::new(1, 1).unwrap();
        fb.blend_pixel(0, 0, Color::rgb(200, 100, 0), 0.5);
        assert_eq!(fb.get_pixel(0, 0), Color::rgb(100, 50, 0));
    }

    #[test]
    fn test_resize_clears() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.fill_rect(0.0, 0.0, 2.0, 2.0, Color::WHITE);
        assert!(fb.resize(3, 5));
        assert_eq!(fb.color_buffer.len(), 15);
        assert!(fb.color_buffer.iter().all(|c| *c == Color::BLACK));
        assert!(!fb.resize(0, 5));
        assert_eq!(fb.width, 3);
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let mut fb = Framebuffer::new(2, 1).unwrap();
        fb.set_pixel_color(1, 0, Color::new(1, 2, 3, 4));
        assert_eq!(fb.as_rgba_bytes(), &[0, 0, 0, 255, 1, 2, 3, 4]);
    }

    #[test]
    fn test_circle_covers_center_only() {
        let mut fb = Framebuffer::new(9, 9).unwrap();
        fb.fill_circle(4.5, 4.5, 2.0, Color::WHITE, 1.0);
        assert_eq!(fb.get_pixel(4, 4), Color::WHITE);
        assert_eq!(fb.get_pixel(0, 0), Color::BLACK);
        assert_eq!(fb.get_pixel(8, 4), Color::BLACK);
    }
}
