//! Canvas surface
//!
//! The 2D canvas frames are drawn onto when the video element itself is
//! hidden. Backed by a tiny-skia Pixmap.

use tiny_skia::{Color, FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};
use videomaster_layout::SurfaceSize;
use videomaster_media::VideoFrame;

use crate::PlayerError;

/// Opaque canvas surface
pub struct FrameSurface {
    pixmap: Pixmap,
}

impl FrameSurface {
    /// Allocate a surface cleared to black
    pub fn new(size: SurfaceSize) -> Result<Self, PlayerError> {
        let mut pixmap = Pixmap::new(size.width, size.height)
            .ok_or(PlayerError::Surface(size.width, size.height))?;
        pixmap.fill(Color::BLACK);
        Ok(Self { pixmap })
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.pixmap.width(), self.pixmap.height())
    }

    /// Reallocate for a new size. Clears the surface when the size changes.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), PlayerError> {
        if size != self.size() {
            *self = Self::new(size)?;
        }
        Ok(())
    }

    /// Draw a frame stretched over the whole surface
    pub fn draw_frame(&mut self, frame: &VideoFrame) -> Result<(), PlayerError> {
        let source = premultiplied(frame)?;
        let scale_x = self.pixmap.width() as f32 / frame.width() as f32;
        let scale_y = self.pixmap.height() as f32 / frame.height() as f32;

        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };

        self.pixmap.fill(Color::BLACK);
        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            Transform::from_scale(scale_x, scale_y),
            None,
        );
        Ok(())
    }

    /// Get pixel at (x, y) as straight RGBA
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Raw premultiplied RGBA bytes
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }
}

impl std::fmt::Debug for FrameSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

/// Convert a straight-alpha frame to a premultiplied pixmap
fn premultiplied(frame: &VideoFrame) -> Result<Pixmap, PlayerError> {
    let invalid = || PlayerError::Surface(frame.width(), frame.height());

    let mut data = frame.data().to_vec();
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a < 255 {
            px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
            px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
            px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
        }
    }

    let size = IntSize::from_wh(frame.width(), frame.height()).ok_or_else(invalid)?;
    Pixmap::from_vec(data, size).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<[u8; 4]>, expected: [u8; 4]) {
        let actual = actual.expect("pixel in bounds");
        for (a, e) in actual.iter().zip(expected) {
            assert!((*a as i16 - e as i16).abs() <= 1, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_new_surface_is_black() {
        let surface = FrameSurface::new(SurfaceSize::new(8, 4)).unwrap();
        assert_eq!(surface.size(), SurfaceSize::new(8, 4));
        assert_eq!(surface.pixel(7, 3), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(8, 0), None);
    }

    #[test]
    fn test_pixel_past_row_end_is_none() {
        let mut surface = FrameSurface::new(SurfaceSize::new(2, 2)).unwrap();
        surface.draw_frame(&VideoFrame::solid(2, 2, [0, 0, 255, 255]).unwrap()).unwrap();

        assert_close(surface.pixel(1, 1), [0, 0, 255, 255]);
        // (2, 0) would land on (0, 1) if rows wrapped
        assert_eq!(surface.pixel(2, 0), None);
        assert_eq!(surface.pixel(0, 2), None);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(FrameSurface::new(SurfaceSize::new(0, 10)).is_err());
    }

    #[test]
    fn test_draw_frame_scales_to_surface() {
        let mut surface = FrameSurface::new(SurfaceSize::new(64, 36)).unwrap();
        let frame = VideoFrame::solid(16, 9, [200, 40, 10, 255]).unwrap();

        surface.draw_frame(&frame).unwrap();
        assert_close(surface.pixel(32, 18), [200, 40, 10, 255]);
        assert_close(surface.pixel(1, 1), [200, 40, 10, 255]);
    }

    #[test]
    fn test_resize_clears() {
        let mut surface = FrameSurface::new(SurfaceSize::new(4, 4)).unwrap();
        surface.draw_frame(&VideoFrame::solid(2, 2, [255, 255, 255, 255]).unwrap()).unwrap();

        surface.resize(SurfaceSize::new(4, 4)).unwrap();
        assert_close(surface.pixel(2, 2), [255, 255, 255, 255]);

        surface.resize(SurfaceSize::new(6, 3)).unwrap();
        assert_eq!(surface.size(), SurfaceSize::new(6, 3));
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 255]));
    }
}
