//! Decoded video frames

use crate::MediaError;

/// RGBA8 frame, straight alpha, rows tightly packed
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl VideoFrame {
    /// Wrap raw RGBA bytes
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MediaError> {
        if width == 0 || height == 0 {
            return Err(MediaError::InvalidFrame(format!("empty frame {}x{}", width, height)));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(MediaError::InvalidFrame(format!(
                "{}x{} frame needs {} bytes, got {}",
                width, height, expected, data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Single-color frame
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, MediaError> {
        let pixels = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(pixels * 4).collect();
        Self::from_rgba(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_frame() {
        let frame = VideoFrame::solid(4, 2, [10, 20, 30, 255]).unwrap();
        assert_eq!(frame.data().len(), 32);
        assert_eq!(frame.pixel(3, 1), Some([10, 20, 30, 255]));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn test_rejects_bad_length() {
        assert!(VideoFrame::from_rgba(2, 2, vec![0; 15]).is_err());
        assert!(VideoFrame::from_rgba(0, 2, Vec::new()).is_err());
    }
}
