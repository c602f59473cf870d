//! Backing surface sizing

use crate::LayoutResult;

/// Whole-pixel size of a canvas backing store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Floor a resolved layout to whole pixels, never below 1x1
    pub fn from_layout(layout: &LayoutResult) -> Self {
        Self {
            width: floor_px(layout.width),
            height: floor_px(layout.height),
        }
    }
}

fn floor_px(value: f64) -> u32 {
    if value.is_finite() {
        (value.floor() as u32).max(1)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layout_floors() {
        let layout = LayoutResult { width: 1422.9, height: 800.0, top: 0.0, left: -511.45 };
        assert_eq!(SurfaceSize::from_layout(&layout), SurfaceSize::new(1422, 800));
    }

    #[test]
    fn test_from_layout_degenerate() {
        let layout = LayoutResult { width: 0.0, height: f64::NAN, top: 0.0, left: 0.0 };
        assert_eq!(SurfaceSize::from_layout(&layout), SurfaceSize::new(1, 1));
    }
}
