use crate::core::geometry::Rect;
use crate::error::LayoutError;

/// Client viewport, guaranteed to have positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Reject viewports smaller than `min_width` x `min_height`.
    pub fn require(
        &self,
        strategy: &'static str,
        min_width: u32,
        min_height: u32,
    ) -> Result<(), LayoutError> {
        if self.width < min_width || self.height < min_height {
            return Err(LayoutError::ViewportTooSmall {
                strategy,
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use crate::error::LayoutError;

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Viewport::new(0, 24),
            Err(LayoutError::EmptyViewport {
                width: 0,
                height: 24
            })
        );
        assert!(Viewport::new(80, 0).is_err());
    }

    #[test]
    fn require_reports_strategy_and_minimum() {
        let viewport = Viewport::new(8, 4).expect("viewport");
        let error = viewport.require("grid", 7, 6).expect_err("too short");
        assert!(error.to_string().contains("grid"));
        assert!(error.to_string().contains("7x6"));
    }
}
