use crate::constants::MIN_REGION_EXTENT;
use glam::Vec2;

/// Canvas-space rectangle assigned to one artwork.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Degenerate or non-finite extents are raised to [`MIN_REGION_EXTENT`].
    pub fn sanitized(self) -> Self {
        let fix_origin = |v: f32| if v.is_finite() { v } else { 0.0 };
        let fix_extent = |v: f32| {
            if v.is_finite() {
                v.max(MIN_REGION_EXTENT)
            } else {
                MIN_REGION_EXTENT
            }
        };
        Self {
            x: fix_origin(self.x),
            y: fix_origin(self.y),
            w: fix_extent(self.w),
            h: fix_extent(self.h),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.w.is_finite() && self.h.is_finite()) || self.w <= 0.0 || self.h <= 0.0
    }

    /// Canvas point inside the rectangle, left/top edges inclusive.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn to_local(&self, p: Vec2) -> Vec2 {
        p - self.origin()
    }

    pub fn to_canvas(&self, p: Vec2) -> Vec2 {
        p + self.origin()
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center_local(&self) -> Vec2 {
        self.extent() * 0.5
    }
}
