//! Artwork regions on the canvas.

use crate::bounds::Bounds;
use crate::channel::ArtworkId;
use glam::Vec2;
use log::{debug, warn};

/// Supplies one rectangle per artwork and answers point queries.
pub trait RegionProvider {
    /// Artworks in layout order.
    fn artworks(&self) -> Vec<ArtworkId>;
    fn bounds_of(&self, artwork: &ArtworkId) -> Option<Bounds>;
    fn region_at(&self, point: Vec2) -> Option<ArtworkId>;
    /// Returns false when the size was rejected and the old regions kept.
    fn resize(&mut self, width: f32, height: f32) -> bool;
    fn size(&self) -> Vec2;
}

/// Near-square grid, filled row by row: `ceil(sqrt(n))` columns.
#[derive(Clone, Debug)]
pub struct GridLayout {
    artworks: Vec<ArtworkId>,
    width: f32,
    height: f32,
    columns: usize,
    rows: usize,
}

impl GridLayout {
    pub fn new(artworks: Vec<ArtworkId>, width: f32, height: f32) -> Self {
        let n = artworks.len().max(1);
        let columns = (n as f32).sqrt().ceil() as usize;
        let rows = n.div_ceil(columns);
        let mut layout = Self {
            artworks,
            width: 1.0,
            height: 1.0,
            columns,
            rows,
        };
        if !layout.resize(width, height) {
            warn!("grid layout created with unusable size {width}x{height}");
        }
        layout
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.width / self.columns as f32,
            self.height / self.rows as f32,
        )
    }

    fn cell_bounds(&self, index: usize) -> Bounds {
        let cell = self.cell_size();
        let col = index % self.columns;
        let row = index / self.columns;
        Bounds::new(col as f32 * cell.x, row as f32 * cell.y, cell.x, cell.y).sanitized()
    }
}

impl RegionProvider for GridLayout {
    fn artworks(&self) -> Vec<ArtworkId> {
        self.artworks.clone()
    }

    fn bounds_of(&self, artwork: &ArtworkId) -> Option<Bounds> {
        self.artworks
            .iter()
            .position(|a| a == artwork)
            .map(|i| self.cell_bounds(i))
    }

    fn region_at(&self, point: Vec2) -> Option<ArtworkId> {
        if !point.is_finite() {
            return None;
        }
        self.artworks
            .iter()
            .enumerate()
            .find(|(i, _)| self.cell_bounds(*i).contains(point))
            .map(|(_, a)| a.clone())
    }

    fn resize(&mut self, width: f32, height: f32) -> bool {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            debug!("ignoring resize to {width}x{height}");
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
