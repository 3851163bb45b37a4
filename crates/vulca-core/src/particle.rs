use crate::color::Rgb;
use crate::constants::DEFAULT_TRAIL_LENGTH;
use glam::Vec2;
use smallvec::SmallVec;

/// Fixed-capacity FIFO of recent positions, oldest first.
///
/// Backed by an inline ring so the common trail length never touches the heap.
#[derive(Clone, Debug)]
pub struct Trail {
    points: SmallVec<[Vec2; 16]>,
    capacity: usize,
    head: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: SmallVec::new(),
            capacity,
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, evicting the oldest once full.
    pub fn push(&mut self, p: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() < self.capacity {
            self.points.push(p);
        } else {
            self.points[self.head] = p;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }

    pub fn newest(&self) -> Option<Vec2> {
        if self.points.is_empty() {
            None
        } else if self.head == 0 {
            self.points.last().copied()
        } else {
            Some(self.points[self.head - 1])
        }
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

/// Sprite outline, packed into the instance buffer as its discriminant.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParticleShape {
    #[default]
    Circle = 0,
    Square = 1,
    Triangle = 2,
    Star = 3,
}

/// One point sprite. Coordinates are local to the owning channel's region.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Size before hover scaling.
    pub base_size: f32,
    pub alpha: f32,
    pub color: Rgb,
    pub shape: ParticleShape,
    /// Normalized remaining life, `1 → 0`.
    pub lifespan: f32,
    /// Lifespan lost per reference frame.
    pub decay: f32,
    /// Per-particle offset into periodic motion patterns, radians.
    pub phase: f32,
    pub layer: u8,
    pub trail: Trail,
}

impl Particle {
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 1.0,
            base_size: 1.0,
            alpha: 1.0,
            color: Rgb::default(),
            shape: ParticleShape::Circle,
            lifespan: 1.0,
            decay: 0.0,
            phase: 0.0,
            layer: 0,
            trail: Trail::new(trail_capacity),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifespan <= 0.0
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}
