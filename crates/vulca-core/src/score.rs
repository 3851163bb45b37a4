//! RPAIT score vectors.
//!
//! Every channel carries one [`ScoreVector`]. Components are clamped to
//! `[0, 10]` when the vector is built, so downstream mapping never has to
//! re-validate its input.

use crate::constants::{SCORE_MAX, SCORE_MIDPOINT, SCORE_MIN};

/// One axis of the RPAIT vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Representation,
    Philosophy,
    Aesthetics,
    Interpretation,
    Technique,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Representation,
        Dimension::Philosophy,
        Dimension::Aesthetics,
        Dimension::Interpretation,
        Dimension::Technique,
    ];

    pub fn letter(self) -> char {
        match self {
            Dimension::Representation => 'R',
            Dimension::Philosophy => 'P',
            Dimension::Aesthetics => 'A',
            Dimension::Interpretation => 'I',
            Dimension::Technique => 'T',
        }
    }
}

/// Representation, Philosophy, Aesthetics, Interpretation, Technique.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreVector {
    r: f32,
    p: f32,
    a: f32,
    i: f32,
    t: f32,
}

#[inline]
fn clamp_component(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(SCORE_MIN, SCORE_MAX)
    } else {
        SCORE_MIDPOINT
    }
}

impl ScoreVector {
    /// Build a vector, clamping every component into `[0, 10]`.
    /// Non-finite components fall back to the midpoint.
    pub fn new(r: f32, p: f32, a: f32, i: f32, t: f32) -> Self {
        Self {
            r: clamp_component(r),
            p: clamp_component(p),
            a: clamp_component(a),
            i: clamp_component(i),
            t: clamp_component(t),
        }
    }

    /// Midpoint of the range on every axis. Used when score data is missing.
    pub fn neutral() -> Self {
        Self::new(
            SCORE_MIDPOINT,
            SCORE_MIDPOINT,
            SCORE_MIDPOINT,
            SCORE_MIDPOINT,
            SCORE_MIDPOINT,
        )
    }

    pub fn from_array(v: [f32; 5]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4])
    }

    pub fn to_array(&self) -> [f32; 5] {
        [self.r, self.p, self.a, self.i, self.t]
    }

    #[inline]
    pub fn get(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Representation => self.r,
            Dimension::Philosophy => self.p,
            Dimension::Aesthetics => self.a,
            Dimension::Interpretation => self.i,
            Dimension::Technique => self.t,
        }
    }

    /// Component scaled to `[0, 1]`.
    #[inline]
    pub fn normalized(&self, dim: Dimension) -> f32 {
        self.get(dim) / SCORE_MAX
    }

    pub fn representation(&self) -> f32 {
        self.r
    }
    pub fn philosophy(&self) -> f32 {
        self.p
    }
    pub fn aesthetics(&self) -> f32 {
        self.a
    }
    pub fn interpretation(&self) -> f32 {
        self.i
    }
    pub fn technique(&self) -> f32 {
        self.t
    }

    /// True when every raw value already lies inside the score range.
    pub fn is_in_range(raw: [f32; 5]) -> bool {
        raw.iter()
            .all(|v| v.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(v))
    }

    /// Per-artwork summary: component means rounded to whole points.
    pub fn average<'a, I>(scores: I) -> Option<ScoreVector>
    where
        I: IntoIterator<Item = &'a ScoreVector>,
    {
        let mut sum = [0.0f32; 5];
        let mut count = 0usize;
        for s in scores {
            for (acc, v) in sum.iter_mut().zip(s.to_array()) {
                *acc += v;
            }
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f32;
        Some(Self::from_array(sum.map(|v| (v / n).round())))
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::neutral()
    }
}
