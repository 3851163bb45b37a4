//! Evaluator identities.
//!
//! The set of evaluators is closed, so identity lookup is an array index rather
//! than a string-keyed map. Keys are kept for parsing exhibition content.

use crate::color::Rgb;
use crate::error::GalleryError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Evaluator {
    SuShi,
    GuoXi,
    JohnRuskin,
    MamaZola,
    ElenaPetrova,
    AiEthicsReviewer,
}

impl Evaluator {
    pub const ALL: [Evaluator; 6] = [
        Evaluator::SuShi,
        Evaluator::GuoXi,
        Evaluator::JohnRuskin,
        Evaluator::MamaZola,
        Evaluator::ElenaPetrova,
        Evaluator::AiEthicsReviewer,
    ];

    /// Stable ASCII key.
    pub fn key(self) -> &'static str {
        match self {
            Evaluator::SuShi => "su-shi",
            Evaluator::GuoXi => "guo-xi",
            Evaluator::JohnRuskin => "john-ruskin",
            Evaluator::MamaZola => "mama-zola",
            Evaluator::ElenaPetrova => "elena-petrova",
            Evaluator::AiEthicsReviewer => "ai-ethics-reviewer",
        }
    }

    /// Name as it appears in the exhibition content.
    pub fn display_name(self) -> &'static str {
        match self {
            Evaluator::SuShi => "苏轼",
            Evaluator::GuoXi => "郭熙",
            Evaluator::JohnRuskin => "约翰罗斯金",
            Evaluator::MamaZola => "佐拉妈妈",
            Evaluator::ElenaPetrova => "埃琳娜佩特洛娃",
            Evaluator::AiEthicsReviewer => "AI伦理评审员",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Evaluator {
    type Err = GalleryError;

    /// Accepts either the ASCII key or the exhibition display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Evaluator::ALL
            .into_iter()
            .find(|e| e.key() == s || e.display_name() == s)
            .ok_or_else(|| GalleryError::UnknownEvaluator(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionPatternKind {
    /// Flowing oscillating wave, like ink moving along a brush stroke.
    Wave,
    /// Layered recession toward a vanishing point.
    PerspectiveDepth,
    /// Ascending spiral.
    Spiral,
    /// Synchronized circular orbit around the region center.
    Orbit,
    /// Lattice snapping.
    GridSnap,
    /// Self-similar recursive rotation.
    Fractal,
}

impl MotionPatternKind {
    pub fn name(self) -> &'static str {
        match self {
            MotionPatternKind::Wave => "brush_stroke",
            MotionPatternKind::PerspectiveDepth => "perspective_depth",
            MotionPatternKind::Spiral => "ascending_narrative",
            MotionPatternKind::Orbit => "circular_synchrony",
            MotionPatternKind::GridSnap => "geometric_structure",
            MotionPatternKind::Fractal => "algorithmic_fractal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Monochromatic,
    Analogous,
    Complementary,
    Warm,
    Formal,
    Digital,
}

/// Per-evaluator visual constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualIdentity {
    pub evaluator: Evaluator,
    pub base_hue: f32,
    pub primary: Rgb,
    pub accent: Rgb,
    pub glow: Rgb,
    pub scheme: ColorScheme,
    pub motion: MotionPatternKind,
}

static IDENTITIES: [VisualIdentity; 6] = [
    VisualIdentity {
        evaluator: Evaluator::SuShi,
        base_hue: 0.0,
        primary: Rgb::from_hex(0x2F2E2C),
        accent: Rgb::from_hex(0x8B7D6B),
        glow: Rgb::from_hex(0xD4D2CE),
        scheme: ColorScheme::Monochromatic,
        motion: MotionPatternKind::Wave,
    },
    VisualIdentity {
        evaluator: Evaluator::GuoXi,
        base_hue: 120.0,
        primary: Rgb::from_hex(0x2D5016),
        accent: Rgb::from_hex(0x6B8E23),
        glow: Rgb::from_hex(0xB4D96F),
        scheme: ColorScheme::Analogous,
        motion: MotionPatternKind::PerspectiveDepth,
    },
    VisualIdentity {
        evaluator: Evaluator::JohnRuskin,
        base_hue: 280.0,
        primary: Rgb::from_hex(0x6B4C9A),
        accent: Rgb::from_hex(0xC77DFF),
        glow: Rgb::from_hex(0xE0AAFF),
        scheme: ColorScheme::Complementary,
        motion: MotionPatternKind::Spiral,
    },
    VisualIdentity {
        evaluator: Evaluator::MamaZola,
        base_hue: 20.0,
        primary: Rgb::from_hex(0x8B6F47),
        accent: Rgb::from_hex(0xD2691E),
        glow: Rgb::from_hex(0xF4A460),
        scheme: ColorScheme::Warm,
        motion: MotionPatternKind::Orbit,
    },
    VisualIdentity {
        evaluator: Evaluator::ElenaPetrova,
        base_hue: 0.0,
        primary: Rgb::from_hex(0xB22234),
        accent: Rgb::from_hex(0xD9534F),
        glow: Rgb::from_hex(0xF5C6C6),
        scheme: ColorScheme::Formal,
        motion: MotionPatternKind::GridSnap,
    },
    VisualIdentity {
        evaluator: Evaluator::AiEthicsReviewer,
        base_hue: 200.0,
        primary: Rgb::from_hex(0x0066CC),
        accent: Rgb::from_hex(0x00CCFF),
        glow: Rgb::from_hex(0x00FFFF),
        scheme: ColorScheme::Digital,
        motion: MotionPatternKind::Fractal,
    },
];

/// Read-only evaluator → identity table.
#[derive(Clone, Copy, Debug)]
pub struct IdentityTable {
    entries: &'static [VisualIdentity; 6],
}

impl IdentityTable {
    pub fn builtin() -> Self {
        Self {
            entries: &IDENTITIES,
        }
    }

    #[inline]
    pub fn get(&self, evaluator: Evaluator) -> &'static VisualIdentity {
        let entries: &'static [VisualIdentity; 6] = self.entries;
        &entries[evaluator.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static VisualIdentity> {
        let entries: &'static [VisualIdentity; 6] = self.entries;
        entries.iter()
    }
}

impl Default for IdentityTable {
    fn default() -> Self {
        Self::builtin()
    }
}
