//! Demo exhibition: four artworks, each reviewed by all six evaluators.

use vulca_core::{ArtworkId, ChannelSpec, Evaluator, ScoreVector};

pub struct Artwork {
    pub id: &'static str,
    pub title: &'static str,
    /// RPAIT per evaluator, in [`Evaluator::ALL`] order.
    pub scores: [[f32; 5]; 6],
}

pub const ARTWORKS: [Artwork; 4] = [
    Artwork {
        id: "artwork_1",
        title: "书法中的光影",
        scores: [
            [7.0, 9.0, 8.0, 8.0, 7.0],
            [8.0, 7.0, 9.0, 7.0, 8.0],
            [6.0, 8.0, 8.0, 9.0, 6.0],
            [7.0, 6.0, 7.0, 8.0, 7.0],
            [9.0, 7.0, 9.0, 6.0, 9.0],
            [7.0, 8.0, 7.0, 8.0, 8.0],
        ],
    },
    Artwork {
        id: "artwork_2",
        title: "机械舞蹈",
        scores: [
            [8.0, 8.0, 7.0, 8.0, 9.0],
            [6.0, 9.0, 8.0, 8.0, 7.0],
            [7.0, 7.0, 6.0, 7.0, 8.0],
            [8.0, 7.0, 8.0, 7.0, 8.0],
            [8.0, 6.0, 7.0, 7.0, 8.0],
            [9.0, 8.0, 8.0, 9.0, 9.0],
        ],
    },
    Artwork {
        id: "artwork_3",
        title: "水墨与数据的对话",
        scores: [
            [9.0, 9.0, 9.0, 8.0, 8.0],
            [9.0, 8.0, 9.0, 8.0, 7.0],
            [8.0, 9.0, 9.0, 8.0, 7.0],
            [7.0, 8.0, 8.0, 9.0, 8.0],
            [8.0, 8.0, 8.0, 8.0, 8.0],
            [8.0, 7.0, 7.0, 7.0, 7.0],
        ],
    },
    Artwork {
        id: "artwork_4",
        title: "光线的诗学",
        scores: [
            [6.0, 9.0, 9.0, 9.0, 6.0],
            [7.0, 8.0, 9.0, 8.0, 6.0],
            [9.0, 9.0, 9.0, 9.0, 8.0],
            [6.0, 7.0, 8.0, 8.0, 6.0],
            [7.0, 8.0, 9.0, 8.0, 7.0],
            [6.0, 7.0, 7.0, 7.0, 6.0],
        ],
    },
];

pub fn artwork_ids() -> Vec<ArtworkId> {
    ARTWORKS.iter().map(|a| ArtworkId::from(a.id)).collect()
}

/// One `ChannelSpec` per (artwork, evaluator). Raw rows outside the score range are
/// reported and passed on, the engine clamps them.
pub fn channel_specs() -> Vec<ChannelSpec> {
    let mut specs = Vec::with_capacity(ARTWORKS.len() * Evaluator::ALL.len());
    for artwork in &ARTWORKS {
        for (evaluator, raw) in Evaluator::ALL.into_iter().zip(artwork.scores) {
            if !ScoreVector::is_in_range(raw) {
                log::warn!("{} / {evaluator}: scores out of range {raw:?}", artwork.id);
            }
            specs.push(ChannelSpec::new(
                artwork.id,
                evaluator,
                ScoreVector::from_array(raw),
            ));
        }
    }
    specs
}

/// Per-artwork consensus across evaluators.
pub fn summary(artwork: &Artwork) -> Option<ScoreVector> {
    let vectors: Vec<ScoreVector> = artwork
        .scores
        .iter()
        .map(|raw| ScoreVector::from_array(*raw))
        .collect();
    ScoreVector::average(&vectors)
}
