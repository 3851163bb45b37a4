use crate::channel::{ArtworkId, ChannelId};
use thiserror::Error;

/// Errors surfaced by explicit gallery mutations.
///
/// The frame loop itself never fails: bad data is clamped or replaced with
/// neutral values and logged instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("channel {0} is already registered")]
    DuplicateChannel(ChannelId),
    #[error("no channel {0}")]
    UnknownChannel(ChannelId),
    #[error("layout has no region for artwork '{0}'")]
    MissingRegion(ArtworkId),
    #[error("unknown evaluator '{0}'")]
    UnknownEvaluator(String),
    #[error("gallery has been destroyed")]
    Destroyed,
}

pub type Result<T> = std::result::Result<T, GalleryError>;
