//! Score-driven particle gallery engine.
//!
//! Every (artwork, evaluator) pairing gets a [`Channel`] of particles whose
//! look and motion are derived from a five-component RPAIT [`ScoreVector`].
//! A [`Gallery`] steps all channels once per frame and hands the visible ones
//! to a [`Renderer`].

pub mod bounds;
pub mod channel;
pub mod color;
pub mod constants;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod identity;
pub mod interaction;
pub mod layout;
pub mod mapper;
pub mod motion;
pub mod noise;
pub mod particle;
pub mod physics;
pub mod prominence;
pub mod render;
pub mod scheduler;
pub mod score;

pub use bounds::Bounds;
pub use channel::{ArtworkId, Channel, ChannelConfig, ChannelId, ChannelInfo, ChannelSpec};
pub use color::{Hsl, Rgb};
pub use context::GalleryContext;
pub use diagnostics::{FrameDiagnostic, FrameStats};
pub use error::GalleryError;
pub use gallery::{
    Gallery, GalleryConfig, GalleryEvent, GalleryTask, InteractionEvent, InteractionKind,
};
pub use identity::{ColorScheme, Evaluator, IdentityTable, MotionPatternKind, VisualIdentity};
pub use interaction::{
    DragImpulse, InteractionManager, PointerKind, PointerOutcome, PointerSample, RegionAction,
    RegionState,
};
pub use layout::{GridLayout, RegionProvider};
pub use mapper::{
    map_visuals, map_visuals_with, FadeCurve, MapperConfig, Rhythm, ShapeVariety,
    VisualParameters,
};
pub use motion::{MotionDelta, MotionInput};
pub use noise::{NoiseField, PerlinNoise};
pub use particle::{Particle, ParticleShape, Trail};
pub use physics::{attraction_force, CursorState, PhysicsConfig, PhysicsDebugInfo, PhysicsEngine};
pub use prominence::{final_alpha, AutoPlay, AutoPlayConfig, Prominence};
pub use render::{pack_instances, ChannelView, NullRenderer, ParticleInstance, Renderer};
pub use scheduler::{Clock, ManualClock, SystemClock, TaskHandle, TaskScheduler};
pub use score::{Dimension, ScoreVector};
