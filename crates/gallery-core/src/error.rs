use thiserror::Error;

/// Errors surfaced by gallery configuration and item lookups.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GalleryError {
    #[error("ease must be in (0, 1], got {0}")]
    InvalidEase(f32),
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("focal distance must be positive, got {0}")]
    InvalidFocalDistance(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSensitivity { name: &'static str, value: f32 },
    #[error("unknown scroll mode `{0}` (expected `driven` or `autoplay`)")]
    UnknownScrollMode(String),
    #[error("unknown wrap axis `{0}` (expected `vertical` or `horizontal`)")]
    UnknownWrapAxis(String),
    #[error("gallery item {index} out of range ({len} items)")]
    ItemOutOfRange { index: usize, len: usize },
}
