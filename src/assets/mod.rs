//! Asset discovery module
//!
//! Turns the flat listing of an input directory into typed tracks.

pub mod classifier;

pub use classifier::{AssetClassifier, ClassifiedAssets};
