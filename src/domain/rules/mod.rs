// Business rules - Variant scoring and ordering

use tracing::debug;

use crate::domain::config::ScoringConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::{Score, VariantDescriptor};

/// Scores variant identifiers of the shape `<codec>-<resolution>`
pub struct VariantScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> VariantScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a variant identifier.
    ///
    /// Audio identifiers (`aac-...`) are not ordered and return `None`.
    /// An unknown codec or resolution is an error: a silently mis-scored
    /// variant would reorder the manifest.
    pub fn score(&self, variant_id: &str) -> Result<Option<Score>, DomainError> {
        let mut parts = variant_id.split('-');
        let codec = parts.next().unwrap_or_default();
        let resolution = parts.next().unwrap_or_default();

        if codec == self.config.audio_codec {
            return Ok(None);
        }

        let codec_rank = *self
            .config
            .codec_ranks
            .get(codec)
            .ok_or_else(|| DomainError::UnknownCodec(codec.to_string()))?;

        let resolution_rank = *self
            .config
            .resolution_ranks
            .get(resolution)
            .ok_or_else(|| DomainError::UnknownResolution(resolution.to_string()))?;

        let score = Score::new(codec_rank, resolution_rank);
        debug!("Scored {} as {}", variant_id, score);
        Ok(Some(score))
    }
}

/// Order variants for the base playlist: highest score first.
///
/// The sort is stable so equal scores keep listing order; unscored
/// variants go last.
pub fn order_variants(variants: &[VariantDescriptor]) -> Vec<VariantDescriptor> {
    let mut ordered = variants.to_vec();
    ordered.sort_by(|a, b| b.score.cmp(&a.score));
    ordered
}
