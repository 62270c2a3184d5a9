use crate::pricing::models::{PackageConfig, PriceBreakdown};
use crate::pricing::tariff::Tariff;

/// Estimator for custom photography packages.
///
/// Pure: no I/O, no clock, no randomness. The same package always yields
/// the same price under the same tariff.
#[derive(Debug, Clone, Default)]
pub struct PriceEstimator {
    tariff: Tariff,
}

impl PriceEstimator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Total price for a package
    pub fn estimate(&self, config: &PackageConfig) -> u32 {
        self.breakdown(config).total
    }

    /// Per-axis contributions plus the total
    pub fn breakdown(&self, config: &PackageConfig) -> PriceBreakdown {
        let tariff = &self.tariff;

        let mut breakdown = PriceBreakdown {
            base: tariff.base,
            event_surcharge: tariff.event_surcharge(config.event_type()),
            camera_surcharge: config
                .camera_count()
                .saturating_sub(1)
                .saturating_mul(tariff.per_extra_camera),
            day_surcharge: config.day_count().saturating_sub(1).saturating_mul(tariff.per_extra_day),
            video_surcharge: tariff.video_surcharge(config.video_style()),
            album_surcharge: tariff.album_surcharge(config.album_sheets()),
            total: 0,
        };

        breakdown.calculate_total();
        breakdown
    }
}
