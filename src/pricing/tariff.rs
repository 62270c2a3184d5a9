use crate::error::AppError;
use crate::pricing::models::{AlbumSheets, EventType, VideoStyle, MAX_CAMERAS, MAX_DAYS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lookup tables for the additive tariff.
///
/// Each axis of a package contributes an independent delta. The standard
/// tariff is [`Tariff::default`]; a studio can override it from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub base: u32,
    pub per_extra_camera: u32,
    pub per_extra_day: u32,
    pub event: BTreeMap<EventType, u32>,
    pub video: BTreeMap<VideoStyle, u32>,
    pub album: BTreeMap<AlbumSheets, u32>,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base: 15_000,
            per_extra_camera: 5_000,
            per_extra_day: 10_000,
            event: BTreeMap::from([
                (EventType::Wedding, 25_000),
                (EventType::BirthdayParty, 8_000),
                (EventType::PreWedding, 15_000),
                (EventType::Other, 5_000),
            ]),
            video: BTreeMap::from([
                (VideoStyle::Cinematic, 15_000),
                (VideoStyle::Traditional, 8_000),
                (VideoStyle::Both, 20_000),
            ]),
            album: BTreeMap::from([
                (AlbumSheets::Twenty, 5_000),
                (AlbumSheets::Thirty, 7_500),
                (AlbumSheets::Forty, 10_000),
                (AlbumSheets::Fifty, 12_500),
            ]),
        }
    }
}

impl Tariff {
    /// Tier surcharge for an event; missing tiers use the `Other` tier
    pub fn event_surcharge(&self, event: EventType) -> u32 {
        self.event
            .get(&event)
            .or_else(|| self.event.get(&EventType::Other))
            .copied()
            .unwrap_or(0)
    }

    pub fn video_surcharge(&self, style: VideoStyle) -> u32 {
        self.video.get(&style).copied().unwrap_or(0)
    }

    pub fn album_surcharge(&self, sheets: AlbumSheets) -> u32 {
        self.album.get(&sheets).copied().unwrap_or(0)
    }

    /// Total of the most expensive package, or `None` if it overflows `u32`
    pub fn max_total(&self) -> Option<u32> {
        let max_of = |values: Vec<u32>| values.into_iter().max().unwrap_or(0);

        let cameras = (MAX_CAMERAS - 1).checked_mul(self.per_extra_camera)?;
        let days = (MAX_DAYS - 1).checked_mul(self.per_extra_day)?;

        self.base
            .checked_add(max_of(self.event.values().copied().collect()))?
            .checked_add(cameras)?
            .checked_add(days)?
            .checked_add(max_of(self.video.values().copied().collect()))?
            .checked_add(max_of(self.album.values().copied().collect()))
    }

    /// Check that every table is complete, album surcharges grow with size
    /// and the largest package still fits in a `u32`
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(missing) = EventType::ALL.iter().find(|e| !self.event.contains_key(*e)) {
            return Err(AppError::ConfigError(format!(
                "tariff has no surcharge for event type '{}'",
                missing
            )));
        }

        if let Some(missing) = VideoStyle::ALL.iter().find(|v| !self.video.contains_key(*v)) {
            return Err(AppError::ConfigError(format!(
                "tariff has no surcharge for video style '{}'",
                missing
            )));
        }

        if let Some(missing) = AlbumSheets::ALL.iter().find(|a| !self.album.contains_key(*a)) {
            return Err(AppError::ConfigError(format!(
                "tariff has no surcharge for album of {}",
                missing
            )));
        }

        // BTreeMap iterates in sheet order
        let surcharges: Vec<u32> = self.album.values().copied().collect();
        if surcharges.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(AppError::ConfigError(
                "album surcharges must not decrease with sheet count".to_string(),
            ));
        }

        if self.max_total().is_none() {
            return Err(AppError::ConfigError(format!(
                "tariff total for {} cameras over {} days exceeds {}",
                MAX_CAMERAS,
                MAX_DAYS,
                u32::MAX
            )));
        }

        Ok(())
    }
}
