use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

pub const MIN_CAMERAS: u32 = 1;
pub const MAX_CAMERAS: u32 = 5;
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 7;

/// Event category used to pick the tier surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    BirthdayParty,
    PreWedding,
    /// Anything not listed above, including free-text "Other" events
    Other,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Wedding,
        EventType::BirthdayParty,
        EventType::PreWedding,
        EventType::Other,
    ];

    /// Resolve a display label typed or picked in the UI.
    ///
    /// Never fails: unknown labels such as "Festival" land in [`EventType::Other`].
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "wedding" => Self::Wedding,
            "birthdayparty" => Self::BirthdayParty,
            "prewedding" => Self::PreWedding,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::BirthdayParty => "Birthday Party",
            Self::PreWedding => "Pre-wedding",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for EventType {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStyle {
    Cinematic,
    Traditional,
    Both,
}

impl VideoStyle {
    pub const ALL: [VideoStyle; 3] = [VideoStyle::Cinematic, VideoStyle::Traditional, VideoStyle::Both];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cinematic => "Cinematic",
            Self::Traditional => "Traditional",
            Self::Both => "Both",
        }
    }
}

impl FromStr for VideoStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cinematic" => Ok(Self::Cinematic),
            "traditional" => Ok(Self::Traditional),
            "both" => Ok(Self::Both),
            other => Err(AppError::InvalidPackage(format!(
                "unknown video style '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for VideoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Printed album size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlbumSheets {
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "40")]
    Forty,
    #[serde(rename = "50")]
    Fifty,
}

impl AlbumSheets {
    pub const ALL: [AlbumSheets; 4] = [
        AlbumSheets::Twenty,
        AlbumSheets::Thirty,
        AlbumSheets::Forty,
        AlbumSheets::Fifty,
    ];

    pub fn sheets(&self) -> u32 {
        match self {
            Self::Twenty => 20,
            Self::Thirty => 30,
            Self::Forty => 40,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for AlbumSheets {
    type Error = AppError;

    fn try_from(sheets: u32) -> Result<Self, Self::Error> {
        match sheets {
            20 => Ok(Self::Twenty),
            30 => Ok(Self::Thirty),
            40 => Ok(Self::Forty),
            50 => Ok(Self::Fifty),
            other => Err(AppError::InvalidPackage(format!(
                "album sheets must be 20, 30, 40 or 50, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for AlbumSheets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sheets", self.sheets())
    }
}

/// Custom package chosen in the package builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageConfig {
    event_type: EventType,
    camera_count: u32,
    day_count: u32,
    video_style: VideoStyle,
    album_sheets: AlbumSheets,
}

impl PackageConfig {
    /// Build a package, rejecting camera/day counts outside their ranges
    pub fn new(
        event_type: EventType,
        camera_count: u32,
        day_count: u32,
        video_style: VideoStyle,
        album_sheets: AlbumSheets,
    ) -> Result<Self, AppError> {
        if !(MIN_CAMERAS..=MAX_CAMERAS).contains(&camera_count) {
            return Err(AppError::InvalidPackage(format!(
                "camera_count {} not in {}..={}",
                camera_count, MIN_CAMERAS, MAX_CAMERAS
            )));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&day_count) {
            return Err(AppError::InvalidPackage(format!(
                "day_count {} not in {}..={}",
                day_count, MIN_DAYS, MAX_DAYS
            )));
        }

        Ok(Self {
            event_type,
            camera_count,
            day_count,
            video_style,
            album_sheets,
        })
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn camera_count(&self) -> u32 {
        self.camera_count
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn video_style(&self) -> VideoStyle {
        self.video_style
    }

    pub fn album_sheets(&self) -> AlbumSheets {
        self.album_sheets
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            event_type: EventType::Wedding,
            camera_count: MIN_CAMERAS,
            day_count: MIN_DAYS,
            video_style: VideoStyle::Cinematic,
            album_sheets: AlbumSheets::Twenty,
        }
    }
}

/// Price breakdown for a package, in whole currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: u32,
    pub event_surcharge: u32,
    pub camera_surcharge: u32,
    pub day_surcharge: u32,
    pub video_surcharge: u32,
    pub album_surcharge: u32,
    pub total: u32,
}

impl PriceBreakdown {
    /// Calculate total from components, saturating at `u32::MAX`
    pub fn calculate_total(&mut self) {
        self.total = [
            self.event_surcharge,
            self.camera_surcharge,
            self.day_surcharge,
            self.video_surcharge,
            self.album_surcharge,
        ]
        .into_iter()
        .fold(self.base, u32::saturating_add);
    }
}
