pub mod estimator;
pub mod models;
pub mod tariff;

pub use estimator::PriceEstimator;
pub use models::{AlbumSheets, EventType, PackageConfig, PriceBreakdown, VideoStyle};
pub use tariff::Tariff;
