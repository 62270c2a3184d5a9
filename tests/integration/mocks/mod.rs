pub mod cloudinary_mock;
pub mod relay_mock;

pub use cloudinary_mock::{listing_body, setup_listing_mock, setup_status_mock};
pub use relay_mock::setup_relay_mock;
