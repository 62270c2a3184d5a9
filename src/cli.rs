use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "studiofolio", version, about = "Studio package quotes, gallery and bookings")]
pub struct Cli {
    /// Configuration file path (defaults to ./studiofolio.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate the price of a custom package
    Quote(QuoteArgs),

    /// Browse the remote gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryCommands,
    },

    /// Send a booking inquiry through the email relay
    Inquire(InquireArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Event type (Wedding, Birthday Party, Pre-wedding, or anything else)
    #[arg(short, long, default_value = "Wedding")]
    pub event: String,

    /// Number of cameras (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub cameras: u32,

    /// Number of days (1-7)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=7))]
    pub days: u32,

    /// Video style: cinematic, traditional or both
    #[arg(long, default_value = "cinematic")]
    pub video: String,

    /// Album sheets: 20, 30, 40 or 50
    #[arg(long, default_value_t = 20)]
    pub sheets: u32,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GalleryCommands {
    /// List albums
    Albums,

    /// List photos in a folder (defaults to the main album)
    Photos {
        folder: Option<String>,

        /// Print full-resolution URLs instead of thumbnails
        #[arg(long)]
        full: bool,
    },

    /// Featured photos, falling back to the main album
    Featured,

    /// List videos in a folder, falling back to the showreel
    Videos { folder: String },
}

#[derive(Args, Debug, Clone)]
pub struct InquireArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, default_value = "Other")]
    pub event: String,

    /// Event date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with secrets masked)
    Show,

    /// Validate configuration file
    Validate,
}
