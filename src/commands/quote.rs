use anyhow::Result;
use colored::Colorize;
use studiofolio::config::Config;
use studiofolio::pricing::{AlbumSheets, EventType, PackageConfig, PriceEstimator, VideoStyle};
use tracing::info;

use crate::cli::QuoteArgs;

/// Execute the quote command
pub fn execute(args: &QuoteArgs, cfg: &Config) -> Result<()> {
    let package = PackageConfig::new(
        EventType::from_label(&args.event),
        args.cameras,
        args.days,
        args.video.parse::<VideoStyle>()?,
        AlbumSheets::try_from(args.sheets)?,
    )?;

    let estimator = cfg
        .pricing
        .clone()
        .map(PriceEstimator::new)
        .unwrap_or_default();
    let breakdown = estimator.breakdown(&package);

    studiofolio::metrics::record_quote(package.event_type().label());
    info!(event = %package.event_type(), total = breakdown.total, "Quote produced");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("{}", "Package Estimate:".bold());
    println!("  {}: {}", "Event".cyan(), package.event_type());
    println!("  {}: {}", "Cameras".cyan(), package.camera_count());
    println!("  {}: {}", "Days".cyan(), package.day_count());
    println!("  {}: {}", "Video".cyan(), package.video_style());
    println!("  {}: {}", "Album".cyan(), package.album_sheets());
    println!();

    let lines = [
        ("Base", breakdown.base),
        ("Event tier", breakdown.event_surcharge),
        ("Extra cameras", breakdown.camera_surcharge),
        ("Extra days", breakdown.day_surcharge),
        ("Video", breakdown.video_surcharge),
        ("Album", breakdown.album_surcharge),
    ];
    for (label, amount) in lines {
        println!("  {:<14} ₹{:>9}", label, format_amount(amount));
    }
    println!(
        "  {:<14} {}",
        "Total".bold(),
        format!("₹{:>9}", format_amount(breakdown.total)).green().bold()
    );

    Ok(())
}

/// Indian digit grouping: 102500 -> 1,02,500
fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
