use anyhow::Result;
use colored::Colorize;
use studiofolio::config::Config;
use studiofolio::inquiry::{BookingInquiry, InquiryRelay};
use studiofolio::pricing::EventType;

use crate::cli::InquireArgs;

/// Execute the inquire command
pub async fn execute(args: &InquireArgs, cfg: &Config) -> Result<()> {
    let inquiry = BookingInquiry {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        event_type: EventType::from_label(&args.event),
        event_date: args.date,
        message: args.message.clone(),
        quote: None,
    };

    // Fail on bad input before complaining about relay setup
    inquiry.validate()?;

    println!("{}", "Sending inquiry...".yellow());
    let relay = InquiryRelay::new(cfg.relay.clone())?;
    relay.submit(&inquiry).await?;

    println!("{}", "✓ Inquiry sent. The studio will get back to you soon.".green());
    Ok(())
}
