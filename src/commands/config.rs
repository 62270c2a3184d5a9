use anyhow::Result;
use colored::Colorize;
use studiofolio::config::Config;
use studiofolio::logging::SensitiveValue;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with relay identifiers masked
pub fn show(cfg: &Config) -> Result<()> {
    let sanitized = sanitize_secrets(cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; print a summary
pub fn validate(cfg: &Config) -> Result<()> {
    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  {}: {} ({})",
        "Cloud".cyan(),
        cfg.cloudinary.cloud_name,
        cfg.cloudinary.base_url
    );
    println!("  {}: {}", "Main album".cyan(), cfg.cloudinary.default_folder);
    println!("  {}: {}", "Featured".cyan(), cfg.cloudinary.featured_folder);
    println!(
        "  {}: {}",
        "Inquiry relay".cyan(),
        if cfg.relay.is_configured() {
            "configured".green()
        } else {
            "not configured".red()
        }
    );
    println!(
        "  {}: {}",
        "Tariff".cyan(),
        if cfg.pricing.is_some() { "custom" } else { "standard" }
    );
    println!("  {}: {}", "Fallback videos".cyan(), cfg.fallback_videos.len());

    info!("Configuration validation successful");
    Ok(())
}

/// Mask relay identifiers for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.relay.service_id = SensitiveValue::new(&cfg.relay.service_id).to_string();
    sanitized.relay.template_id = SensitiveValue::new(&cfg.relay.template_id).to_string();
    sanitized.relay.public_key = SensitiveValue::new(&cfg.relay.public_key).to_string();
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_secrets_masks_relay_ids() {
        let mut cfg = Config::default();
        cfg.relay.public_key = "pk_live_0123456789".to_string();
        cfg.relay.service_id = "svc".to_string();

        let sanitized = sanitize_secrets(&cfg);
        assert_eq!(sanitized.relay.public_key, "pk_l***");
        assert_eq!(sanitized.relay.service_id, "***");
        assert_eq!(sanitized.cloudinary.cloud_name, cfg.cloudinary.cloud_name);
    }
}
