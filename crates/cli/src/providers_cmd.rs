//! Lists providers and whether each has a usable API key.

use anyhow::Result;

use mindsum_config::Settings;
use mindsum_core::ProviderKind;

pub fn run() -> Result<()> {
    let settings = Settings::load()?;

    for kind in ProviderKind::ALL {
        let vendor = settings.vendor(kind);
        let key = match &vendor.api_key {
            Some(key) if !key.trim().is_empty() => "key configured",
            _ => "no key",
        };
        let selected = if kind == settings.provider { " (default)" } else { "" };
        println!(
            "{} [{}] - {}, model {}{}",
            kind.display_name(),
            kind,
            key,
            vendor.model,
            selected
        );
    }

    Ok(())
}
