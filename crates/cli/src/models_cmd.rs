//! Lists selectable models per provider.

use anyhow::Result;

use mindsum_config::{available_models, Settings};
use mindsum_core::ProviderKind;

pub fn run() -> Result<()> {
    let settings = Settings::load()?;

    for kind in ProviderKind::ALL {
        println!("{} [{}]", kind.display_name(), kind);
        let configured = &settings.vendor(kind).model;
        for model in available_models(kind) {
            let marker = if *model == configured.as_str() { " (selected)" } else { "" };
            println!("  - {model}{marker}");
        }
        println!();
    }

    Ok(())
}
