use anyhow::Result;

use condense_core::AppConfig;

pub async fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
            return Ok(());
        }
        AppConfig::default().save_to(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    if !path.exists() {
        println!("# (not found, showing defaults)");
    }
    print!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
