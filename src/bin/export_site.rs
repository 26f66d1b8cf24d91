// Static export entry point
//
// Usage: cargo run --bin export_site [OUT_DIR]
// Falls back to SITE_OUT_DIR, then `dist`.

use std::path::PathBuf;

use reisgids::{export_site, registry, Config};

fn main() -> anyhow::Result<()> {
    reisgids::init_tracing();

    let config = Config::from_env();
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or(config.out_dir);

    let report = export_site(registry::global(), &out_dir)?;

    for page in &report.pages {
        println!("{}", page.display());
    }

    Ok(())
}
