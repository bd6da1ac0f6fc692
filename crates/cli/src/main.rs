use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Generate the branding icon set (favicon, PWA manifest icons, maskable
/// variants, Apple touch icon) from a single source logo
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source logo image
    input: PathBuf,

    /// Output directory for the generated icons
    #[arg(long, default_value = "resources")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    io::generate_icon_set(&args.input, &args.out)?;
    println!("Branding updated in {}", args.out.display());
    Ok(())
}
