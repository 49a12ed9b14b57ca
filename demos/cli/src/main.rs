use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use journey_content::{authored_journey, parse_journey_str};
use journey_core::{compute_layout, decorative_path, ConfigOverrides, JourneyConfig};

#[derive(Parser, Debug)]
#[command(
    name = "journey-cli",
    about = "In bố cục timeline (top/height từng giai đoạn) và đường cong trang trí."
)]
struct Args {
    /// File JSON journey; bỏ trống để dùng nội dung soạn sẵn.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File JSON ghi đè cấu hình (card_height, section_spacing, band_size, ...).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// In thêm chuỗi path SVG.
    #[arg(long)]
    path: bool,
}

fn read_file(path: &PathBuf) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Không đọc được file {path:?}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let journey = match &args.input {
        Some(path) => parse_journey_str(&read_file(path)?)
            .with_context(|| format!("Journey không hợp lệ trong {path:?}"))?,
        None => authored_journey(),
    };

    let config = match &args.config {
        Some(path) => {
            let overrides: ConfigOverrides = serde_json::from_str(&read_file(path)?)
                .with_context(|| format!("Cấu hình không hợp lệ trong {path:?}"))?;
            JourneyConfig::from(overrides)
        }
        None => JourneyConfig::default(),
    };
    config.validate()?;

    let layout = compute_layout(&journey, &config);

    println!("{:>3}  {:>6}  {:<16}  {:>7}  {:>7}", "#", "year", "location", "top", "height");
    for slot in &layout.periods {
        let period = &journey.periods[slot.index];
        let location = journey
            .period_location(slot.index)
            .map(|location| location.label())
            .unwrap_or("-");
        println!(
            "{:>3}  {:>6}  {:<16}  {:>7}  {:>7}",
            slot.index, period.year, location, slot.top, slot.height
        );
    }
    println!("Total height: {}", layout.total_height);

    if args.path {
        println!(
            "{}",
            decorative_path(layout.total_height, config.band_size, &config.path)
        );
    }

    Ok(())
}
