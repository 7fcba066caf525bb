use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use tcg_labels::cli::Args;
use tcg_labels::config::Settings;
use tcg_labels::export::write_pirateship_file;
use tcg_labels::parser::{parse_export_filename, read_orders};
use tcg_labels::render::LabelSheetRenderer;
use tcg_labels::select::{select_high_value, select_low_value};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // The export name carries the date and number used for the CSV name
    let export = parse_export_filename(&args.input)?;

    let settings = Settings::load(&args.config)
        .with_context(|| format!("Failed to load config file: {}", args.config.display()))?
        .with_args(&args)
        .with_context(|| "Invalid command-line override")?;

    let orders = read_orders(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    log::info!("Read {} orders from export", orders.len());

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.output_dir.display()
        )
    })?;

    // Carrier import for high-value orders
    let shipments = select_high_value(&orders, settings.value_threshold);
    if shipments.is_empty() {
        log::warn!(
            "No orders at or above ${:.2}; carrier CSV will only have a header",
            settings.value_threshold
        );
    }

    let csv_path = args.csv_output_path(&export.pirateship_file_name());
    write_pirateship_file(&csv_path, &shipments)
        .with_context(|| format!("Failed to write carrier CSV: {}", csv_path.display()))?;

    println!("PirateShip CSV generated: {}", csv_path.display());

    // Label sheet for low-value orders
    let addresses = select_low_value(&orders, settings.value_threshold);
    if addresses.is_empty() {
        match settings.layout.repeat_default.count(0) {
            0 => log::warn!(
                "No orders below ${:.2}; label sheet will be blank",
                settings.value_threshold
            ),
            fillers => log::warn!(
                "No orders below ${:.2}; label sheet will only contain {} filler label(s)",
                settings.value_threshold,
                fillers
            ),
        }
    }

    log::info!(
        "{} high-value and {} low-value orders",
        shipments.len(),
        addresses.len()
    );

    let pdf_data = LabelSheetRenderer::new(settings)
        .render(&addresses)
        .with_context(|| "Failed to generate label PDF")?;

    let pdf_path = args.labels_output_path();
    fs::write(&pdf_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", pdf_path.display()))?;

    println!("Address labels PDF generated: {}", pdf_path.display());

    Ok(())
}
