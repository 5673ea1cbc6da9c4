use std::env;
use std::fs;

use anyhow::Context;

// Import from the library
use lasview::parsers::{Las, Parseable};
use lasview::state::DEFAULT_LAS_PATH;

fn main() -> anyhow::Result<()> {
    // Get file path from command line or use the bundled default
    let args: Vec<String> = env::args().collect();
    let path = if args.len() > 1 {
        args[1].as_str()
    } else {
        DEFAULT_LAS_PATH
    };

    println!("Reading file: {}", path);
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    println!("File size: {} bytes", contents.len());

    let well = Las
        .parse(&contents)
        .with_context(|| format!("Failed to parse {}", path))?;

    println!("\n=== Well ===");
    println!("Name: {}", well.header.display_name());
    if let Some(company) = &well.header.company {
        println!("Company: {}", company);
    }
    if let Some(field) = &well.header.field {
        println!("Field: {}", field);
    }
    if let Some(date) = &well.header.log_date {
        println!("Log date: {}", date);
    }

    println!("\n=== Location ===");
    println!(
        "County: {} | State: {}",
        well.location.county.as_deref().unwrap_or("-"),
        well.location.state.as_deref().unwrap_or("-"),
    );
    match well.location.position {
        Some(position) => println!(
            "Position: {:.5}, {:.5}",
            position.latitude, position.longitude
        ),
        None => println!("Position: not available"),
    }

    println!("\n=== Curves ===");
    for (i, curve) in well.curves.iter().enumerate() {
        let unit = if curve.unit.is_empty() {
            String::new()
        } else {
            format!(" [{}]", curve.unit)
        };
        println!(
            "  {:2}. {} ({}){} - {} samples, {} valid",
            i + 1,
            curve.mnemonic,
            curve.kind.describe(),
            unit,
            curve.samples.len(),
            curve.valid_count(),
        );
    }

    if let Some((start, stop)) = well.depth_range() {
        println!("\nDepth range: {:.2} to {:.2}", start, stop);
    }

    println!("\n=== Sample Data (first 5 rows) ===");
    let header: Vec<String> = well
        .curves
        .iter()
        .map(|c| format!("{:>10}", c.mnemonic))
        .collect();
    println!("  {}", header.join(" | "));

    let rows = well.sample_count().min(5);
    for row in 0..rows {
        let values: Vec<String> = well
            .curves
            .iter()
            .map(|c| match c.samples.get(row) {
                Some(v) if !v.is_nan() => format!("{:>10.4}", v),
                _ => format!("{:>10}", "null"),
            })
            .collect();
        println!("  {}", values.join(" | "));
    }

    Ok(())
}
