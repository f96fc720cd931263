// ============================================================================
// Basic Usage Example
// ============================================================================

use number_display::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number Display Example ===\n");

    // Token amounts: precision follows magnitude
    println!("Token amounts (auto precision):");
    let options = FormatOptions::token_amount();
    for value in [0.000000042, 0.123456789, 12.3456, 1500.123456, 2_345_678_901.5] {
        let result = process_number_value(value, &options);
        println!(
            "  {:>22} -> {:<14} formatted={}",
            result.original_value.to_string(),
            result.formatted_value,
            result.is_formatted
        );
    }

    // String inputs from an API, already grouped
    println!("\nAPI strings:");
    for raw in ["123.0", "1,234,567.891", "0.00000042", "n/a"] {
        let result = process_number_value(raw, &options);
        println!("  {:>22} -> {}", raw, result.formatted_value);
    }

    // Processor with a logging formatter and compact output
    let processor = NumberProcessorBuilder::compact()
        .formatter(Arc::new(LoggingFormatter::new(PatternFormatter::new())))
        .build()
        .expect("compact preset is valid");

    println!("\nCompact ({}):", processor.formatter_name());
    for value in [999.0, 15_000.0, 2_500_000.0, 7_100_000_000.0] {
        println!("  {:>22} -> {}", value, processor.process(value));
    }

    // Table cell with unit suffix and hover text
    println!("\n=== Table Cells ===");
    let fiat = NumberProcessorBuilder::fiat()
        .build()
        .expect("fiat preset is valid");
    let cell = NumericDisplay::new().with_prefix("$");
    for value in [1234.5678, 0.004, 42.0] {
        match cell.render(&fiat, value) {
            Some(rendered) => println!(
                "  {:<12} tooltip: {}",
                rendered.text,
                rendered.tooltip.unwrap_or_else(|| "-".to_string())
            ),
            None => println!("  (skipped)"),
        }
    }
}
