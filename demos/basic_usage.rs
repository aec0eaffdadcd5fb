// ============================================================================
// Basic Usage Example
// ============================================================================

use elbonian_numerals::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Elbonian Numerals Example ===\n");

    // Arabic input converts to the minimal Elbonian form
    println!("Converting Arabic input...");
    for input in ["1", "2202", "9300", "9999", "-9999", "0"] {
        let numeral = Converter::new(input).unwrap();
        println!("  {:>6} -> {}", input, numeral.to_elbonian());
    }

    // Elbonian input converts back by summing symbol values
    println!("\nConverting Elbonian input...");
    for input in ["I", "MMCCII", "NNND", "-NNNDDDLLLVVV", "Z"] {
        let numeral = Converter::new(input).unwrap();
        println!("  {:>14} -> {}", input, numeral.to_arabic());
    }

    // Invalid input is rejected at construction
    println!("\nRejecting invalid input...");
    for input in ["9 9", "NNNM", "MMM", "10000", "-"] {
        match Converter::new(input) {
            Ok(numeral) => println!("  {:>6} -> {}", input, numeral),
            Err(error) => println!("  {:>6} -> {}", input, error),
        }
    }
}
