//! Strip the background from a single signature scan.
//!
//! Usage:
//! ```sh
//! cargo run --example extract_signature -- scan.jpg signature.png
//! ```

use std::env;
use std::process;

use signature_extract::{ExtractOptions, SignatureExtractor};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input> <output>", args[0]);
        process::exit(1);
    }

    let input = &args[1];
    let output = &args[2];

    let extractor = SignatureExtractor::new(ExtractOptions::default());
    match extractor.process_file(input.as_ref(), output.as_ref()) {
        Ok(summary) => println!(
            "Done: kept {} of {} pixels",
            summary.retained,
            u64::from(summary.width) * u64::from(summary.height)
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
