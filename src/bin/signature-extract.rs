use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use signature_extract::{
    default_output_path, run, ExtractConfig, ExtractOptions, DEFAULT_INPUT, DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(
    name = "signature-extract",
    about = "Strip the background from a scanned signature, keeping black and blue ink",
    version,
    after_help = "Simple usage: signature-extract  (reads sign2.png, writes sign2_output.png)\n\n\
                  The output keeps ink pixels verbatim and makes everything else transparent,\n\
                  so it must be written in a format with an alpha channel (e.g. PNG)."
)]
struct Cli {
    /// Scanned signature image
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output image (default: sign2_output.png, or {name}_output.png when INPUT is given)
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("signature_extract=warn")),
        )
        .init();

    let cli = Cli::parse();

    let output = cli.output.unwrap_or_else(|| {
        if cli.input.as_os_str() == DEFAULT_INPUT {
            PathBuf::from(DEFAULT_OUTPUT)
        } else {
            default_output_path(&cli.input)
        }
    });

    let config = ExtractConfig {
        input: cli.input,
        output,
        options: ExtractOptions::default(),
    };

    match run(&config) {
        Ok(_) => {
            println!(
                "Background removed, signature saved to {}",
                config.output.display()
            );
        }
        Err(e) => {
            // Exit status stays 0; the message is the only failure signal.
            eprintln!("Error processing the image: {e}");
        }
    }
}
