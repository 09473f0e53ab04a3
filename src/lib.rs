//! Strip the background from scanned signatures.
//!
//! Every pixel of the scan is tested against two reference inks, pure black
//! and pure blue, with a loose per-channel tolerance. Pixels that pass are
//! then checked for nearby ink, and only those with enough ink around them
//! are kept. Everything else becomes fully transparent, so the result can be
//! laid over a document.
//!
//! # Quick Start
//!
//! ```no_run
//! use signature_extract::{ExtractOptions, SignatureExtractor};
//!
//! let extractor = SignatureExtractor::new(ExtractOptions::default());
//! let scan = image::open("signature.jpg").unwrap().to_rgb8();
//! let cleaned = extractor.extract(&scan);
//! cleaned.save("signature.png").unwrap();
//! ```
//!
//! # Files
//!
//! [`run`] performs the whole load, extract, save pipeline from an
//! [`ExtractConfig`]:
//!
//! ```no_run
//! use signature_extract::{run, ExtractConfig};
//!
//! let summary = run(&ExtractConfig::default()).expect("extraction failed");
//! println!("kept {} ink pixels", summary.retained);
//! ```

#![deny(missing_docs)]

pub mod color;
pub mod density;
mod engine;
pub mod error;

pub use engine::{
    default_output_path, load_image, run, save_image, ExtractConfig, ExtractOptions,
    ExtractSummary, SignatureExtractor, DEFAULT_INPUT, DEFAULT_OUTPUT, TRANSPARENT,
};
pub use error::{Error, Result};
