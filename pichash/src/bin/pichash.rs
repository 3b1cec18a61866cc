use std::path::PathBuf;

use clap::{Args, Parser};
use color_eyre::eyre::{self, Context};
use pichash::{actions, image_source::ImageSource};
use pichash_common::{
    bin_common::init::{init_eyre, init_logger, LevelFilter},
    imghash::HashKind,
};

#[derive(Parser, Debug)]
#[command()]
/// Computes a perceptual hash of an image, or of two images together with the Hamming
/// distance between them.
///
/// Prints `<hash>` for one image and `<hash1> <hash2> <distance>` for two.
struct Cli {
    #[command(flatten)]
    algorithm: Algorithm,

    /// Also log debug information
    #[arg(long, short = 'v')]
    verbose: bool,

    /// A file to additionally write the logs to
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Paths or http(s) URLs of the images
    #[arg(required = true, num_args = 1..=2, value_name = "IMAGE")]
    images: Vec<ImageSource>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Algorithm {
    /// Use the average hash
    #[arg(short = 'a')]
    average: bool,

    /// Use the difference hash
    #[arg(short = 'd')]
    difference: bool,

    /// Use the perception hash
    #[arg(short = 'p')]
    perception: bool,

    /// Use the wavelet hash
    #[arg(short = 'w')]
    wavelet: bool,
}

impl Algorithm {
    fn kind(&self) -> HashKind {
        match self {
            Self { average: true, .. } => HashKind::Average,
            Self {
                difference: true, ..
            } => HashKind::Difference,
            Self {
                perception: true, ..
            } => HashKind::Perception,
            Self { wavelet: true, .. } => HashKind::Wavelet,
            _ => unreachable!("clap requires exactly one algorithm"),
        }
    }
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    init_logger(cli.logfile.as_deref(), level)?;

    log::debug!("CLI arguments: {cli:#?}");

    let kind = cli.algorithm.kind();
    match cli.images.as_slice() {
        [image] => {
            let hash = actions::hash_one(image, kind)
                .wrap_err_with(|| format!("failed to compute the {kind} hash"))?;
            println!("{hash}");
        }
        [first, second] => {
            let comparison = actions::compare(first, second, kind)
                .wrap_err_with(|| format!("failed to compare the {kind} hashes"))?;
            println!("{comparison}");
        }
        images => unreachable!("clap allows one or two images, got {}", images.len()),
    }

    Ok(())
}
