use clap::{ArgAction, Parser, Subcommand};
use snapfolio::config::parse_quality;
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "snapfolio", bin_name = "snapfolio", version = get_version())]
#[command(about = "Browse, optimize and catalog a personal photo gallery", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Manifest file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List photos, one page at a time
    #[command(alias = "ls")]
    List {
        /// Only photos in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only photos whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// How many pages to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one photo in detail, with its neighbours
    #[command(alias = "v")]
    View {
        /// Photo id
        id: u32,

        /// Navigate within this category
        #[arg(short, long)]
        category: Option<String>,

        /// Navigate within photos matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Browse interactively (filter, search, like, open)
    #[command(alias = "b")]
    Browse,

    /// Resize and compress images for the gallery
    Optimize {
        /// Directory with source images
        input: PathBuf,

        /// Output directory (defaults to the configured gallery dir)
        output: Option<PathBuf>,

        /// Also write WebP renditions
        #[arg(long)]
        webp: bool,

        /// JPEG quality, 1-100
        #[arg(long, value_parser = parse_quality)]
        quality: Option<u8>,

        /// Maximum width in pixels
        #[arg(long)]
        width: Option<u32>,
    },

    /// Regenerate the manifest from optimized gallery images
    Manifest {
        /// Gallery directory (defaults to the configured one)
        #[arg(long)]
        gallery_dir: Option<PathBuf>,

        /// Manifest file to write (takes precedence over --manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which input image formats are supported
    Formats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_accepts_output_path() {
        let cli = Cli::try_parse_from(["snapfolio", "manifest", "--output", "out/photos.json"])
            .unwrap();
        match cli.command {
            Some(Commands::Manifest { output, gallery_dir }) => {
                assert_eq!(output, Some(PathBuf::from("out/photos.json")));
                assert_eq!(gallery_dir, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn optimize_rejects_out_of_range_quality() {
        assert!(Cli::try_parse_from(["snapfolio", "optimize", "raw", "--quality", "0"]).is_err());
    }
}
