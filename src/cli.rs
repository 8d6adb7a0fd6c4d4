/// Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "slideshow", version, about = "Fullscreen random JPEG slideshow")]
pub struct Cli {
    /// Directory to scan recursively for .jpg files
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Quit automatically after this many seconds
    #[arg(short = 'r', long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub run_time_seconds: Option<u64>,
}

impl Cli {
    pub fn run_time(&self) -> Option<Duration> {
        self.run_time_seconds.map(Duration::from_secs)
    }
}
