//! CLI entry point for centroid clustering and Voronoi rendering

use clap::Parser;
use voronoi_clusters::io::cli::{Cli, FileProcessor};
use voronoi_clusters::io::logging::init_logging;

fn main() -> voronoi_clusters::Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level();
    let mut processor = FileProcessor::new(cli)?;
    init_logging(level, processor.log_writer());
    processor.process()
}
