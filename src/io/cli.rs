//! Command-line interface for batch clustering of point files

use crate::algorithm::pipeline::ClusterAnalysis;
use crate::algorithm::voronoi::RasterMode;
use crate::io::centroids::write_centroids;
use crate::io::configuration::{
    CENTERS_SUFFIX, DEFAULT_HEIGHT, DEFAULT_WIDTH, IMAGE_SUFFIX, INPUT_EXTENSION,
};
use crate::io::error::{ClusterError, Result, invalid_parameter};
use crate::io::image::export_diagram;
use crate::io::logging::LogWriter;
use crate::io::points::read_points;
use crate::io::progress::ProgressManager;
use crate::spatial::GridDimensions;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "voronoi-clusters")]
#[command(
    author,
    version,
    about = "Cluster 2D points by 8-connectivity and draw the Voronoi diagram of their centroids"
)]
/// Command-line arguments for the clustering tool
pub struct Cli {
    /// Point file (.txt) or directory of point files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Rasterize the Voronoi diagram on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Output image path (single file targets only)
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Output centroid list path (single file targets only)
    #[arg(long, value_name = "PATH")]
    pub centers: Option<PathBuf>,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output and informational logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Rasterizer scheduling selected by the flags
    pub const fn raster_mode(&self) -> RasterMode {
        if self.parallel {
            RasterMode::Parallel
        } else {
            RasterMode::Sequential
        }
    }

    /// Default log level selected by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Validated grid dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large
    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(self.width, self.height)
    }
}

/// Output locations for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Rendered diagram
    pub image: PathBuf,
    /// Centroid list
    pub centers: PathBuf,
}

impl OutputPaths {
    /// Default outputs next to the input: `<stem>_voronoi.png` and `<stem>_centers.txt`
    pub fn for_input(input_path: &Path) -> Self {
        Self {
            image: sibling_with_suffix(input_path, IMAGE_SUFFIX),
            centers: sibling_with_suffix(input_path, CENTERS_SUFFIX),
        }
    }
}

fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

/// Orchestrates batch processing of point files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    dimensions: GridDimensions,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let dimensions = cli.dimensions()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            dimensions,
            progress_manager,
        })
    }

    /// Log writer that stays clear of this processor's progress bars
    pub fn log_writer(&self) -> LogWriter {
        LogWriter::new(
            self.progress_manager
                .as_ref()
                .map(ProgressManager::multi_progress),
        )
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails, or if any file cannot be
    /// read, holds no in-grid points, or its outputs cannot be written
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let outputs = self.outputs_for(file);
            self.process_file(file, &outputs, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Input files selected by the target, in processing order
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a `.txt` file nor a readable
    /// directory, or if output overrides are combined with a directory target
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !has_input_extension(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a .txt point file",
                ));
            }
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }

        if target.is_dir() {
            if self.cli.image.is_some() || self.cli.centers.is_some() {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"--image and --centers require a single file target",
                ));
            }

            let to_error = |source| ClusterError::FileSystem {
                path: target.clone(),
                operation: "list directory",
                source,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(to_error)? {
                let path = entry.map_err(to_error)?.path();
                if path.is_file() && has_input_extension(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            return Ok(files);
        }

        Err(ClusterError::InputRead {
            path: target.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "target is neither a file nor a directory",
            ),
        })
    }

    /// Output paths for an input file, honouring `--image` and `--centers`
    pub fn outputs_for(&self, input_path: &Path) -> OutputPaths {
        let defaults = OutputPaths::for_input(input_path);
        OutputPaths {
            image: self.cli.image.clone().unwrap_or(defaults.image),
            centers: self.cli.centers.clone().unwrap_or(defaults.centers),
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.outputs_for(input_path).image;
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    /// Cluster one file and write its centroid list and diagram
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, holds no point inside the
    /// grid, or either output cannot be written
    pub fn process_file(
        &self,
        input_path: &Path,
        outputs: &OutputPaths,
        index: usize,
    ) -> Result<ClusterAnalysis> {
        let start_time = Instant::now();
        let span = tracing::info_span!("file", input = %input_path.display());
        let _enter = span.enter();

        let progress = self.progress_manager.as_ref();
        if let Some(pm) = progress {
            pm.start_file(index, input_path);
            pm.enter_step(index, "load");
        }

        let loaded = read_points(input_path)?;
        loaded.require_in_bounds(input_path, self.dimensions)?;

        let analysis = ClusterAnalysis::run_observed(
            loaded.points,
            self.dimensions,
            self.cli.raster_mode(),
            |stage| {
                if let Some(pm) = progress {
                    pm.enter_step(index, stage.name());
                }
            },
        );

        if let Some(pm) = progress {
            pm.enter_step(index, "render");
        }
        write_centroids(&analysis.centroids, &outputs.centers)?;
        export_diagram(&analysis, &outputs.image)?;

        tracing::info!(
            components = analysis.components.len(),
            image = %outputs.image.display(),
            centers = %outputs.centers.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "processed point file"
        );

        if let Some(pm) = progress {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(analysis)
    }
}
