//! Tests for command-line parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tracing::Level;
    use voronoi_clusters::ClusterError;
    use voronoi_clusters::algorithm::voronoi::RasterMode;
    use voronoi_clusters::io::cli::{Cli, FileProcessor, OutputPaths};
    use voronoi_clusters::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

    fn processor(args: &[&str]) -> FileProcessor {
        let Ok(processor) = FileProcessor::new(Cli::parse_from(args)) else {
            panic!("arguments should be valid: {args:?}");
        };
        processor
    }

    // Only the target is required; everything else has defaults
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "points.txt"]);
        assert_eq!(cli.target, PathBuf::from("points.txt"));
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.raster_mode(), RasterMode::Sequential);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), Level::INFO);
        assert!(cli.image.is_none() && cli.centers.is_none());
    }

    // All flags parse
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "points.txt",
            "-w",
            "20",
            "-H",
            "30",
            "--parallel",
            "--image",
            "a.png",
            "--centers",
            "b.txt",
            "--no-skip",
            "-vv",
        ]);
        assert_eq!((cli.width, cli.height), (20, 30));
        assert_eq!(cli.raster_mode(), RasterMode::Parallel);
        assert_eq!(cli.image, Some(PathBuf::from("a.png")));
        assert_eq!(cli.centers, Some(PathBuf::from("b.txt")));
        assert!(!cli.skip_existing());
        assert_eq!(cli.log_level(), Level::TRACE);
    }

    // Quiet hides progress and lowers logging
    #[test]
    fn test_quiet() {
        let cli = Cli::parse_from(["program", "points.txt", "--quiet"]);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), Level::WARN);
        assert!(Cli::try_parse_from(["program", "points.txt", "-q", "-v"]).is_err());
    }

    // Log writers work with and without a progress display
    #[test]
    fn test_log_writer() {
        for args in [["program", "points.txt", "-q"], ["program", "points.txt", "-v"]] {
            let mut writer = processor(&args).log_writer();
            assert_eq!(writer.write(b"record\n").ok(), Some(7));
        }
    }

    // Zero-sized grids are rejected before any file is touched
    #[test]
    fn test_invalid_dimensions() {
        let cli = Cli::parse_from(["program", "points.txt", "--width", "0"]);
        assert!(matches!(
            FileProcessor::new(cli),
            Err(ClusterError::InvalidParameter { .. })
        ));
    }

    // Default outputs sit next to the input
    #[test]
    fn test_default_output_paths() {
        let outputs = OutputPaths::for_input(Path::new("data/DS5.txt"));
        assert_eq!(outputs.image, PathBuf::from("data/DS5_voronoi.png"));
        assert_eq!(outputs.centers, PathBuf::from("data/DS5_centers.txt"));
    }

    // Overrides replace the default outputs
    #[test]
    fn test_output_overrides() {
        let p = processor(&["program", "in.txt", "--image", "x.png", "--centers", "y.txt"]);
        let outputs = p.outputs_for(Path::new("in.txt"));
        assert_eq!(outputs.image, PathBuf::from("x.png"));
        assert_eq!(outputs.centers, PathBuf::from("y.txt"));
    }

    // Directory targets pick up sorted .txt files and skip existing outputs
    #[test]
    fn test_collect_files_from_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for name in ["b.txt", "a.txt", "c.csv", "done.txt", "done_voronoi.png"] {
            std::fs::write(dir.path().join(name), "1 1\n").expect("Failed to write input");
        }
        let target = dir.path().to_string_lossy().to_string();

        let files = processor(&["program", &target, "-q"]).collect_files();
        let Ok(files) = files else {
            panic!("directory should be listed");
        };
        assert_eq!(files, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);

        let Ok(all) = processor(&["program", &target, "-q", "--no-skip"]).collect_files() else {
            panic!("directory should be listed");
        };
        assert_eq!(all.len(), 3);
    }

    // Output overrides are ambiguous for directories
    #[test]
    fn test_directory_rejects_overrides() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().to_string_lossy().to_string();
        let result = processor(&["program", &target, "--image", "x.png"]).collect_files();
        assert!(matches!(result, Err(ClusterError::InvalidParameter { .. })));
    }

    // Non-.txt files and missing targets are rejected
    #[test]
    fn test_invalid_targets() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let csv = dir.path().join("points.csv");
        std::fs::write(&csv, "1 1\n").expect("Failed to write input");
        let csv_target = csv.to_string_lossy().to_string();
        assert!(matches!(
            processor(&["program", &csv_target]).collect_files(),
            Err(ClusterError::InvalidParameter { .. })
        ));

        let missing = dir.path().join("missing.txt").to_string_lossy().to_string();
        let Err(error) = processor(&["program", &missing]).collect_files() else {
            panic!("missing target should fail");
        };
        assert!(error.is_unreadable_input());
    }

    // A full run writes both artifacts
    #[test]
    fn test_process_writes_outputs() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("blobs.txt");
        std::fs::write(&input, "0 0\n1 0\n0 1\n1 1\n10,10\n11,11\njunk\n").expect("Failed to write input");
        let target = input.to_string_lossy().to_string();

        let mut p = processor(&["program", &target, "-w", "20", "-H", "20", "-q"]);
        let result = p.process();
        assert!(result.is_ok(), "processing should succeed: {result:?}");

        let centers = std::fs::read_to_string(dir.path().join("blobs_centers.txt"));
        assert_eq!(
            centers.unwrap_or_default(),
            "0.500000 0.500000\n10.500000 10.500000\n"
        );
        assert!(dir.path().join("blobs_voronoi.png").exists());
    }

    // Files with nothing inside the grid fail with the empty-input error
    #[test]
    fn test_process_no_valid_points() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("outside.txt");
        std::fs::write(&input, "100 100\n-1 -1\n").expect("Failed to write input");
        let target = input.to_string_lossy().to_string();

        let mut p = processor(&["program", &target, "-w", "20", "-H", "20", "-q"]);
        let Err(error) = p.process() else {
            panic!("no valid points should fail");
        };
        assert!(error.is_empty_input());
        assert!(!dir.path().join("outside_voronoi.png").exists());
    }
}
