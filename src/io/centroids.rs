//! Centroid list export: one `cx cy` line per component

use std::fmt::Write as _;
use std::path::Path;

use crate::algorithm::centroid::Centroid;
use crate::io::configuration::CENTROID_DECIMALS;
use crate::io::error::{ClusterError, Result};

/// Format centroids as space-separated pairs with fixed decimals, one per line
pub fn format_centroids(centroids: &[Centroid]) -> String {
    let mut text = String::with_capacity(centroids.len() * 24);
    for centroid in centroids {
        // Writing into a String cannot fail
        let _ = writeln!(
            text,
            "{:.prec$} {:.prec$}",
            centroid.x,
            centroid.y,
            prec = CENTROID_DECIMALS
        );
    }
    text
}

/// Write the centroid list to `path`, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_centroids(centroids: &[Centroid], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ClusterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, format_centroids(centroids)).map_err(|e| ClusterError::FileSystem {
        path: path.to_path_buf(),
        operation: "write centroids",
        source: e,
    })?;

    tracing::debug!(path = %path.display(), centroids = centroids.len(), "wrote centroids");
    Ok(())
}
