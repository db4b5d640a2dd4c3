//! Input/output collaborators around the core stages

pub mod centroids;
pub mod cli;
pub mod configuration;
pub mod error;
pub mod image;
pub mod logging;
pub mod points;
pub mod progress;
