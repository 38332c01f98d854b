pub mod compare;
pub mod compose;
pub mod dockerfile;
pub mod image;
pub mod knowledge;
pub mod repository;
pub mod runtime;
pub mod security;
pub mod size;

pub use compare::image_comparison;
pub use compose::{compose_manifest, ComposeOptions};
pub use dockerfile::dockerfile_estimate;
pub use image::manifest_summary;
pub use repository::{image_listing, repository_analysis};
pub use runtime::runtime_analysis;
pub use security::security_report;
pub use size::size_optimization;

pub(crate) fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
