//! Core modules for spamlens

pub mod api;
pub mod classifier;
pub mod detector;
pub mod explain;
pub mod model;

pub use api::{create_router, run_server};
pub use classifier::Classifier;
pub use detector::SpamDetector;
pub use explain::{analyze, measure};
pub use model::LinearModel;
