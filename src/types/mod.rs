//! Core types for spamlens

mod label;
mod reason;
mod signals;
mod verdict;

pub use label::Label;
pub use reason::Reason;
pub use signals::MessageSignals;
pub use verdict::{Classification, Verdict};
