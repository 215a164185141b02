//! Built-in node evaluators.

mod chain;
mod preview;
mod simple;

pub use chain::ChainNode;
pub use preview::PreviewNode;
pub use simple::SimpleNode;
