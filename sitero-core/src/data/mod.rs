// Modules
mod site;

// Re-exports
pub use site::{ActiveSite, Atom, Error, Float, Residue, ScoredSite};
