//! File discovery: pruning directory traversal and text-file eligibility.

pub mod eligibility;
pub mod walker;

pub use eligibility::is_eligible;
pub use walker::walk_files;
