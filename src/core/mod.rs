pub mod conflicts;
pub mod fs_ops;
pub mod listing;
pub mod transform;
