// scf-core/src/domain/catalog/mod.rs

pub mod categories;
pub mod control;
pub mod framework;
pub mod names;
pub mod reverse_index;

pub use control::{Control, FrameworkMappings};
pub use framework::{Framework, FrameworkRegistry};
pub use reverse_index::ReverseIndex;
