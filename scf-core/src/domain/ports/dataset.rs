// scf-core/src/domain/ports/dataset.rs
//
// Where the catalog comes from. The domain only needs the parsed records; files,
// fixtures or anything else sit behind this trait.

use crate::domain::catalog::{Control, ReverseIndex};
use crate::error::ScfError;

/// Parsed but not yet indexed catalog content.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    /// Controls in source order.
    pub controls: Vec<Control>,
    pub reverse_index: ReverseIndex,
}

pub trait DatasetSource: Send + Sync {
    /// Loads the whole catalog. Any failure is fatal: there is no partial dataset.
    fn load(&self) -> Result<RawDataset, ScfError>;
}
