// scf-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Domain (Cœur du métier)
// Catalogue SCF, registre des frameworks, index inverse, extraits de recherche.
// Les ports (DatasetSource) vivent dans domain::ports.
pub mod domain;

// 2. Infrastructure (Adapters)
// Chargement JSON du dataset, configuration YAML + ENV.
pub mod infrastructure;

// 3. Application (Use Cases)
// Requêtes en lecture seule et façade validée pour les adaptateurs.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

#[cfg(test)]
mod testing;

// --- RE-EXPORTS (FACADE) ---
pub use application::{ControlService, QueryEngine};
pub use domain::Dataset;
pub use error::ScfError;
