//! Moteur de garantie par plans couvrants pour le Loto français (5 numéros
//! sur 49 + un numéro chance sur 10).
//!
//! Pipeline : jeu de candidats → bornes combinatoires → plan couvrant →
//! rapports de scénarios. Tout est déterministe et purement fonctionnel sur
//! des valeurs immuables.

pub mod bounds;
pub mod combinatorics;
pub mod covering;
pub mod models;
pub mod scenario;

pub use bounds::{compute_bounds, validate_proposed_count, Bounds, Validation, Verdict};
pub use combinatorics::{binomial, hypergeometric};
pub use covering::{build_covering_design, CoveringDesign};
pub use models::{CandidateSet, GarantieError, PrizeTable, Ticket, GRID_PRICE};
pub use scenario::{analyze_scenarios, ScenarioReport};
