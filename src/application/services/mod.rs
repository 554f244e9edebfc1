//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on boundary traits (PriceSource) but are themselves
//! concrete structs, not traits.

mod appraisal;

pub use appraisal::AppraisalService;
