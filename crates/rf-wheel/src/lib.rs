//! # rf-wheel — Prize Wheel Outcome Resolver
//!
//! Deterministically decides which prize segment sits under a fixed pointer
//! for a given wheel rotation, and how far the rotation must be nudged so the
//! wheel comes to rest with that segment exactly centered.
//!
//! ## Features
//!
//! - **Resolution**: rotation + segment count → winning index
//! - **Landing correction**: minimal signed nudge, with a deadband
//! - **Spin planning**: seeded rotation draws and ready-to-animate plans
//! - **Configuration**: pointer, deadband, spins and prizes from JSON/YAML
//!
//! ## Architecture
//!
//! ```text
//! SpinGenerator ──(rotation)──┐
//!                             v
//! WheelConfig ──> WheelResolver
//!                     │
//!                     ├── resolve()     → ResolutionResult
//!                     └── correction()  → signed degrees
//!                           │
//!                           v
//!                       SpinPlan → PrizeTable[index]
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod prize;
pub mod resolver;
pub mod spin;

pub use config::*;
pub use error::*;
pub use layout::*;
pub use prize::*;
pub use resolver::*;
pub use spin::*;
