//! Domain Layer
//!
//! The allocation ledger - pure logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - HardwareSet, Project, Ledger, Dataset
//! - `value_objects/` - ids and checkout outcomes
//! - `services/` - availability derivation and the two mutations
//! - `ports/` - interface for seed dataset sources
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Total operations** - availability and mutations never fail; bad input is clamped
//! 3. **Value semantics** - mutations return new collections instead of editing in place

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
