//! Bridge storage - the per-actor persistence boundary of the gating core.
//!
//! One small record per actor: which milestone actions were performed,
//! which features are unlocked, and whether onboarding is complete. Reads
//! happen once at session start; writes happen on every mutating call.
//!
//! Design stance:
//! - Records are keyed by actor id and never shared between actors.
//! - A missing record means "no state yet", never an error.
//! - Sets in a record only ever grow; callers enforce monotonicity.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod error;
pub mod json;
pub mod memory;
mod model;
mod traits;

pub use error::{StorageError, StorageResult};
pub use model::ActorStateRecord;
pub use traits::ActorStateStore;
