pub mod categories;
pub mod engine;
pub mod gate;
pub mod penalty;
pub mod report;
pub mod role;
pub mod signals;
pub mod tier;

pub use engine::TrustEngine;
pub use gate::RoleThresholds;
pub use role::resolve_role;
