// crates/shared-kernel/src/value_objects/mod.rs
pub mod direction;
pub mod int_range;
pub mod step_count;

pub use direction::Direction;
pub use int_range::IntRange;
pub use step_count::StepCount;
