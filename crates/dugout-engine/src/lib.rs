pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("need {required} players to fill every position, got {present}")]
pub struct InsufficientPlayersError {
    pub present: usize,
    pub required: usize,
}
