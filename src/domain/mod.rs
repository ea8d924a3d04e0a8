//! Domain logic - pure tag-matching and ordering rules independent of any command execution

pub mod candidate;
pub mod ordering;

pub use candidate::CandidatePattern;
pub use ordering::{compare_natural, highest_of};
