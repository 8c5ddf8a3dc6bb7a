pub mod action;
mod charging;
pub mod error;
pub mod plan;
mod solution_space;
pub mod solver;
pub mod source;
pub mod storage_level;
