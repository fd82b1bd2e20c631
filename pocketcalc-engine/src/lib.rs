//! pocketcalc-engine — calculator state machine, no GUI types

pub mod engine;

pub use engine::{CalcError, Engine, Op};
