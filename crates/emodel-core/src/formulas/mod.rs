//! Elementary G.107 formulas
//!
//! Each function computes one named quantity of the E-model from scalars.
//! They are grouped by the stage of the model they belong to; the engine
//! threads them together in dependency order.

pub mod delay;
pub mod equipment;
pub mod noise;
pub mod simultaneous;
