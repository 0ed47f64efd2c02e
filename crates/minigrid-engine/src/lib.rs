//! minigrid_engine - Table model and left-to-right expression evaluator.

pub mod engine;
