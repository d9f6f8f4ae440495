// src/scenario/mod.rs
pub mod grid;
pub mod pnl;
