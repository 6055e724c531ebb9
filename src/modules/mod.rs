// src/modules/mod.rs

pub mod quest;
pub mod avatar;
