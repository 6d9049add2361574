// src/core/mod.rs

pub mod datefmt;
pub mod html;
pub mod net;
pub mod sanitize;
