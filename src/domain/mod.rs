//! Domain layer for awesome-gen
//!
//! This module contains the configuration model shared by every stage of a
//! generation run.

pub mod models;
