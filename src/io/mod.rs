//! Adapters at the edges of the hook: the external Poetry process and the
//! requirements file on disk.

pub mod requirements;
pub mod runner;
