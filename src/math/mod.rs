//! Mathematical utilities for entity geometry

/// Euler-angle rotation
pub mod rotation;
/// Three-component vectors and axes
pub mod vector;
