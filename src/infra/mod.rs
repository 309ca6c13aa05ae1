//! Boundary between users and the pricing core.

pub mod bulk_input;
