// Domain layer - Plain data shapes, no I/O
pub mod chart;
pub mod dashboard;
pub mod grocery;
pub mod record;
pub mod session;
