pub mod controls;
pub mod pie;
pub mod scatter;
