pub mod board;
pub mod entity;
pub mod physics;
