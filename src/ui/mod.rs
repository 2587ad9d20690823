pub mod input;
pub mod renderer;
pub mod shutdown;
pub mod terminal;
