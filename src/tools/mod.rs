// Pipeline stages
pub mod extract;
pub mod fetch;
