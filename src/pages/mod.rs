pub mod settings;
pub mod simulation;
