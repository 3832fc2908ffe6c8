mod controller;
mod intent;

#[cfg(test)]
mod tests;

pub use controller::{CarouselOptions, RotationController};
pub use intent::{Intent, ScriptedIntent};
