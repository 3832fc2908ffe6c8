#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RotationMode {
    Autoplaying, // Timer advances the current item
    Manual,      // User navigated; autoplay is off for the rest of the session
}

impl RotationMode {
    pub fn is_autoplay(self) -> bool {
        self == RotationMode::Autoplaying
    }
}
