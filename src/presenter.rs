use crate::state::RotationMode;

/// What a presenter needs to draw the carousel at one instant.
#[derive(Debug)]
pub struct View<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub len: usize,
    pub mode: RotationMode,
}

/// One position dot under the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub active: bool,
}

impl<T> View<'_, T> {
    /// Only useful for diagnostics; nothing renders it.
    pub fn autoplay(&self) -> bool {
        self.mode.is_autoplay()
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> {
        let current = self.index;
        (0..self.len).map(move |position| Indicator {
            position,
            active: position == current,
        })
    }
}

/// Receives the controller's view after each change.
pub trait Presenter<T> {
    fn present(&mut self, view: &View<'_, T>);
}

impl<T, F> Presenter<T> for F
where
    F: FnMut(&View<'_, T>),
{
    fn present(&mut self, view: &View<'_, T>) {
        self(view)
    }
}
