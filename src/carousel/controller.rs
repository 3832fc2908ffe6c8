use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::carousel::intent::Intent;
use crate::constants::*;
use crate::error::CarouselError;
use crate::items::ItemSequence;
use crate::presenter::{Presenter, View};
use crate::state::RotationMode;
use crate::timer::{FrameClock, Scheduler, TimerId};

/// Options a carousel accepts besides its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Interval between autoplay advances. `None` means [`DEFAULT_AUTOPLAY_SPEED`].
    pub autoplay_speed: Option<Duration>,
}

impl CarouselOptions {
    pub fn with_autoplay_speed(autoplay_speed: Duration) -> Self {
        Self {
            autoplay_speed: Some(autoplay_speed),
        }
    }

    fn resolved_speed(&self) -> Duration {
        let speed = self.autoplay_speed.unwrap_or(DEFAULT_AUTOPLAY_SPEED);
        if speed < MIN_AUTOPLAY_SPEED {
            warn!(?speed, floor = ?MIN_AUTOPLAY_SPEED, "autoplay speed too small, raising it");
            return MIN_AUTOPLAY_SPEED;
        }
        speed
    }
}

/// Owns the current index into an [`ItemSequence`] and the single autoplay
/// timer that moves it.
///
/// The controller starts out autoplaying. The first user navigation switches
/// it to [`RotationMode::Manual`] for good, and the timer is cancelled inside
/// that same call. There is never more than one timer pending, and
/// [`teardown`](Self::teardown) (or drop) leaves none.
pub struct RotationController<T, S: Scheduler = FrameClock> {
    items: ItemSequence<T>,
    autoplay_speed: Duration,
    current_index: usize,
    mode: RotationMode,
    active_timer: Option<TimerId>,
    mounted: bool,
    scheduler: S,
    presenter: Option<Box<dyn Presenter<T>>>,
}

impl<T> RotationController<T, FrameClock> {
    /// Mount on a fresh [`FrameClock`], validating the raw item list.
    pub fn from_vec(items: Vec<T>, options: CarouselOptions) -> Result<Self, CarouselError> {
        Ok(Self::mount(ItemSequence::new(items)?, options, FrameClock::new()))
    }
}

impl<T, S: Scheduler> RotationController<T, S> {
    pub fn mount(items: ItemSequence<T>, options: CarouselOptions, scheduler: S) -> Self {
        let mut controller = Self {
            items,
            autoplay_speed: options.resolved_speed(),
            current_index: 0,
            mode: RotationMode::Autoplaying,
            active_timer: None,
            mounted: true,
            scheduler,
            presenter: None,
        };
        controller.arm_autoplay();

        info!(
            items = controller.items.len(),
            autoplay_speed = ?controller.autoplay_speed,
            "carousel mounted"
        );
        controller
    }

    /// Attach the presenter and hand it the current view right away.
    pub fn set_presenter(&mut self, presenter: impl Presenter<T> + 'static) {
        self.presenter = Some(Box::new(presenter));
        self.notify();
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.current_index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &ItemSequence<T> {
        &self.items
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.mode.is_autoplay()
    }

    pub fn autoplay_speed(&self) -> Duration {
        self.autoplay_speed
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn view(&self) -> View<'_, T> {
        View {
            index: self.current_index,
            item: &self.items[self.current_index],
            len: self.items.len(),
            mode: self.mode,
        }
    }

    /// Manual "next": advance and stop autoplay.
    pub fn next(&mut self) {
        self.transition(|c| {
            c.advance();
            c.disable_autoplay();
        });
    }

    /// Manual "previous": step back (wrapping) and stop autoplay.
    pub fn retreat(&mut self) {
        self.transition(|c| {
            let len = c.items.len();
            c.current_index = (c.current_index + len - 1) % len;
            c.disable_autoplay();
        });
    }

    /// Select `index` and stop autoplay. An index outside the sequence is
    /// rejected and leaves the controller exactly as it was.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.items.len();
        if index >= len {
            warn!(index, len, "rejected jump outside the item sequence");
            return Err(CarouselError::OutOfRange { index, len });
        }

        self.transition(|c| {
            c.current_index = index;
            c.disable_autoplay();
        });
        Ok(())
    }

    /// Like [`jump_to`](Self::jump_to), but an out of range index selects the
    /// last item instead of failing.
    pub fn jump_to_clamped(&mut self, index: usize) {
        let last = self.items.len() - 1;
        if index > last {
            warn!(index, clamped = last, "clamping jump target");
        }
        self.transition(|c| {
            c.current_index = index.min(last);
            c.disable_autoplay();
        });
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<(), CarouselError> {
        debug!(?intent, "dispatching intent");
        match intent {
            Intent::Previous => self.retreat(),
            Intent::Next => self.next(),
            Intent::JumpTo(index) => self.jump_to(index)?,
        }
        Ok(())
    }

    /// Let `elapsed` pass on the host clock and apply every autoplay tick that
    /// became due. Returns how many times the index advanced.
    pub fn elapse(&mut self, elapsed: Duration) -> usize {
        let fired = self.scheduler.poll(elapsed);

        let mut advanced = 0;
        for id in fired {
            if self.active_timer != Some(id) {
                trace!(?id, "ignoring stale timer");
                continue;
            }
            self.transition(|c| c.advance());
            advanced += 1;
        }
        advanced
    }

    /// Unmount: cancel the live timer, if any. Safe to call more than once.
    /// Navigation after this point is ignored.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.cancel_timer();
        self.mounted = false;
        info!(index = self.current_index, mode = ?self.mode, "carousel unmounted");
    }

    fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.items.len();
    }

    fn disable_autoplay(&mut self) {
        if self.mode == RotationMode::Manual {
            return;
        }
        self.mode = RotationMode::Manual;
        self.cancel_timer();
        debug!("autoplay disabled");
    }

    fn arm_autoplay(&mut self) {
        self.cancel_timer();
        if !self.mounted || !self.mode.is_autoplay() {
            return;
        }
        self.active_timer = Some(self.scheduler.schedule_repeating(self.autoplay_speed));
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.active_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    // Apply one state change and tell the presenter if anything moved.
    // Once unmounted the state is frozen.
    fn transition(&mut self, apply: impl FnOnce(&mut Self)) {
        if !self.mounted {
            warn!(index = self.current_index, "ignoring navigation on an unmounted carousel");
            return;
        }

        let before = (self.current_index, self.mode);
        apply(self);
        debug_assert!(self.current_index < self.items.len());

        if before != (self.current_index, self.mode) {
            debug!(
                from = before.0,
                to = self.current_index,
                mode = ?self.mode,
                "carousel moved"
            );
            self.notify();
        }
    }

    fn notify(&mut self) {
        if let Some(presenter) = self.presenter.as_mut() {
            let view = View {
                index: self.current_index,
                item: &self.items[self.current_index],
                len: self.items.len(),
                mode: self.mode,
            };
            presenter.present(&view);
        }
    }
}

impl<T, S: Scheduler> Drop for RotationController<T, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T, S: Scheduler> std::fmt::Debug for RotationController<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationController")
            .field("len", &self.items.len())
            .field("current_index", &self.current_index)
            .field("mode", &self.mode)
            .field("active_timer", &self.active_timer)
            .field("mounted", &self.mounted)
            .field("pending", &self.scheduler.pending())
            .finish()
    }
}
