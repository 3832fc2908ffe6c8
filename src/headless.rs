use tracing::{info, warn};

use crate::carousel::{RotationController, ScriptedIntent};
use crate::constants::*;
use crate::presenter::{Presenter, View};
use crate::testimonial::Testimonial;
use crate::timer::Scheduler;

/// Reports every testimonial change through `tracing`.
#[derive(Debug, Default)]
pub struct LogPresenter {
    shown: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter<Testimonial> for LogPresenter {
    fn present(&mut self, view: &View<'_, Testimonial>) {
        self.shown += 1;
        let dots: String = view
            .indicators()
            .map(|i| if i.active { '●' } else { '○' })
            .collect();
        info!(
            index = view.index,
            autoplay = view.autoplay(),
            name = %view.item.name,
            byline = %view.item.byline(),
            "{dots} #{}",
            self.shown
        );
    }
}

/// Outcome of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub autoplay_advances: usize,
    pub final_index: usize,
    pub autoplay_enabled: bool,
}

/// Drive `controller` through `frames` host-loop iterations of [`FRAME_TIME`].
///
/// Each iteration first dispatches the intents scripted for that frame, in the
/// order given, then lets the frame's time pass. The controller is torn down
/// when the loop ends.
pub fn run<T, S: Scheduler>(
    controller: &mut RotationController<T, S>,
    frames: u64,
    script: &[ScriptedIntent],
) -> RunSummary {
    let mut autoplay_advances = 0;

    for frame in 0..frames {
        for scripted in script.iter().filter(|s| s.frame == frame) {
            if let Err(e) = controller.dispatch(scripted.intent) {
                warn!(frame, intent = ?scripted.intent, "scripted intent rejected: {e}");
            }
        }
        autoplay_advances += controller.elapse(FRAME_TIME);
    }

    for late in script.iter().filter(|s| s.frame >= frames) {
        warn!(frame = late.frame, "scripted intent falls after the last frame, skipped");
    }

    controller.teardown();

    RunSummary {
        frames,
        autoplay_advances,
        final_index: controller.current_index(),
        autoplay_enabled: controller.autoplay_enabled(),
    }
}
