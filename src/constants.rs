use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Width of the carousel window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the carousel window
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000u64.div_ceil(FPS as u64)); // Time per frame, rounded up

pub const DEFAULT_AUTOPLAY_SPEED: Duration = Duration::from_millis(5_000); // Time each item stays up while autoplaying
pub const MIN_AUTOPLAY_SPEED: Duration = Duration::from_millis(1);          // Floor for zero or tiny intervals

pub const DEFAULT_HEADLESS_FRAMES: u64 = FPS as u64 * 30; // Thirty seconds of simulated frames
