use std::time::Duration;

use raylib::prelude::*;
use tracing::info;

use crate::carousel::{Intent, RotationController};
use crate::constants::*;
use crate::presenter::View;
use crate::testimonial::Testimonial;

const CARD_MARGIN: i32 = 80;
const QUOTE_FONT: i32 = 28;
const NAME_FONT: i32 = 32;
const BYLINE_FONT: i32 = 22;
const DOT_RADIUS: f32 = 8.0;
const DOT_SPACING: i32 = 28;

const AMBER: Color = Color::new(245, 158, 11, 255);
const SLATE_BG: Color = Color::new(241, 245, 249, 255);
const SLATE_TEXT: Color = Color::new(51, 65, 85, 255);
const SLATE_DOT: Color = Color::new(203, 213, 225, 255);

const JUMP_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// Run the testimonials carousel in a raylib window until it is closed.
pub fn run(mut controller: RotationController<Testimonial>) {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("What Our Clients Say")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        // Input, then time.
        let screen_width = rl.get_screen_width();
        let screen_height = rl.get_screen_height();
        for intent in read_intents(&rl, controller.len(), screen_width, screen_height) {
            // Intents built here are always in range.
            let _ = controller.dispatch(intent);
        }

        controller.elapse(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(SLATE_BG);
        draw_view(&mut d, &controller.view());
    }

    controller.teardown();
    info!(index = controller.current_index(), "window closed");
}

fn read_intents(rl: &RaylibHandle, len: usize, screen_width: i32, screen_height: i32) -> Vec<Intent> {
    let mut intents = Vec::new();

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        intents.push(Intent::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        intents.push(Intent::Next);
    }
    for (position, key) in JUMP_KEYS.iter().enumerate().take(len) {
        if rl.is_key_pressed(*key) {
            intents.push(Intent::JumpTo(position));
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let mouse = rl.get_mouse_position();
        for position in 0..len {
            let (x, y) = dot_center(position, len, screen_width, screen_height);
            let (dx, dy) = (mouse.x - x as f32, mouse.y - y as f32);
            if dx * dx + dy * dy <= (DOT_RADIUS * 1.5).powi(2) {
                intents.push(Intent::JumpTo(position));
            }
        }
    }

    intents
}

fn dot_center(position: usize, len: usize, screen_width: i32, screen_height: i32) -> (i32, i32) {
    let row_width = DOT_SPACING * (len as i32 - 1);
    let x = screen_width / 2 - row_width / 2 + DOT_SPACING * position as i32;
    let y = screen_height - CARD_MARGIN;
    (x, y)
}

fn draw_view(d: &mut RaylibDrawHandle, view: &View<'_, Testimonial>) {
    let sw = d.get_screen_width();
    let sh = d.get_screen_height();
    let testimonial = view.item;

    d.draw_rectangle(
        CARD_MARGIN / 2,
        CARD_MARGIN / 2,
        sw - CARD_MARGIN,
        sh - CARD_MARGIN * 2,
        Color::WHITE,
    );

    // Stars
    for (i, filled) in testimonial.stars().iter().enumerate() {
        let color = if *filled { AMBER } else { Color::LIGHTGRAY };
        d.draw_text("*", CARD_MARGIN + i as i32 * 30, CARD_MARGIN, 48, color);
    }

    // Quote, wrapped on a rough per-character width
    let max_chars = ((sw - CARD_MARGIN * 2) / (QUOTE_FONT / 2)).max(10) as usize;
    let mut y = CARD_MARGIN + 80;
    for line in wrap(&testimonial.content, max_chars) {
        d.draw_text(&line, CARD_MARGIN, y, QUOTE_FONT, SLATE_TEXT);
        y += QUOTE_FONT + 8;
    }

    y += 24;
    d.draw_text(&testimonial.name, CARD_MARGIN, y, NAME_FONT, Color::BLACK);
    d.draw_text(
        &testimonial.byline(),
        CARD_MARGIN,
        y + NAME_FONT + 8,
        BYLINE_FONT,
        SLATE_TEXT,
    );

    // Position dots
    for indicator in view.indicators() {
        let (x, y) = dot_center(indicator.position, view.len, sw, sh);
        let color = if indicator.active { AMBER } else { SLATE_DOT };
        d.draw_circle(x, y, DOT_RADIUS, color);
    }

    d.draw_text(
        "<- / -> to browse, 1-9 to jump",
        CARD_MARGIN / 2,
        sh - CARD_MARGIN / 2 + 8,
        18,
        Color::GRAY,
    );
}

fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
