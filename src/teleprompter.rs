/*!
 * Teleprompter playback settings.
 *
 * Reading speed and font size with their clamped adjustments, plus the
 * scroll rate the display derives from them.
 */

use serde::{Deserialize, Serialize};

pub const MIN_SPEED_WPM: u32 = 50;
pub const MAX_SPEED_WPM: u32 = 500;
pub const SPEED_STEP_WPM: u32 = 10;
pub const DEFAULT_SPEED_WPM: u32 = 150;

pub const MIN_FONT_SIZE_PX: u32 = 20;
pub const MAX_FONT_SIZE_PX: u32 = 60;
pub const FONT_SIZE_STEP_PX: u32 = 2;
pub const DEFAULT_FONT_SIZE_PX: u32 = 32;

/// Line height as a multiple of font size
const LINE_HEIGHT_FACTOR: f64 = 1.5;

/// Estimated words per line for a 350px column
const WORDS_PER_LINE: f64 = 8.0;

/// Speed and font size of the scrolling script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeleprompterSettings {
    /// Reading speed in words per minute
    pub speed_wpm: u32,
    /// Font size in pixels
    pub font_size_px: u32,
}

impl Default for TeleprompterSettings {
    fn default() -> Self {
        Self {
            speed_wpm: DEFAULT_SPEED_WPM,
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl TeleprompterSettings {
    // @creates: Settings with both values clamped to their bounds
    pub fn new(speed_wpm: u32, font_size_px: u32) -> Self {
        let mut settings = Self::default();
        settings.set_speed(speed_wpm);
        settings.set_font_size(font_size_px);
        settings
    }

    pub fn increase_speed(&mut self) {
        self.set_speed(self.speed_wpm.saturating_add(SPEED_STEP_WPM));
    }

    pub fn decrease_speed(&mut self) {
        self.set_speed(self.speed_wpm.saturating_sub(SPEED_STEP_WPM));
    }

    pub fn increase_font_size(&mut self) {
        self.set_font_size(self.font_size_px.saturating_add(FONT_SIZE_STEP_PX));
    }

    pub fn decrease_font_size(&mut self) {
        self.set_font_size(self.font_size_px.saturating_sub(FONT_SIZE_STEP_PX));
    }

    pub fn set_speed(&mut self, speed_wpm: u32) {
        self.speed_wpm = speed_wpm.clamp(MIN_SPEED_WPM, MAX_SPEED_WPM);
    }

    pub fn set_font_size(&mut self, font_size_px: u32) {
        self.font_size_px = font_size_px.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX);
    }

    /// Scroll rate in pixels per millisecond
    pub fn scroll_speed_px_per_ms(&self) -> f64 {
        let line_height = f64::from(self.font_size_px) * LINE_HEIGHT_FACTOR;
        let lines_per_minute = f64::from(self.speed_wpm) / WORDS_PER_LINE;
        lines_per_minute * line_height / 60_000.0
    }
}
