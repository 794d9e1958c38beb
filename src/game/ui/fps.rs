//! FPS Overlay
//!
//! Frame statistics bracketed by `begin`/`end` around the frame body, shown
//! in the top-left corner.

use crate::game::clock::Instant;

use super::text::{ScreenSize, add_rect, draw_text};
use crate::game::types::Mesh;

/// Seconds between FPS readout updates.
const UPDATE_INTERVAL: f32 = 0.5;
const TEXT_SCALE: f32 = 2.0;
const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.1, 0.6];
const TEXT_COLOR: [f32; 4] = [0.2, 1.0, 0.9, 1.0];

#[derive(Debug, Default)]
pub struct FpsStats {
    frame_start: Option<Instant>,
    last_begin: Option<Instant>,
    elapsed: f32,
    frames: u32,
    /// Frames per second over the last update interval
    pub fps: f32,
    /// Duration of the last frame body in milliseconds
    pub frame_ms: f32,
}

impl FpsStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_begin {
            self.elapsed += now.duration_since(last).as_secs_f32();
            self.frames += 1;
        }
        self.last_begin = Some(now);
        self.frame_start = Some(now);
    }

    pub fn end(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record(start.elapsed().as_secs_f32() * 1000.0);
        }
    }

    /// Fold one finished frame into the readout.
    fn record(&mut self, frame_ms: f32) {
        self.frame_ms = frame_ms;
        if self.elapsed >= UPDATE_INTERVAL && self.frames > 0 {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    pub fn draw(&self, mesh: &mut Mesh, status: &str, screen: ScreenSize) {
        let lines = [
            format!("{:.0} FPS", self.fps),
            format!("{:.2} MS", self.frame_ms),
            status.to_string(),
        ];
        let line_height = 9.0 * TEXT_SCALE;
        let height = line_height * lines.len() as f32 + 8.0;
        add_rect(mesh, 4.0, 4.0, 150.0, height, BACKGROUND, screen);
        for (i, line) in lines.iter().enumerate() {
            let y = 8.0 + i as f32 * line_height;
            draw_text(mesh, line, 8.0, y, TEXT_SCALE, TEXT_COLOR, screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_updates_after_interval() {
        let mut stats = FpsStats::new();
        stats.frames = 30;
        stats.elapsed = 0.5;
        stats.record(2.0);
        assert_eq!(stats.fps, 60.0);
        assert_eq!(stats.frame_ms, 2.0);
        assert_eq!(stats.frames, 0);
    }

    #[test]
    fn test_fps_waits_for_interval() {
        let mut stats = FpsStats::new();
        stats.frames = 3;
        stats.elapsed = 0.05;
        stats.record(1.0);
        assert_eq!(stats.fps, 0.0);
        assert_eq!(stats.frames, 3);
    }

    #[test]
    fn test_begin_end_measures_frame() {
        let mut stats = FpsStats::new();
        stats.begin();
        stats.end();
        assert!(stats.frame_ms >= 0.0);
        stats.begin();
        assert_eq!(stats.frames, 1);
    }
}
