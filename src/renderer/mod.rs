//! Rendering module
//!
//! Each frame is described as a display list of 2D primitives built purely
//! from [`GameState`](crate::sim::GameState). The browser backend replays the
//! list onto a Canvas 2D context.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::palette::Color;
use crate::sim::Aabb;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::compose;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole canvas to transparent
    Clear,
    FillRect { rect: Aabb, color: Color },
    StrokeRect { rect: Aabb, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    /// Text centered horizontally on `pos`
    FillText {
        text: String,
        pos: Vec2,
        /// Font size in pixels (Arial)
        size: u32,
        color: Color,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.push(DrawCmd::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Aabb, color: Color) {
        self.push(DrawCmd::StrokeRect { rect, color });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    /// Centered Arial text
    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: u32, color: Color) {
        self.push(DrawCmd::FillText {
            text: text.into(),
            pos,
            size,
            color,
        });
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Every string drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
