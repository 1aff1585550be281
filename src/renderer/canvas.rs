//! Canvas 2D backend
//!
//! Replays a [`DrawList`] onto the page's `<canvas>` element.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCmd, DrawList};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Take over a canvas, forcing it to the logical game size
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Draw one frame
    pub fn present(&self, list: &DrawList) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for cmd in list.cmds() {
            match cmd {
                DrawCmd::Clear => {
                    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
                }
                DrawCmd::FillRect { rect, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(
                        rect.min.x as f64,
                        rect.min.y as f64,
                        rect.width() as f64,
                        rect.height() as f64,
                    );
                }
                DrawCmd::StrokeRect { rect, color } => {
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.stroke_rect(
                        rect.min.x as f64,
                        rect.min.y as f64,
                        rect.width() as f64,
                        rect.height() as f64,
                    );
                }
                DrawCmd::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                    ctx.close_path();
                }
                DrawCmd::FillText {
                    text,
                    pos,
                    size,
                    color,
                } => {
                    ctx.set_font(&format!("{size}px Arial"));
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.set_text_align("center");
                    ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }
}
