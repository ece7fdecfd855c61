//! Browser host: a [`Surface`] over a 2D canvas context and the wiring that turns wheel events
//! into scene rotations.

use std::{cell::RefCell, rc::Rc};

use kurbo::{BezPath, PathEl, Rect};
use peniko::{color::Rgba8, Color};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, WheelEvent};

use crate::{
    config::{Config, Viewport},
    scene::{Scene, ScrollDelta},
    surface::Surface,
};

/// A [`Surface`] drawing onto a `CanvasRenderingContext2d`.
#[derive(Debug)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    fill: Option<Rgba8>,
}

impl CanvasSurface {
    /// Wraps a canvas context. Any scale applied to the context is kept.
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, fill: None }
    }

    /// The wrapped context.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn fill_path(&mut self, path: &BezPath, colour: Color) {
        let rgba = colour.to_rgba8();
        if self.fill != Some(rgba) {
            self.ctx.set_fill_style_str(&rgba.to_string());
            self.fill = Some(rgba);
        }

        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(p1, p) => self.ctx.quadratic_curve_to(p1.x, p1.y, p.x, p.y),
                PathEl::CurveTo(p1, p2, p) => {
                    self.ctx.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y);
                }
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
        self.ctx.fill();
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Appends a full-window canvas to the document body, draws the scene described by `config`
/// (JSON, see [`Config`]) and rotates it on every wheel event.
#[wasm_bindgen]
pub fn start(config: Option<String>) -> Result<(), JsValue> {
    let config = match config {
        Some(text) => Config::from_json(&text).map_err(js_error)?,
        None => Config::default(),
    };

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let scale = window.device_pixel_ratio();
    let viewport = Viewport::new(
        window.inner_width()?.as_f64().ok_or("window width is not a number")?,
        window.inner_height()?.as_f64().ok_or("window height is not a number")?,
        if scale > 0.0 { scale } else { 1.0 },
    );

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let (width, height) = viewport.physical_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas
        .style()
        .set_property("width", &format!("{}px", viewport.width))?;
    canvas
        .style()
        .set_property("height", &format!("{}px", viewport.height))?;
    body.append_child(&canvas)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;
    ctx.scale(viewport.scale, viewport.scale)?;

    let mut scene = Scene::new(&config, viewport).map_err(js_error)?;
    let mut surface = CanvasSurface::new(ctx);
    scene.render(&mut surface);

    let state = Rc::new(RefCell::new((scene, surface)));
    let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        event.prevent_default();

        let mut state = state.borrow_mut();
        let (scene, surface) = &mut *state;
        if let Err(err) = scene.scroll(surface, ScrollDelta::new(event.delta_x(), event.delta_y()))
        {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }
    });

    canvas.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
    on_wheel.forget();

    Ok(())
}
