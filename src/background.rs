use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::field::{self, Cursor, ParticleField, ParticleKind};

const LINK_RGB: &str = "0, 242, 255";
const LINK_GLOW: &str = "rgba(0, 242, 255, 0.8)";
const MESH_RGB: &str = "100, 116, 139";
const MESH_HIGHLIGHT_RGB: &str = "189, 0, 255";
const GLYPH_RGB: &str = "200, 210, 230";
const GLYPH_HOVER_RGB: &str = "255, 255, 255";
const GLYPH_FONT: &str = "500 14px \"Inter\", sans-serif";
const GLYPH_HOVER_FONT: &str = "700 15px \"Inter\", sans-serif";
const DOT_NEAR_ALPHA: f64 = 0.9;
const DOT_GLOW_BLUR: f64 = 8.0;

struct Scene {
    field: ParticleField,
    cursor: Cursor,
    rng: fastrand::Rng,
}

struct Animation {
    frames: FrameLoop,
    _listeners: [EventListener; 2],
}

struct FrameLoop {
    frame: Rc<Cell<Option<i32>>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    fn start(mut step: impl FnMut() + 'static) -> Option<Self> {
        let win = window()?;
        let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        *tick.borrow_mut() = Some(Closure::new({
            let win = win.clone();
            let frame = frame.clone();
            let tick = tick.clone();
            move || {
                // Cancellation token: a cancelled loop must not reschedule.
                if frame.get().is_none() {
                    return;
                }
                step();
                let next = tick
                    .borrow()
                    .as_ref()
                    .and_then(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                frame.set(next);
            }
        }));

        let first = {
            let tick = tick.borrow();
            let cb = tick.as_ref()?;
            win.request_animation_frame(cb.as_ref().unchecked_ref()).ok()?
        };
        frame.set(Some(first));

        Some(Self {
            frame,
            _tick: tick,
        })
    }

    fn cancel(&self) {
        if let Some(handle) = self.frame.take() {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(handle);
            }
        }
    }
}

#[function_component(NeuralBackground)]
pub fn neural_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let animation = start_animation(&canvas_ref);
            move || {
                if let Some(animation) = animation {
                    animation.frames.cancel();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="neural-canvas" aria-hidden="true" />
    }
}

fn start_animation(canvas_ref: &NodeRef) -> Option<Animation> {
    let win = window()?;
    let canvas: HtmlCanvasElement = canvas_ref.cast()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut rng = fastrand::Rng::new();
    let scene = Rc::new(RefCell::new(Scene {
        field: ParticleField::seeded(width, height, &mut rng),
        cursor: Cursor::default(),
        rng,
    }));

    let resize = {
        let canvas = canvas.clone();
        let scene = scene.clone();
        EventListener::new(&win, "resize", move |_| {
            let (width, height) = viewport_size();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            let mut scene = scene.borrow_mut();
            let Scene { field, rng, .. } = &mut *scene;
            field.reseed(width, height, rng);
        })
    };

    let pointer = {
        let scene = scene.clone();
        EventListener::new(&win, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                scene.borrow_mut().cursor = Cursor {
                    x: f64::from(event.client_x()),
                    y: f64::from(event.client_y()),
                };
            }
        })
    };

    let frames = FrameLoop::start({
        let scene = scene.clone();
        move || paint(&ctx, &mut scene.borrow_mut())
    })?;

    Some(Animation {
        frames,
        _listeners: [resize, pointer],
    })
}

fn paint(ctx: &CanvasRenderingContext2d, scene: &mut Scene) {
    ctx.clear_rect(0.0, 0.0, scene.field.width(), scene.field.height());

    let cursor = scene.cursor;
    for i in 0..scene.field.len() {
        let p1 = scene.field.particles()[i];
        let cursor_distance = cursor.distance_to(p1.x, p1.y);

        if let Some(link) = field::cursor_link(cursor_distance) {
            ctx.set_line_width(link.width);
            ctx.set_shadow_blur(link.glow);
            ctx.set_shadow_color(LINK_GLOW);
            ctx.set_stroke_style_str(&rgba(LINK_RGB, link.opacity));
            ctx.begin_path();
            ctx.move_to(p1.x, p1.y);
            ctx.line_to(cursor.x, cursor.y);
            ctx.stroke();
            ctx.set_shadow_blur(0.0);
        }

        for p2 in &scene.field.particles()[i + 1..] {
            let distance = (p1.x - p2.x).hypot(p1.y - p2.y);
            let Some(link) =
                field::mesh_link(distance, cursor_distance, cursor.distance_to(p2.x, p2.y))
            else {
                continue;
            };
            let rgb = if link.highlighted {
                MESH_HIGHLIGHT_RGB
            } else {
                MESH_RGB
            };
            ctx.set_stroke_style_str(&rgba(rgb, link.opacity));
            ctx.set_line_width(link.width);
            ctx.begin_path();
            ctx.move_to(p1.x, p1.y);
            ctx.line_to(p2.x, p2.y);
            ctx.stroke();
        }

        scene.field.step(i);

        let p1 = scene.field.particles()[i];
        match p1.kind {
            ParticleKind::Glyph(text) => {
                if field::glyph_hovered(cursor_distance) {
                    ctx.set_font(GLYPH_HOVER_FONT);
                    ctx.set_fill_style_str(&rgba(GLYPH_HOVER_RGB, field::boosted_alpha(p1.alpha)));
                } else {
                    ctx.set_font(GLYPH_FONT);
                    ctx.set_fill_style_str(&rgba(GLYPH_RGB, p1.alpha));
                }
                let _ = ctx.fill_text(text, p1.x, p1.y);
            }
            ParticleKind::Dot => {
                ctx.begin_path();
                let _ = ctx.arc(p1.x, p1.y, p1.size, 0.0, PI * 2.0);
                if cursor_distance < field::INTERACTION_RADIUS {
                    ctx.set_fill_style_str(&rgba(LINK_RGB, DOT_NEAR_ALPHA));
                    ctx.set_shadow_blur(DOT_GLOW_BLUR);
                    ctx.set_shadow_color(LINK_GLOW);
                } else {
                    ctx.set_fill_style_str(&rgba(LINK_RGB, p1.alpha));
                    ctx.set_shadow_blur(0.0);
                }
                ctx.fill();
                ctx.set_shadow_blur(0.0);
            }
        }
    }
}

fn rgba(rgb: &str, alpha: f64) -> String {
    format!("rgba({rgb}, {alpha})")
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}
