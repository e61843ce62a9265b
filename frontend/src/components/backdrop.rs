use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const FRAME_MS: u32 = 16;
const CAMERA_DISTANCE: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Yaw around Y, then pitch around X.
    pub fn rotated(&self, yaw: f64, pitch: f64) -> Vec3 {
        let (sy, cy) = yaw.sin_cos();
        let x = self.x * cy + self.z * sy;
        let z = -self.x * sy + self.z * cy;
        let (sp, cp) = pitch.sin_cos();
        Vec3::new(x, self.y * cp - z * sp, self.y * sp + z * cp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrismMotion {
    /// Spin about the vertical axis with a slow nod.
    Rotate,
    Still,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrismParams {
    pub motion: PrismMotion,
    pub time_scale: f64,
    pub height: f64,
    pub base_width: f64,
    pub scale: f64,
    pub hue_shift: f64,
    pub color_frequency: f64,
    pub noise: f64,
    pub glow: f64,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            motion: PrismMotion::Rotate,
            time_scale: 0.5,
            height: 3.5,
            base_width: 5.5,
            scale: 3.6,
            hue_shift: 0.0,
            color_frequency: 1.0,
            noise: 0.0,
            glow: 1.0,
        }
    }
}

/// One side of the prism, already projected to canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub points: [(f64, f64); 3],
    pub hue: f64,
    pub depth: f64,
}

impl PrismParams {
    /// Apex first, then the four corners of the square base.
    pub fn vertices(&self) -> [Vec3; 5] {
        let h = self.height / 2.0;
        let w = self.base_width / 2.0;
        [
            Vec3::new(0.0, h, 0.0),
            Vec3::new(-w, -h, -w),
            Vec3::new(w, -h, -w),
            Vec3::new(w, -h, w),
            Vec3::new(-w, -h, w),
        ]
    }

    fn angles(&self, t: f64) -> (f64, f64) {
        match self.motion {
            PrismMotion::Rotate => (t * 0.6, 0.25 + (t * 0.3).sin() * 0.15),
            PrismMotion::Still => (0.6, 0.25),
        }
    }

    fn jitter(&self, frame: u64, vertex: usize) -> f64 {
        if self.noise <= 0.0 {
            return 0.0;
        }
        // Cheap integer hash, good enough for grain.
        let mut h = frame.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (vertex as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h ^= h >> 31;
        ((h % 1000) as f64 / 1000.0 - 0.5) * self.noise * 0.1
    }

    pub fn hue(&self, t: f64, face: usize) -> f64 {
        (self.hue_shift + (t * 20.0 + face as f64 * 90.0) * self.color_frequency).rem_euclid(360.0)
    }

    /// Side faces at time `t`, projected into a `width`×`height` canvas and
    /// sorted back to front.
    pub fn faces(&self, t: f64, width: f64, height: f64) -> Vec<Face> {
        let (yaw, pitch) = self.angles(t);
        let unit = width.min(height) / self.scale.max(f64::EPSILON);
        let (cx, cy) = (width / 2.0, height / 2.0);
        let frame = (t * 1000.0) as u64;

        let world: Vec<Vec3> = self
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let r = v.rotated(yaw, pitch);
                let j = self.jitter(frame, i);
                Vec3::new(r.x + j, r.y + j, r.z)
            })
            .collect();
        let project = |v: &Vec3| {
            let k = CAMERA_DISTANCE / (CAMERA_DISTANCE - v.z);
            (cx + v.x * unit * k, cy - v.y * unit * k)
        };

        let mut faces: Vec<Face> = (0..4)
            .map(|side| {
                let (a, b) = (1 + side, 1 + (side + 1) % 4);
                Face {
                    points: [project(&world[0]), project(&world[a]), project(&world[b])],
                    hue: self.hue(t, side),
                    depth: (world[0].z + world[a].z + world[b].z) / 3.0,
                }
            })
            .collect();
        faces.sort_by(|l, r| l.depth.total_cmp(&r.depth));
        faces
    }
}

/// Backing-store size for a canvas shown at `width`×`height` CSS pixels.
pub fn backing_size(width: f64, height: f64, pixel_ratio: f64) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
    ((width * ratio).round() as u32, (height * ratio).round() as u32)
}

fn draw(ctx: &CanvasRenderingContext2d, params: &PrismParams, t: f64, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_shadow_blur(24.0 * params.glow);
    ctx.set_line_width(1.5);
    for face in params.faces(t, width, height) {
        let fill = format!("hsla({:.0}, 85%, 62%, 0.07)", face.hue);
        let edge = format!("hsla({:.0}, 90%, 70%, 0.35)", face.hue);
        ctx.set_fill_style(&JsValue::from_str(&fill));
        ctx.set_stroke_style(&JsValue::from_str(&edge));
        ctx.set_shadow_color(&edge);

        let [first, rest @ ..] = face.points;
        ctx.begin_path();
        ctx.move_to(first.0, first.1);
        for (x, y) in rest {
            ctx.line_to(x, y);
        }
        ctx.close_path();
        ctx.fill();
        ctx.stroke();
    }
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    #[prop_or_default]
    pub params: PrismParams,
}

/// Full-viewport canvas behind the page with a slowly turning prism.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |params| {
                let mut params = *params;
                if prefers_reduced_motion() {
                    params.motion = PrismMotion::Still;
                }
                let interval = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let Some(ctx) = context_2d(&canvas) else {
                        gloo_console::error!("Canvas 2D context unavailable, backdrop disabled");
                        return None;
                    };
                    let elapsed = Rc::new(Cell::new(0.0_f64));
                    Some(Interval::new(FRAME_MS, move || {
                        let (width, height, ratio) = match web_sys::window() {
                            Some(w) => (
                                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                                w.device_pixel_ratio(),
                            ),
                            None => return,
                        };
                        let (backing_w, backing_h) = backing_size(width, height, ratio);
                        if canvas.width() != backing_w || canvas.height() != backing_h {
                            canvas.set_width(backing_w);
                            canvas.set_height(backing_h);
                        }
                        // Draw in CSS pixels; reset every frame so the scale never compounds.
                        let scale = f64::from(backing_w) / width.max(1.0);
                        let _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
                        let t = elapsed.get() + f64::from(FRAME_MS) / 1000.0 * params.time_scale;
                        elapsed.set(t);
                        draw(&ctx, &params, t, width, height);
                    }))
                });
                move || drop(interval)
            },
            props.params,
        );
    }

    html! {
        <div class="backdrop">
            <canvas ref={canvas_ref}></canvas>
            <style>
                {r#"
                    .backdrop {
                        position: fixed;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .backdrop canvas {
                        width: 100%;
                        height: 100%;
                        display: block;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: Vec3) -> f64 {
        (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
    }

    #[test]
    fn rotation_keeps_vertices_on_their_sphere() {
        let params = PrismParams::default();
        for v in params.vertices() {
            for (yaw, pitch) in [(0.3, 0.0), (1.7, -0.4), (5.0, 2.2)] {
                assert!((length(v.rotated(yaw, pitch)) - length(v)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn vertices_follow_height_and_base_width() {
        let params = PrismParams::default();
        let [apex, corners @ ..] = params.vertices();
        assert_eq!(apex, Vec3::new(0.0, 1.75, 0.0));
        for c in corners {
            assert_eq!(c.y, -1.75);
            assert_eq!(c.x.abs(), 2.75);
            assert_eq!(c.z.abs(), 2.75);
        }
    }

    #[test]
    fn faces_are_sorted_back_to_front() {
        let faces = PrismParams::default().faces(3.2, 1280.0, 800.0);
        assert_eq!(faces.len(), 4);
        for pair in faces.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    #[test]
    fn still_prism_has_a_centred_apex_column() {
        let params = PrismParams {
            motion: PrismMotion::Still,
            ..PrismParams::default()
        };
        let a = params.faces(0.0, 1000.0, 1000.0);
        let b = params.faces(42.0, 1000.0, 1000.0);
        let apex = |faces: &[Face]| faces[0].points[0];
        assert_eq!(apex(&a), apex(&b));
        assert!((apex(&a).0 - 500.0).abs() < 1e-9);
    }

    #[test]
    fn backing_store_follows_pixel_ratio() {
        assert_eq!(backing_size(1280.0, 800.0, 1.0), (1280, 800));
        assert_eq!(backing_size(1280.0, 800.0, 2.0), (2560, 1600));
        assert_eq!(backing_size(375.0, 667.0, 3.0), (1125, 2001));
        assert_eq!(backing_size(1366.0, 768.0, 1.25), (1708, 960));
    }

    #[test]
    fn unusable_pixel_ratio_falls_back_to_one() {
        assert_eq!(backing_size(800.0, 600.0, 0.0), (800, 600));
        assert_eq!(backing_size(800.0, 600.0, f64::NAN), (800, 600));
    }

    #[test]
    fn hue_wraps_into_colour_wheel() {
        let params = PrismParams {
            hue_shift: 350.0,
            ..PrismParams::default()
        };
        for t in [0.0, 1.0, 100.0] {
            for face in 0..4 {
                let h = params.hue(t, face);
                assert!((0.0..360.0).contains(&h));
            }
        }
    }
}
