use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_shared::layout::{LABEL_FONT, LABEL_LINE_HEIGHT, SHADE_INNER_RATIO};
use wheel_shared::{break_into_lines, line_offsets, wheel_layout, Segment};
use yew::prelude::*;

use crate::config::{CANVAS_SIZE, WHEEL_MARGIN};

const LABEL_COLOR: &str = "#0f1218";
const SHADE_EDGE: &str = "rgba(0,0,0,0.35)";
const HIGHLIGHT_FILL: &str = "rgba(255,255,255,0.35)";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Rc<Vec<Segment>>,
    pub rotation: f64,
    #[prop_or_default]
    pub highlight: Option<usize>,
    #[prop_or(false)]
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.segments.clone(), props.rotation, props.highlight),
            move |(segments, rotation, highlight)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
                    match context {
                        Some(context) => draw_wheel(&context, &canvas, segments, *rotation, *highlight),
                        None => log::error!("Canvas 2d context unavailable"),
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-full h-auto rounded-full transition-all duration-300"
            style={if props.is_spinning {
                "filter: drop-shadow(0px 5px 20px rgba(255, 207, 51, 0.35));"
            } else {
                "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
            }}
        />
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    segments: &[Segment],
    rotation: f64,
    highlight: Option<usize>,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = (width.min(height) / 2.0 - WHEEL_MARGIN).max(1.0);

    // Clear canvas
    context.clear_rect(0.0, 0.0, width, height);

    // Rotate the whole wheel around its center
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation);
    let _ = context.translate(-center_x, -center_y);

    let layout = wheel_layout(segments.len(), radius);
    for (i, (segment, slice)) in segments.iter().zip(layout.iter()).enumerate() {
        // Slice
        context.begin_path();
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, slice.start_angle, slice.end_angle);
        context.close_path();
        context.set_fill_style_str(&segment.color);
        context.fill();

        // Radial shading, darker towards the rim
        if let Ok(gradient) = context.create_radial_gradient(
            center_x,
            center_y,
            radius * SHADE_INNER_RATIO,
            center_x,
            center_y,
            radius,
        ) {
            let _ = gradient.add_color_stop(0.0, "rgba(0,0,0,0)");
            let _ = gradient.add_color_stop(1.0, SHADE_EDGE);
            context.set_fill_style_canvas_gradient(&gradient);
            context.fill();
        }

        if highlight == Some(i) {
            context.save();
            let _ = context.set_global_composite_operation("overlay");
            context.begin_path();
            context.move_to(center_x, center_y);
            let _ = context.arc(center_x, center_y, radius, slice.start_angle, slice.end_angle);
            context.close_path();
            context.set_fill_style_str(HIGHLIGHT_FILL);
            context.fill();
            context.restore();
        }

        // Label, kept upright in the lower half
        context.save();
        let _ = context.translate(center_x + slice.label_x, center_y + slice.label_y);
        if slice.flip_label {
            let _ = context.rotate(PI);
        }
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str(LABEL_COLOR);
        context.set_font(LABEL_FONT);
        let lines = break_into_lines(&segment.label, slice.max_label_width, |text| {
            context.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
        });
        for (line, offset) in lines.iter().zip(line_offsets(lines.len(), LABEL_LINE_HEIGHT)) {
            let _ = context.fill_text(line, 0.0, offset);
        }
        context.restore();
    }

    // Restore context to original state (no rotation)
    context.restore();

    draw_hub(context, center_x, center_y, radius);
    draw_pointer(context, center_x, center_y, radius);
}

fn draw_hub(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64) {
    context.begin_path();
    context.set_fill_style_str("#0f1218");
    let _ = context.arc(center_x, center_y, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
    context.set_line_width(3.0);
    let _ = context.arc(center_x, center_y, radius - 1.5, 0.0, 2.0 * PI);
    context.stroke();
}

/// Fixed pointer at 12 o'clock, tip touching the rim.
fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64) {
    let pointer_width = 16.0;
    let pointer_height = 26.0;
    let pointer_radius = 4.0;
    let tip_y = center_y - radius + 6.0;
    let base_y = tip_y - pointer_height;

    context.set_shadow_color("rgba(255, 215, 0, 0.6)");
    context.set_shadow_blur(6.0);

    context.begin_path();
    context.move_to(center_x, tip_y);
    context.line_to(center_x - pointer_width + pointer_radius, base_y + pointer_radius);
    context.quadratic_curve_to(
        center_x - pointer_width,
        base_y + pointer_radius,
        center_x - pointer_width,
        base_y,
    );
    context.line_to(center_x + pointer_width - pointer_radius, base_y);
    context.quadratic_curve_to(
        center_x + pointer_width,
        base_y,
        center_x + pointer_width,
        base_y + pointer_radius,
    );
    context.close_path();
    context.set_fill_style_str("#f59e0b");
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    // Reset shadow
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}
