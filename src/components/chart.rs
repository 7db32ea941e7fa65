//! Chart Component
//!
//! Weekly issuance-volume area chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, VolumePoint};

const LINE_COLOR: &str = "#5c7aff";
const AREA_COLOR: &str = "rgba(92, 122, 255, 0.15)";

/// Weekly volume chart panel
#[component]
pub fn VolumeChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    let series = state.weekly_volume;
    create_effect(move |_| {
        let points = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <div class="glass p-6 rounded-2xl">
            <h3 class="text-lg font-semibold mb-6 flex items-center gap-2">
                "📈 Volume Semanal"
            </h3>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="280"
                class="w-full h-64 rounded-lg"
            />
        </div>
    }
}

/// Draw the weekly series as a filled area with the line and points on top
fn draw_chart(canvas: &HtmlCanvasElement, series: &[VolumePoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 20.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 36.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1e293b".into()); // slate-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#64748b".into()); // slate-500
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Sem dados de volume", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    // Y scale from zero with headroom above the peak
    let max_volume = series
        .iter()
        .map(|p| p.volume)
        .fold(f64::NEG_INFINITY, f64::max);
    let scale_max = if max_volume > 0.0 { max_volume * 1.1 } else { 1.0 };

    // Horizontal grid lines
    ctx.set_stroke_style(&"rgba(255, 255, 255, 0.06)".into());
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();
    }

    let x_at = |i: usize| {
        if series.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (series.len() - 1) as f64) * chart_width
        }
    };
    // Inverted because canvas y grows downward
    let y_at = |volume: f64| margin_top + (1.0 - volume / scale_max) * chart_height;

    // Filled area under the series
    let baseline = margin_top + chart_height;
    ctx.set_fill_style(&AREA_COLOR.into());
    ctx.begin_path();
    ctx.move_to(x_at(0), y_at(series[0].volume));
    for (i, point) in series.iter().enumerate().skip(1) {
        ctx.line_to(x_at(i), y_at(point.volume));
    }
    ctx.line_to(x_at(series.len() - 1), baseline);
    ctx.line_to(x_at(0), baseline);
    ctx.close_path();
    ctx.fill();

    // Series line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in series.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(point.volume);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Draw points
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, point) in series.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(point.volume), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Weekday labels
    ctx.set_fill_style(&"#64748b".into());
    ctx.set_font("12px sans-serif");
    for (i, point) in series.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, x_at(i) - 10.0, height - 12.0);
    }
}
