//! Chart Widgets
//!
//! Stock doughnut and category pie drawn on HTML5 Canvas.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{CategoryDistribution, StockCounts};

/// Fixed palette for the category pie, cycled when there are more
/// categories than colors.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#1d4ed8", // blue
    "#22c55e", // green
    "#f97316", // orange
    "#e11d48", // rose
    "#a855f7", // purple
    "#9ca3af", // gray
];

/// Stock doughnut colors: in stock green, out of stock red.
pub const STOCK_COLORS: [&str; 2] = ["#16a34a", "#dc2626"];

const DOUGHNUT_HOLE_RATIO: f64 = 0.55;
const LEGEND_HEIGHT: f64 = 28.0;
const LEGEND_SWATCH: f64 = 10.0;

/// A single chart slice: legend label, magnitude and fill color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
    pub color: &'static str,
}

/// Chart drawing capability. The page controller only ever talks to this
/// trait; [`CanvasChartRenderer`] is the standard backend.
pub trait ChartRenderer {
    fn doughnut(&self, canvas: &HtmlCanvasElement, slices: &[Slice]);
    fn pie(&self, canvas: &HtmlCanvasElement, slices: &[Slice]);
}

/// Slices for the stock doughnut, in fixed label/color order.
pub fn stock_slices(counts: &StockCounts) -> Vec<Slice> {
    vec![
        Slice {
            label: "In Stock".to_string(),
            value: counts.in_stock,
            color: STOCK_COLORS[0],
        },
        Slice {
            label: "Out of Stock".to_string(),
            value: counts.out_of_stock,
            color: STOCK_COLORS[1],
        },
    ]
}

/// Slices for the category pie, palette cycled across categories.
pub fn category_slices(categories: &CategoryDistribution) -> Vec<Slice> {
    categories
        .pairs()
        .enumerate()
        .map(|(idx, (label, value))| Slice {
            label,
            value,
            color: CATEGORY_PALETTE[idx % CATEGORY_PALETTE.len()],
        })
        .collect()
}

/// Compute `(start, end)` angles in radians for each value, clockwise from
/// twelve o'clock, proportional to the value's share of the total. A zero
/// total yields no slices.
pub fn slice_angles(values: &[u64]) -> Vec<(f64, f64)> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let total = total as f64;

    let mut start = -std::f64::consts::FRAC_PI_2;
    values
        .iter()
        .map(|&value| {
            let end = start + (value as f64 / total) * std::f64::consts::TAU;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// Canvas 2D chart backend.
pub struct CanvasChartRenderer;

impl ChartRenderer for CanvasChartRenderer {
    fn doughnut(&self, canvas: &HtmlCanvasElement, slices: &[Slice]) {
        draw_round_chart(canvas, slices, DOUGHNUT_HOLE_RATIO);
    }

    fn pie(&self, canvas: &HtmlCanvasElement, slices: &[Slice]) {
        draw_round_chart(canvas, slices, 0.0);
    }
}

/// Draw a pie, or a doughnut when `hole_ratio` is non-zero, with a legend
/// row along the bottom edge.
fn draw_round_chart(canvas: &HtmlCanvasElement, slices: &[Slice], hole_ratio: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let plot_height = (height - LEGEND_HEIGHT).max(0.0);
    let cx = width / 2.0;
    let cy = plot_height / 2.0;
    let radius = (plot_height.min(width) / 2.0 - 8.0).max(0.0);

    let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
    let angles = slice_angles(&values);

    if angles.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", cx - 26.0, cy);
    }

    for (slice, (start, end)) in slices.iter().zip(angles) {
        if end <= start {
            continue;
        }
        ctx.begin_path();
        if hole_ratio > 0.0 {
            let inner = radius * hole_ratio;
            let _ = ctx.arc(cx, cy, radius, start, end);
            let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        } else {
            ctx.move_to(cx, cy);
            let _ = ctx.arc(cx, cy, radius, start, end);
        }
        ctx.close_path();
        ctx.set_fill_style(&slice.color.into());
        ctx.fill();
    }

    draw_legend(&ctx, slices, width, height);
}

/// Centered single-row swatch legend at the bottom edge.
fn draw_legend(ctx: &CanvasRenderingContext2d, slices: &[Slice], width: f64, height: f64) {
    const GAP: f64 = 6.0;
    const SPACING: f64 = 16.0;

    ctx.set_font("12px sans-serif");

    let mut entry_widths = Vec::with_capacity(slices.len());
    let mut total = 0.0;
    for slice in slices {
        let text_width = ctx
            .measure_text(&slice.label)
            .map(|metrics| metrics.width())
            .unwrap_or(slice.label.len() as f64 * 7.0);
        let entry = LEGEND_SWATCH + GAP + text_width;
        entry_widths.push(entry);
        total += entry + SPACING;
    }
    if !slices.is_empty() {
        total -= SPACING;
    }

    let mut x = ((width - total) / 2.0).max(0.0);
    let y = height - LEGEND_HEIGHT / 2.0;

    for (slice, entry_width) in slices.iter().zip(entry_widths) {
        ctx.set_fill_style(&slice.color.into());
        ctx.fill_rect(x, y - LEGEND_SWATCH + 2.0, LEGEND_SWATCH, LEGEND_SWATCH);

        ctx.set_fill_style(&"#374151".into());
        let _ = ctx.fill_text(&slice.label, x + LEGEND_SWATCH + GAP, y + 2.0);

        x += entry_width + SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn angles_partition_the_circle_proportionally() {
        let angles = slice_angles(&[1, 1]);
        assert_eq!(angles.len(), 2);
        assert_close(angles[0].0, -FRAC_PI_2);
        assert_close(angles[0].1, FRAC_PI_2);
        assert_close(angles[1].0, FRAC_PI_2);
        assert_close(angles[1].1, 3.0 * FRAC_PI_2);
    }

    #[test]
    fn angles_follow_input_order() {
        let angles = slice_angles(&[3, 1]);
        assert_close(angles[0].1 - angles[0].0, 1.5 * PI);
        assert_close(angles[1].1 - angles[1].0, 0.5 * PI);
        assert_close(angles[1].1, 3.0 * FRAC_PI_2);
    }

    #[test]
    fn zero_total_yields_no_slices() {
        assert!(slice_angles(&[]).is_empty());
        assert!(slice_angles(&[0, 0]).is_empty());
    }

    #[test]
    fn zero_valued_slice_has_zero_sweep() {
        let angles = slice_angles(&[0, 2]);
        assert_close(angles[0].0, angles[0].1);
        assert_close(angles[1].1 - angles[1].0, 2.0 * PI);
    }

    #[test]
    fn stock_slices_use_fixed_labels_and_colors() {
        let slices = stock_slices(&StockCounts {
            in_stock: 9,
            out_of_stock: 4,
        });
        assert_eq!(slices[0].label, "In Stock");
        assert_eq!(slices[0].value, 9);
        assert_eq!(slices[0].color, "#16a34a");
        assert_eq!(slices[1].label, "Out of Stock");
        assert_eq!(slices[1].value, 4);
        assert_eq!(slices[1].color, "#dc2626");
    }

    #[test]
    fn palette_cycles_across_categories() {
        let categories = CategoryDistribution {
            labels: (0..8).map(|i| format!("c{}", i)).collect(),
            counts: vec![1; 8],
        };
        let slices = category_slices(&categories);
        assert_eq!(slices.len(), 8);
        assert_eq!(slices[0].color, CATEGORY_PALETTE[0]);
        assert_eq!(slices[5].color, CATEGORY_PALETTE[5]);
        assert_eq!(slices[6].color, CATEGORY_PALETTE[0]);
        assert_eq!(slices[7].color, CATEGORY_PALETTE[1]);
    }

    #[test]
    fn category_slices_preserve_order() {
        let categories = CategoryDistribution {
            labels: vec!["Analgesics".to_string(), "Vitamins".to_string()],
            counts: vec![8, 2],
        };
        let slices = category_slices(&categories);
        assert_eq!(slices[0].label, "Analgesics");
        assert_eq!(slices[1].label, "Vitamins");
        assert_eq!(slices[1].value, 2);
    }
}
