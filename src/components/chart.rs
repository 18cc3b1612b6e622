use yew::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};
use wasm_bindgen::JsCast;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::content::{ChartPoint, PERFORMANCE_DATA};

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 300;

const BACKGROUND: RGBColor = RGBColor(24, 24, 27);
const STANDARD_LINE: RGBColor = RGBColor(113, 113, 122);
const AAV_LINE: RGBColor = RGBColor(239, 68, 68);

/// Y-axis upper bound with some headroom above the larger series.
fn y_upper_bound(points: &[ChartPoint]) -> u32 {
    let max = points
        .iter()
        .map(|p| p.standard.max(p.aav))
        .max()
        .unwrap_or(0);
    max + max / 10 + 1
}

/// Maps a cursor x position on the canvas to the nearest data point index.
fn nearest_point(offset_x: i32, width: i32, len: usize) -> Option<usize> {
    if len == 0 || width <= 0 {
        return None;
    }
    let clamped = offset_x.clamp(0, width - 1) as f64;
    let step = f64::from(width) / len as f64;
    let idx = (clamped / step).floor() as usize;
    Some(idx.min(len - 1))
}

#[function_component(PerformanceChart)]
pub fn performance_chart() -> Html {
    let canvas_ref = use_node_ref();
    let hovered = use_state(|| None::<usize>);

    // Draw once on mount. The series is constant, so there is nothing to
    // redraw afterwards.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw_series(&canvas);
            }
            || ()
        }, ());
    }

    let onmousemove = {
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlElement>() {
                hovered.set(nearest_point(
                    e.offset_x(),
                    target.client_width(),
                    PERFORMANCE_DATA.len(),
                ));
            }
        })
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <div class="performance-chart">
            <style>
                {r#"
                    .performance-chart {
                        position: relative;
                        width: 100%;
                    }
                    .performance-chart canvas {
                        max-width: 100%;
                        border-radius: 0.75rem;
                    }
                    .chart-tooltip {
                        position: absolute;
                        top: 0.5rem;
                        transform: translateX(-50%);
                        background: #18181b;
                        border-radius: 12px;
                        padding: 0.5rem 0.75rem;
                        pointer-events: none;
                        white-space: nowrap;
                        font-size: 0.75rem;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                    }
                    .chart-tooltip .tooltip-month {
                        display: block;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.25rem;
                    }
                    .chart-tooltip .tooltip-standard { color: #71717a; display: block; }
                    .chart-tooltip .tooltip-aav { color: #ef4444; display: block; }
                "#}
            </style>
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                {onmousemove}
                {onmouseleave}
            />
            {
                if let Some(idx) = *hovered {
                    let point = &PERFORMANCE_DATA[idx];
                    let left = (idx as f64 + 0.5) * 100.0 / PERFORMANCE_DATA.len() as f64;
                    html! {
                        <div class="chart-tooltip" style={format!("left: {left:.1}%;")}>
                            <span class="tooltip-month">{point.month}</span>
                            <span class="tooltip-standard">{format!("기존 훈련: {}", point.standard)}</span>
                            <span class="tooltip-aav">{format!("AAV 데이터 기반: {}", point.aav)}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn draw_series(canvas: &HtmlCanvasElement) {
    // Clear any previous drawing before handing the canvas to plotters.
    if let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    {
        context.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
    }

    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let Some(backend) = CanvasBackend::with_canvas_object(canvas.clone()) else {
        return;
    };
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).unwrap();

    let data = &PERFORMANCE_DATA;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .build_cartesian_2d(0..data.len() - 1, 0..y_upper_bound(data))
        .unwrap();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_labels(data.len())
        .x_label_formatter(&|x| {
            data.get(*x)
                .map(|p| p.month.to_string())
                .unwrap_or_default()
        })
        .x_label_style(("sans-serif", 12).into_font().color(&STANDARD_LINE))
        .axis_style(STANDARD_LINE.mix(0.4))
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(
            data.iter().enumerate().map(|(i, p)| (i, p.standard)),
            ShapeStyle::from(&STANDARD_LINE).stroke_width(2),
        ))
        .unwrap()
        .label("기존 훈련")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], STANDARD_LINE));

    chart
        .draw_series(LineSeries::new(
            data.iter().enumerate().map(|(i, p)| (i, p.aav)),
            ShapeStyle::from(&AAV_LINE).stroke_width(4),
        ))
        .unwrap()
        .label("AAV 데이터 기반")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], AAV_LINE));

    chart
        .draw_series(
            data.iter()
                .enumerate()
                .map(|(i, p)| Circle::new((i, p.aav), 4, AAV_LINE.filled())),
        )
        .unwrap();

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(BACKGROUND.mix(0.8))
        .label_font(("sans-serif", 13).into_font().color(&WHITE))
        .draw()
        .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_bound_leaves_headroom_above_both_series() {
        let bound = y_upper_bound(&PERFORMANCE_DATA);
        for point in &PERFORMANCE_DATA {
            assert!(bound > point.standard);
            assert!(bound > point.aav);
        }
    }

    #[test]
    fn upper_bound_of_empty_series_is_minimal() {
        assert_eq!(y_upper_bound(&[]), 1);
    }

    #[test]
    fn nearest_point_covers_the_full_canvas_width() {
        let len = PERFORMANCE_DATA.len();
        assert_eq!(nearest_point(0, 600, len), Some(0));
        assert_eq!(nearest_point(599, 600, len), Some(len - 1));
        assert_eq!(nearest_point(300, 600, len), Some(2));
    }

    #[test]
    fn nearest_point_clamps_out_of_range_cursor() {
        assert_eq!(nearest_point(-40, 600, 5), Some(0));
        assert_eq!(nearest_point(4000, 600, 5), Some(4));
    }

    #[test]
    fn nearest_point_handles_degenerate_input() {
        assert_eq!(nearest_point(10, 600, 0), None);
        assert_eq!(nearest_point(10, 0, 5), None);
    }
}
