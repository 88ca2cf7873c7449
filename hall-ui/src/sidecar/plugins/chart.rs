use dioxus::prelude::*;
use hall_types::{AttachmentChart, ChartKind, ChartPoint, SidecarPayload};
use serde_json::Value;

use super::json::JsonView;

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 40.0;
const GRID_LINES: usize = 4;

/// Accepts `{data, title, chartType}` or a bare `[{name, value}]` array.
pub fn decode_chart(data: &Value) -> Result<AttachmentChart, serde_json::Error> {
    if data.is_array() {
        return Ok(AttachmentChart {
            data: serde_json::from_value(data.clone())?,
            title: None,
            chart_type: None,
        });
    }
    serde_json::from_value(data.clone())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub bars: Vec<BarRect>,
    pub points: Vec<(f64, f64)>,
    pub labels: Vec<(f64, String)>,
    pub grid: Vec<(f64, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay the series out in a fixed view box. Negative values sit on the axis.
pub fn plot(series: &[ChartPoint]) -> Plot {
    let inner_width = VIEW_WIDTH - PAD_LEFT - PAD_RIGHT;
    let inner_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let baseline = PAD_TOP + inner_height;

    let max = series
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };

    let slot = if series.is_empty() {
        inner_width
    } else {
        inner_width / series.len() as f64
    };

    let mut bars = Vec::with_capacity(series.len());
    let mut points = Vec::with_capacity(series.len());
    let mut labels = Vec::with_capacity(series.len());
    for (i, point) in series.iter().enumerate() {
        let value = if point.value.is_finite() {
            point.value.max(0.0)
        } else {
            0.0
        };
        let height = value / max * inner_height;
        let center = PAD_LEFT + slot * (i as f64 + 0.5);

        bars.push(BarRect {
            x: center - slot * 0.35,
            y: baseline - height,
            width: slot * 0.7,
            height,
        });
        points.push((center, baseline - height));
        labels.push((center, point.name.clone()));
    }

    let grid = (0..=GRID_LINES)
        .map(|step| {
            let fraction = step as f64 / GRID_LINES as f64;
            let y = baseline - fraction * inner_height;
            (y, format_tick(max * fraction))
        })
        .collect();

    Plot {
        bars,
        points,
        labels,
        grid,
    }
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ChartView(payload: SidecarPayload) -> Element {
    let chart = match decode_chart(&payload.data) {
        Ok(chart) => chart,
        Err(e) => {
            dioxus_logger::tracing::debug!("chart payload shown raw: {}", e);
            return rsx! { JsonView { payload } };
        }
    };

    let title = chart
        .title
        .clone()
        .or_else(|| payload.title().map(ToString::to_string))
        .unwrap_or_else(|| "Biểu đồ".to_string());
    let kind = chart.chart_type.unwrap_or_default();
    let kind_label = if kind == ChartKind::Line {
        "Biểu đồ đường"
    } else {
        "Biểu đồ cột"
    };
    let plot = plot(&chart.data);
    let line_points = polyline(&plot.points);
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let axis_y = format!("{:.1}", VIEW_HEIGHT - PAD_BOTTOM);
    let axis_end = format!("{:.1}", VIEW_WIDTH - PAD_RIGHT);
    let label_y = format!("{:.1}", VIEW_HEIGHT - PAD_BOTTOM + 16.0);

    rsx! {
        div {
            class: "plugin",
            div {
                class: "plugin-header",
                div {
                    h3 { class: "plugin-title", "{title}" }
                    span { class: "badge badge-secondary", "{kind_label}" }
                }
            }
            div {
                class: "plugin-body plugin-padded",
                svg {
                    class: "chart",
                    width: "100%",
                    view_box: "{view_box}",
                    for (y, tick) in plot.grid.iter() {
                        line {
                            x1: "{PAD_LEFT}",
                            x2: "{axis_end}",
                            y1: format!("{:.1}", y),
                            y2: format!("{:.1}", y),
                            class: "chart-grid",
                        }
                        text {
                            x: format!("{:.1}", PAD_LEFT - 6.0),
                            y: format!("{:.1}", y + 3.0),
                            class: "chart-tick",
                            text_anchor: "end",
                            "{tick}"
                        }
                    }
                    line {
                        x1: "{PAD_LEFT}",
                        x2: "{axis_end}",
                        y1: "{axis_y}",
                        y2: "{axis_y}",
                        class: "chart-axis",
                    }
                    if kind == ChartKind::Line {
                        polyline { class: "chart-line", points: "{line_points}" }
                        for (x, y) in plot.points.iter() {
                            circle {
                                cx: format!("{:.1}", x),
                                cy: format!("{:.1}", y),
                                r: "4",
                                class: "chart-dot",
                            }
                        }
                    } else {
                        for bar in plot.bars.iter() {
                            rect {
                                x: format!("{:.1}", bar.x),
                                y: format!("{:.1}", bar.y),
                                width: format!("{:.1}", bar.width),
                                height: format!("{:.1}", bar.height),
                                class: "chart-bar",
                            }
                        }
                    }
                    for (x, name) in plot.labels.iter() {
                        text {
                            x: format!("{:.1}", x),
                            y: "{label_y}",
                            class: "chart-label",
                            text_anchor: "middle",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
