//! Multi-series line chart of the projected timeline.
//!
//! Rendered as plain SVG. One line per [`Metric`], a 0..100 y-axis with a
//! dashed grid, the projection year on the x-axis, and a hover readout.

use leptos::prelude::*;

use crate::results::{Metric, TimelinePoint};

const Y_TICKS: [u8; 5] = [0, 25, 50, 75, 100];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 350.0,
            pad_left: 56.0,
            pad_right: 16.0,
            pad_top: 16.0,
            pad_bottom: 44.0,
        }
    }
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.pad_top - self.pad_bottom
    }

    /// Points are spread evenly; a single point sits in the middle.
    pub fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    pub fn y(&self, value: u8) -> f64 {
        let v = f64::from(value.min(100));
        self.pad_top + self.plot_height() * (1.0 - v / 100.0)
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    pub fn right(&self) -> f64 {
        self.width - self.pad_right
    }
}

pub fn series_points(timeline: &[TimelinePoint], metric: Metric, layout: &ChartLayout) -> Vec<(f64, f64)> {
    let count = timeline.len();
    timeline
        .iter()
        .enumerate()
        .map(|(i, p)| (layout.x(i, count), layout.y(p.get(metric))))
        .collect()
}

/// SVG `points` attribute for a polyline.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn TimelineChart(timeline: Vec<TimelinePoint>) -> impl IntoView {
    let layout = ChartLayout::default();
    let (hovered, set_hovered) = signal::<Option<usize>>(None);
    let count = timeline.len();

    let grid = Y_TICKS
        .iter()
        .map(|&tick| {
            let y = layout.y(tick);
            view! {
                <g class="chart-grid">
                    <line
                        x1=layout.pad_left.to_string()
                        x2=layout.right().to_string()
                        y1=y.to_string()
                        y2=y.to_string()
                        stroke-dasharray="3 3"
                    />
                    <text class="chart-tick" x=(layout.pad_left - 8.0).to_string() y=(y + 4.0).to_string() text-anchor="end">
                        {tick}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let x_labels = timeline
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <text
                    class="chart-tick"
                    x=layout.x(i, count).to_string()
                    y=(layout.bottom() + 18.0).to_string()
                    text-anchor="middle"
                >
                    {p.year}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let series = Metric::ALL
        .iter()
        .map(|&metric| {
            let points = series_points(&timeline, metric, &layout);
            let dots = points
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    view! {
                        <circle
                            class="chart-dot"
                            cx=x.to_string()
                            cy=y.to_string()
                            r=move || if hovered.get() == Some(i) { "8" } else { "5" }
                            fill=metric.color()
                            on:mouseenter=move |_| set_hovered.set(Some(i))
                            on:mouseleave=move |_| set_hovered.set(None)
                        />
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <g class="chart-series">
                    <polyline
                        points=polyline(&points)
                        fill="none"
                        stroke=metric.color()
                        stroke-width="3"
                        stroke-linejoin="round"
                    />
                    {dots}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let legend = Metric::ALL
        .iter()
        .map(|&metric| {
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style:background-color=metric.color()></span>
                    {metric.label()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    let readout_points = timeline.clone();

    view! {
        <div class="timeline-chart">
            <svg
                class="chart-svg"
                viewBox=format!("0 0 {} {}", layout.width, layout.height)
                preserveAspectRatio="xMidYMid meet"
            >
                {grid}
                <line
                    class="chart-axis"
                    x1=layout.pad_left.to_string()
                    x2=layout.right().to_string()
                    y1=layout.bottom().to_string()
                    y2=layout.bottom().to_string()
                />
                {x_labels}
                <text
                    class="chart-axis-label"
                    x=(layout.pad_left + (layout.right() - layout.pad_left) / 2.0).to_string()
                    y=(layout.height - 4.0).to_string()
                    text-anchor="middle"
                >
                    "Years"
                </text>
                <text
                    class="chart-axis-label"
                    x="14"
                    y=(layout.pad_top + (layout.bottom() - layout.pad_top) / 2.0).to_string()
                    text-anchor="middle"
                    transform=format!(
                        "rotate(-90 14 {})",
                        layout.pad_top + (layout.bottom() - layout.pad_top) / 2.0
                    )
                >
                    "Health Score"
                </text>
                {series}
            </svg>
            <div class="chart-readout">
                {move || {
                    hovered
                        .get()
                        .and_then(|i| readout_points.get(i).copied())
                        .map(|p| {
                            view! {
                                <span class="readout-year">{format!("Year {}", p.year)}</span>
                                {Metric::ALL
                                    .iter()
                                    .map(|&m| view! {
                                        <span class="readout-value" style:color=m.color()>
                                            {format!("{}: {}", m.label(), p.get(m))}
                                        </span>
                                    })
                                    .collect::<Vec<_>>()}
                            }
                        })
                }}
            </div>
            <div class="chart-legend">{legend}</div>
        </div>
    }
}
