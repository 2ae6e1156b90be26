//! Plotly figure specifications for the state breakdown.
//!
//! The structs here serialise to the `{ data, layout }` shape that
//! `Plotly.react` accepts; the page hands them over untouched.

use crate::models::{RegionCount, StatusFilter};
use serde::Serialize;

const CHART_HEIGHT: u32 = 500;
const PIE_HOLE: f64 = 0.4;
const PIE_PULL: f64 = 0.03;
const BAR_TICK_ANGLE: i32 = -45;
const COLOR_SCALE: &str = "Viridis";
const BACKGROUND: &str = "white";
const GRID_COLOR: &str = "#ebf0f8";

const PIE_HOVER: &str =
    "<b>%{label}</b><br>Cases: %{customdata[0]}<br>Percentage: %{percent}<extra></extra>";
const BAR_HOVER: &str = "State=%{x}<br>Number of Cases=%{y}<extra></extra>";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    pub pie: Figure,
    pub bar: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub customdata: Vec<[u64; 1]>,
    pub hole: f64,
    pub pull: Vec<f64>,
    pub textposition: &'static str,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<u64>,
    pub marker: BarMarker,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<u64>,
    pub colorscale: &'static str,
    pub showscale: bool,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub height: u32,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub yanchor: &'static str,
    pub y: f64,
    pub xanchor: &'static str,
    pub x: f64,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    pub gridcolor: &'static str,
}

pub fn pie_title(filter: StatusFilter) -> String {
    match filter {
        StatusFilter::All => "Distribution of COVID-19 Cases by State".to_string(),
        status => format!("Distribution of {status} Cases by State"),
    }
}

pub fn bar_title(filter: StatusFilter) -> String {
    match filter {
        StatusFilter::All => "COVID-19 Cases by State".to_string(),
        status => format!("{status} Cases by State"),
    }
}

pub fn build_charts(filter: StatusFilter, breakdown: &[RegionCount]) -> ChartPair {
    ChartPair {
        pie: pie_chart(filter, breakdown),
        bar: bar_chart(filter, breakdown),
    }
}

pub fn pie_chart(filter: StatusFilter, breakdown: &[RegionCount]) -> Figure {
    let (labels, values) = split(breakdown);
    let trace = PieTrace {
        customdata: values.iter().map(|&count| [count]).collect(),
        pull: vec![PIE_PULL; labels.len()],
        labels,
        values,
        hole: PIE_HOLE,
        textposition: "none",
        hovertemplate: PIE_HOVER,
    };

    Figure {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: Title::new(pie_title(filter)),
            height: CHART_HEIGHT,
            paper_bgcolor: BACKGROUND,
            plot_bgcolor: BACKGROUND,
            showlegend: true,
            legend: Some(Legend {
                orientation: "v",
                yanchor: "middle",
                y: 0.5,
                xanchor: "left",
                x: 1.1,
                font: Font { size: 11 },
            }),
            margin: Margin {
                t: 50,
                l: 20,
                r: 200,
                b: 20,
            },
            xaxis: None,
            yaxis: None,
        },
    }
}

pub fn bar_chart(filter: StatusFilter, breakdown: &[RegionCount]) -> Figure {
    let (x, y) = split(breakdown);
    let trace = BarTrace {
        marker: BarMarker {
            color: y.clone(),
            colorscale: COLOR_SCALE,
            showscale: true,
            colorbar: ColorBar {
                title: Title::new("Cases"),
            },
        },
        x,
        y,
        hovertemplate: BAR_HOVER,
    };

    Figure {
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            title: Title::new(bar_title(filter)),
            height: CHART_HEIGHT,
            paper_bgcolor: BACKGROUND,
            plot_bgcolor: BACKGROUND,
            showlegend: false,
            legend: None,
            margin: Margin {
                t: 50,
                l: 50,
                r: 20,
                b: 120,
            },
            xaxis: Some(Axis {
                title: Title::new("State"),
                tickangle: Some(BAR_TICK_ANGLE),
                gridcolor: GRID_COLOR,
            }),
            yaxis: Some(Axis {
                title: Title::new("Number of Cases"),
                tickangle: None,
                gridcolor: GRID_COLOR,
            }),
        },
    }
}

fn split(breakdown: &[RegionCount]) -> (Vec<String>, Vec<u64>) {
    breakdown
        .iter()
        .map(|row| (row.region.clone(), row.count))
        .unzip()
}
