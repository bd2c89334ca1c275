use leptos::prelude::*;
use plan_types::{OnlinePoint, PlayersOnlineGraph as GraphData};

use crate::i18n::Translator;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;

/// SVG path data for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPaths {
    /// Polyline through the samples.
    pub line: String,
    /// `line` closed down to the x axis.
    pub area: String,
}

/// Maps samples into a `width` x `height` box with the y axis starting at zero.
///
/// Time runs left to right across the full width. A single sample is drawn as
/// a flat line across the box. Returns `None` for an empty series.
pub fn plot_paths(points: &[OnlinePoint], width: f64, height: f64) -> Option<PlotPaths> {
    let first = points.first()?;
    let last = points.last()?;

    let tMin = first.t;
    let tSpan = last.t.saturating_sub(tMin) as f64;
    let peak = points.iter().map(|p| p.v).max().unwrap_or(0) as f64;

    let project = |p: &OnlinePoint| {
        let x = if tSpan > 0.0 {
            p.t.saturating_sub(tMin) as f64 / tSpan * width
        } else {
            0.0
        };
        let y = if peak > 0.0 {
            height - p.v as f64 / peak * height
        } else {
            height
        };
        (x, y)
    };

    let mut coords: Vec<(f64, f64)> = points.iter().map(project).collect();
    if coords.len() == 1 {
        let (_, y) = coords[0];
        coords.push((width, y));
    }

    let line = coords
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let command = if i == 0 { "M" } else { "L" };
            format!("{command}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let (xFirst, _) = coords[0];
    let (xLast, _) = coords[coords.len() - 1];
    let area = format!("{line} L{xLast:.1},{height:.1} L{xFirst:.1},{height:.1} Z");

    Some(PlotPaths { line, area })
}

/// Area chart of players online over time.
#[component]
pub fn PlayersOnlineGraph(
    data: GraphData,
    #[prop(optional)] translator: Translator,
) -> impl IntoView {
    let color = data.color.clone();
    let sampleCount = data.points.len();
    let peak = data.peak().map(|p| p.v).unwrap_or(0);
    let latest = data.latest().map(|p| p.v).unwrap_or(0);

    let plot = match plot_paths(&data.points, WIDTH, HEIGHT) {
        Some(paths) => view! {
            <svg
                class="graph-svg"
                width="100%"
                height=format!("{HEIGHT}")
                viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            >
                <path class="graph-area" d=paths.area fill=color.clone() />
                <path class="graph-line" d=paths.line stroke=color fill="none" />
            </svg>
        }
            .into_any(),
        None => view! {
            <p class="graph-empty">{translator.t("html.label.noData")}</p>
        }
            .into_any(),
    };

    view! {
        <div class="graph-container">
            {plot}
            <div class="graph-stats">
                <div class="metric-row">
                    <span class="metric-label">{translator.t("html.label.latestPlayers")}</span>
                    <span class="metric-value">{latest}</span>
                </div>
                <div class="metric-row">
                    <span class="metric-label">{translator.t("html.label.peakPlayers")}</span>
                    <span class="metric-value">{peak}</span>
                </div>
                <div class="metric-row">
                    <span class="metric-label">{translator.t("html.label.samples")}</span>
                    <span class="metric-value">{sampleCount}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_points_into_box() {
        let points = [OnlinePoint::new(0, 5), OnlinePoint::new(1, 7)];
        let paths = plot_paths(&points, 100.0, 50.0).unwrap();

        assert_eq!(paths.line, "M0.0,14.3 L100.0,0.0");
        assert_eq!(paths.area, "M0.0,14.3 L100.0,0.0 L100.0,50.0 L0.0,50.0 Z");
    }

    #[test]
    fn empty_series_has_no_path() {
        assert_eq!(plot_paths(&[], 100.0, 50.0), None);
    }

    #[test]
    fn single_point_spans_the_width() {
        let paths = plot_paths(&[OnlinePoint::new(42, 3)], 100.0, 50.0).unwrap();
        assert_eq!(paths.line, "M0.0,0.0 L100.0,0.0");
    }

    #[test]
    fn all_zero_series_sits_on_the_axis() {
        let points = [OnlinePoint::new(0, 0), OnlinePoint::new(10, 0)];
        let paths = plot_paths(&points, 100.0, 50.0).unwrap();
        assert_eq!(paths.line, "M0.0,50.0 L100.0,50.0");
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let points = [OnlinePoint::new(i64::MIN, 1), OnlinePoint::new(i64::MAX, 2)];
        let paths = plot_paths(&points, 100.0, 100.0).unwrap();
        assert_eq!(paths.line, "M0.0,50.0 L100.0,0.0");
    }
}
