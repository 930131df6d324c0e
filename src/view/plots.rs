//! Views for the plots app shell.

use leptos::*;

const PLOT_WIDTH: f64 = 400.0;
const PLOT_HEIGHT: f64 = 200.0;
const PLOT_PADDING: f64 = 20.0;

/// Cumulative paid amounts by development lag for one example accident year
pub const EXAMPLE_SERIES: &[(u32, f64)] = &[
    (12, 1_200.0),
    (24, 2_350.0),
    (36, 3_100.0),
    (48, 3_520.0),
    (60, 3_760.0),
    (72, 3_880.0),
    (84, 3_930.0),
];

/// Landing page for the plots app
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Ledger Analytics"</h1>
            <p>"See the " <a href="/plot">"example plot"</a> "."</p>
        </section>
    }
}

/// Line plot of [`EXAMPLE_SERIES`]
#[component]
pub fn DataPlotPage() -> impl IntoView {
    let points = polyline_points(EXAMPLE_SERIES);
    let view_box = format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT);

    view! {
        <section class="plot">
            <h1>"Data Plot"</h1>
            <figure id="data-plot">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox=view_box
                    role="img"
                    aria-label="Cumulative paid by development lag"
                >
                    <polyline
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        points=points
                    />
                </svg>
            </figure>
        </section>
    }
}

/// Scale a series into the plot box, y growing downwards
fn polyline_points(series: &[(u32, f64)]) -> String {
    if series.is_empty() {
        return String::new();
    }

    let (x_min, x_max) = bounds(series.iter().map(|(x, _)| f64::from(*x)));
    let (y_min, y_max) = bounds(series.iter().map(|(_, y)| *y));

    let inner_w = PLOT_WIDTH - 2.0 * PLOT_PADDING;
    let inner_h = PLOT_HEIGHT - 2.0 * PLOT_PADDING;

    series
        .iter()
        .map(|(x, y)| {
            let px = PLOT_PADDING + scale(f64::from(*x), x_min, x_max) * inner_w;
            let py = PLOT_HEIGHT - PLOT_PADDING - scale(*y, y_min, y_max) * inner_h;
            format!("{:.1},{:.1}", px, py)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn scale(v: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        (v - lo) / (hi - lo)
    } else {
        0.5
    }
}
