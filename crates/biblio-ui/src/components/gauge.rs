use leptos::prelude::*;

const SIZE: f32 = 120.0;
const STROKE_WIDTH: f32 = 8.0;
const ARC_DEGREES: f32 = 240.0;
// Starts the arc at the bottom left and sweeps clockwise through the top.
const ROTATION: f32 = 150.0;

/// Color of a ratio where higher is worse.
pub fn ratio_color(pct: f32) -> &'static str {
    if pct >= 50.0 {
        "#dc2626"
    } else if pct >= 20.0 {
        "#f59e0b"
    } else {
        "#0d9488"
    }
}

/// 240-degree SVG arc filled to `pct` (0 to 100).
#[component]
pub fn Gauge(pct: f32, label: String) -> impl IntoView {
    let radius = (SIZE - STROKE_WIDTH) / 2.0;
    let center = SIZE / 2.0;
    let circumference = 2.0 * std::f32::consts::PI * radius;
    let arcLength = circumference * (ARC_DEGREES / 360.0);

    let pct = pct.clamp(0.0, 100.0);
    let filledLength = arcLength * (pct / 100.0);

    let bgDasharray = format!("{arcLength} {}", circumference - arcLength);
    let fillDasharray = format!("{filledLength} {circumference}");
    let textTransform = format!("rotate({} {center} {center})", -ROTATION);

    view! {
        <div class="gauge-container">
            <svg
                width=format!("{SIZE}")
                height=format!("{SIZE}")
                viewBox=format!("0 0 {SIZE} {SIZE}")
                class="gauge-svg"
                style=format!("transform: rotate({ROTATION}deg)")
            >
                <circle
                    cx=format!("{center}")
                    cy=format!("{center}")
                    r=format!("{radius}")
                    class="gauge-bg"
                    stroke-width=format!("{STROKE_WIDTH}")
                    stroke-dasharray=bgDasharray
                />
                <circle
                    cx=format!("{center}")
                    cy=format!("{center}")
                    r=format!("{radius}")
                    class="gauge-fill"
                    stroke=ratio_color(pct)
                    stroke-width=format!("{STROKE_WIDTH}")
                    stroke-dasharray=fillDasharray
                />
                <text
                    x=format!("{center}")
                    y=format!("{}", center + 6.0)
                    class="gauge-text gauge-value"
                    transform=textTransform
                >
                    {format!("{pct:.0}%")}
                </text>
            </svg>
            <span class="gauge-label">{label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_escalates_with_ratio() {
        assert_eq!(ratio_color(0.0), "#0d9488");
        assert_eq!(ratio_color(25.0), "#f59e0b");
        assert_eq!(ratio_color(80.0), "#dc2626");
    }
}
