use std::f64::consts::PI;

use leptos::prelude::*;

const RADIUS: f64 = 52.0;
const STROKE: f64 = 10.0;

/// Fraction of the ring to fill, clamped to 0..=1.
pub fn gauge_fraction(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// `stroke-dashoffset` for a ring of [`RADIUS`] showing `value` out of `max`.
pub fn dash_offset(value: f64, max: f64) -> f64 {
    let circumference = 2.0 * PI * RADIUS;
    circumference * (1.0 - gauge_fraction(value, max))
}

/// Circular gauge with the value in the middle and a label underneath.
#[component]
pub fn Gauge(
    value: u8,
    #[prop(default = 100)] max: u8,
    #[prop(into)] label: String,
    /// Any CSS color, e.g. "oklch(0.6 0.2 25)"
    #[prop(into)]
    color: String,
) -> impl IntoView {
    let circumference = 2.0 * PI * RADIUS;
    let offset = dash_offset(value as f64, max as f64);

    view! {
        <div class="gauge">
            <svg class="gauge-svg" viewBox="0 0 120 120" role="img">
                <circle
                    class="gauge-track"
                    cx="60"
                    cy="60"
                    r=RADIUS.to_string()
                    fill="none"
                    stroke-width=STROKE.to_string()
                />
                <circle
                    class="gauge-fill"
                    cx="60"
                    cy="60"
                    r=RADIUS.to_string()
                    fill="none"
                    stroke=color
                    stroke-width=STROKE.to_string()
                    stroke-linecap="round"
                    stroke-dasharray=format!("{:.2}", circumference)
                    stroke-dashoffset=format!("{:.2}", offset)
                    transform="rotate(-90 60 60)"
                />
            </svg>
            <div class="gauge-value">{value}</div>
            <div class="gauge-label">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_clamps() {
        assert_eq!(gauge_fraction(50.0, 100.0), 0.5);
        assert_eq!(gauge_fraction(150.0, 100.0), 1.0);
        assert_eq!(gauge_fraction(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_full_gauge_has_no_offset() {
        assert!(dash_offset(100.0, 100.0).abs() < 1e-9);
        assert!((dash_offset(0.0, 100.0) - 2.0 * PI * RADIUS).abs() < 1e-9);
    }
}
