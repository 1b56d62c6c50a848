pub const TOOLS_HEADER: &str = "Available tools:";

pub fn tool_entry(name: &str, description: &str) -> String {
    format!("- {name}: {description}")
}

pub fn alerts_heading(state: &str) -> String {
    format!("Weather alerts for {state}:")
}

pub fn forecast_heading(latitude: f64, longitude: f64) -> String {
    format!(
        "Weather forecast for ({}, {}):",
        coordinate(latitude),
        coordinate(longitude)
    )
}

/// Whole-number coordinates keep one decimal place (`40.0`, not `40`).
fn coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_heading_keeps_decimals() {
        assert_eq!(
            forecast_heading(34.05, -118.25),
            "Weather forecast for (34.05, -118.25):"
        );
        assert_eq!(
            forecast_heading(40.0, -74.0),
            "Weather forecast for (40.0, -74.0):"
        );
        assert_eq!(forecast_heading(0.0, 12.5), "Weather forecast for (0.0, 12.5):");
    }
}
