use std::fmt::{self, Display};

use crate::error::{Result, TokenError};

pub const DEFAULT_GRADIENT_ANGLE: f32 = 135.0;

/// One color stop. Positions are percentages and are trusted as given.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub color: String,
    pub position: f32,
}

impl GradientStop {
    pub fn new(color: impl Display, position: f32) -> Self {
        Self {
            color: color.to_string(),
            position,
        }
    }
}

impl Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.position)
    }
}

fn join_stops(stops: &[GradientStop]) -> String {
    stops
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `linear-gradient(<angle>deg, <stops>)`. An empty stop list is a
/// programming error and is reported instead of rendering nothing.
pub fn linear_gradient(stops: &[GradientStop], angle: Option<f32>) -> Result<String> {
    if stops.is_empty() {
        return Err(TokenError::EmptyGradient);
    }
    let angle = angle.unwrap_or(DEFAULT_GRADIENT_ANGLE);
    Ok(format!("linear-gradient({angle}deg, {})", join_stops(stops)))
}

pub fn two_tone_gradient(from: impl Display, to: impl Display) -> String {
    two_tone_gradient_at(from, to, DEFAULT_GRADIENT_ANGLE)
}

pub fn two_tone_gradient_at(from: impl Display, to: impl Display, angle: f32) -> String {
    let stops = [GradientStop::new(from, 0.0), GradientStop::new(to, 100.0)];
    format!("linear-gradient({angle}deg, {})", join_stops(&stops))
}

pub fn three_tone_gradient(from: impl Display, via: impl Display, to: impl Display) -> String {
    three_tone_gradient_at(from, via, to, DEFAULT_GRADIENT_ANGLE)
}

pub fn three_tone_gradient_at(
    from: impl Display,
    via: impl Display,
    to: impl Display,
    angle: f32,
) -> String {
    let stops = [
        GradientStop::new(from, 0.0),
        GradientStop::new(via, 50.0),
        GradientStop::new(to, 100.0),
    ];
    format!("linear-gradient({angle}deg, {})", join_stops(&stops))
}

/// `radial-gradient(<shape>, <stops>)`, e.g. shape `circle at 30% 30%`.
pub fn radial_gradient(stops: &[GradientStop], shape: &str) -> Result<String> {
    if stops.is_empty() {
        return Err(TokenError::EmptyGradient);
    }
    Ok(format!("radial-gradient({shape}, {})", join_stops(stops)))
}
