use filterkit_image::Pixel;

/// A color at a relative position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Straight (non-premultiplied) color of the stop.
    pub color: Pixel,
    /// Position in `[0, 1]`, 0 at the center and 1 at the radius.
    pub position: f32,
}

impl GradientStop {
    /// Create a new stop.
    pub const fn new(color: Pixel, position: f32) -> Self {
        Self { color, position }
    }
}

/// A radial gradient with linear interpolation between stops.
///
/// Positions before the first stop take its color and positions past the last
/// stop take the last color, so the gradient is clamped beyond its radius.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    center: (f32, f32),
    radius: f32,
    stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Create a gradient centered at `center` (x, y) in pixel units.
    ///
    /// Stops are sorted by position.
    pub fn new(center: (f32, f32), radius: f32, mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self {
            center,
            radius,
            stops,
        }
    }

    /// The gradient center.
    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// The gradient radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The stops, ordered by position.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at point `(x, y)`.
    pub fn sample(&self, x: f32, y: f32) -> Pixel {
        let (dx, dy) = (x - self.center.0, y - self.center.1);
        let t = if self.radius > 0.0 {
            ((dx * dx + dy * dy).sqrt() / self.radius).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.color_at(t)
    }

    /// The color at relative position `t`.
    pub fn color_at(&self, t: f32) -> Pixel {
        let Some(first) = self.stops.first() else {
            return Pixel::TRANSPARENT;
        };

        match self.stops.iter().position(|s| s.position >= t) {
            None => self.stops[self.stops.len() - 1].color,
            Some(0) => first.color,
            Some(i) => {
                let (a, b) = (&self.stops[i - 1], &self.stops[i]);
                let span = b.position - a.position;
                if span <= 0.0 {
                    return b.color;
                }
                lerp(a.color, b.color, (t - a.position) / span)
            }
        }
    }
}

fn lerp(a: Pixel, b: Pixel, f: f32) -> Pixel {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f).round().clamp(0.0, 255.0) as u8;
    Pixel::rgba(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}
