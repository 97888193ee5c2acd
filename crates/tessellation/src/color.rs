use crate::geom::ArcKind;

/// An RGB color with components in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Color of circle arcs when arcs are colorized.
    pub const CIRCLE: Self = Color::rgb(1.0, 0.0, 0.0);
    /// Color of ellipse arcs when arcs are colorized.
    pub const ELLIPSE: Self = Color::rgb(0.0, 0.0, 1.0);
    /// Color of all arcs when they are not colorized.
    pub const NEUTRAL: Self = Color::rgb(0.0, 0.0, 0.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Weighted mix of two colors, `other` having weight `w`.
    #[inline]
    pub fn mix(self, other: Self, w: f32) -> Self {
        let w1 = 1.0 - w;
        Color {
            r: w1 * self.r + w * other.r,
            g: w1 * self.g + w * other.g,
            b: w1 * self.b + w * other.b,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Formats as `#rrggbb`.
    #[cfg(feature = "std")]
    pub fn to_hex(self) -> std::string::String {
        let c = |v: f32| (v.max(0.0).min(1.0) * 255.0 + 0.5) as u8;
        std::format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }
}

/// Whether arcs are drawn with a color depending on how they were
/// constructed, or all in the same neutral color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ColorMode {
    /// Circle arcs in red, ellipse arcs in blue.
    Colorized,
    /// Everything in `Color::NEUTRAL`.
    Neutral,
}

impl ColorMode {
    pub fn arc_color(self, kind: ArcKind) -> Color {
        match (self, kind) {
            (ColorMode::Neutral, _) => Color::NEUTRAL,
            (ColorMode::Colorized, ArcKind::Circle) => Color::CIRCLE,
            (ColorMode::Colorized, ArcKind::Ellipse) => Color::ELLIPSE,
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Colorized
    }
}

#[test]
fn arc_colors() {
    assert_eq!(ColorMode::Colorized.arc_color(ArcKind::Circle), Color::CIRCLE);
    assert_eq!(ColorMode::Colorized.arc_color(ArcKind::Ellipse), Color::ELLIPSE);
    assert_eq!(ColorMode::Neutral.arc_color(ArcKind::Circle), Color::NEUTRAL);
    assert_eq!(ColorMode::Neutral.arc_color(ArcKind::Ellipse), Color::NEUTRAL);
}

#[test]
fn mix() {
    assert_eq!(Color::CIRCLE.mix(Color::ELLIPSE, 0.0), Color::CIRCLE);
    assert_eq!(Color::CIRCLE.mix(Color::ELLIPSE, 1.0), Color::ELLIPSE);
    assert_eq!(
        Color::CIRCLE.mix(Color::ELLIPSE, 0.25),
        Color::rgb(0.75, 0.0, 0.25)
    );
}

#[cfg(feature = "std")]
#[test]
fn hex() {
    assert_eq!(Color::CIRCLE.to_hex(), "#ff0000");
    assert_eq!(Color::ELLIPSE.to_hex(), "#0000ff");
    assert_eq!(Color::rgb(0.5, 0.5, 0.5).to_hex(), "#808080");
}
