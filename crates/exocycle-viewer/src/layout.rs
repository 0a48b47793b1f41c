//! Data-to-screen layout for the scatter panels.
//!
//! Pure geometry, no rendering: each panel maps its data extent onto a
//! rectangle in world space, and the draw systems only read the result.

use bevy::math::Vec2;
use exocycle_logic::sweep::SweepPoint;

/// Fraction of the data span added on each side of an axis.
const AXIS_PADDING: f64 = 0.05;

/// Closed interval covered by one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Padded extent of the finite values. Non-finite values are ignored;
    /// a flat or empty series still gets a non-zero span.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return Self { min: 0.0, max: 1.0 };
        }
        if min == max {
            let half = if min == 0.0 { 0.5 } else { min.abs() * 0.5 };
            return Self {
                min: min - half,
                max: max + half,
            };
        }

        let pad = (max - min) * AXIS_PADDING;
        Self {
            min: min - pad,
            max: max + pad,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` within the extent, 0.0 at `min` and 1.0 at `max`.
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// Which sweep value goes on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Efficiency,
    Power,
}

impl Quantity {
    pub fn of(&self, point: &SweepPoint) -> f64 {
        match self {
            Quantity::Efficiency => point.efficiency,
            Quantity::Power => point.power,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Efficiency => "Efficiency",
            Quantity::Power => "Power Output",
        }
    }
}

/// A plotted marker: world position plus a 0..1 shade for coloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub shade: f32,
}

/// One scatter panel, fully laid out in world coordinates.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub title: String,
    pub x: Quantity,
    pub y: Quantity,
    pub center: Vec2,
    pub size: Vec2,
    pub x_extent: Extent,
    pub y_extent: Extent,
    pub markers: Vec<Marker>,
}

impl PanelLayout {
    /// Lay out `points` in a `size` rectangle centred on `center`.
    ///
    /// Markers are shaded by hot reservoir temperature. Points with a
    /// non-finite coordinate are not plotted.
    pub fn new(points: &[SweepPoint], x: Quantity, y: Quantity, center: Vec2, size: Vec2) -> Self {
        let x_extent = Extent::of(points.iter().map(|p| x.of(p)));
        let y_extent = Extent::of(points.iter().map(|p| y.of(p)));
        let hot_extent = Extent::of(points.iter().map(|p| p.hot));

        let origin = center - size / 2.0;
        let markers = points
            .iter()
            .filter(|p| x.of(p).is_finite() && y.of(p).is_finite())
            .map(|p| Marker {
                position: origin
                    + Vec2::new(
                        x_extent.normalize(x.of(p)) as f32 * size.x,
                        y_extent.normalize(y.of(p)) as f32 * size.y,
                    ),
                shade: hot_extent.normalize(p.hot).clamp(0.0, 1.0) as f32,
            })
            .collect();

        Self {
            title: format!("{} vs {}", x.label(), y.label()),
            x,
            y,
            center,
            size,
            x_extent,
            y_extent,
            markers,
        }
    }

    /// Bottom-left corner of the plotting rectangle.
    pub fn origin(&self) -> Vec2 {
        self.center - self.size / 2.0
    }
}

/// The two side-by-side panels: efficiency-vs-power and power-vs-efficiency.
pub fn side_by_side(points: &[SweepPoint], window: Vec2) -> [PanelLayout; 2] {
    let gutter = 120.0;
    let size = Vec2::new(
        (window.x - 3.0 * gutter) / 2.0,
        window.y - 2.0 * gutter,
    );
    let offset = (size.x + gutter) / 2.0;

    [
        PanelLayout::new(
            points,
            Quantity::Efficiency,
            Quantity::Power,
            Vec2::new(-offset, 0.0),
            size,
        ),
        PanelLayout::new(
            points,
            Quantity::Power,
            Quantity::Efficiency,
            Vec2::new(offset, 0.0),
            size,
        ),
    ]
}
