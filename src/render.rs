//! Rendering surface abstraction and drawing styles.
//!
//! The chart never touches a physical canvas. It issues calls against the
//! [`Surface`] trait, and the host adapts them to its toolkit. The
//! [`RecordingSurface`] implementation captures the call stream for
//! headless hosts and tests.

use serde::{Deserialize, Serialize};

use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color with components in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channel values.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Dark gray, the default gridline color.
    pub const DARK_GRAY: Self = Self::from_rgba8(68, 68, 68, 255);
}

/// Line stroke styling in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Solid fill styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    /// Fill color.
    pub color: Color,
}

impl FillStyle {
    /// Create a solid fill.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Horizontal anchoring of drawn text around its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Position marks the left edge.
    Left,
    /// Position marks the center.
    Center,
    /// Position marks the right edge.
    Right,
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal anchoring.
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            align: TextAlign::Left,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A closed polygon in screen space.
///
/// The last vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<ScreenPoint>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    pub fn new(vertices: Vec<ScreenPoint>) -> Self {
        Self { vertices }
    }

    /// Access the vertices.
    pub fn vertices(&self) -> &[ScreenPoint] {
        &self.vertices
    }
}

/// Drawing primitives injected by the host.
///
/// Implementations translate these calls onto whatever canvas the host
/// owns; text alignment and baseline handling follow [`TextStyle`].
pub trait Surface {
    /// Draw a straight line between two points.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, style: &LineStyle);

    /// Fill a closed polygon.
    fn draw_path(&mut self, path: &Polygon, style: &FillStyle);

    /// Fill a rectangle.
    fn draw_rect(&mut self, rect: ScreenRect, style: &FillStyle);

    /// Fill a rounded rectangle.
    fn draw_rounded_rect(&mut self, rect: ScreenRect, radius_x: f32, radius_y: f32, style: &FillStyle);

    /// Draw a single line of text anchored at `position`.
    fn draw_text(&mut self, text: &str, position: ScreenPoint, style: &TextStyle);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// A line segment with its stroke style.
    Line {
        /// Drawn segment.
        segment: LineSegment,
        /// Stroke styling.
        style: LineStyle,
    },
    /// A filled polygon.
    Path {
        /// Drawn polygon.
        path: Polygon,
        /// Fill styling.
        style: FillStyle,
    },
    /// A filled rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Fill styling.
        style: FillStyle,
    },
    /// A filled rounded rectangle.
    RoundedRect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Horizontal corner radius.
        radius_x: f32,
        /// Vertical corner radius.
        radius_y: f32,
        /// Fill styling.
        style: FillStyle,
    },
    /// A text run.
    Text {
        /// Text content.
        text: String,
        /// Anchor position.
        position: ScreenPoint,
        /// Text styling.
        style: TextStyle,
    },
}

/// Surface that records every drawing call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<RenderCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the recorded commands in draw order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, style: &LineStyle) {
        self.commands.push(RenderCommand::Line {
            segment: LineSegment::new(from, to),
            style: *style,
        });
    }

    fn draw_path(&mut self, path: &Polygon, style: &FillStyle) {
        self.commands.push(RenderCommand::Path {
            path: path.clone(),
            style: *style,
        });
    }

    fn draw_rect(&mut self, rect: ScreenRect, style: &FillStyle) {
        self.commands.push(RenderCommand::Rect {
            rect,
            style: *style,
        });
    }

    fn draw_rounded_rect(&mut self, rect: ScreenRect, radius_x: f32, radius_y: f32, style: &FillStyle) {
        self.commands.push(RenderCommand::RoundedRect {
            rect,
            radius_x,
            radius_y,
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, style: &TextStyle) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            position,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_captures_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.draw_line(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(1.0, 1.0),
            &LineStyle::default(),
        );
        surface.draw_text("x", ScreenPoint::new(2.0, 2.0), &TextStyle::default());
        assert_eq!(surface.commands().len(), 2);
        assert!(matches!(surface.commands()[0], RenderCommand::Line { .. }));
        assert!(matches!(surface.commands()[1], RenderCommand::Text { .. }));
    }
}
