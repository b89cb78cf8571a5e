//! Vello scene drawn behind the egui editor: a dotted desk surface.

use kurbo::{Affine, BezPath, Point, Rect};
use peniko::{Color, Fill};
use vello::Scene;

/// Spacing of the desk dots in logical pixels.
const DOT_SPACING: f64 = 24.0;
/// Half-size of one dot.
const DOT_RADIUS: f64 = 1.2;

/// Builds the desk scene for a viewport.
pub struct Backdrop {
    scene: Scene,
    dot_color: Color,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            dot_color: Color::from_rgba8(160, 150, 140, 70),
        }
    }

    /// Rebuild the scene for a viewport of `width` x `height` physical pixels.
    pub fn build(&mut self, width: u32, height: u32, scale_factor: f64) -> &Scene {
        self.scene.reset();
        let transform = Affine::scale(scale_factor);
        let viewport = Rect::new(
            0.0,
            0.0,
            width as f64 / scale_factor,
            height as f64 / scale_factor,
        );
        let path = dot_grid(viewport);
        self.scene
            .fill(Fill::NonZero, transform, self.dot_color, None, &path);
        &self.scene
    }
}

/// Batched square dots covering `viewport`.
fn dot_grid(viewport: Rect) -> BezPath {
    let mut path = BezPath::new();
    let mut x = (viewport.x0 / DOT_SPACING).floor() * DOT_SPACING;
    while x <= viewport.x1 {
        let mut y = (viewport.y0 / DOT_SPACING).floor() * DOT_SPACING;
        while y <= viewport.y1 {
            path.move_to(Point::new(x - DOT_RADIUS, y - DOT_RADIUS));
            path.line_to(Point::new(x + DOT_RADIUS, y - DOT_RADIUS));
            path.line_to(Point::new(x + DOT_RADIUS, y + DOT_RADIUS));
            path.line_to(Point::new(x - DOT_RADIUS, y + DOT_RADIUS));
            path.close_path();
            y += DOT_SPACING;
        }
        x += DOT_SPACING;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn dot_count(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn test_dot_grid_covers_viewport() {
        // 0, 24, 48 on each axis.
        let path = dot_grid(Rect::new(0.0, 0.0, 48.0, 48.0));
        assert_eq!(dot_count(&path), 9);
    }

    #[test]
    fn test_empty_viewport_has_origin_dot() {
        let path = dot_grid(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(dot_count(&path), 1);
    }

    #[test]
    fn test_build_scene() {
        let mut backdrop = Backdrop::new();
        let _ = backdrop.build(200, 100, 2.0);
    }
}
