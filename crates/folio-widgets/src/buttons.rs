//! Button components: the corner delete button and palette buttons.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, Id, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, Ui, Vec2,
};

use crate::colors::with_opacity;
use crate::{sizing, theme};

/// Style configuration for the delete button.
#[derive(Clone)]
pub struct DeleteButtonStyle {
    /// Button size
    pub size: Vec2,
    /// Glyph size (should be smaller than button size)
    pub icon_size: Vec2,
    /// Corner radius
    pub corner_radius: u8,
    /// Background color
    pub bg_color: Color32,
    /// Background color when hovered
    pub hover_color: Color32,
    /// Outline color
    pub border_color: Color32,
    /// Glyph color
    pub icon_color: Color32,
    /// Glyph color when hovered
    pub hover_icon_color: Color32,
}

impl Default for DeleteButtonStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::MEDIUM, sizing::MEDIUM),
            icon_size: vec2(16.0, 16.0),
            corner_radius: sizing::CORNER_RADIUS,
            bg_color: Color32::WHITE,
            hover_color: theme::HOVER_BG,
            border_color: theme::BORDER,
            icon_color: Color32::from_gray(80),
            hover_icon_color: theme::DANGER,
        }
    }
}

/// Outline icon button with a trash-bin glyph, placed at a fixed rect.
///
/// The button is always interactive; `opacity` only affects painting so
/// a caller can fade it in on hover.
pub struct DeleteButton<'a> {
    id: Id,
    tooltip: &'a str,
    opacity: f32,
    style: DeleteButtonStyle,
}

impl<'a> DeleteButton<'a> {
    /// Create a new delete button with a unique id.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            tooltip: "Delete",
            opacity: 1.0,
            style: DeleteButtonStyle::default(),
        }
    }

    /// Paint opacity (0.0 = invisible, 1.0 = opaque).
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Rect of the button inset from the top-right corner of `container`.
    pub fn corner_rect(&self, container: Rect, inset: f32) -> Rect {
        Rect::from_min_size(
            Pos2::new(container.right() - inset - self.style.size.x, container.top() + inset),
            self.style.size,
        )
    }

    /// Show the button at `rect` and return its response.
    pub fn show_at(self, ui: &mut Ui, rect: Rect) -> Response {
        let response = ui.interact(rect, self.id, Sense::click());

        if ui.is_rect_visible(rect) && self.opacity > 0.0 {
            let hovered = response.hovered();
            let bg = if hovered {
                self.style.hover_color
            } else {
                self.style.bg_color
            };
            let icon_color = if hovered {
                self.style.hover_icon_color
            } else {
                self.style.icon_color
            };

            let painter = ui.painter();
            let radius = CornerRadius::same(self.style.corner_radius);
            painter.rect_filled(rect, radius, with_opacity(bg, self.opacity));
            painter.rect_stroke(
                rect,
                radius,
                Stroke::new(1.0, with_opacity(self.style.border_color, self.opacity)),
                StrokeKind::Inside,
            );

            let icon_rect = Rect::from_center_size(rect.center(), self.style.icon_size);
            paint_trash_glyph(ui, icon_rect, with_opacity(icon_color, self.opacity));
        }

        if self.opacity > 0.0 {
            response
                .on_hover_text(self.tooltip)
                .on_hover_cursor(CursorIcon::PointingHand)
        } else {
            response
        }
    }
}

/// Trash bin outline: lid, handle, and a body with two ribs.
fn paint_trash_glyph(ui: &Ui, rect: Rect, color: Color32) {
    let painter = ui.painter();
    let stroke = Stroke::new(1.4, color);
    let w = rect.width();
    let h = rect.height();

    let lid_y = rect.top() + h * 0.22;
    painter.line_segment(
        [Pos2::new(rect.left(), lid_y), Pos2::new(rect.right(), lid_y)],
        stroke,
    );

    let handle = Rect::from_min_max(
        Pos2::new(rect.left() + w * 0.35, rect.top()),
        Pos2::new(rect.right() - w * 0.35, lid_y),
    );
    painter.rect_stroke(handle, CornerRadius::same(1), stroke, StrokeKind::Middle);

    let body = Rect::from_min_max(
        Pos2::new(rect.left() + w * 0.15, lid_y),
        Pos2::new(rect.right() - w * 0.15, rect.bottom()),
    );
    painter.rect_stroke(body, CornerRadius::same(2), stroke, StrokeKind::Middle);

    for t in [0.4, 0.6] {
        let x = rect.left() + w * t;
        painter.line_segment(
            [
                Pos2::new(x, lid_y + h * 0.18),
                Pos2::new(x, rect.bottom() - h * 0.14),
            ],
            stroke,
        );
    }
}

/// A full-width palette entry that adds a widget.
pub struct PaletteButton<'a> {
    label: &'a str,
    hint: Option<&'a str>,
}

impl<'a> PaletteButton<'a> {
    /// Create a new palette button.
    pub fn new(label: &'a str) -> Self {
        Self { label, hint: None }
    }

    /// Add a muted hint shown on the right.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width(), 30.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::from_gray(250)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );

            // Plus sign
            let plus_center = Pos2::new(rect.left() + 14.0, rect.center().y);
            let plus_stroke = Stroke::new(1.5, theme::ACCENT);
            ui.painter().line_segment(
                [plus_center - vec2(4.0, 0.0), plus_center + vec2(4.0, 0.0)],
                plus_stroke,
            );
            ui.painter().line_segment(
                [plus_center - vec2(0.0, 4.0), plus_center + vec2(0.0, 4.0)],
                plus_stroke,
            );

            ui.painter().text(
                Pos2::new(rect.left() + 26.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(13.0),
                theme::TEXT,
            );

            if let Some(hint) = self.hint {
                ui.painter().text(
                    Pos2::new(rect.right() - 8.0, rect.center().y),
                    Align2::RIGHT_CENTER,
                    hint,
                    egui::FontId::proportional(11.0),
                    theme::TEXT_MUTED,
                );
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
