//! Inner views: one egui rendering per widget kind.
//!
//! Views receive the widget's props exactly as stored and only draw them.

use egui::{Color32, CornerRadius, RichText, Sense, Stroke, StrokeKind, Ui, vec2};
use folio_core::WidgetView;
use folio_core::widget::{
    BasicInfoProps, ExperienceTimeProps, ImageSectionProps, TextContentProps, TitleSectionProps,
};
use folio_widgets::theme;

/// Largest on-sheet image height.
const MAX_IMAGE_HEIGHT: f32 = 320.0;

/// Draw the view chosen for a widget.
pub fn show_widget_view(ui: &mut Ui, view: WidgetView<'_>) {
    match view {
        WidgetView::BasicInfo(props) => basic_info(ui, props),
        WidgetView::TitleSection(props) => title_section(ui, props),
        WidgetView::ExperienceTime(props) => experience_time(ui, props),
        WidgetView::TextContent(props) => text_content(ui, props),
        WidgetView::ImageSection(props) => image_section(ui, props),
    }
}

fn basic_info(ui: &mut Ui, props: &BasicInfoProps) {
    ui.vertical(|ui| {
        ui.label(RichText::new(&props.name).size(24.0).strong());
        if !props.job_title.is_empty() {
            ui.label(RichText::new(&props.job_title).size(15.0).color(theme::TEXT_MUTED));
        }
        let contacts: Vec<&str> = [&props.email, &props.phone, &props.location]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect();
        if !contacts.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new(contacts.join("  ·  ")).size(12.0));
        }
    });
}

fn title_section(ui: &mut Ui, props: &TitleSectionProps) {
    ui.vertical(|ui| {
        ui.label(RichText::new(&props.text).size(18.0).strong());
        let rect = ui.available_rect_before_wrap();
        let y = rect.top() + 2.0;
        ui.painter().line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            Stroke::new(2.0, theme::ACCENT),
        );
        ui.add_space(6.0);
    });
}

fn experience_time(ui: &mut Ui, props: &ExperienceTimeProps) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&props.title).size(14.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(props.date_range()).size(12.0).color(theme::TEXT_MUTED));
            });
        });
        if !props.organization.is_empty() {
            ui.label(RichText::new(&props.organization).size(13.0).italics());
        }
        if !props.description.is_empty() {
            ui.label(RichText::new(&props.description).size(12.0));
        }
    });
}

fn text_content(ui: &mut Ui, props: &TextContentProps) {
    ui.add(egui::Label::new(RichText::new(&props.content).size(13.0)).wrap());
}

fn image_section(ui: &mut Ui, props: &ImageSectionProps) {
    let (width, height) = props.fit_within(ui.available_width(), MAX_IMAGE_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(4), Color32::from_gray(243));
    painter.rect_stroke(
        rect,
        CornerRadius::same(4),
        Stroke::new(1.0, theme::BORDER),
        StrokeKind::Inside,
    );

    let caption = if !props.alt.is_empty() {
        props.alt.as_str()
    } else if !props.url.is_empty() {
        props.url.as_str()
    } else {
        "No image"
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(12.0),
        theme::TEXT_MUTED,
    );
}
