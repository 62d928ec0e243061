use std::path::{Path, PathBuf};

use dark_light::Mode;
use eframe::egui::{self, Button, CentralPanel, ComboBox, Context, Frame, Label, Margin, RichText, ThemePreference, Ui, Vec2, Visuals};
use egui_material_icons::icons;
use egui_notify::Toasts;
use fully_pub::fully_pub;
use log::{error, info};
use rand::Rng;
use segment_progress_bar::{BarStyle, BarVariant, Segment, SegmentProgressBar};
use strum::IntoEnumIterator;

pub const PROGRESS_STORAGE_KEY: &str = "progress";
pub const VARIANT_STORAGE_KEY: &str = "variant";
pub const THEME_STORAGE_KEY: &str = "theme";

const SEGMENT_COLORS: [&str; 3] = ["#fccb3c", "#fb9d15", "#f96712"];

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let style_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(480.0, 240.0))
            .with_min_inner_size(Vec2::new(320.0, 200.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Segment Progress Bar",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, style_path.as_deref())))),
    )
}

#[fully_pub]
struct DemoApp {
    bar: SegmentProgressBar,
    theme_preference: ThemePreference,
    was_complete: bool, // So the "goal reached" toast fires once per crossing.
    toasts: Toasts,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>, style_path: Option<&Path>) -> Self {
        egui_material_icons::initialize(&cc.egui_ctx);

        let mut toasts = Toasts::default();

        let mut style = match style_path.map(BarStyle::load) {
            Some(Ok(style)) => {
                info!("Loaded bar style from {:?}", style_path);
                style
            }
            Some(Err(e)) => {
                error!("{}", e);
                toasts.error("Could not load the bar style, using the default.");
                BarStyle::default()
            }
            None => BarStyle::default(),
        };

        let storage = cc.storage;
        let saved_variant = storage
            .and_then(|s| s.get_string(VARIANT_STORAGE_KEY))
            .and_then(|v| serde_json::from_str::<BarVariant>(&v).ok());
        if let Some(variant) = saved_variant {
            style.variant = variant;
        }

        let saved_progress = storage
            .and_then(|s| s.get_string(PROGRESS_STORAGE_KEY))
            .and_then(|p| p.parse::<f32>().ok())
            .unwrap_or(0.0);

        let theme_preference = storage
            .and_then(|s| s.get_string(THEME_STORAGE_KEY))
            .map(|t| parse_theme_preference(&t))
            .unwrap_or(ThemePreference::System);

        let mut bar = SegmentProgressBar::new(style);
        bar.set_data(&sample_segments());
        bar.progress(saved_progress);

        Self {
            was_complete: bar.is_complete(),
            bar,
            theme_preference,
            toasts,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx, &self.theme_preference);

        CentralPanel::default().show(ctx, |ui| {
            Frame::new().inner_margin(Margin::symmetric(24, 24)).show(ui, |ui| {
                ui.add(unselectable_label(RichText::new("Daily goal").heading()));
                ui.add_space(16.0);

                ui.add(&mut self.bar);

                ui.add_space(16.0);
                controls_ui(ui, self);

                ui.add_space(8.0);
                settings_ui(ui, self);
            });
        });

        let is_complete = self.bar.is_complete();
        if is_complete && !self.was_complete {
            self.toasts.success("Goal reached!");
        }
        self.was_complete = is_complete;

        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(PROGRESS_STORAGE_KEY, self.bar.current_progress().to_string());
        storage.set_string(THEME_STORAGE_KEY, format!("{:?}", self.theme_preference));

        match serde_json::to_string(&self.bar.style().variant) {
            Ok(variant) => storage.set_string(VARIANT_STORAGE_KEY, variant),
            Err(e) => error!("Failed to save bar variant: {}", e),
        }
    }
}

fn controls_ui(ui: &mut Ui, app: &mut DemoApp) {
    ui.horizontal(|ui| {
        let can_go_down = app.bar.current_progress() > 0.0;
        let response = ui.add_enabled(can_go_down, Button::new(icons::ICON_REMOVE)).on_hover_text("Minus one");
        if response.clicked() {
            app.bar.progress_minus();
        }

        let can_go_up = app.bar.current_progress() < app.bar.total_magnitude();
        let response = ui.add_enabled(can_go_up, Button::new(icons::ICON_ADD)).on_hover_text("Plus one");
        if response.clicked() {
            app.bar.progress_plus();
        }

        ui.add(unselectable_label(format!(
            "{} / {}",
            app.bar.current_progress(),
            app.bar.total_magnitude()
        )));

        ui.separator();

        let response = ui.button(icons::ICON_SHUFFLE).on_hover_text("Random segments");
        if response.clicked() {
            let segments = random_segments();
            info!("Shuffled to {} segments", segments.len());
            app.bar.set_data(&segments);
        }

        let response = ui.button(icons::ICON_RESTART_ALT).on_hover_text("Reset");
        if response.clicked() {
            app.bar.progress(0.0);
        }
    });
}

fn settings_ui(ui: &mut Ui, app: &mut DemoApp) {
    ui.horizontal(|ui| {
        let mut variant = app.bar.style().variant;
        ComboBox::from_label("Style")
            .selected_text(variant.to_string())
            .show_ui(ui, |ui| {
                for v in BarVariant::iter() {
                    ui.selectable_value(&mut variant, v, v.to_string());
                }
            });

        if variant != app.bar.style().variant {
            info!("Switching bar variant to {}", variant);
            let style = BarStyle {
                variant,
                ..app.bar.style().clone()
            };
            app.bar.set_style(style);
        }

        ui.separator();

        ui.radio_value(&mut app.theme_preference, ThemePreference::System, "System");
        ui.radio_value(&mut app.theme_preference, ThemePreference::Light, "Light");
        ui.radio_value(&mut app.theme_preference, ThemePreference::Dark, "Dark");
    });
}

fn apply_theme(ctx: &Context, preference: &ThemePreference) {
    let visuals = match preference {
        ThemePreference::Dark => Visuals::dark(),
        ThemePreference::Light => Visuals::light(),
        ThemePreference::System => match dark_light::detect() {
            Ok(Mode::Light) => Visuals::light(),
            _ => Visuals::dark(), // Covers both Mode::Dark, Mode::Unspecified, and errors
        },
    };
    ctx.set_visuals(visuals);
}

fn parse_theme_preference(text: &str) -> ThemePreference {
    match text {
        "Dark" => ThemePreference::Dark,
        "Light" => ThemePreference::Light,
        _ => ThemePreference::System,
    }
}

fn sample_segments() -> Vec<Segment> {
    SEGMENT_COLORS
        .iter()
        .filter_map(|hex| match Segment::from_hex(3.0, hex) {
            Ok(segment) => Some(segment),
            Err(e) => {
                error!("{}", e);
                None
            }
        })
        .collect()
}

fn random_segments() -> Vec<Segment> {
    let mut rng = rand::rng();
    let count = rng.random_range(1..=5);

    (0..count)
        .map(|i| {
            let magnitude = rng.random_range(1..=5) as f32;
            let color = egui::Color32::from_rgb(
                rng.random_range(0x80..=0xff),
                rng.random_range(0x40..=0xd0),
                (i * 40) as u8,
            );
            Segment::new(magnitude, color)
        })
        .collect()
}

fn unselectable_label(text: impl Into<egui::WidgetText>) -> Label {
    Label::new(text).selectable(false)
}
