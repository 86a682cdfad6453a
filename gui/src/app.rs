use crate::debounce::{DebounceState, Debouncer};
use ascii_textr::{TextArtConfig, TextGrid, convert};
use eframe::egui;
use image::RgbaImage;
use std::time::{Duration, Instant};

/// Quiet period after the last slider change before regenerating
const REGENERATE_DELAY: Duration = Duration::from_millis(200);
/// How long the copy button reads "Copied!"
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);
/// Smallest font the preview will shrink to
const MIN_FONT_SIZE: f32 = 6.0;
const THUMBNAIL_WIDTH: f32 = 200.0;

/// Font size that fits `cols × rows` characters into the preview area
///
/// Uses the tighter of the per-column and per-row budgets with 10% padding,
/// but never goes below [`MIN_FONT_SIZE`].
pub fn fit_font_size(available: egui::Vec2, cols: u32, rows: u32) -> f32 {
    let by_width = available.x / cols.max(1) as f32;
    let by_height = available.y / rows.max(1) as f32;
    (by_width.min(by_height) * 0.9).max(MIN_FONT_SIZE)
}

/// Main application state for the ASCII text GUI
pub struct TextArtApp {
    /// Input image (decoded)
    input_image: Option<RgbaImage>,
    /// File name shown next to the thumbnail
    file_name: Option<String>,
    /// Texture handle for the thumbnail
    input_texture: Option<egui::TextureHandle>,

    /// Latest generated art and its plain text
    output: Option<TextGrid>,
    output_text: String,

    /// Configuration parameters
    config: TextArtConfig,
    /// Pending regeneration after parameter changes
    debouncer: Debouncer,

    /// When the text was last copied to the clipboard
    copied_at: Option<Instant>,
    /// Last processing time in milliseconds
    last_process_time_ms: f64,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for TextArtApp {
    fn default() -> Self {
        Self {
            input_image: None,
            file_name: None,
            input_texture: None,
            output: None,
            output_text: String::new(),
            config: TextArtConfig::default(),
            debouncer: Debouncer::new(REGENERATE_DELAY),
            copied_at: None,
            last_process_time_ms: 0.0,
            error_message: None,
        }
    }
}

impl TextArtApp {
    /// Create a new ASCII text application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load an image from file path
    pub fn load_image(&mut self, path: &std::path::Path) {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                log::info!(
                    "loaded {} ({}x{})",
                    path.display(),
                    rgba.width(),
                    rgba.height()
                );

                self.file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                self.input_image = Some(rgba);
                self.input_texture = None; // Clear old texture
                self.error_message = None;
                self.debouncer.trigger(Instant::now());
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", path.display(), e);
                self.error_message = Some(format!("Failed to load image: {}", e));
            }
        }
    }

    /// Save the generated text to file
    pub fn save_text(&self, path: &std::path::Path) -> Result<(), String> {
        if self.output.is_none() {
            return Err("No ASCII art to save".to_string());
        }
        std::fs::write(path, &self.output_text).map_err(|e| format!("Failed to save: {}", e))?;
        log::info!("saved text to {}", path.display());
        Ok(())
    }

    /// Regenerate the art from the current image and configuration
    ///
    /// Runs to completion on the UI thread, so the newest configuration is
    /// always the one on screen.
    fn process(&mut self) {
        self.debouncer.cancel();

        let Some(ref input) = self.input_image else {
            return;
        };

        let start = Instant::now();
        match convert(input, &self.config) {
            Ok(art) => {
                self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.output_text = art.to_text();
                self.output = Some(art);
                self.copied_at = None;
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("conversion failed: {}", e);
                self.error_message = Some(format!("Invalid config: {}", e));
            }
        }
    }

    /// Copy the current text to the clipboard
    fn copy_output(&mut self, ctx: &egui::Context) {
        ctx.copy_text(self.output_text.clone());
        self.copied_at = Some(Instant::now());
        ctx.request_repaint_after(COPIED_FEEDBACK);
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        // Source image
        if ui.button("Upload Image...").clicked() {
            self.pick_image();
        }
        if let Some(ref name) = self.file_name {
            ui.label(name);
        }
        if let Some(img) = self.input_image.as_ref() {
            if self.input_texture.is_none() {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [img.width() as usize, img.height() as usize],
                    img.as_raw(),
                );
                self.input_texture = Some(ui.ctx().load_texture(
                    "input",
                    color_image,
                    egui::TextureOptions::default(),
                ));
            }
            if let Some(tex) = &self.input_texture {
                let size = tex.size_vec2();
                let scale = (THUMBNAIL_WIDTH / size.x).min(1.0);
                ui.image((tex.id(), size * scale));
            }
        }

        ui.add_space(8.0);

        ui.collapsing("Resolution", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.config.output_width, 10..=400).text("Width"))
                .on_hover_text("Characters per row")
                .changed();
        });

        ui.add_space(8.0);

        ui.collapsing("Tone", |ui| {
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.contrast, 0.1..=3.0)
                        .fixed_decimals(3)
                        .text("Contrast"),
                )
                .on_hover_text("1.000 leaves luminance unchanged")
                .changed();

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.density, 0.01..=1.0)
                        .fixed_decimals(2)
                        .text("Density"),
                )
                .on_hover_text("Fraction of the character ramp in use")
                .changed();
        });

        ui.add_space(8.0);

        ui.collapsing("Edge Detection", |ui| {
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.edge_threshold, 0..=255)
                        .text("Edge Threshold"),
                )
                .on_hover_text("Gradient needed for a line glyph; 255 disables edges")
                .changed();
        });

        ui.add_space(16.0);
        ui.separator();

        ui.add_enabled_ui(self.input_image.is_some(), |ui| {
            if ui.button("Generate").clicked() {
                self.process();
            }
        });

        if self.last_process_time_ms > 0.0 {
            ui.label(format!("Last process: {:.1} ms", self.last_process_time_ms));
        }

        changed
    }

    fn pick_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
            .pick_file()
        {
            self.load_image(&path);
        }
    }

    /// Display the generated text sized to fit the preview area
    fn display_output(&mut self, ui: &mut egui::Ui) {
        let Some(ref art) = self.output else {
            ui.label("No image loaded");
            return;
        };
        let (cols, rows) = (art.width(), art.height());

        ui.horizontal(|ui| {
            ui.label(format!("{}x{} characters", cols, rows));

            let copied = self
                .copied_at
                .is_some_and(|at| at.elapsed() < COPIED_FEEDBACK);
            let label = if copied { "Copied!" } else { "Copy Text" };
            if ui.button(label).clicked() {
                self.copy_output(ui.ctx());
            }
        });
        ui.separator();

        let font_size = fit_font_size(ui.available_size(), cols, rows);
        egui::ScrollArea::both().show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&self.output_text)
                        .monospace()
                        .size(font_size),
                )
                .wrap_mode(egui::TextWrapMode::Extend),
            );
        });
    }
}

impl eframe::App for TextArtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.pick_image();
                        ui.close();
                    }

                    if ui.button("Save Text...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt"])
                            .set_file_name("ascii_art.txt")
                            .save_file()
                            && let Err(e) = self.save_text(&path)
                        {
                            self.error_message = Some(e);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.error_message = Some(
                            "ASCII Textr\nEdge-aware image to text converter\n\nBuilt with Rust + egui".to_string()
                        );
                        ui.close();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.debouncer.trigger(Instant::now());
                    }
                });
            });

        // Regenerate once the sliders have been quiet long enough
        match self.debouncer.poll(Instant::now()) {
            DebounceState::Fire => self.process(),
            DebounceState::Waiting(remaining) => ctx.request_repaint_after(remaining),
            DebounceState::Idle => {}
        }

        // Central panel: text display
        egui::CentralPanel::default().show(ctx, |ui| {
            // Show error message if any
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            self.display_output(ui);
        });
    }
}
