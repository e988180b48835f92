use super::{Screen, Storefront};
use crate::api::Currency;
use crate::catalog::ListingStatus;
use crate::upload::{Field, NotificationKind};
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;
use tracing::warn;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const ERROR: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

impl Storefront {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for screen in Screen::ALL {
                    if ui
                        .selectable_label(self.screen == screen, screen.title())
                        .clicked()
                    {
                        self.show(screen);
                    }
                }
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(6.0);
                self.render_footer(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.screen {
                Screen::Menu => self.render_menu(ui),
                Screen::Admin => self.render_admin(ui),
            });
        });
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.heading("Menu");
        });
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let mut selected = self.catalog.currency();
            egui::ComboBox::from_label("Currency")
                .selected_text(selected.code())
                .show_ui(ui, |ui| {
                    for currency in Currency::ALL {
                        ui.selectable_value(&mut selected, currency, currency.code());
                    }
                });
            if selected != self.catalog.currency() {
                self.select_currency(selected);
            }

            ui.add_space(10.0);
            if ui.button("🔄 Refresh").clicked() {
                self.refresh_products();
            }
        });

        ui.add_space(8.0);
        match self.catalog.status() {
            ListingStatus::NotLoaded => {
                ui.label("Nothing loaded yet");
            }
            ListingStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading products...");
                });
            }
            ListingStatus::Ready if self.catalog.products().is_empty() => {
                ui.label("No products available");
            }
            ListingStatus::Ready => {}
            ListingStatus::Failed(reason) => {
                ui.colored_label(ERROR, format!("❌ Could not load products: {}", reason));
            }
        }
        ui.add_space(8.0);

        egui::Grid::new("products")
            .striped(true)
            .num_columns(3)
            .min_col_width(120.0)
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Price");
                ui.strong("SKU");
                ui.end_row();

                for (product, [name, price, sku]) in
                    self.catalog.products().iter().zip(self.catalog.rows())
                {
                    let cell = ui.label(name);
                    if !product.description.is_empty() {
                        cell.on_hover_text(product.description.as_str());
                    }
                    ui.label(price);
                    ui.label(sku);
                    ui.end_row();
                }
            });
    }

    fn render_admin(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.heading("Admin");
            ui.add_space(5.0);
            ui.label(
                RichText::new("Upload an image for a product")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
        ui.add_space(20.0);

        ui.group(|ui| {
            ui.label("Product ID:");
            let mut product_id = self.upload.product_id().to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut product_id)
                    .desired_width(80.0)
                    .hint_text("id"),
            );
            if response.changed() {
                self.set_product_id(product_id);
            }
            let submitted_with_enter =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.label(
                RichText::new("Enter the product id for which the image is uploaded").small(),
            );
            if let Some(feedback) = self.upload.field_error(Field::ProductId) {
                ui.colored_label(ERROR, feedback);
            }
            if submitted_with_enter {
                self.submit_upload();
            }
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("File:");
                if ui.button("📁 Select File").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Images", &IMAGE_EXTENSIONS)
                        .pick_file()
                    {
                        self.select_file(Some(path));
                    }
                }
                if let Some(label) = &self.file_label {
                    ui.label(label.as_str());
                }
            });
            ui.label(RichText::new("Image to associate with the product").small());
            if let Some(feedback) = self.upload.field_error(Field::File) {
                ui.colored_label(ERROR, feedback);
            }
        });

        ui.add_space(20.0);

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.upload.can_submit(), |ui| {
                let button = egui::Button::new("📤 Submit").min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.submit_upload();
                }
            });

            if self.upload.is_submitting() {
                ui.add_space(5.0);
                ui.spinner();
            }

            if let Some(notice) = self.upload.notification() {
                ui.add_space(10.0);
                let (icon, color) = match notice.kind {
                    NotificationKind::Success => ("✅", SUCCESS),
                    NotificationKind::Error => ("❌", ERROR),
                };
                ui.colored_label(color, format!("{} {}", icon, notice.message));
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let link = egui::Label::new(RichText::new("📖 API docs").color(ACCENT))
            .sense(egui::Sense::click());
        if ui.add(link).clicked() {
            match self.client.docs_url() {
                Ok(url) => {
                    if let Err(e) = open::that(url.as_str()) {
                        warn!(error = %e, "Could not open API docs");
                    }
                }
                Err(e) => warn!(error = %e, "No docs URL"),
            }
        }
    }
}
