//! A single-window image viewer on top of eframe.
//!
//! Used by the CLI to show a rendered plot when no output path is given.

use anyhow::{Result, anyhow};
use image::RgbaImage;

/// Largest initial window edge, in points.
const MAX_WINDOW_EDGE: f32 = 1024.0;

/// Viewer application holding the uploaded texture.
struct ImageViewer {
    /// GPU texture for the image.
    texture: egui::TextureHandle,
}

impl eframe::App for ImageViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(&self.texture).shrink_to_fit());
                });
            });
    }
}

/// Convert an `image` buffer into an egui color image.
fn to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Initial window size: the image size, scaled down to fit `MAX_WINDOW_EDGE`.
fn window_size(width: u32, height: u32) -> egui::Vec2 {
    let (w, h) = (width.max(1) as f32, height.max(1) as f32);
    let scale = (MAX_WINDOW_EDGE / w.max(h)).min(1.0);
    egui::vec2(w * scale, h * scale)
}

/// Open a window showing `image` and block until it is closed.
///
/// Escape or `q` closes the window.
pub fn view_image(title: &str, image: RgbaImage) -> Result<()> {
    let color = to_color_image(&image);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size(image.width(), image.height()))
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            let texture = cc
                .egui_ctx
                .load_texture("image", color, egui::TextureOptions::LINEAR);
            Ok(Box::new(ImageViewer { texture }))
        }),
    )
    .map_err(|e| anyhow!(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_images_are_scaled_to_fit() {
        let size = window_size(4096, 2048);
        assert_eq!(size, egui::vec2(1024.0, 512.0));
        assert_eq!(window_size(300, 200), egui::vec2(300.0, 200.0));
    }

    #[test]
    fn color_image_keeps_dimensions() {
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
        let color = to_color_image(&img);
        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels.len(), 6);
    }
}
