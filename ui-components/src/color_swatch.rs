use std::{cell::Cell, f64::consts::PI, rc::Rc};

use domain::Rgb;
use relm4::gtk;
use relm4::gtk::prelude::*;

const SWATCH_SIZE: i32 = 14;

/// Small filled circle in the fruit's colour. Draws nothing for colours that
/// did not resolve.
#[derive(Debug, Clone)]
pub struct ColorSwatch {
    area: gtk::DrawingArea,
    color: Rc<Cell<Option<Rgb>>>,
}

impl Default for ColorSwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSwatch {
    pub fn new() -> Self {
        let area = gtk::DrawingArea::new();
        area.set_content_width(SWATCH_SIZE);
        area.set_content_height(SWATCH_SIZE);
        area.set_valign(gtk::Align::Center);

        let color: Rc<Cell<Option<Rgb>>> = Rc::new(Cell::new(None));
        let draw_color = Rc::clone(&color);
        area.set_draw_func(move |_, cr, width, height| {
            let Some(rgb) = draw_color.get() else {
                return;
            };
            let radius = f64::from(width.min(height)) / 2.0;
            cr.set_source_rgb(
                f64::from(rgb.r) / 255.0,
                f64::from(rgb.g) / 255.0,
                f64::from(rgb.b) / 255.0,
            );
            cr.arc(f64::from(width) / 2.0, f64::from(height) / 2.0, radius, 0.0, 2.0 * PI);
            if let Err(e) = cr.fill() {
                tracing::warn!(error = %e, "Failed to draw colour swatch");
            }
        });

        Self { area, color }
    }

    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn set_color(&self, color: Option<Rgb>) {
        self.color.set(color);
        self.area.set_visible(color.is_some());
        if let Some(rgb) = color {
            self.area.set_tooltip_text(Some(&rgb.to_hex()));
        }
        self.area.queue_draw();
    }
}
