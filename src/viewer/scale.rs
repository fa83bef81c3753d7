use super::zoom::ZoomController;

pub const DEFAULT_ZOOM_FACTOR: f64 = 1.2;

/// Turns zoom ticks into a render scale.
///
/// At the base level the scale is recomputed to fit the container; every
/// effective tick away from base multiplies or divides it by `factor`.
#[derive(Debug, Clone)]
pub struct Magnifier {
    zoom: ZoomController,
    factor: f64,
    scale: f64,
}

impl Magnifier {
    pub fn new(zoom: ZoomController, factor: f64) -> Self {
        Self {
            zoom,
            factor,
            scale: 1.0,
        }
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn reset(&mut self) {
        self.zoom.reset();
    }

    /// Refits to the container when at base and returns the scale to render with.
    pub fn fit(&mut self, container: (u32, u32), image: (u32, u32)) -> f64 {
        if self.zoom.at_base() && image.0 > 0 && image.1 > 0 {
            let scale_x = container.0 as f64 / image.0 as f64;
            let scale_y = container.1 as f64 / image.1 as f64;
            self.scale = scale_x.min(scale_y);
        }
        self.scale
    }

    /// Returns true when the caller needs to re-render.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom.step_up();
        if self.zoom.has_changed() {
            self.scale *= self.factor;
        }
        self.zoom.has_changed()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom.step_down();
        if self.zoom.has_changed() {
            self.scale /= self.factor;
        }
        self.zoom.has_changed()
    }

    pub fn target_size(&self, image: (u32, u32)) -> (u32, u32) {
        (
            (image.0 as f64 * self.scale) as u32,
            (image.1 as f64 * self.scale) as u32,
        )
    }
}
