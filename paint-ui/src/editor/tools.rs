// Drawing tools for the canvas editor.

use crate::Canvas;
use egui::Color32;
use tracing::{debug, trace};

pub trait Tool {
    fn apply(&self, canvas: &mut Canvas, x: u32, y: u32);

    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct Brush {
    pub size: u32,
    pub color: Color32,
}

impl Brush {
    pub fn new(size: u32, color: Color32) -> Self {
        Self { size, color }
    }

    /// Stamp the brush at every step from `from` to `to`, so fast pointer
    /// motion still leaves a continuous line. Only the steps that can touch
    /// the canvas are visited, however far away the endpoints are.
    pub fn stroke_segment(&self, canvas: &mut Canvas, from: (u32, u32), to: (u32, u32)) {
        let (x0, y0) = (from.0 as i128, from.1 as i128);
        let (dx, dy) = (to.0 as i128 - x0, to.1 as i128 - y0);
        let steps = dx.abs().max(dy.abs());

        if steps == 0 {
            self.apply(canvas, from.0, from.1);
            return;
        }

        let Some((first, last)) = visible_steps(canvas, from, to, steps, self.size / 2) else {
            trace!("Segment {:?} -> {:?} misses the canvas", from, to);
            return;
        };
        trace!(
            "Stroking segment {:?} -> {:?}, steps {}..={} of {}",
            from,
            to,
            first,
            last,
            steps
        );

        for i in first..=last {
            // Rounded linear interpolation; stays within [from, to] so never negative.
            let x = x0 + (dx * i * 2 + steps).div_euclid(steps * 2);
            let y = y0 + (dy * i * 2 + steps).div_euclid(steps * 2);
            self.apply(canvas, x as u32, y as u32);
        }
    }

    /// Pixel offsets covered by the stamp along one axis: exactly `size` of them.
    fn extent(&self) -> (i64, i64) {
        let low = -(self.size as i64 / 2);
        (low, low + self.size as i64 - 1)
    }
}

/// Range of interpolation steps whose stamp can reach the canvas, found by
/// clipping the segment (Liang-Barsky) to the canvas grown by `reach` pixels.
fn visible_steps(
    canvas: &Canvas,
    from: (u32, u32),
    to: (u32, u32),
    steps: i128,
    reach: u32,
) -> Option<(i128, i128)> {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = (to.0 as f64 - x0, to.1 as f64 - y0);
    let reach = reach as f64;
    let (x_min, x_max) = (-reach, canvas.width() as f64 - 1.0 + reach);
    let (y_min, y_max) = (-reach, canvas.height() as f64 - 1.0 + reach);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x0 - x_min),
        (dx, x_max - x0),
        (-dy, y0 - y_min),
        (dy, y_max - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
    }
    if t0 > t1 {
        return None;
    }

    // One step of slack each side covers the rounding in the interpolation.
    let total = steps as f64;
    let first = ((t0 * total).floor() as i128 - 1).max(0);
    let last = ((t1 * total).ceil() as i128 + 1).min(steps);
    Some((first, last))
}

impl Tool for Brush {
    fn apply(&self, canvas: &mut Canvas, x: u32, y: u32) {
        trace!(
            "Applying Brush at ({}, {}) with size {} and color {:?}",
            x,
            y,
            self.size,
            self.color
        );
        let (low, high) = self.extent();
        let x_start = (x as i64 + low).max(0);
        let x_end = (x as i64 + high).min(canvas.width() as i64 - 1);
        let y_start = (y as i64 + low).max(0);
        let y_end = (y as i64 + high).min(canvas.height() as i64 - 1);

        for py in y_start..=y_end {
            for px in x_start..=x_end {
                canvas.set_pixel(px as u32, py as u32, self.color);
            }
        }
    }

    fn name(&self) -> &str {
        "Brush"
    }
}

/// Paints the whole surface, wherever it is clicked.
#[derive(Debug, Clone)]
pub struct Fill {
    pub color: Color32,
}

impl Fill {
    pub fn new(color: Color32) -> Self {
        Self { color }
    }
}

impl Tool for Fill {
    fn apply(&self, canvas: &mut Canvas, x: u32, y: u32) {
        debug!("Fill at ({}, {}) with color {:?}", x, y, self.color);
        canvas.fill(self.color);
    }

    fn name(&self) -> &str {
        "Fill"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_brush() {
        let mut canvas = Canvas::new(10, 10, Color32::WHITE);
        let brush = Brush {
            size: 3,
            color: Color32::BLACK,
        };

        brush.apply(&mut canvas, 5, 5);

        for y in 4..=6 {
            for x in 4..=6 {
                assert_eq!(canvas.get_pixel(x, y), Some(Color32::BLACK));
            }
        }
        assert_eq!(canvas.get_pixel(3, 5), Some(Color32::WHITE));
    }

    #[test]
    fn test_brush_at_edge() {
        let mut canvas = Canvas::new(4, 4, Color32::WHITE);
        Brush::new(3, Color32::BLACK).apply(&mut canvas, 0, 0);

        assert_eq!(canvas.get_pixel(0, 0), Some(Color32::BLACK));
        assert_eq!(canvas.get_pixel(1, 1), Some(Color32::BLACK));
        assert_eq!(canvas.get_pixel(2, 2), Some(Color32::WHITE));
    }

    #[test]
    fn test_stroke_segment_is_continuous() {
        let mut canvas = Canvas::new(20, 20, Color32::WHITE);
        Brush::new(1, Color32::BLACK).stroke_segment(&mut canvas, (2, 3), (17, 3));

        for x in 2..=17 {
            assert_eq!(canvas.get_pixel(x, 3), Some(Color32::BLACK));
        }
        assert_eq!(canvas.get_pixel(18, 3), Some(Color32::WHITE));
    }

    #[test]
    fn test_stroke_segment_diagonal_backwards() {
        let mut canvas = Canvas::new(10, 10, Color32::WHITE);
        Brush::new(1, Color32::RED).stroke_segment(&mut canvas, (8, 8), (1, 1));

        for i in 1..=8 {
            assert_eq!(canvas.get_pixel(i, i), Some(Color32::RED));
        }
    }

    #[test]
    fn test_even_brush_covers_its_size() {
        let mut canvas = Canvas::new(12, 12, Color32::WHITE);
        Brush::new(4, Color32::BLACK).apply(&mut canvas, 5, 5);

        for y in 3..=6 {
            for x in 3..=6 {
                assert_eq!(canvas.get_pixel(x, y), Some(Color32::BLACK));
            }
        }
        assert_eq!(canvas.get_pixel(2, 5), Some(Color32::WHITE));
        assert_eq!(canvas.get_pixel(7, 5), Some(Color32::WHITE));
        assert_eq!(canvas.get_pixel(5, 7), Some(Color32::WHITE));

        let mut canvas = Canvas::new(4, 4, Color32::WHITE);
        Brush::new(1, Color32::BLACK).apply(&mut canvas, 1, 1);
        assert_eq!(canvas.get_pixel(1, 1), Some(Color32::BLACK));
        assert_eq!(canvas.get_pixel(2, 1), Some(Color32::WHITE));
        assert_eq!(canvas.get_pixel(1, 2), Some(Color32::WHITE));
    }

    #[test]
    fn test_stroke_segment_to_far_endpoint() {
        let mut canvas = Canvas::new(64, 64, Color32::WHITE);
        let brush = Brush::new(100, Color32::BLACK);

        // Visiting every step up to u32::MAX would never finish.
        brush.stroke_segment(&mut canvas, (10, 10), (u32::MAX, 10));
        assert_eq!(canvas.get_pixel(0, 0), Some(Color32::BLACK));
        assert_eq!(canvas.get_pixel(63, 59), Some(Color32::BLACK));
        assert_eq!(canvas.get_pixel(5, 60), Some(Color32::WHITE));
    }

    #[test]
    fn test_stroke_segment_from_far_endpoint() {
        let mut canvas = Canvas::new(32, 32, Color32::WHITE);
        Brush::new(1, Color32::RED).stroke_segment(&mut canvas, (u32::MAX, u32::MAX), (0, 0));

        for i in 0..32 {
            assert_eq!(canvas.get_pixel(i, i), Some(Color32::RED));
        }
        assert_eq!(canvas.get_pixel(1, 0), Some(Color32::WHITE));
    }

    #[test]
    fn test_stroke_segment_missing_canvas() {
        let mut canvas = Canvas::new(8, 8, Color32::WHITE);
        Brush::new(3, Color32::RED).stroke_segment(&mut canvas, (100, 0), (u32::MAX, 5));

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.get_pixel(x, y), Some(Color32::WHITE));
            }
        }
    }

    #[test]
    fn test_fill_entire_canvas() {
        let mut canvas = Canvas::new(5, 5, Color32::WHITE);
        canvas.set_pixel(0, 0, Color32::BLACK);
        let fill = Fill::new(Color32::RED);

        fill.apply(&mut canvas, 2, 2);

        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(canvas.get_pixel(x, y), Some(Color32::RED));
            }
        }
    }
}
