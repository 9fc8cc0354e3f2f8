use egui::Color32;
use paint_core::HistoryConfig;
use paint_ui::logging::init_tracing;
use paint_ui::{EditorSettings, Mode, Surface};

fn settings(max_depth: Option<usize>) -> EditorSettings {
    EditorSettings {
        canvas_width: 32,
        canvas_height: 32,
        line_width: 3,
        history: HistoryConfig { max_depth },
        ..EditorSettings::default()
    }
}

fn stroke(surface: &mut Surface, y: u32) {
    surface.pointer_down(2, y);
    surface.pointer_move(10, y);
    surface.pointer_move(20, y);
    assert!(surface.pointer_up().unwrap());
}

#[test]
fn full_session() {
    let _ = init_tracing();
    let mut surface = Surface::new(&settings(None)).unwrap();

    stroke(&mut surface, 4);
    surface.set_color(Color32::BLUE);
    stroke(&mut surface, 12);

    surface.toggle_mode();
    assert_eq!(surface.mode(), Mode::Fill);
    surface.set_color(Color32::YELLOW);
    assert!(surface.click(5, 5).unwrap());
    assert_eq!(surface.canvas().get_pixel(0, 31), Some(Color32::YELLOW));

    // Back to the two strokes.
    surface.undo().unwrap();
    assert_eq!(surface.canvas().get_pixel(10, 12), Some(Color32::BLUE));
    assert_eq!(surface.canvas().get_pixel(0, 31), Some(Color32::WHITE));

    // Back to the first stroke only.
    surface.undo().unwrap();
    assert_eq!(surface.canvas().get_pixel(10, 12), Some(Color32::WHITE));
    assert_ne!(surface.canvas().get_pixel(10, 4), Some(Color32::WHITE));

    // The first stroke is the baseline and stays.
    let affordances = surface.undo().unwrap();
    assert!(affordances.undo.enabled);
    assert!(affordances.redo.enabled);
    assert_ne!(surface.canvas().get_pixel(10, 4), Some(Color32::WHITE));

    surface.redo().unwrap();
    let affordances = surface.redo().unwrap();
    assert!(!affordances.redo.enabled);
    assert_eq!(surface.canvas().get_pixel(0, 31), Some(Color32::YELLOW));
}

#[test]
fn leaving_the_surface_records_the_stroke() {
    let mut surface = Surface::new(&settings(None)).unwrap();
    surface.pointer_down(1, 1);
    surface.pointer_move(8, 8);
    assert!(surface.pointer_leave().unwrap());
    assert!(!surface.is_stroking());

    // Re-entering without pressing does not draw.
    surface.pointer_move(20, 20);
    assert_eq!(surface.canvas().get_pixel(20, 20), Some(Color32::WHITE));
    assert_eq!(surface.history().undo_len(), 1);
}

#[test]
fn depth_limit_bounds_undo() {
    let mut surface = Surface::new(&settings(Some(2))).unwrap();
    for y in [2, 8, 14, 20] {
        stroke(&mut surface, y);
    }
    assert_eq!(surface.history().undo_len(), 2);

    surface.undo().unwrap();
    surface.undo().unwrap();
    surface.undo().unwrap();
    assert_eq!(surface.history().undo_len(), 1);
    assert_eq!(surface.history().redo_len(), 1);
    // Strokes older than the limit are part of the baseline raster.
    assert_ne!(surface.canvas().get_pixel(10, 14), Some(Color32::WHITE));
    assert_eq!(surface.canvas().get_pixel(10, 20), Some(Color32::WHITE));
}

#[test]
fn drag_far_outside_the_surface() {
    let mut surface = Surface::new(&EditorSettings {
        canvas_width: 64,
        canvas_height: 64,
        line_width: 100,
        ..EditorSettings::default()
    })
    .unwrap();

    surface.pointer_down(10, 10);
    surface.pointer_move(20_000, 10);
    surface.pointer_move(u32::MAX, u32::MAX);
    assert!(surface.pointer_up().unwrap());

    assert_ne!(surface.canvas().get_pixel(63, 10), Some(Color32::WHITE));
    assert_eq!(surface.canvas().get_pixel(30, 63), Some(Color32::WHITE));
    assert_eq!(surface.history().undo_len(), 1);
}
