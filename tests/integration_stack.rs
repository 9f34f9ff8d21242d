use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use retro_wm::{Buttons, CellRect, Viewport, WindowStack, WindowState, WmEvent};

const VIEW: Viewport = Viewport::new(100, 40);

fn press(x: i32, y: i32) -> WmEvent {
    WmEvent::pointer(x, y, Buttons::PRIMARY)
}

fn release(x: i32, y: i32) -> WmEvent {
    WmEvent::pointer(x, y, Buttons::empty())
}

fn route(stack: &mut WindowStack, events: &[WmEvent]) {
    for event in events {
        stack.handle_event(event, VIEW);
    }
}

#[test]
fn resize_never_goes_below_minimum() {
    let mut stack = WindowStack::new();
    let h = stack.create_window("Grow", CellRect::new(0, 0, 30, 10), None);
    // grip is the bottom-right cell
    route(
        &mut stack,
        &[press(29, 9), press(0, 0), press(-40, -40), release(-40, -40)],
    );
    let w = stack.window(h).unwrap();
    assert_eq!((w.rect().width, w.rect().height), (20, 5));
    assert!(!w.is_resizing());

    // undersized creation is clamped too
    let tiny = stack.create_window("Tiny", CellRect::new(0, 0, 3, 1), None);
    let r = stack.window(tiny).unwrap().rect();
    assert_eq!((r.width, r.height), (20, 5));
}

#[test]
fn drag_deltas_compose() {
    let mut stepped = WindowStack::new();
    let a = stepped.create_window("Drag", CellRect::new(10, 5, 30, 10), None);
    route(
        &mut stepped,
        &[press(13, 5), press(16, 7), press(14, 8), release(14, 8)],
    );

    let mut direct = WindowStack::new();
    let b = direct.create_window("Drag", CellRect::new(10, 5, 30, 10), None);
    route(&mut direct, &[press(13, 5), press(14, 8), release(14, 8)]);

    let stepped_rect = stepped.window(a).unwrap().rect();
    assert_eq!(stepped_rect, direct.window(b).unwrap().rect());
    assert_eq!((stepped_rect.x, stepped_rect.y), (11, 8));
}

#[test]
fn maximize_round_trip_restores_geometry() {
    let mut stack = WindowStack::new();
    let h = stack.create_window("Max", CellRect::new(5, 5, 50, 15), None);

    // maximize button occupies columns 41..48 of the top row
    route(&mut stack, &[press(44, 5), release(44, 5)]);
    let w = stack.window(h).unwrap();
    assert_eq!(w.state(), WindowState::Maximized);
    assert_eq!(w.effective_rect(VIEW), CellRect::new(0, 1, 100, 38));

    // on the maximized rect the same button sits at 86..93 of row 1
    route(&mut stack, &[press(90, 1), release(90, 1)]);
    let w = stack.window(h).unwrap();
    assert_eq!(w.state(), WindowState::Normal);
    assert_eq!(w.effective_rect(VIEW), CellRect::new(5, 5, 50, 15));
}

#[test]
fn click_through_to_bottom_window_promotes_it() {
    let mut stack = WindowStack::new();
    let a = stack.create_window("A", CellRect::new(0, 0, 30, 10), None);
    let b = stack.create_window("B", CellRect::new(40, 0, 30, 10), None);
    let c = stack.create_window("C", CellRect::new(40, 20, 30, 10), None);

    assert!(stack.handle_event(&press(5, 5), VIEW));
    assert_eq!(stack.z_order(), vec![b, c, a]);
    assert_eq!(stack.active(), Some(a));
    assert!(!stack.window(b).unwrap().is_active());
    assert!(!stack.window(c).unwrap().is_active());
}

#[test]
fn promotion_is_idempotent() {
    let mut stack = WindowStack::new();
    let a = stack.create_window("A", CellRect::new(0, 0, 30, 10), None);
    let b = stack.create_window("B", CellRect::new(10, 5, 30, 10), None);

    assert!(stack.handle_event(&press(20, 10), VIEW));
    assert_eq!(stack.z_order(), vec![a, b]);
    // no gesture was started, so the release is not consumed
    assert!(!stack.handle_event(&release(20, 10), VIEW));
    assert!(stack.handle_event(&press(20, 10), VIEW));
    assert_eq!(stack.z_order(), vec![a, b]);
}

#[test]
fn close_button_hides_topmost_and_keeps_order() {
    let mut stack = WindowStack::new();
    let a = stack.create_window("A", CellRect::new(0, 0, 30, 10), None);
    let b = stack.create_window("B", CellRect::new(5, 5, 30, 10), None);
    let c = stack.create_window("C", CellRect::new(10, 10, 30, 10), None);

    // close button of C spans 33..40 on row 10
    assert!(stack.handle_event(&press(38, 10), VIEW));
    let closed = stack.window(c).unwrap();
    assert!(!closed.is_visible());
    assert_eq!(closed.rect(), CellRect::new(10, 10, 30, 10));
    assert_eq!(closed.state(), WindowState::Normal);
    assert_eq!(stack.z_order(), vec![a, b, c]);
    assert_eq!(stack.active(), None);

    let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
    stack.composite(&mut buf);
    // C's frame corner would be at (10, 10); B's body covers it instead
    assert_ne!(buf[(10u16, 10u16)].symbol(), "╔");
    assert_eq!(buf[(39u16, 19u16)].symbol(), " ");
}

#[test]
fn closed_windows_draw_nothing() {
    let mut stack = WindowStack::new();
    let h = stack.create_window("Gone", CellRect::new(2, 2, 30, 10), None);
    if let Some(w) = stack.window_mut(h) {
        w.close();
    }
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 20));
    stack.composite(&mut buf);
    assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 40, 20)));
}

#[test]
fn minimize_then_restore_from_application() {
    let mut stack = WindowStack::new();
    let a = stack.create_window("A", CellRect::new(0, 0, 30, 10), None);
    let b = stack.create_window("B", CellRect::new(40, 0, 30, 10), None);

    // minimize button of B spans 49..56 on row 0
    assert!(stack.handle_event(&press(50, 0), VIEW));
    assert_eq!(stack.window(b).unwrap().state(), WindowState::Minimized);
    assert_eq!(
        stack.window(b).unwrap().effective_rect(VIEW),
        CellRect::new(40, 0, 30, 1)
    );

    assert!(stack.restore(b));
    assert_eq!(stack.window(b).unwrap().state(), WindowState::Normal);
    assert_eq!(stack.active(), Some(b));
    assert_eq!(stack.z_order(), vec![a, b]);
}

#[test]
fn window_deactivated_mid_drag_comes_back_idle() {
    let mut stack = WindowStack::new();
    let a = stack.create_window("A", CellRect::new(0, 0, 30, 10), None);
    route(&mut stack, &[press(3, 0)]);
    assert!(stack.window(a).unwrap().is_dragging());

    stack.create_window("B", CellRect::new(50, 20, 30, 10), None);
    // A is inactive and never sees this release
    route(&mut stack, &[release(3, 0)]);
    assert!(!stack.window(a).unwrap().is_dragging());

    // click to activate, then held motion in the body
    route(&mut stack, &[press(10, 5), press(11, 5), release(11, 5)]);
    assert_eq!(stack.active(), Some(a));
    assert_eq!(stack.window(a).unwrap().rect(), CellRect::new(0, 0, 30, 10));
}

#[test]
fn cycling_during_drag_leaves_old_window_idle() {
    let mut stack = WindowStack::new();
    let a = stack.create_window("A", CellRect::new(0, 0, 30, 10), None);
    let b = stack.create_window("B", CellRect::new(50, 20, 30, 10), None);
    route(&mut stack, &[press(53, 20), press(55, 21)]);
    assert!(stack.window(b).unwrap().is_dragging());
    assert_eq!(stack.window(b).unwrap().rect(), CellRect::new(52, 21, 30, 10));

    assert_eq!(stack.cycle_active(true), Some(a));
    let old = stack.window(b).unwrap();
    assert!(old.gesture().is_idle());
    assert!(!old.is_active());

    route(&mut stack, &[press(60, 25), press(70, 28), release(70, 28)]);
    assert_eq!(stack.active(), Some(b));
    assert_eq!(stack.window(b).unwrap().rect(), CellRect::new(52, 21, 30, 10));
}

#[test]
fn minimized_window_draws_no_frame() {
    let mut stack = WindowStack::new();
    let h = stack.create_window("Min", CellRect::new(0, 0, 30, 10), None);
    if let Some(w) = stack.window_mut(h) {
        w.minimize();
    }
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
    stack.composite(&mut buf);
    let top: String = (0..40u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
    assert_eq!(top.trim_end(), "");
    assert_eq!(buf[(0u16, 1u16)], Buffer::empty(Rect::new(0, 0, 1, 1))[(0u16, 0u16)]);
}
