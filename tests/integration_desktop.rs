use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use retro_wm::desktop::Desktop;
use retro_wm::event_loop::ControlFlow;
use retro_wm::{Buttons, CellRect, Viewport, WindowState, WmEvent};

const VIEW: Viewport = Viewport::new(80, 24);

fn render(desktop: &Desktop) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, VIEW.width, VIEW.height));
    desktop.render(&mut buf);
    buf
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn dragging_a_window_moves_its_frame() {
    let mut desktop = Desktop::new(true);
    let h = desktop.open_window(VIEW);
    let start = desktop.stack().window(h).unwrap().rect();
    assert_eq!(start, CellRect::new(15, 4, 50, 15));

    for event in [
        WmEvent::pointer(18, 4, Buttons::PRIMARY),
        WmEvent::pointer(13, 6, Buttons::PRIMARY),
        WmEvent::pointer(13, 6, Buttons::empty()),
    ] {
        let flow = desktop.handle_event(&event, VIEW).unwrap();
        assert_eq!(flow, ControlFlow::Continue);
    }

    let buf = render(&desktop);
    assert_eq!(buf[(10u16, 6u16)].symbol(), "╔");
    assert_eq!(buf[(59u16, 20u16)].symbol(), "╬");
    assert!(row(&buf, 6).contains("[ Window 1 ]"));
}

#[test]
fn maximized_window_leaves_bars_visible() {
    let mut desktop = Desktop::new(true);
    let h = desktop.open_window(VIEW);
    if let Some(w) = desktop.stack_mut().window_mut(h) {
        w.toggle_maximize();
    }
    let buf = render(&desktop);
    assert!(row(&buf, 0).starts_with(" retro-wm"));
    assert_eq!(buf[(0u16, 1u16)].symbol(), "╔");
    assert_eq!(buf[(79u16, 22u16)].symbol(), "╬");
    assert!(row(&buf, 23).contains("maximized 1"));
}

#[test]
fn menu_bar_lists_hotkeys() {
    let desktop = Desktop::new(true);
    let menu = row(&render(&desktop), 0);
    assert!(menu.contains("N New"));
    assert!(menu.contains("Tab Next"));
    assert!(menu.contains("Shift+Tab Prev"));
    assert!(menu.contains("Q Quit"));
}

#[test]
fn keyboard_session_manages_windows() {
    let mut desktop = Desktop::new(true);
    let key = |c| WmEvent::key(KeyCode::Char(c), KeyModifiers::NONE);

    desktop.handle_event(&key('n'), VIEW).unwrap();
    desktop.handle_event(&key('n'), VIEW).unwrap();
    assert_eq!(desktop.stack().len(), 2);

    let top = desktop.stack().topmost().unwrap();
    if let Some(w) = desktop.stack_mut().window_mut(top) {
        w.minimize();
    }
    desktop.handle_event(&key('r'), VIEW).unwrap();
    assert_eq!(
        desktop.stack().window(top).unwrap().state(),
        WindowState::Normal
    );

    let flow = desktop
        .handle_event(&WmEvent::key(KeyCode::Esc, KeyModifiers::NONE), VIEW)
        .unwrap();
    assert_eq!(flow, ControlFlow::Quit);
}
