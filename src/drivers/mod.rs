pub mod console;

use ::crossterm::event::Event;
use std::io;
use std::time::Duration;

/// Source of raw terminal input.
///
/// The event loop is the only caller; hosts pass their driver by value or by
/// `&mut` reference.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[derive(Default)]
    struct Dummy {
        capture: Option<bool>,
    }

    impl InputDriver for Dummy {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(true)
        }

        fn read(&mut self) -> io::Result<Event> {
            Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE,
            )))
        }

        fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
            self.capture = Some(enabled);
            Ok(())
        }
    }

    fn drive<D: InputDriver>(mut driver: D) -> io::Result<Event> {
        driver.set_mouse_capture(false)?;
        assert!(driver.poll(Duration::from_millis(0))?);
        driver.read()
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = Dummy::default();
        let ev = drive(&mut d).unwrap();
        assert_eq!(d.capture, Some(false));
        match ev {
            Event::Key(k) => assert_eq!(k.code, KeyCode::Char('x')),
            other => panic!("expected key, got {other:?}"),
        }
    }
}
