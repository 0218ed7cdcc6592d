use crate::errors::FormResult;
use crate::events::{ShowMode, UiEvent};
use crate::form::{FormLayout, FormWindow};
use std::collections::VecDeque;

/// Native handle of a shown window, as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// The windowing toolkit a session drives.
pub trait WindowHost {
    fn show(&mut self, window: &FormWindow, mode: ShowMode) -> FormResult<WindowHandle>;

    /// Next interaction for `window`. `None` means the host closed it.
    fn next_event(&mut self, window: &FormWindow) -> FormResult<Option<UiEvent>>;

    /// Called after an event changed what `window` displays.
    fn refresh(&mut self, _window: &FormWindow) -> FormResult<()> {
        Ok(())
    }

    fn close(&mut self, handle: WindowHandle) -> FormResult<()>;
}

/// Platform hook that removes a window's system menu.
///
/// Called once per window, right after it is first shown.
pub trait WindowChromeCustomizer {
    fn strip_system_menu(&self, handle: WindowHandle);
}

/// For platforms without a system menu to strip.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoChrome;

impl WindowChromeCustomizer for NoChrome {
    fn strip_system_menu(&self, _handle: WindowHandle) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShownWindow {
    pub handle: WindowHandle,
    pub mode: ShowMode,
    pub layout: FormLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub title: String,
    pub event: UiEvent,
}

/// Host that replays a fixed list of events and records what happened.
///
/// Each `next_event` call hands the next queued event to whichever window
/// asks; an empty queue closes the asking window.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    script: VecDeque<UiEvent>,
    next_handle: isize,
    pub shown: Vec<ShownWindow>,
    pub closed: Vec<WindowHandle>,
    pub deliveries: Vec<Delivery>,
    pub refreshes: usize,
}

impl ScriptedHost {
    pub fn new(events: impl IntoIterator<Item = UiEvent>) -> Self {
        Self {
            script: events.into_iter().collect(),
            next_handle: 1,
            ..Self::default()
        }
    }

    pub fn push(&mut self, event: UiEvent) {
        self.script.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Titles of the windows each event went to, in order.
    pub fn delivered_to(&self) -> Vec<&str> {
        self.deliveries.iter().map(|d| d.title.as_str()).collect()
    }
}

impl WindowHost for ScriptedHost {
    fn show(&mut self, window: &FormWindow, mode: ShowMode) -> FormResult<WindowHandle> {
        let handle = WindowHandle(self.next_handle);
        self.next_handle += 1;
        self.shown.push(ShownWindow {
            handle,
            mode,
            layout: window.layout(),
        });
        Ok(handle)
    }

    fn next_event(&mut self, window: &FormWindow) -> FormResult<Option<UiEvent>> {
        let event = self.script.pop_front();
        if let Some(event) = &event {
            self.deliveries.push(Delivery {
                title: window.title.clone(),
                event: event.clone(),
            });
        }
        Ok(event)
    }

    fn refresh(&mut self, _window: &FormWindow) -> FormResult<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn close(&mut self, handle: WindowHandle) -> FormResult<()> {
        self.closed.push(handle);
        Ok(())
    }
}
