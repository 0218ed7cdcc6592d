use autoui_forms::{NoChrome, WindowChromeCustomizer, WindowHandle};
use tracing::debug;

/// Clears `WS_SYSMENU` from a window's style. Does nothing off Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Chrome;

#[cfg(windows)]
impl WindowChromeCustomizer for Win32Chrome {
    fn strip_system_menu(&self, handle: WindowHandle) {
        use windows_sys::Win32::UI::WindowsAndMessaging::{GetWindowLongW, SetWindowLongW, GWL_STYLE, WS_SYSMENU};

        if handle.0 == 0 {
            return;
        }
        // SAFETY: both calls only read or write the style word and fail
        // cleanly for handles that are not windows.
        unsafe {
            let style = GetWindowLongW(handle.0, GWL_STYLE);
            SetWindowLongW(handle.0, GWL_STYLE, style & !(WS_SYSMENU as i32));
        }
        debug!(handle = handle.0, "system menu removed");
    }
}

#[cfg(not(windows))]
impl WindowChromeCustomizer for Win32Chrome {
    fn strip_system_menu(&self, handle: WindowHandle) {
        NoChrome.strip_system_menu(handle);
    }
}

/// The chrome customizer for the current platform.
pub fn platform_chrome() -> Box<dyn WindowChromeCustomizer> {
    if cfg!(windows) {
        Box::new(Win32Chrome)
    } else {
        Box::new(NoChrome)
    }
}

/// Native handle of the console window the process is attached to.
#[cfg(windows)]
pub fn console_window_handle() -> Option<WindowHandle> {
    // SAFETY: no arguments; returns 0 when there is no console window.
    let hwnd = unsafe { windows_sys::Win32::System::Console::GetConsoleWindow() };
    (hwnd != 0).then_some(WindowHandle(hwnd))
}

#[cfg(not(windows))]
pub fn console_window_handle() -> Option<WindowHandle> {
    None
}
