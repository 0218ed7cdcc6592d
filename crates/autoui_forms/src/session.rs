use crate::composer::FormComposer;
use crate::config::FormConfig;
use crate::control::ControlValue;
use crate::errors::{FormError, FormResult};
use crate::events::{ShowMode, UiEvent};
use crate::form::FormWindow;
use crate::host::{NoChrome, WindowChromeCustomizer, WindowHandle, WindowHost};
use crate::mapper::{ControlFactory, DefaultControlFactory};
use crate::subject::{Observable, Subject};
use std::rc::Rc;
use tracing::{debug, info, warn};
use uuid::Uuid;

struct FormContext {
    window: FormWindow,
    handle: WindowHandle,
    mode: ShowMode,
}

/// Stack of open forms driven against one host.
///
/// A modal form runs its event loop inside [`Session::show_dialog`]; forms
/// below it receive nothing until it closes.
pub struct Session<H: WindowHost> {
    host: H,
    chrome: Box<dyn WindowChromeCustomizer>,
    factory: Box<dyn ControlFactory>,
    config: FormConfig,
    stack: Vec<FormContext>,
}

impl<H: WindowHost> Session<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            chrome: Box::new(NoChrome),
            factory: Box::new(DefaultControlFactory),
            config: FormConfig::default(),
            stack: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_chrome(mut self, chrome: impl WindowChromeCustomizer + 'static) -> Self {
        self.chrome = Box::new(chrome);
        self
    }

    pub fn with_boxed_chrome(mut self, chrome: Box<dyn WindowChromeCustomizer>) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_factory(mut self, factory: impl ControlFactory + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Number of open forms.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn window(&self, id: Uuid) -> Option<&FormWindow> {
        self.stack.iter().find(|c| c.window.id == id).map(|c| &c.window)
    }

    pub fn top(&self) -> Option<&FormWindow> {
        self.stack.last().map(|c| &c.window)
    }

    /// False for unknown windows and for windows under a modal form.
    pub fn is_interactable(&self, id: Uuid) -> bool {
        match self.index_of(id) {
            Ok(index) => !self.stack[index + 1..].iter().any(|c| c.mode == ShowMode::Modal),
            Err(_) => false,
        }
    }

    /// Show a form without waiting for it; drive it with [`Session::pump`].
    pub fn show(&mut self, subject: Subject) -> FormResult<Uuid> {
        self.open(subject.into_observable(), ShowMode::Modeless)
    }

    /// Show a form and return once it has been closed.
    pub fn show_dialog(&mut self, subject: Subject) -> FormResult<()> {
        self.show_dialog_over(subject.into_observable())
    }

    pub fn show_dialog_over(&mut self, source: Rc<dyn Observable>) -> FormResult<()> {
        let id = self.open(source, ShowMode::Modal)?;
        loop {
            match self.pump(id) {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(err) => {
                    self.abandon(id);
                    return Err(err);
                }
            }
        }
    }

    /// Drop `id` and every form above it after a failure.
    fn abandon(&mut self, id: Uuid) {
        let Ok(index) = self.index_of(id) else {
            return;
        };
        while self.stack.len() > index {
            let Some(context) = self.stack.pop() else {
                break;
            };
            if let Err(err) = self.host.close(context.handle) {
                warn!(title = %context.window.title, error = %err, "host failed to close form");
            }
        }
    }

    fn open(&mut self, source: Rc<dyn Observable>, mode: ShowMode) -> FormResult<Uuid> {
        let window = FormComposer::new(&self.config, &*self.factory).compose(source)?;
        let handle = self.host.show(&window, mode)?;
        self.chrome.strip_system_menu(handle);

        info!(title = %window.title, ?mode, depth = self.stack.len() + 1, "form opened");
        let id = window.id;
        self.stack.push(FormContext { window, handle, mode });
        Ok(id)
    }

    /// Handle one host event for `id`. Returns false once the window is closed.
    pub fn pump(&mut self, id: Uuid) -> FormResult<bool> {
        let index = self.index_of(id)?;
        if !self.is_interactable(id) {
            return Err(FormError::Blocked(id));
        }

        let event = self.host.next_event(&self.stack[index].window)?;
        if let Some(event) = &event {
            debug!(title = %self.stack[index].window.title, event = event.as_str(), "event received");
        }
        match event {
            None | Some(UiEvent::Close) => {
                self.close(id)?;
                Ok(false)
            }
            Some(UiEvent::Edit { property, value }) => {
                self.apply_edit(index, &property, value);
                self.host.refresh(&self.stack[index].window)?;
                Ok(true)
            }
            Some(UiEvent::Activate { property }) => {
                let nested = match self.stack[index].window.control(&property) {
                    Ok(control) => control.nested().cloned(),
                    Err(err) => {
                        warn!(error = %err, "activation ignored");
                        None
                    }
                };
                if let Some(nested) = nested {
                    nested.activate(self)?;
                    let index = self.index_of(id)?;
                    self.host.refresh(&self.stack[index].window)?;
                }
                Ok(true)
            }
        }
    }

    // Rejected edits are reported and the form keeps running.
    fn apply_edit(&self, index: usize, property: &str, value: ControlValue) {
        let window = &self.stack[index].window;
        let result = window.control(property).and_then(|control| control.edit(value));
        if let Err(err) = result {
            warn!(title = %window.title, property, error = %err, "edit rejected");
        }
    }

    /// Close `id`, which must not have a modal form above it.
    pub fn close(&mut self, id: Uuid) -> FormResult<()> {
        let index = self.index_of(id)?;
        if !self.is_interactable(id) {
            return Err(FormError::Blocked(id));
        }
        let context = self.stack.remove(index);
        self.host.close(context.handle)?;
        info!(title = %context.window.title, depth = self.stack.len(), "form closed");
        Ok(())
    }

    fn index_of(&self, id: Uuid) -> FormResult<usize> {
        self.stack
            .iter()
            .position(|c| c.window.id == id)
            .ok_or(FormError::UnknownWindow(id))
    }
}
