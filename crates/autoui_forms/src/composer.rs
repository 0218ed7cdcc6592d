use crate::config::FormConfig;
use crate::errors::FormResult;
use crate::form::{FormWindow, WindowOptions};
use crate::mapper::{ControlFactory, ControlMapper};
use crate::metadata::extract_descriptors;
use crate::subject::Observable;
use std::rc::Rc;
use tracing::debug;

/// Assembles a window from a subject's eligible properties.
pub struct FormComposer<'a> {
    config: &'a FormConfig,
    factory: &'a dyn ControlFactory,
}

impl<'a> FormComposer<'a> {
    pub fn new(config: &'a FormConfig, factory: &'a dyn ControlFactory) -> Self {
        Self { config, factory }
    }

    /// Any row that cannot be built fails the whole window.
    pub fn compose(&self, source: Rc<dyn Observable>) -> FormResult<FormWindow> {
        let info = source.type_info();
        let mapper = ControlMapper::new(self.factory, self.config);

        let mut rows = Vec::new();
        for descriptor in extract_descriptors(&info) {
            let control = mapper.build(&descriptor, &source)?;
            rows.push((descriptor.label(), control));
        }

        let mut window = FormWindow::new(
            info.title(),
            WindowOptions::from_config(self.config),
            &self.config.close_caption,
            source,
        );
        for (label, control) in rows {
            window.add_row(label, control);
        }

        debug!(title = %window.title, rows = window.rows.len(), "form composed");
        Ok(window)
    }
}
