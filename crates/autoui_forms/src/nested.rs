use crate::control::{Control, ControlKind};
use crate::errors::FormResult;
use crate::host::WindowHost;
use crate::session::Session;
use crate::subject::{Observable, Subject};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Opens a modal sub-form for a composite property.
///
/// The proxy for a plain subject is made on first activation and reused by
/// later ones, so every sub-form opened from this trigger shares it.
#[derive(Clone)]
pub struct NestedObjectController {
    subject: Option<Subject>,
    caption: String,
    source: Rc<RefCell<Option<Rc<dyn Observable>>>>,
}

impl NestedObjectController {
    pub fn new(subject: Option<Subject>, caption: impl Into<String>) -> Self {
        Self {
            subject,
            caption: caption.into(),
            source: Rc::new(RefCell::new(None)),
        }
    }

    /// False when the property currently holds no object.
    pub fn is_available(&self) -> bool {
        self.subject.is_some()
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// Trigger control for `property`.
    pub fn into_control(self, property: impl Into<String>) -> Control {
        let kind = ControlKind::Trigger {
            caption: self.caption.clone(),
        };
        Control::new(kind, property).with_nested(self)
    }

    /// The object the sub-form binds to, wrapping it if it cannot notify.
    pub fn source(&self) -> Option<Rc<dyn Observable>> {
        let subject = self.subject.as_ref()?;
        let mut cached = self.source.borrow_mut();
        let source = cached.get_or_insert_with(|| subject.clone().into_observable());
        Some(source.clone())
    }

    /// Show the sub-form modally; returns once it has been closed.
    pub fn activate<H: WindowHost>(&self, session: &mut Session<H>) -> FormResult<()> {
        let Some(source) = self.source() else {
            debug!("trigger activated without an object");
            return Ok(());
        };
        session.show_dialog_over(source)
    }
}

impl std::fmt::Debug for NestedObjectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NestedObjectController")
            .field("subject", &self.subject)
            .field("caption", &self.caption)
            .finish()
    }
}
