use crate::errors::FormResult;
use crate::metadata::TypeInfo;
use crate::properties::PropertyValue;
use crate::subject::{ChangeHandler, Observable, Settings, SubscriptionId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// Gives a plain [`Settings`] object change notification.
///
/// Every successful `set` is followed by a notification for that property,
/// including writes that store the value already present. The write lands
/// before any handler runs, so handlers that read back see the new value.
pub struct NotifyProxy {
    inner: Rc<RefCell<dyn Settings>>,
    handlers: RefCell<Vec<(SubscriptionId, ChangeHandler)>>,
    next_id: Cell<u64>,
}

impl NotifyProxy {
    pub fn new(inner: Rc<RefCell<dyn Settings>>) -> Self {
        Self {
            inner,
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Type of the wrapped object, not of the proxy.
    pub fn wrapped_type(&self) -> TypeInfo {
        self.inner.borrow().type_info()
    }

    pub fn wrapped_object(&self) -> Rc<RefCell<dyn Settings>> {
        self.inner.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    fn notify(&self, property: &str) {
        // Snapshot so handlers may subscribe or unsubscribe while we dispatch.
        let handlers: Vec<ChangeHandler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        trace!(property, subscribers = handlers.len(), "property changed");
        for handler in handlers {
            handler(property);
        }
    }
}

impl Observable for NotifyProxy {
    fn type_info(&self) -> TypeInfo {
        self.wrapped_type()
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        self.inner.borrow().get(property)
    }

    fn set(&self, property: &str, value: PropertyValue) -> FormResult<()> {
        self.inner.borrow_mut().set(property, value)?;
        // No equality check: unchanged values are announced too.
        self.notify(property);
        Ok(())
    }

    fn subscribe(&self, handler: ChangeHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.handlers.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}
