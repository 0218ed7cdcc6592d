use crate::errors::FormResult;
use crate::metadata::TypeInfo;
use crate::notify::NotifyProxy;
use crate::properties::PropertyValue;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the name of the property that changed.
pub type ChangeHandler = Rc<dyn Fn(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// A plain settings object: typed metadata plus name-addressed accessors.
pub trait Settings {
    fn type_info(&self) -> TypeInfo;
    fn get(&self, property: &str) -> Option<PropertyValue>;
    fn set(&mut self, property: &str, value: PropertyValue) -> FormResult<()>;
}

/// A settings object that reports its own property changes.
///
/// Implementations are shared (`Rc`) and mutate through `&self`.
pub trait Observable {
    /// Metadata of the object being edited. Wrappers report the wrapped type.
    fn type_info(&self) -> TypeInfo;
    fn get(&self, property: &str) -> Option<PropertyValue>;
    fn set(&self, property: &str, value: PropertyValue) -> FormResult<()>;
    fn subscribe(&self, handler: ChangeHandler) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// The object a form edits. The caller keeps its own reference.
#[derive(Clone)]
pub enum Subject {
    Plain(Rc<RefCell<dyn Settings>>),
    Notifying(Rc<dyn Observable>),
}

impl Subject {
    pub fn plain<T: Settings + 'static>(settings: T) -> Self {
        Subject::Plain(Rc::new(RefCell::new(settings)))
    }

    pub fn shared<T: Settings + 'static>(settings: &Rc<RefCell<T>>) -> Self {
        let shared: Rc<RefCell<dyn Settings>> = settings.clone();
        Subject::Plain(shared)
    }

    pub fn notifying<T: Observable + 'static>(observable: &Rc<T>) -> Self {
        let shared: Rc<dyn Observable> = observable.clone();
        Subject::Notifying(shared)
    }

    pub fn supports_notification(&self) -> bool {
        matches!(self, Subject::Notifying(_))
    }

    pub fn type_info(&self) -> TypeInfo {
        match self {
            Subject::Plain(settings) => settings.borrow().type_info(),
            Subject::Notifying(observable) => observable.type_info(),
        }
    }

    /// A bindable view of the subject, wrapping plain objects in a proxy.
    pub fn into_observable(self) -> Rc<dyn Observable> {
        match self {
            Subject::Notifying(observable) => observable,
            Subject::Plain(settings) => Rc::new(NotifyProxy::new(settings)),
        }
    }

    /// Identity comparison of the underlying objects.
    pub fn same_object(&self, other: &Subject) -> bool {
        match (self, other) {
            (Subject::Plain(a), Subject::Plain(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            (Subject::Notifying(a), Subject::Notifying(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.supports_notification() {
            "Notifying"
        } else {
            "Plain"
        };
        f.debug_tuple(kind).field(&self.type_info().name).finish()
    }
}
