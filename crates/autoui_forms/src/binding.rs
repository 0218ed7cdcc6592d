use crate::control::{ControlKind, ControlValue, DisplayItem};
use crate::errors::{FormError, FormResult};
use crate::properties::PropertyValue;
use crate::subject::{Observable, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Shared cell holding what a control displays.
pub type ControlState = Rc<RefCell<ControlValue>>;

/// Converts between a property value and a control's displayed value.
pub trait ValueConverter {
    fn convert(&self, value: &PropertyValue) -> ControlValue;
    fn convert_back(&self, value: &ControlValue) -> Option<PropertyValue>;
}

/// Maps enumeration values to the selection control's items and back.
#[derive(Debug, Clone)]
pub struct EnumItemConverter {
    items: Vec<DisplayItem>,
}

impl EnumItemConverter {
    pub fn new(items: Vec<DisplayItem>) -> Self {
        Self { items }
    }
}

impl ValueConverter for EnumItemConverter {
    fn convert(&self, value: &PropertyValue) -> ControlValue {
        let selected = value
            .as_enum()
            .and_then(|v| self.items.iter().find(|item| item.value == v))
            .cloned();
        ControlValue::Item(selected)
    }

    fn convert_back(&self, value: &ControlValue) -> Option<PropertyValue> {
        match value {
            ControlValue::Item(Some(item)) => self
                .items
                .iter()
                .find(|candidate| candidate.value == item.value)
                .map(|candidate| PropertyValue::Enum(candidate.value)),
            _ => None,
        }
    }
}

fn to_control(converter: Option<&dyn ValueConverter>, value: &PropertyValue) -> ControlValue {
    match converter {
        Some(converter) => converter.convert(value),
        None => ControlValue::Value(value.clone()),
    }
}

fn to_property(converter: Option<&dyn ValueConverter>, value: &ControlValue) -> Option<PropertyValue> {
    match converter {
        Some(converter) => converter.convert_back(value),
        None => value.as_property().cloned(),
    }
}

/// Live two-way link between one property and one control.
///
/// Source changes reach the control through the source's change
/// notification; control edits go through [`Binding::update_source`].
/// Dropping the binding unsubscribes it.
pub struct Binding {
    property: String,
    source: Rc<dyn Observable>,
    target: ControlState,
    converter: Option<Rc<dyn ValueConverter>>,
    subscription: SubscriptionId,
}

impl Binding {
    /// Enumerations convert through their items; everything else binds as is.
    pub fn converter_for(kind: &ControlKind) -> Option<Rc<dyn ValueConverter>> {
        match kind {
            ControlKind::Selection(items) => Some(Rc::new(EnumItemConverter::new(items.clone()))),
            _ => None,
        }
    }

    pub fn attach(
        source: Rc<dyn Observable>,
        property: &str,
        target: ControlState,
        converter: Option<Rc<dyn ValueConverter>>,
    ) -> FormResult<Self> {
        let initial = source
            .get(property)
            .ok_or_else(|| FormError::UnknownProperty(property.to_string()))?;
        *target.borrow_mut() = to_control(converter.as_deref(), &initial);

        let weak_source = Rc::downgrade(&source);
        let watched = property.to_string();
        let handler_target = target.clone();
        let handler_converter = converter.clone();
        let subscription = source.subscribe(Rc::new(move |changed: &str| {
            if changed != watched {
                return;
            }
            let Some(source) = weak_source.upgrade() else {
                return;
            };
            if let Some(value) = source.get(&watched) {
                *handler_target.borrow_mut() = to_control(handler_converter.as_deref(), &value);
            }
        }));

        debug!(property, "binding attached");
        Ok(Self {
            property: property.to_string(),
            source,
            target,
            converter,
            subscription,
        })
    }

    /// Re-read the source into the control.
    pub fn update_target(&self) {
        if let Some(value) = self.source.get(&self.property) {
            *self.target.borrow_mut() = to_control(self.converter.as_deref(), &value);
        }
    }

    /// Write a control value back to the source.
    ///
    /// A rejected write leaves the control showing the source's value.
    pub fn update_source(&self, value: ControlValue) -> FormResult<()> {
        let converted = to_property(self.converter.as_deref(), &value)
            .ok_or_else(|| FormError::Conversion(self.property.clone()))?;

        *self.target.borrow_mut() = value;
        if let Err(err) = self.source.set(&self.property, converted) {
            warn!(property = %self.property, error = %err, "source rejected value");
            self.update_target();
            return Err(err);
        }
        Ok(())
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        self.source.unsubscribe(self.subscription);
    }
}
