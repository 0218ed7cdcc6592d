use crate::binding::{Binding, ControlState};
use crate::errors::{FormError, FormResult};
use crate::nested::NestedObjectController;
use crate::properties::PropertyValue;
use crate::subject::Observable;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// One entry of a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub minimum: f64,
    pub maximum: f64,
    pub tick_frequency: f64,
    pub large_change: f64,
    /// Decimal places shown in the value tooltip.
    pub precision: u8,
    /// Values written back are rounded to whole numbers.
    pub integral: bool,
}

impl RangeSpec {
    /// Clamp into `[minimum, maximum]` and round for integer properties.
    /// Non-finite input has no place on the scale and yields `None`.
    pub fn coerce(&self, value: f64) -> Option<PropertyValue> {
        if !value.is_finite() {
            return None;
        }
        let clamped = if self.minimum <= self.maximum {
            value.clamp(self.minimum, self.maximum)
        } else {
            value
        };

        let coerced = if self.integral {
            PropertyValue::Integer(clamped.round() as i32)
        } else {
            PropertyValue::Double(clamped)
        };
        Some(coerced)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", usize::from(self.precision), value)
    }
}

/// The closed set of renderable controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlKind {
    Toggle,
    Range(RangeSpec),
    Selection(Vec<DisplayItem>),
    Text,
    Trigger { caption: String },
}

impl ControlKind {
    pub fn default_name_prefix(&self) -> &str {
        match self {
            ControlKind::Toggle => "chk",
            ControlKind::Range(_) => "sld",
            ControlKind::Selection(_) => "cbo",
            ControlKind::Text => "txt",
            ControlKind::Trigger { .. } => "btn",
        }
    }

    pub fn is_bindable(&self) -> bool {
        !matches!(self, ControlKind::Trigger { .. })
    }
}

/// What a control currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Value(PropertyValue),
    Item(Option<DisplayItem>),
    Empty,
}

impl ControlValue {
    pub fn as_property(&self) -> Option<&PropertyValue> {
        match self {
            ControlValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<PropertyValue> for ControlValue {
    fn from(value: PropertyValue) -> Self {
        ControlValue::Value(value)
    }
}

impl From<DisplayItem> for ControlValue {
    fn from(item: DisplayItem) -> Self {
        ControlValue::Item(Some(item))
    }
}

pub struct Control {
    pub id: Uuid,
    pub name: String,
    pub property: String,
    pub kind: ControlKind,
    pub margin: f64,
    pub enabled: bool,
    state: ControlState,
    binding: Option<Binding>,
    nested: Option<NestedObjectController>,
}

impl Control {
    pub fn new(kind: ControlKind, property: impl Into<String>) -> Self {
        let property = property.into();
        Self {
            id: Uuid::new_v4(),
            name: format!("{}{}", kind.default_name_prefix(), property),
            property,
            kind,
            margin: 0.0,
            enabled: true,
            state: Rc::new(RefCell::new(ControlValue::Empty)),
            binding: None,
            nested: None,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_nested(mut self, nested: NestedObjectController) -> Self {
        self.enabled = nested.is_available();
        self.nested = Some(nested);
        self
    }

    /// Wire the control to `property` of `source`. Triggers carry no value
    /// and are left unbound.
    pub fn bind(&mut self, source: &Rc<dyn Observable>) -> FormResult<()> {
        if !self.kind.is_bindable() {
            return Ok(());
        }
        let converter = Binding::converter_for(&self.kind);
        let binding = Binding::attach(source.clone(), &self.property, self.state.clone(), converter)?;
        self.binding = Some(binding);
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn value(&self) -> ControlValue {
        self.state.borrow().clone()
    }

    pub fn nested(&self) -> Option<&NestedObjectController> {
        self.nested.as_ref()
    }

    /// Apply a user edit. Bound controls write through to the source.
    pub fn edit(&self, value: ControlValue) -> FormResult<()> {
        if !self.enabled {
            return Err(FormError::Conversion(self.name.clone()));
        }
        let value = self.coerce(value)?;
        match &self.binding {
            Some(binding) => binding.update_source(value),
            None => {
                *self.state.borrow_mut() = value;
                Ok(())
            }
        }
    }

    fn coerce(&self, value: ControlValue) -> FormResult<ControlValue> {
        let rejected = || FormError::Conversion(self.name.clone());
        match (&self.kind, value) {
            (ControlKind::Toggle, ControlValue::Value(PropertyValue::Boolean(b))) => {
                Ok(ControlValue::Value(PropertyValue::Boolean(b)))
            }
            (ControlKind::Range(spec), ControlValue::Value(v)) => {
                let number = v.as_number().ok_or_else(rejected)?;
                spec.coerce(number).map(ControlValue::Value).ok_or_else(rejected)
            }
            (ControlKind::Selection(items), ControlValue::Item(Some(item))) => items
                .iter()
                .find(|candidate| candidate.value == item.value)
                .cloned()
                .map(|item| ControlValue::Item(Some(item)))
                .ok_or_else(rejected),
            // Raw pass-through; converting typed text is the host's job.
            (ControlKind::Text, ControlValue::Value(v)) => Ok(ControlValue::Value(v)),
            _ => Err(rejected()),
        }
    }

    /// Text a host shows for the current value.
    pub fn display_text(&self) -> String {
        let value = self.state.borrow();
        match (&self.kind, &*value) {
            (ControlKind::Trigger { caption }, _) => caption.clone(),
            (ControlKind::Toggle, ControlValue::Value(v)) => {
                let mark = if v.as_bool().unwrap_or(false) { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            (ControlKind::Range(spec), ControlValue::Value(v)) => v
                .as_number()
                .map(|n| spec.format(n))
                .unwrap_or_default(),
            (_, ControlValue::Item(Some(item))) => item.label.clone(),
            (_, ControlValue::Value(v)) => v.to_string(),
            _ => String::new(),
        }
    }
}

impl std::fmt::Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &*self.state.borrow())
            .field("bound", &self.binding.is_some())
            .finish()
    }
}
