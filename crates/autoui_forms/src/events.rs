use crate::control::{ControlValue, DisplayItem};
use crate::properties::PropertyValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowMode {
    Modal,
    Modeless,
}

/// User interaction delivered by a host to the top window.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The control bound to `property` was changed by the user.
    Edit { property: String, value: ControlValue },
    /// The trigger of `property` was pressed.
    Activate { property: String },
    /// The close action was taken.
    Close,
}

impl UiEvent {
    pub fn edit(property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        UiEvent::Edit {
            property: property.into(),
            value: ControlValue::Value(value.into()),
        }
    }

    pub fn select(property: impl Into<String>, item: DisplayItem) -> Self {
        UiEvent::Edit {
            property: property.into(),
            value: ControlValue::Item(Some(item)),
        }
    }

    pub fn activate(property: impl Into<String>) -> Self {
        UiEvent::Activate {
            property: property.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UiEvent::Edit { .. } => "Edit",
            UiEvent::Activate { .. } => "Activate",
            UiEvent::Close => "Close",
        }
    }
}
