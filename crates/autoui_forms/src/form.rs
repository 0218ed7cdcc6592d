use crate::config::FormConfig;
use crate::control::{Control, ControlKind};
use crate::errors::{FormError, FormResult};
use crate::subject::Observable;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartupLocation {
    CenterScreen,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowOptions {
    pub min_width: f64,
    pub min_height: f64,
    pub margin: f64,
    pub topmost: bool,
    pub resizable: bool,
    pub size_to_content: bool,
    pub tool_window: bool,
    pub startup: StartupLocation,
}

impl WindowOptions {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
            margin: config.margin,
            topmost: config.topmost,
            resizable: false,
            size_to_content: true,
            tool_window: true,
            startup: StartupLocation::CenterScreen,
        }
    }
}

#[derive(Debug)]
pub struct FormRow {
    pub label: String,
    pub control: Control,
}

/// A composed settings window: labelled rows plus a close action.
pub struct FormWindow {
    pub id: Uuid,
    pub title: String,
    pub options: WindowOptions,
    pub rows: Vec<FormRow>,
    pub close_caption: String,
    source: Rc<dyn Observable>,
}

impl FormWindow {
    pub fn new(
        title: impl Into<String>,
        options: WindowOptions,
        close_caption: impl Into<String>,
        source: Rc<dyn Observable>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            options,
            rows: Vec::new(),
            close_caption: close_caption.into(),
            source,
        }
    }

    pub fn add_row(&mut self, label: impl Into<String>, control: Control) {
        self.rows.push(FormRow {
            label: label.into(),
            control,
        });
    }

    /// The object this window's controls are bound to.
    pub fn source(&self) -> &Rc<dyn Observable> {
        &self.source
    }

    pub fn row(&self, property: &str) -> Option<&FormRow> {
        self.rows.iter().find(|r| r.control.property == property)
    }

    pub fn control(&self, property: &str) -> FormResult<&Control> {
        self.row(property)
            .map(|r| &r.control)
            .ok_or_else(|| FormError::UnknownProperty(property.to_string()))
    }

    pub fn control_by_name(&self, name: &str) -> Option<&Control> {
        self.rows
            .iter()
            .map(|r| &r.control)
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn layout(&self) -> FormLayout {
        FormLayout {
            title: self.title.clone(),
            options: self.options,
            rows: self
                .rows
                .iter()
                .map(|r| RowLayout {
                    label: r.label.clone(),
                    control: r.control.name.clone(),
                    property: r.control.property.clone(),
                    kind: r.control.kind.clone(),
                    display: r.control.display_text(),
                    enabled: r.control.enabled,
                    margin: r.control.margin,
                })
                .collect(),
            close_caption: self.close_caption.clone(),
        }
    }
}

impl std::fmt::Debug for FormWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormWindow")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("rows", &self.rows)
            .finish()
    }
}

/// Host-facing snapshot of a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormLayout {
    pub title: String,
    pub options: WindowOptions,
    pub rows: Vec<RowLayout>,
    pub close_caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub label: String,
    pub control: String,
    pub property: String,
    pub kind: ControlKind,
    pub display: String,
    pub enabled: bool,
    pub margin: f64,
}

impl FormLayout {
    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
