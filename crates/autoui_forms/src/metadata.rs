use crate::control::DisplayItem;
use crate::humanize::humanize;
use serde::{Deserialize, Serialize};

/// Classification of a property's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    Bool,
    /// 32-bit signed integer.
    Integer,
    /// Single or double precision float.
    Float,
    Text,
    Enum(EnumInfo),
    /// A structured object held by reference; opens a nested form.
    Composite(String),
    /// Any other value type (wide integers, dates, decimals...).
    Opaque(String),
}

impl TypeTag {
    pub fn type_name(&self) -> &str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Integer => "int",
            TypeTag::Float => "float",
            TypeTag::Text => "string",
            TypeTag::Enum(info) => info.name.as_str(),
            TypeTag::Composite(name) => name.as_str(),
            TypeTag::Opaque(name) => name.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub value: i64,
    pub ident: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumInfo {
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl EnumInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, value: i64, ident: impl Into<String>) -> Self {
        self.members.push(EnumMember {
            value,
            ident: ident.into(),
            label: None,
        });
        self
    }

    pub fn labeled(mut self, value: i64, ident: impl Into<String>, label: impl Into<String>) -> Self {
        self.members.push(EnumMember {
            value,
            ident: ident.into(),
            label: Some(label.into()),
        });
        self
    }

    /// `(value, label)` pairs in declaration order. The label falls back to
    /// the member identifier.
    pub fn items(&self) -> Vec<DisplayItem> {
        self.members
            .iter()
            .map(|m| DisplayItem {
                value: m.value,
                label: m.label.clone().unwrap_or_else(|| m.ident.clone()),
            })
            .collect()
    }

    pub fn ident_of(&self, value: i64) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.value == value)
            .map(|m| m.ident.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub min: f64,
    pub max: f64,
    pub tick_frequency: f64,
    pub large_change: f64,
}

impl RangeLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            tick_frequency: 1.0,
            large_change: 1.0,
        }
    }

    pub fn with_steps(mut self, tick_frequency: f64, large_change: f64) -> Self {
        self.tick_frequency = tick_frequency;
        self.large_change = large_change;
        self
    }
}

/// Per-property configuration, however it was declared.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMeta {
    pub name: String,
    pub declared_type: TypeTag,
    pub eligible: bool,
    pub order: Option<i32>,
    pub display_name: Option<String>,
    pub range_limits: Option<RangeLimits>,
}

impl PropertyMeta {
    pub fn new(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            declared_type,
            eligible: false,
            order: None,
            display_name: None,
            range_limits: None,
        }
    }

    pub fn eligible(mut self) -> Self {
        self.eligible = true;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn range(self, min: f64, max: f64) -> Self {
        self.limits(RangeLimits::new(min, max))
    }

    pub fn limits(mut self, limits: RangeLimits) -> Self {
        self.range_limits = Some(limits);
        self
    }
}

/// Runtime description of a settings type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub name: String,
    pub display_name: Option<String>,
    pub properties: Vec<PropertyMeta>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            properties: Vec::new(),
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn property(mut self, meta: PropertyMeta) -> Self {
        self.properties.push(meta);
        self
    }

    pub fn find(&self, name: &str) -> Option<&PropertyMeta> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Window title: display name if declared, else the type name.
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub declared_type: TypeTag,
    pub order: Option<i32>,
    pub display_name: Option<String>,
    pub eligible: bool,
    pub range_limits: Option<RangeLimits>,
    pub declaration_index: usize,
}

impl PropertyDescriptor {
    fn from_meta(meta: &PropertyMeta, declaration_index: usize) -> Self {
        Self {
            name: meta.name.clone(),
            declared_type: meta.declared_type.clone(),
            order: meta.order,
            display_name: meta.display_name.clone(),
            eligible: meta.eligible,
            range_limits: meta.range_limits,
            declaration_index,
        }
    }

    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| humanize(&self.name))
    }

    /// Absent orders sort after every explicit one.
    fn sort_key(&self) -> (bool, i32) {
        match self.order {
            Some(order) => (false, order),
            None => (true, 0),
        }
    }
}

/// Eligible properties of `info`, ordered for display.
///
/// The sort is stable, so equal keys keep declaration order.
pub fn extract_descriptors(info: &TypeInfo) -> Vec<PropertyDescriptor> {
    let mut descriptors: Vec<PropertyDescriptor> = info
        .properties
        .iter()
        .enumerate()
        .filter(|(_, meta)| meta.eligible)
        .map(|(index, meta)| PropertyDescriptor::from_meta(meta, index))
        .collect();

    descriptors.sort_by_key(PropertyDescriptor::sort_key);
    descriptors
}
