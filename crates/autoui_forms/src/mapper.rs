use crate::config::FormConfig;
use crate::control::{Control, ControlKind, RangeSpec};
use crate::errors::{FormError, FormResult};
use crate::metadata::{EnumInfo, PropertyDescriptor, RangeLimits, TypeTag};
use crate::nested::NestedObjectController;
use crate::properties::PropertyValue;
use crate::subject::{Observable, Subject};
use std::rc::Rc;
use tracing::error;

/// Bounds of a float slider whose property declares no range limits.
pub const DEFAULT_FLOAT_MIN: f64 = 1.0;
pub const DEFAULT_FLOAT_MAX: f64 = 10.0;
/// Float sliders always move in steps of this size.
pub const FLOAT_STEP: f64 = 0.05;
pub const FLOAT_LARGE_CHANGE: f64 = 1.0;
pub const FLOAT_PRECISION: u8 = 2;

/// Which construction rule a property falls under.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPlan {
    Toggle,
    Selection(EnumInfo),
    FloatRange(Option<RangeLimits>),
    /// Integers get a slider only when range limits are declared.
    Integer(Option<RangeLimits>),
    Text,
    Trigger,
}

/// Total mapping from a descriptor to its construction rule.
pub fn classify(descriptor: &PropertyDescriptor) -> FormResult<ControlPlan> {
    let plan = match &descriptor.declared_type {
        TypeTag::Bool => ControlPlan::Toggle,
        TypeTag::Enum(info) => ControlPlan::Selection(info.clone()),
        TypeTag::Float => ControlPlan::FloatRange(descriptor.range_limits),
        TypeTag::Integer => ControlPlan::Integer(descriptor.range_limits),
        TypeTag::Text => ControlPlan::Text,
        TypeTag::Composite(_) => ControlPlan::Trigger,
        TypeTag::Opaque(type_name) => {
            return Err(FormError::UnsupportedType {
                property: descriptor.name.clone(),
                type_name: type_name.clone(),
            });
        }
    };
    Ok(plan)
}

/// Builds unbound controls, one method per rule. Override a method to
/// change how that kind of property is presented.
pub trait ControlFactory {
    fn toggle(&self, descriptor: &PropertyDescriptor, config: &FormConfig) -> Control {
        Control::new(ControlKind::Toggle, &descriptor.name).with_margin(config.margin)
    }

    fn selection(&self, descriptor: &PropertyDescriptor, info: &EnumInfo, config: &FormConfig) -> Control {
        Control::new(ControlKind::Selection(info.items()), &descriptor.name).with_margin(config.margin)
    }

    fn float_range(
        &self,
        descriptor: &PropertyDescriptor,
        limits: Option<&RangeLimits>,
        config: &FormConfig,
    ) -> Control {
        let spec = RangeSpec {
            minimum: limits.map_or(DEFAULT_FLOAT_MIN, |l| l.min),
            maximum: limits.map_or(DEFAULT_FLOAT_MAX, |l| l.max),
            tick_frequency: FLOAT_STEP,
            large_change: FLOAT_LARGE_CHANGE,
            precision: FLOAT_PRECISION,
            integral: false,
        };
        Control::new(ControlKind::Range(spec), &descriptor.name).with_margin(config.margin)
    }

    fn integer(
        &self,
        descriptor: &PropertyDescriptor,
        limits: Option<&RangeLimits>,
        config: &FormConfig,
    ) -> Control {
        match limits {
            Some(limits) => {
                let spec = RangeSpec {
                    minimum: limits.min.trunc(),
                    maximum: limits.max.trunc(),
                    tick_frequency: limits.tick_frequency.trunc(),
                    large_change: limits.large_change.trunc(),
                    precision: 0,
                    integral: true,
                };
                Control::new(ControlKind::Range(spec), &descriptor.name).with_margin(config.margin)
            }
            // No implied range, so a free-text box.
            None => self.text(descriptor, config),
        }
    }

    fn text(&self, descriptor: &PropertyDescriptor, config: &FormConfig) -> Control {
        Control::new(ControlKind::Text, &descriptor.name).with_margin(config.margin)
    }

    fn trigger(&self, descriptor: &PropertyDescriptor, subject: Option<Subject>, config: &FormConfig) -> Control {
        NestedObjectController::new(subject, &config.trigger_caption)
            .into_control(&descriptor.name)
            .with_margin(config.margin)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultControlFactory;

impl ControlFactory for DefaultControlFactory {}

pub struct ControlMapper<'a> {
    factory: &'a dyn ControlFactory,
    config: &'a FormConfig,
}

impl<'a> ControlMapper<'a> {
    pub fn new(factory: &'a dyn ControlFactory, config: &'a FormConfig) -> Self {
        Self { factory, config }
    }

    /// Build and bind the control for one row.
    pub fn build(&self, descriptor: &PropertyDescriptor, source: &Rc<dyn Observable>) -> FormResult<Control> {
        let plan = classify(descriptor).inspect_err(|err| error!(error = %err, "cannot map property"))?;

        let mut control = match &plan {
            ControlPlan::Toggle => self.factory.toggle(descriptor, self.config),
            ControlPlan::Selection(info) => self.factory.selection(descriptor, info, self.config),
            ControlPlan::FloatRange(limits) => self.factory.float_range(descriptor, limits.as_ref(), self.config),
            ControlPlan::Integer(limits) => self.factory.integer(descriptor, limits.as_ref(), self.config),
            ControlPlan::Text => self.factory.text(descriptor, self.config),
            ControlPlan::Trigger => {
                let subject = match source.get(&descriptor.name) {
                    Some(PropertyValue::Object(subject)) => Some(subject),
                    Some(PropertyValue::Null) => None,
                    Some(other) => {
                        return Err(FormError::type_mismatch(
                            &descriptor.name,
                            descriptor.declared_type.type_name(),
                            &other,
                        ));
                    }
                    None => return Err(FormError::UnknownProperty(descriptor.name.clone())),
                };
                self.factory.trigger(descriptor, subject, self.config)
            }
        };

        control.bind(source)?;
        Ok(control)
    }
}
