#![allow(dead_code)]

use autoui_forms::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Declared in a different order than it renders.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub name: String,
    pub volume: i32,
    pub enabled: bool,
    pub secret: String,
}

impl Settings for Scenario {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("Scenario")
            .property(PropertyMeta::new("Name", TypeTag::Text).eligible())
            .property(PropertyMeta::new("Volume", TypeTag::Integer).eligible().order(1).range(0.0, 100.0))
            .property(PropertyMeta::new("Enabled", TypeTag::Bool).eligible().order(0))
            .property(PropertyMeta::new("Secret", TypeTag::Text))
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        match property {
            "Name" => Some(self.name.clone().into()),
            "Volume" => Some(self.volume.into()),
            "Enabled" => Some(self.enabled.into()),
            "Secret" => Some(self.secret.clone().into()),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: PropertyValue) -> FormResult<()> {
        match (property, &value) {
            ("Name", PropertyValue::String(s)) => self.name = s.clone(),
            ("Volume", PropertyValue::Integer(i)) => self.volume = *i,
            ("Enabled", PropertyValue::Boolean(b)) => self.enabled = *b,
            ("Secret", PropertyValue::String(s)) => self.secret = s.clone(),
            ("Name" | "Secret", _) => return Err(FormError::type_mismatch(property, "string", &value)),
            ("Volume", _) => return Err(FormError::type_mismatch(property, "int", &value)),
            ("Enabled", _) => return Err(FormError::type_mismatch(property, "bool", &value)),
            _ => return Err(FormError::UnknownProperty(property.to_string())),
        }
        Ok(())
    }
}

pub fn quality_enum() -> EnumInfo {
    EnumInfo::new("Quality")
        .member(0, "Low")
        .member(1, "Medium")
        .labeled(2, "UltraHigh", "Ultra high")
}

#[derive(Debug, Clone, Default)]
pub struct Audio {
    pub muted: bool,
    pub balance: i32,
}

impl Settings for Audio {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("Audio")
            .display_name("Audio output")
            .property(PropertyMeta::new("Muted", TypeTag::Bool).eligible())
            .property(
                PropertyMeta::new("Balance", TypeTag::Integer)
                    .eligible()
                    .limits(RangeLimits::new(-10.0, 10.0).with_steps(2.0, 5.0)),
            )
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        match property {
            "Muted" => Some(self.muted.into()),
            "Balance" => Some(self.balance.into()),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: PropertyValue) -> FormResult<()> {
        match (property, value) {
            ("Muted", PropertyValue::Boolean(b)) => self.muted = b,
            ("Balance", PropertyValue::Integer(i)) => self.balance = i,
            (_, other) => return Err(FormError::type_mismatch(property, "bool or int", &other)),
        }
        Ok(())
    }
}

/// Exercises every control kind.
pub struct App {
    pub quality: i64,
    pub gain: f64,
    pub speed: f64,
    pub retries: i32,
    pub port: i32,
    pub title: String,
    pub audio: Option<Rc<RefCell<Audio>>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            quality: 1,
            gain: 2.5,
            speed: 1.0,
            retries: 3,
            port: 8080,
            title: "Main".to_string(),
            audio: Some(Rc::new(RefCell::new(Audio::default()))),
        }
    }
}

impl Settings for App {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("App")
            .property(PropertyMeta::new("Quality", TypeTag::Enum(quality_enum())).eligible().order(0))
            .property(PropertyMeta::new("Gain", TypeTag::Float).eligible().order(1))
            .property(
                PropertyMeta::new("Speed", TypeTag::Float)
                    .eligible()
                    .order(2)
                    .limits(RangeLimits::new(0.5, 4.0).with_steps(0.5, 1.0)),
            )
            .property(PropertyMeta::new("Retries", TypeTag::Integer).eligible().order(3))
            .property(
                PropertyMeta::new("Port", TypeTag::Integer)
                    .eligible()
                    .order(4)
                    .limits(RangeLimits::new(1024.9, 65535.7).with_steps(10.6, 100.2)),
            )
            .property(PropertyMeta::new("Title", TypeTag::Text).eligible().order(5).display_name("Window title"))
            .property(PropertyMeta::new("Audio", TypeTag::Composite("Audio".into())).eligible().order(6))
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        match property {
            "Quality" => Some(PropertyValue::Enum(self.quality)),
            "Gain" => Some(self.gain.into()),
            "Speed" => Some(self.speed.into()),
            "Retries" => Some(self.retries.into()),
            "Port" => Some(self.port.into()),
            "Title" => Some(self.title.clone().into()),
            "Audio" => Some(self.audio.as_ref().map(Subject::shared).into()),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: PropertyValue) -> FormResult<()> {
        match (property, value) {
            ("Quality", PropertyValue::Enum(e)) => self.quality = e,
            ("Gain", PropertyValue::Double(d)) => self.gain = d,
            ("Speed", PropertyValue::Double(d)) => self.speed = d,
            ("Retries", PropertyValue::Integer(i)) => self.retries = i,
            ("Port", PropertyValue::Integer(i)) => self.port = i,
            ("Title", PropertyValue::String(s)) => self.title = s,
            (_, other) => return Err(FormError::type_mismatch(property, "declared type", &other)),
        }
        Ok(())
    }
}

/// Declares a property type no control can show.
#[derive(Debug, Default)]
pub struct Unsupported {
    pub created: i64,
}

impl Settings for Unsupported {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("Unsupported")
            .property(PropertyMeta::new("Label", TypeTag::Text).eligible())
            .property(PropertyMeta::new("Created", TypeTag::Opaque("i64".into())).eligible())
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        match property {
            "Label" => Some("x".into()),
            "Created" => Some(PropertyValue::Integer(self.created as i32)),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, _value: PropertyValue) -> FormResult<()> {
        Err(FormError::UnknownProperty(property.to_string()))
    }
}

/// Holds an unsupported property inside a nested object.
pub struct Outer {
    pub inner: Rc<RefCell<Unsupported>>,
}

impl Settings for Outer {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("Outer").property(PropertyMeta::new("Inner", TypeTag::Composite("Unsupported".into())).eligible())
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        (property == "Inner").then(|| Subject::shared(&self.inner).into())
    }

    fn set(&mut self, property: &str, _value: PropertyValue) -> FormResult<()> {
        Err(FormError::UnknownProperty(property.to_string()))
    }
}

/// An object with its own change notification that skips unchanged writes.
#[derive(Default)]
pub struct Native {
    pub level: Cell<i32>,
    handlers: RefCell<Vec<(SubscriptionId, ChangeHandler)>>,
    next_id: Cell<u64>,
}

impl Native {
    pub fn set_level(&self, level: i32) {
        if self.level.replace(level) != level {
            let handlers: Vec<ChangeHandler> = self.handlers.borrow().iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler("Level");
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl Observable for Native {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("Native").property(PropertyMeta::new("Level", TypeTag::Integer).eligible())
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        (property == "Level").then(|| self.level.get().into())
    }

    fn set(&self, property: &str, value: PropertyValue) -> FormResult<()> {
        match (property, value) {
            ("Level", PropertyValue::Integer(i)) => {
                self.set_level(i);
                Ok(())
            }
            (_, other) => Err(FormError::type_mismatch(property, "int", &other)),
        }
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

/// Records every strip request.
#[derive(Clone, Default)]
pub struct RecordingChrome {
    pub stripped: Rc<RefCell<Vec<WindowHandle>>>,
}

impl WindowChromeCustomizer for RecordingChrome {
    fn strip_system_menu(&self, handle: WindowHandle) {
        self.stripped.borrow_mut().push(handle);
    }
}

pub fn observe<T: Settings + 'static>(settings: &Rc<RefCell<T>>) -> Rc<dyn Observable> {
    Subject::shared(settings).into_observable()
}

pub fn compose(source: Rc<dyn Observable>) -> FormResult<FormWindow> {
    let config = FormConfig::default();
    FormComposer::new(&config, &DefaultControlFactory).compose(source)
}
