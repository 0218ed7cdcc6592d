//! Settings objects the `autoui` binary edits.

use autoui_forms::{
    EnumInfo, FormError, FormResult, PropertyMeta, PropertyValue, RangeLimits, Settings, Subject,
    TypeInfo, TypeTag,
};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    HighContrast,
}

impl Theme {
    fn info() -> EnumInfo {
        EnumInfo::new("Theme")
            .member(0, "Light")
            .member(1, "Dark")
            .labeled(2, "HighContrast", "High contrast")
    }

    fn value(self) -> i64 {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
            Theme::HighContrast => 2,
        }
    }

    fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Theme::Light),
            1 => Some(Theme::Dark),
            2 => Some(Theme::HighContrast),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioSettings {
    pub muted: bool,
    pub volume: i32,
    pub balance: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            muted: false,
            volume: 70,
            balance: 0.0,
        }
    }
}

impl AudioSettings {
    fn snapshot(&self) -> Value {
        json!({ "muted": self.muted, "volume": self.volume, "balance": self.balance })
    }
}

impl Settings for AudioSettings {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("AudioSettings")
            .display_name("Audio")
            .property(PropertyMeta::new("Muted", TypeTag::Bool).eligible().order(0))
            .property(PropertyMeta::new("Volume", TypeTag::Integer).eligible().order(1).range(0.0, 100.0))
            .property(
                PropertyMeta::new("Balance", TypeTag::Float)
                    .eligible()
                    .order(2)
                    .limits(RangeLimits::new(-1.0, 1.0).with_steps(0.1, 0.5)),
            )
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        match property {
            "Muted" => Some(self.muted.into()),
            "Volume" => Some(self.volume.into()),
            "Balance" => Some(self.balance.into()),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: PropertyValue) -> FormResult<()> {
        match (property, value) {
            ("Muted", PropertyValue::Boolean(b)) => self.muted = b,
            ("Volume", PropertyValue::Integer(i)) => self.volume = i,
            ("Balance", PropertyValue::Double(d)) => self.balance = d,
            ("Muted" | "Volume" | "Balance", other) => {
                return Err(FormError::type_mismatch(property, "bool, int or double", &other));
            }
            _ => return Err(FormError::UnknownProperty(property.to_string())),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub auto_save: bool,
    pub theme: Theme,
    pub font_scale: f64,
    pub max_retry_count: i32,
    pub user_name: String,
    pub audio: Option<Rc<RefCell<AudioSettings>>>,
    pub session_token: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            theme: Theme::Light,
            font_scale: 1.0,
            max_retry_count: 3,
            user_name: String::new(),
            audio: Some(Rc::new(RefCell::new(AudioSettings::default()))),
            session_token: String::new(),
        }
    }
}

impl AppSettings {
    pub fn snapshot(&self) -> Value {
        json!({
            "auto_save": self.auto_save,
            "theme": format!("{:?}", self.theme),
            "font_scale": self.font_scale,
            "max_retry_count": self.max_retry_count,
            "user_name": self.user_name,
            "audio": self.audio.as_ref().map(|audio| audio.borrow().snapshot()),
        })
    }
}

impl Settings for AppSettings {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new("AppSettings")
            .display_name("Application settings")
            .property(PropertyMeta::new("AutoSave", TypeTag::Bool).eligible().order(0))
            .property(PropertyMeta::new("Theme", TypeTag::Enum(Theme::info())).eligible().order(1))
            .property(PropertyMeta::new("FontScale", TypeTag::Float).eligible().order(2))
            .property(PropertyMeta::new("MaxRetryCount", TypeTag::Integer).eligible())
            .property(PropertyMeta::new("UserName", TypeTag::Text).eligible().display_name("User"))
            .property(PropertyMeta::new("Audio", TypeTag::Composite("AudioSettings".to_string())).eligible())
            .property(PropertyMeta::new("SessionToken", TypeTag::Text))
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        match property {
            "AutoSave" => Some(self.auto_save.into()),
            "Theme" => Some(PropertyValue::Enum(self.theme.value())),
            "FontScale" => Some(self.font_scale.into()),
            "MaxRetryCount" => Some(self.max_retry_count.into()),
            "UserName" => Some(self.user_name.clone().into()),
            "Audio" => Some(self.audio.as_ref().map(Subject::shared).into()),
            "SessionToken" => Some(self.session_token.clone().into()),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: PropertyValue) -> FormResult<()> {
        match (property, value) {
            ("AutoSave", PropertyValue::Boolean(b)) => self.auto_save = b,
            ("Theme", PropertyValue::Enum(v)) => {
                self.theme = Theme::from_value(v)
                    .ok_or_else(|| FormError::Conversion(format!("{v} is not a Theme value")))?;
            }
            ("FontScale", PropertyValue::Double(d)) => self.font_scale = d,
            ("MaxRetryCount", PropertyValue::Integer(i)) => self.max_retry_count = i,
            ("UserName", PropertyValue::String(s)) => self.user_name = s,
            ("SessionToken", PropertyValue::String(s)) => self.session_token = s,
            ("Audio", PropertyValue::Null) => self.audio = None,
            (name, other) if self.type_info().find(name).is_some() => {
                return Err(FormError::type_mismatch(property, "matching value", &other));
            }
            _ => return Err(FormError::UnknownProperty(property.to_string())),
        }
        Ok(())
    }
}
