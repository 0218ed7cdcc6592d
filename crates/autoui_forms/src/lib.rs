pub mod binding;
pub mod composer;
pub mod config;
pub mod control;
pub mod errors;
pub mod events;
pub mod form;
pub mod host;
pub mod humanize;
pub mod mapper;
pub mod metadata;
pub mod nested;
pub mod notify;
pub mod properties;
pub mod session;
pub mod subject;

pub use binding::*;
pub use composer::*;
pub use config::*;
pub use control::*;
pub use errors::*;
pub use events::*;
pub use form::*;
pub use host::*;
pub use humanize::*;
pub use mapper::*;
pub use metadata::*;
pub use nested::*;
pub use notify::*;
pub use properties::*;
pub use session::*;
pub use subject::*;
