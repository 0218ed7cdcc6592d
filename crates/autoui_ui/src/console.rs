use crate::errors::{CommandError, CommandResult};
use crate::render::render_layout;
use autoui_forms::{
    Control, ControlKind, ControlValue, FormResult, FormWindow, PropertyValue, ShowMode, UiEvent,
    WindowHandle, WindowHost,
};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
commands:
  set <Property> <value>   change a value
  open <Property>          open the sub-form behind a button
  show                     redraw the form
  json                     print the form layout as JSON
  close                    close the form";

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(UiEvent),
    Show,
    Json,
    Help,
}

fn find_control<'a>(window: &'a FormWindow, name: &str) -> CommandResult<&'a Control> {
    window
        .control(name)
        .ok()
        .or_else(|| window.control_by_name(name))
        .or_else(|| window.rows.iter().map(|r| &r.control).find(|c| c.property.eq_ignore_ascii_case(name)))
        .ok_or_else(|| CommandError::UnknownProperty(name.to_string()))
}

fn parse_bool(text: &str) -> CommandResult<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidValue {
            text: text.to_string(),
            expected: "boolean",
        }),
    }
}

fn parse_number<T: std::str::FromStr>(text: &str, expected: &'static str) -> CommandResult<T> {
    text.parse().map_err(|_| CommandError::InvalidValue {
        text: text.to_string(),
        expected,
    })
}

/// Turn typed text into the value shape `control` accepts.
pub fn parse_value(control: &Control, text: &str) -> CommandResult<ControlValue> {
    match &control.kind {
        ControlKind::Toggle => Ok(PropertyValue::Boolean(parse_bool(text)?).into()),
        ControlKind::Range(_) => Ok(PropertyValue::Double(parse_number(text, "number")?).into()),
        ControlKind::Selection(items) => {
            let wanted = text.trim();
            items
                .iter()
                .find(|item| {
                    item.label.eq_ignore_ascii_case(wanted)
                        || item.label.replace(' ', "").eq_ignore_ascii_case(wanted)
                        || wanted.parse::<i64>().is_ok_and(|v| v == item.value)
                })
                .cloned()
                .map(ControlValue::from)
                .ok_or_else(|| CommandError::UnknownOption(wanted.to_string()))
        }
        // Text boxes keep the shape of what they currently hold.
        ControlKind::Text => match control.value() {
            ControlValue::Value(PropertyValue::Integer(_)) => {
                Ok(PropertyValue::Integer(parse_number(text, "integer")?).into())
            }
            ControlValue::Value(PropertyValue::Double(_)) => {
                Ok(PropertyValue::Double(parse_number(text, "number")?).into())
            }
            _ => Ok(PropertyValue::from(text).into()),
        },
        ControlKind::Trigger { .. } => Err(CommandError::Usage("open <Property>")),
    }
}

/// Parse one input line against the rows of `window`.
pub fn parse_command(line: &str, window: &FormWindow) -> CommandResult<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "close" | "quit" | "exit" => Ok(Command::Event(UiEvent::Close)),
        "show" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "open" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("open <Property>"));
            }
            let control = find_control(window, rest)?;
            Ok(Command::Event(UiEvent::activate(control.property.clone())))
        }
        "set" => {
            let (name, text) = rest
                .split_once(char::is_whitespace)
                .ok_or(CommandError::Usage("set <Property> <value>"))?;
            let control = find_control(window, name)?;
            let value = parse_value(control, text.trim())?;
            Ok(Command::Event(UiEvent::Edit {
                property: control.property.clone(),
                value,
            }))
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Line-oriented host: renders forms as text and reads commands.
pub struct ConsoleHost<R, W> {
    input: R,
    output: W,
    native: Option<WindowHandle>,
    next_handle: isize,
}

impl<R: BufRead, W: Write> ConsoleHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            native: None,
            next_handle: 1,
        }
    }

    /// Report `handle` for every shown form, e.g. the real console window.
    pub fn with_native_handle(mut self, handle: Option<WindowHandle>) -> Self {
        self.native = handle;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&mut self, window: &FormWindow) -> FormResult<()> {
        write!(self.output, "{}", render_layout(&window.layout()))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> WindowHost for ConsoleHost<R, W> {
    fn show(&mut self, window: &FormWindow, mode: ShowMode) -> FormResult<WindowHandle> {
        let handle = self.native.unwrap_or_else(|| {
            let handle = WindowHandle(self.next_handle);
            self.next_handle += 1;
            handle
        });
        debug!(title = %window.title, ?mode, handle = handle.0, "rendering form");
        self.render(window)?;
        Ok(handle)
    }

    fn next_event(&mut self, window: &FormWindow) -> FormResult<Option<UiEvent>> {
        loop {
            write!(self.output, "{}> ", window.title)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse_command(&line, window) {
                Ok(Command::Event(event)) => return Ok(Some(event)),
                Ok(Command::Show) => self.render(window)?,
                Ok(Command::Json) => writeln!(self.output, "{}", window.layout().to_json()?)?,
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Err(CommandError::Empty) => {}
                Err(err) => writeln!(self.output, "error: {err}")?,
            }
        }
    }

    fn refresh(&mut self, window: &FormWindow) -> FormResult<()> {
        self.render(window)
    }

    fn close(&mut self, handle: WindowHandle) -> FormResult<()> {
        debug!(handle = handle.0, "form closed");
        writeln!(self.output, "closed")?;
        Ok(())
    }
}
