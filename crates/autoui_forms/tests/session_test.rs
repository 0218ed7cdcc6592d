mod common;

use autoui_forms::*;
use common::{App, Outer, RecordingChrome, Scenario, Unsupported};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_dialog_edits_subject_and_closes() {
    let scenario = Rc::new(RefCell::new(Scenario::default()));
    let chrome = RecordingChrome::default();
    let host = ScriptedHost::new(vec![
        UiEvent::edit("Enabled", true),
        UiEvent::edit("Volume", 40),
        UiEvent::edit("Name", "Speakers"),
        UiEvent::Close,
    ]);

    let mut session = Session::new(host).with_chrome(chrome.clone());
    session.show_dialog(Subject::shared(&scenario)).unwrap();
    assert_eq!(session.depth(), 0);

    let scenario = scenario.borrow();
    assert!(scenario.enabled);
    assert_eq!(scenario.volume, 40);
    assert_eq!(scenario.name, "Speakers");

    let host = session.into_host();
    assert_eq!(host.shown.len(), 1);
    assert_eq!(host.shown[0].mode, ShowMode::Modal);
    let labels: Vec<&str> = host.shown[0].layout.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Enabled", "Volume", "Name"]);
    assert_eq!(host.closed, vec![host.shown[0].handle]);
    assert_eq!(*chrome.stripped.borrow(), vec![host.shown[0].handle]);
    assert_eq!(host.refreshes, 3);
}

#[test]
fn test_window_options_follow_config() {
    let scenario = Rc::new(RefCell::new(Scenario::default()));
    let mut session = Session::new(ScriptedHost::new(vec![UiEvent::Close]));
    session.show_dialog(Subject::shared(&scenario)).unwrap();

    let layout = &session.host().shown[0].layout;
    assert_eq!(layout.title, "Scenario");
    assert_eq!(layout.close_caption, "Close");
    assert!(layout.options.topmost);
    assert!(!layout.options.resizable);
    assert!(layout.options.size_to_content);
    assert_eq!(layout.options.startup, StartupLocation::CenterScreen);
    assert_eq!((layout.options.min_width, layout.options.min_height), (300.0, 100.0));
}

#[test]
fn test_nested_form_is_modal_over_the_parent() {
    let app = Rc::new(RefCell::new(App::default()));
    let audio = app.borrow().audio.clone().unwrap();
    let chrome = RecordingChrome::default();
    let host = ScriptedHost::new(vec![
        UiEvent::activate("Audio"),
        UiEvent::edit("Muted", true),
        UiEvent::edit("Balance", 4),
        UiEvent::Close,
        UiEvent::edit("Title", "After"),
        UiEvent::Close,
    ]);

    let mut session = Session::new(host).with_chrome(chrome.clone());
    session.show_dialog(Subject::shared(&app)).unwrap();

    assert!(audio.borrow().muted);
    assert_eq!(audio.borrow().balance, 4);
    assert_eq!(app.borrow().title, "After");

    let host = session.into_host();
    assert_eq!(
        host.delivered_to(),
        vec!["App", "Audio output", "Audio output", "Audio output", "App", "App"]
    );
    assert_eq!(host.shown.len(), 2);
    assert_eq!(host.shown[1].mode, ShowMode::Modal);
    assert_eq!(host.shown[1].layout.title, "Audio output");
    // The child closes before the parent.
    assert_eq!(host.closed, vec![host.shown[1].handle, host.shown[0].handle]);
    assert_eq!(chrome.stripped.borrow().len(), 2);
}

#[test]
fn test_each_activation_opens_a_fresh_form() {
    let app = Rc::new(RefCell::new(App::default()));
    let host = ScriptedHost::new(vec![
        UiEvent::activate("Audio"),
        UiEvent::Close,
        UiEvent::activate("Audio"),
        UiEvent::edit("Balance", -2),
        UiEvent::Close,
        UiEvent::Close,
    ]);

    let mut session = Session::new(host);
    session.show_dialog(Subject::shared(&app)).unwrap();

    let host = session.into_host();
    assert_eq!(host.shown.len(), 3);
    assert_ne!(host.shown[1].handle, host.shown[2].handle);
    // The second sub-form reads the object the first one left behind.
    let balance = host.shown[2].layout.rows.iter().find(|r| r.property == "Balance").unwrap();
    assert_eq!(balance.display, "0");
    assert_eq!(app.borrow().audio.as_ref().unwrap().borrow().balance, -2);
}

#[test]
fn test_trigger_reuses_its_proxy() {
    let app = Rc::new(RefCell::new(App::default()));
    let window = common::compose(common::observe(&app)).unwrap();
    let nested = window.control("Audio").unwrap().nested().unwrap();

    let first = nested.source().unwrap();
    let second = nested.source().unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn test_unsupported_nested_type_surfaces_to_caller() {
    let outer = Rc::new(RefCell::new(Outer {
        inner: Rc::new(RefCell::new(Unsupported::default())),
    }));
    let host = ScriptedHost::new(vec![UiEvent::activate("Inner"), UiEvent::Close]);

    let mut session = Session::new(host);
    let err = session.show_dialog(Subject::shared(&outer)).unwrap_err();
    assert!(matches!(err, FormError::UnsupportedType { ref property, .. } if property == "Created"));
    assert_eq!(session.depth(), 0);

    let host = session.into_host();
    assert_eq!(host.shown.len(), 1);
    assert_eq!(host.closed, vec![host.shown[0].handle]);
    assert_eq!(host.remaining(), 1);
}

#[test]
fn test_unsupported_top_level_type_shows_nothing() {
    let mut session = Session::new(ScriptedHost::new(vec![UiEvent::Close]));
    let result = session.show_dialog(Subject::plain(Unsupported::default()));
    assert!(matches!(result, Err(FormError::UnsupportedType { .. })));
    assert!(session.host().shown.is_empty());
}

#[test]
fn test_rejected_edit_keeps_the_form_open() {
    let scenario = Rc::new(RefCell::new(Scenario::default()));
    let host = ScriptedHost::new(vec![
        UiEvent::edit("Name", 5),
        UiEvent::edit("Missing", true),
        UiEvent::activate("Name"),
        UiEvent::edit("Name", "ok"),
        UiEvent::Close,
    ]);

    let mut session = Session::new(host);
    session.show_dialog(Subject::shared(&scenario)).unwrap();
    assert_eq!(scenario.borrow().name, "ok");
    assert_eq!(session.host().remaining(), 0);
}

#[test]
fn test_host_ending_the_script_closes_the_form() {
    let scenario = Rc::new(RefCell::new(Scenario::default()));
    let mut session = Session::new(ScriptedHost::new(Vec::new()));
    session.show_dialog(Subject::shared(&scenario)).unwrap();
    assert_eq!(session.depth(), 0);
    assert_eq!(session.host().closed.len(), 1);
}

#[test]
fn test_modeless_forms_are_pumped_by_the_caller() {
    let scenario = Rc::new(RefCell::new(Scenario::default()));
    let app = Rc::new(RefCell::new(App::default()));
    let host = ScriptedHost::new(vec![UiEvent::edit("Volume", 11), UiEvent::Close]);

    let mut session = Session::new(host);
    let first = session.show(Subject::shared(&scenario)).unwrap();
    let second = session.show(Subject::shared(&app)).unwrap();
    assert_eq!(session.depth(), 2);
    assert!(session.is_interactable(first));
    assert!(session.is_interactable(second));
    assert_eq!(session.host().shown[0].mode, ShowMode::Modeless);

    assert!(session.pump(first).unwrap());
    assert_eq!(scenario.borrow().volume, 11);
    assert!(!session.pump(first).unwrap());
    assert!(session.window(first).is_none());
    assert!(!session.is_interactable(first));
    assert!(matches!(session.pump(first), Err(FormError::UnknownWindow(id)) if id == first));

    session.close(second).unwrap();
    assert_eq!(session.depth(), 0);
}

#[test]
fn test_native_subject_is_not_wrapped() {
    let native = Rc::new(common::Native::default());
    let host = ScriptedHost::new(vec![UiEvent::edit("Level", 8), UiEvent::Close]);

    let mut session = Session::new(host);
    session.show_dialog(Subject::notifying(&native)).unwrap();
    assert_eq!(native.level.get(), 8);
    assert_eq!(native.subscriber_count(), 0);
}

#[test]
fn test_layout_serializes_to_json() {
    let scenario = Rc::new(RefCell::new(Scenario {
        volume: 30,
        ..Scenario::default()
    }));
    let window = common::compose(common::observe(&scenario)).unwrap();
    let json = window.layout().to_json().unwrap();

    assert!(json.contains("\"title\": \"Scenario\""));
    assert!(json.contains("\"display\": \"30\""));
    assert!(json.contains("sldVolume"));
}
