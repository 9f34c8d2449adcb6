//! Integration tests for the create/edit form
//!
//! Payload construction, the required-name check, and what a successful or
//! failed submit does to the form.

use std::time::{Duration, Instant};

use sandtui::api::{BackendRejection, ConfigDetails, MappedFolder};
use sandtui::handlers::handle_api_response;
use sandtui::model::form::FormMode;
use sandtui::model::{Model, Severity, Tab};
use sandtui::services::{ApiRequest, ApiResponse};
use sandtui::App;
use tokio::sync::mpsc;

fn test_app() -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
    let (api_tx, api_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (_response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let model = Model::new("http://localhost:5000".to_string(), false);
    let app = App::new(model, api_tx, response_rx, std::env::temp_dir());
    (app, api_rx)
}

#[test]
fn test_payload_drops_rows_without_path() {
    let (mut app, _rx) = test_app();
    let form = &mut app.model.form;
    form.name = "dev".to_string();
    form.add_mapped_folder();
    form.mapped_folders[0].path = "C:\\data".to_string();
    form.add_mapped_folder();
    form.mapped_folders[1].readonly = false;

    let payload = form.to_payload();
    assert_eq!(
        payload.mapped_folders,
        vec![MappedFolder {
            path: "C:\\data".to_string(),
            readonly: true,
        }]
    );
    assert_eq!(form.mapped_folder_count, 2);
}

#[test]
fn test_missing_name_is_refused_locally() {
    let (mut app, mut rx) = test_app();
    app.model.form.name = "   ".to_string();

    app.submit_form();

    assert!(rx.try_recv().is_err());
    let notification = app.model.ui.notification.as_ref().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "Configuration name is required");
}

#[test]
fn test_submit_posts_payload() {
    let (mut app, mut rx) = test_app();
    app.model.form.name = " dev ".to_string();
    app.model.form.memory_mb = "8192".to_string();

    app.submit_form();

    match rx.try_recv().unwrap() {
        ApiRequest::CreateConfig { payload } => {
            assert_eq!(payload.name, "dev");
            assert_eq!(payload.memory_mb, Some(8192));
            assert!(payload.mapped_folders.is_empty());
        }
        other => panic!("unexpected request: {:?}", other),
    }
}

#[test]
fn test_successful_create_resets_and_schedules_switch() {
    let (mut app, _rx) = test_app();
    app.switch_tab(Tab::Create);
    app.model.form.name = "dev".to_string();
    app.model.form.add_mapped_folder();
    app.model.form.add_mapped_folder();

    handle_api_response(
        &mut app,
        ApiResponse::CreateResult {
            name: "dev".to_string(),
            message: Ok("Configuration created".to_string()),
        },
    );

    assert!(app.model.form.name.is_empty());
    assert!(app.model.form.mapped_folders.is_empty());
    assert_eq!(app.model.form.mapped_folder_count, 0);
    assert_eq!(
        app.model.ui.pending_tab_switch.map(|(tab, _)| tab),
        Some(Tab::Configs)
    );
    // Switch is delayed, not immediate
    assert_eq!(app.model.ui.active_tab, Tab::Create);
}

#[test]
fn test_pending_switch_fires_after_delay() {
    let (mut app, mut rx) = test_app();
    app.switch_tab(Tab::Create);
    app.model.ui.pending_tab_switch = Some((
        Tab::Configs,
        Instant::now()
            .checked_sub(Duration::from_millis(2000))
            .unwrap_or_else(Instant::now),
    ));

    app.tick();

    assert_eq!(app.model.ui.active_tab, Tab::Configs);
    assert!(app.model.ui.pending_tab_switch.is_none());
    assert_eq!(rx.try_recv().unwrap(), ApiRequest::ListConfigs);
}

#[test]
fn test_failed_create_keeps_form() {
    let (mut app, _rx) = test_app();
    app.model.form.name = "dev".to_string();
    app.model.form.add_mapped_folder();

    handle_api_response(
        &mut app,
        ApiResponse::CreateResult {
            name: "dev".to_string(),
            message: Err(anyhow::Error::new(BackendRejection(
                "Configuration 'dev' already exists".to_string(),
            ))),
        },
    );

    assert_eq!(app.model.form.name, "dev");
    assert_eq!(app.model.form.mapped_folders.len(), 1);
    assert!(app.model.ui.pending_tab_switch.is_none());
    assert_eq!(
        app.model.ui.notification.as_ref().unwrap().message,
        "Failed to create: Configuration 'dev' already exists"
    );
}

#[test]
fn test_edit_loads_form_and_submits_put() {
    let (mut app, mut rx) = test_app();

    app.edit_config("dev");
    assert_eq!(
        rx.try_recv().unwrap(),
        ApiRequest::LoadForEdit {
            name: "dev".to_string()
        }
    );

    let details = ConfigDetails {
        name: Some("dev".to_string()),
        memory_mb: 2048,
        networking: "Disable".to_string(),
        vgpu: "Enable".to_string(),
        protected_client: "Enable".to_string(),
        clipboard_redirection: "Disable".to_string(),
        printer_redirection: "Enable".to_string(),
        audio_input: "Default".to_string(),
        video_input: "Disable".to_string(),
        mapped_folders: vec![MappedFolder {
            path: "C:\\src".to_string(),
            readonly: false,
        }],
    };
    handle_api_response(
        &mut app,
        ApiResponse::EditConfigResult {
            name: "dev".to_string(),
            config: Ok(details),
        },
    );

    assert_eq!(app.model.ui.active_tab, Tab::Create);
    assert_eq!(
        app.model.form.mode,
        FormMode::Edit {
            original_name: "dev".to_string()
        }
    );
    assert_eq!(app.model.form.networking.value(), "Disable");

    app.submit_form();
    match rx.try_recv().unwrap() {
        ApiRequest::UpdateConfig { name, payload } => {
            assert_eq!(name, "dev");
            assert_eq!(payload.memory_mb, Some(2048));
            assert_eq!(payload.mapped_folders.len(), 1);
            assert!(!payload.mapped_folders[0].readonly);
        }
        other => panic!("unexpected request: {:?}", other),
    }
}
