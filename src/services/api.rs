use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::api::{ConfigDetails, ConfigFile, ConfigPayload, SandmanClient, TemplateInfo};

/// API request types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// List workspace configurations
    ListConfigs,

    /// Fetch one configuration and show its summary
    GetConfig { name: String },

    /// Fetch one configuration to load it into the edit form
    LoadForEdit { name: String },

    /// Save the `.wsb` document under `dest_dir`
    DownloadConfig { name: String, dest_dir: PathBuf },

    DeleteConfig { name: String },

    CreateConfig { payload: ConfigPayload },

    UpdateConfig { name: String, payload: ConfigPayload },

    ListTemplates,

    ApplyTemplate { template: String, new_name: String },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ConfigsResult {
        files: Result<Vec<ConfigFile>, anyhow::Error>,
    },

    ConfigResult {
        name: String,
        config: Result<ConfigDetails, anyhow::Error>,
    },

    EditConfigResult {
        name: String,
        config: Result<ConfigDetails, anyhow::Error>,
    },

    DownloadResult {
        name: String,
        path: Result<PathBuf, anyhow::Error>,
    },

    DeleteResult {
        name: String,
        message: Result<String, anyhow::Error>,
    },

    CreateResult {
        name: String,
        message: Result<String, anyhow::Error>,
    },

    UpdateResult {
        name: String,
        message: Result<String, anyhow::Error>,
    },

    TemplatesResult {
        templates: Result<Vec<TemplateInfo>, anyhow::Error>,
    },

    ApplyTemplateResult {
        template: String,
        new_name: String,
        message: Result<String, anyhow::Error>,
    },
}

impl ApiResponse {
    /// Whether the request reached the backend and got a usable answer
    pub fn is_ok(&self) -> bool {
        match self {
            ApiResponse::ConfigsResult { files } => files.is_ok(),
            ApiResponse::ConfigResult { config, .. }
            | ApiResponse::EditConfigResult { config, .. } => config.is_ok(),
            ApiResponse::DownloadResult { path, .. } => path.is_ok(),
            ApiResponse::DeleteResult { message, .. }
            | ApiResponse::CreateResult { message, .. }
            | ApiResponse::UpdateResult { message, .. }
            | ApiResponse::ApplyTemplateResult { message, .. } => message.is_ok(),
            ApiResponse::TemplatesResult { templates } => templates.is_ok(),
        }
    }
}

/// Execute an API request and return the response
pub async fn execute_request(client: &SandmanClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::ListConfigs => ApiResponse::ConfigsResult {
            files: client.list_configs().await,
        },

        ApiRequest::GetConfig { name } => {
            let config = client.get_config(&name).await;
            ApiResponse::ConfigResult { name, config }
        }

        ApiRequest::LoadForEdit { name } => {
            let config = client.get_config(&name).await;
            ApiResponse::EditConfigResult { name, config }
        }

        ApiRequest::DownloadConfig { name, dest_dir } => {
            let path = download_to(client, &name, dest_dir).await;
            ApiResponse::DownloadResult { name, path }
        }

        ApiRequest::DeleteConfig { name } => {
            let message = client.delete_config(&name).await;
            ApiResponse::DeleteResult { name, message }
        }

        ApiRequest::CreateConfig { payload } => {
            let message = client.create_config(&payload).await;
            ApiResponse::CreateResult {
                name: payload.name,
                message,
            }
        }

        ApiRequest::UpdateConfig { name, payload } => {
            let message = client.update_config(&name, &payload).await;
            ApiResponse::UpdateResult { name, message }
        }

        ApiRequest::ListTemplates => ApiResponse::TemplatesResult {
            templates: client.list_templates().await,
        },

        ApiRequest::ApplyTemplate { template, new_name } => {
            let message = client.apply_template(&template, &new_name).await;
            ApiResponse::ApplyTemplateResult {
                template,
                new_name,
                message,
            }
        }
    }
}

async fn download_to(
    client: &SandmanClient,
    name: &str,
    dest_dir: PathBuf,
) -> anyhow::Result<PathBuf> {
    let body = client.download_config(name).await?;
    crate::utils::save_download(&dest_dir, name, &body).await
}

/// Spawn the API service worker
///
/// Every request runs on its own task. Nothing is retried, deduplicated or
/// cancelled; responses are delivered in completion order.
pub fn spawn_api_service(
    client: SandmanClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                tracing::debug!(?request, "dispatching API request");
                let response = execute_request(&client, request).await;
                if !response.is_ok() {
                    tracing::debug!(?response, "API request failed");
                }
                let _ = response_tx.send(response);
            });
        }

        tracing::debug!("API request channel closed, worker exiting");
    });

    (request_tx, response_rx)
}
