use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// The backend writes `null` for empty XML elements such as `<HostFolder/>`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One `.wsb` file in the workspace listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigFile {
    pub name: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub modified: String, // ISO-8601, local time without offset
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MappedFolder {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(default = "default_readonly")]
    pub readonly: bool,
}

fn default_readonly() -> bool {
    true
}

fn default_memory_mb() -> i64 {
    4096
}

/// Parsed configuration as returned by `GET /api/config/{name}`
///
/// Setting values are empty strings when the element was present but empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_memory_mb")]
    pub memory_mb: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub networking: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vgpu: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub protected_client: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub clipboard_redirection: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub printer_redirection: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audio_input: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub video_input: String,
    #[serde(default)]
    pub mapped_folders: Vec<MappedFolder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Body of `POST /api/config` and `PUT /api/config/{name}`
///
/// `memory_mb` is `None` when the form input had no leading digits; it
/// serializes as `null` and the backend decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPayload {
    pub name: String,
    pub memory_mb: Option<i64>,
    pub networking: String,
    pub vgpu: String,
    pub audio_input: String,
    pub video_input: String,
    pub clipboard_redirection: String,
    pub printer_redirection: String,
    pub protected_client: String,
    pub mapped_folders: Vec<MappedFolder>,
}

#[derive(Debug, Clone, Serialize)]
struct ApplyTemplateBody<'a> {
    new_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ConfigListResponse {
    success: bool,
    #[serde(default)]
    files: Vec<ConfigFile>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigResponse {
    success: bool,
    #[serde(default)]
    config: Option<ConfigDetails>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateListResponse {
    success: bool,
    #[serde(default)]
    templates: Vec<TemplateInfo>,
    #[serde(default)]
    error: Option<String>,
}

/// `{success, message} | {success:false, error}`
#[derive(Debug, Deserialize)]
struct MessageResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// A `success:false` answer: the backend is up but refused the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRejection(pub String);

impl std::fmt::Display for BackendRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for BackendRejection {}

/// Turn a `success:false` envelope into an error carrying the server's text
fn rejected(error: Option<String>) -> anyhow::Error {
    BackendRejection(error.unwrap_or_else(|| "Unknown error".to_string())).into()
}

#[derive(Clone)]
pub struct SandmanClient {
    base_url: String,
    client: Client,
}

impl SandmanClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config_url(&self, name: &str) -> String {
        format!("{}/api/config/{}", self.base_url, urlencoding::encode(name))
    }

    pub fn download_url(&self, name: &str) -> String {
        format!("{}/download", self.config_url(name))
    }

    /// Parse a JSON envelope regardless of HTTP status.
    ///
    /// The backend answers 4xx/5xx with `{success:false, error}`, so the
    /// status code alone is not an error. A non-JSON body is.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await.context("Failed to read response")?;

        match serde_json::from_str(&text) {
            Ok(data) => Ok(data),
            Err(_) if !status.is_success() => {
                anyhow::bail!("API error ({}): {}", status, text.trim())
            }
            Err(e) => Err(e).context("Failed to parse response"),
        }
    }

    pub async fn list_configs(&self) -> Result<Vec<ConfigFile>> {
        let url = format!("{}/api/configs", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch configurations")?;

        let data: ConfigListResponse = Self::read_json(response).await?;
        if !data.success {
            return Err(rejected(data.error));
        }

        Ok(data.files)
    }

    pub async fn get_config(&self, name: &str) -> Result<ConfigDetails> {
        let response = self
            .client
            .get(self.config_url(name))
            .send()
            .await
            .context("Failed to fetch configuration")?;

        let data: ConfigResponse = Self::read_json(response).await?;
        match data {
            ConfigResponse {
                success: true,
                config: Some(config),
                ..
            } => Ok(config),
            ConfigResponse {
                success: true,
                config: None,
                ..
            } => anyhow::bail!("Response is missing the configuration"),
            ConfigResponse { error, .. } => Err(rejected(error)),
        }
    }

    pub async fn create_config(&self, payload: &ConfigPayload) -> Result<String> {
        let url = format!("{}/api/config", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .context("Failed to create configuration")?;

        Self::read_message(response).await
    }

    pub async fn update_config(&self, name: &str, payload: &ConfigPayload) -> Result<String> {
        let response = self
            .client
            .put(self.config_url(name))
            .json(payload)
            .send()
            .await
            .context("Failed to update configuration")?;

        Self::read_message(response).await
    }

    pub async fn delete_config(&self, name: &str) -> Result<String> {
        let response = self
            .client
            .delete(self.config_url(name))
            .send()
            .await
            .context("Failed to delete configuration")?;

        Self::read_message(response).await
    }

    /// Fetch the raw `.wsb` document
    pub async fn download_config(&self, name: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.download_url(name))
            .send()
            .await
            .context("Failed to download configuration")?;

        let status = response.status();
        if !status.is_success() {
            // Error responses are JSON envelopes
            let data: MessageResponse = Self::read_json(response).await?;
            return Err(rejected(data.error));
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read configuration body")?;

        Ok(bytes.to_vec())
    }

    pub async fn list_templates(&self) -> Result<Vec<TemplateInfo>> {
        let url = format!("{}/api/templates", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch templates")?;

        let data: TemplateListResponse = Self::read_json(response).await?;
        if !data.success {
            return Err(rejected(data.error));
        }

        Ok(data.templates)
    }

    pub async fn apply_template(&self, template: &str, new_name: &str) -> Result<String> {
        let url = format!(
            "{}/api/template/{}/apply",
            self.base_url,
            urlencoding::encode(template)
        );
        let response = self
            .client
            .post(&url)
            .json(&ApplyTemplateBody { new_name })
            .send()
            .await
            .context("Failed to apply template")?;

        Self::read_message(response).await
    }

    async fn read_message(response: Response) -> Result<String> {
        let data: MessageResponse = Self::read_json(response).await?;
        if !data.success {
            return Err(rejected(data.error));
        }

        Ok(data.message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_list_parses_backend_listing() {
        let json = r#"{"success": true, "files": [
            {"name": "dev", "filename": "dev.wsb", "size": 512, "modified": "2024-03-01T10:15:30.123456"}
        ]}"#;
        let data: ConfigListResponse = serde_json::from_str(json).unwrap();
        assert!(data.success);
        assert_eq!(data.files.len(), 1);
        assert_eq!(data.files[0].name, "dev");
        assert_eq!(data.files[0].filename.as_deref(), Some("dev.wsb"));
        assert_eq!(data.files[0].size, 512);
    }

    #[test]
    fn test_config_response_error_envelope() {
        let json = r#"{"success": false, "error": "Configuration not found"}"#;
        let data: ConfigResponse = serde_json::from_str(json).unwrap();
        assert!(!data.success);
        assert!(data.config.is_none());
        assert_eq!(rejected(data.error).to_string(), "Configuration not found");
    }

    #[test]
    fn test_config_response_with_empty_elements() {
        let json = r#"{"success": true, "config": {
            "name": "dev", "memory_mb": 2048, "networking": null, "vgpu": "Default",
            "protected_client": null, "clipboard_redirection": "Enable",
            "printer_redirection": "Enable", "audio_input": null, "video_input": "Default",
            "mapped_folders": [{"path": null, "readonly": true}]
        }}"#;
        let data: ConfigResponse = serde_json::from_str(json).unwrap();
        let config = data.config.unwrap();
        assert_eq!(config.networking, "");
        assert_eq!(config.protected_client, "");
        assert_eq!(config.vgpu, "Default");
        assert_eq!(config.mapped_folders[0].path, "");
        assert!(config.mapped_folders[0].readonly);
    }

    #[test]
    fn test_config_response_missing_settings_use_defaults() {
        let json = r#"{"success": true, "config": {"name": "bare"}}"#;
        let config = serde_json::from_str::<ConfigResponse>(json)
            .unwrap()
            .config
            .unwrap();
        assert_eq!(config.memory_mb, 4096);
        assert!(config.networking.is_empty());
        assert!(config.mapped_folders.is_empty());
    }

    #[test]
    fn test_rejection_is_typed() {
        let err = rejected(Some("Invalid networking value".to_string()));
        assert_eq!(
            err.downcast_ref::<BackendRejection>(),
            Some(&BackendRejection("Invalid networking value".to_string()))
        );
    }

    #[test]
    fn test_mapped_folder_readonly_defaults_to_true() {
        let folder: MappedFolder = serde_json::from_str(r#"{"path": "C:\\work"}"#).unwrap();
        assert!(folder.readonly);
    }

    #[test]
    fn test_rejected_without_error_text() {
        assert_eq!(rejected(None).to_string(), "Unknown error");
    }

    #[test]
    fn test_payload_with_unparsed_memory_serializes_null() {
        let payload = ConfigPayload {
            name: "x".to_string(),
            memory_mb: None,
            networking: "Default".to_string(),
            vgpu: "Default".to_string(),
            audio_input: "Default".to_string(),
            video_input: "Default".to_string(),
            clipboard_redirection: "Enable".to_string(),
            printer_redirection: "Enable".to_string(),
            protected_client: "Enable".to_string(),
            mapped_folders: vec![],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["memory_mb"].is_null());
        assert_eq!(value["mapped_folders"], serde_json::json!([]));
    }

    #[test]
    fn test_urls_encode_names() {
        let client =
            SandmanClient::new("http://localhost:5000/".to_string(), Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            client.config_url("my config"),
            "http://localhost:5000/api/config/my%20config"
        );
        assert_eq!(
            client.download_url("dev"),
            "http://localhost:5000/api/config/dev/download"
        );
    }

    /// Serve one canned HTTP response on a loopback port and return its base URL
    async fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Drain the whole request so closing the socket does not reset it
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> SandmanClient {
        SandmanClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_error_status_with_envelope_surfaces_server_text() {
        let url = serve_once(
            "404 Not Found",
            "application/json",
            r#"{"success": false, "error": "Configuration not found"}"#,
        )
        .await;

        let err = client_for(url).get_config("ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Configuration not found");
        assert!(err.downcast_ref::<BackendRejection>().is_some());
    }

    #[tokio::test]
    async fn test_bad_request_envelope_on_create() {
        let url = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"success": false, "error": "Name is required"}"#,
        )
        .await;

        let payload = ConfigPayload {
            name: String::new(),
            memory_mb: Some(4096),
            networking: "Default".to_string(),
            vgpu: "Default".to_string(),
            audio_input: "Default".to_string(),
            video_input: "Default".to_string(),
            clipboard_redirection: "Enable".to_string(),
            printer_redirection: "Enable".to_string(),
            protected_client: "Enable".to_string(),
            mapped_folders: vec![],
        };
        let err = client_for(url).create_config(&payload).await.unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[tokio::test]
    async fn test_non_json_server_error() {
        let url = serve_once("500 Internal Server Error", "text/html", "<h1>boom</h1>").await;

        let err = client_for(url).list_configs().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error (500 Internal Server Error): <h1>boom</h1>"
        );
    }

    #[tokio::test]
    async fn test_download_not_found_envelope() {
        let url = serve_once(
            "404 Not Found",
            "application/json",
            r#"{"success": false, "error": "Configuration not found"}"#,
        )
        .await;

        let err = client_for(url).download_config("ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Configuration not found");
    }

    #[tokio::test]
    async fn test_download_returns_body() {
        let url = serve_once("200 OK", "application/xml", "<Configuration/>").await;

        let body = client_for(url).download_config("dev").await.unwrap();
        assert_eq!(body, b"<Configuration/>");
    }

    #[tokio::test]
    async fn test_success_without_message_is_empty() {
        let url = serve_once("200 OK", "application/json", r#"{"success": true}"#).await;

        let message = client_for(url).delete_config("dev").await.unwrap();
        assert_eq!(message, "");
    }
}
