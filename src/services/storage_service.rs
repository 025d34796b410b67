use reqwest::Client;
use log::{info, error};
use serde::Deserialize;
use thiserror::Error;

/// Uploaded files may not exceed 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File too large: {0} bytes (limit {MAX_UPLOAD_BYTES})")]
    TooLarge(usize),

    #[error("Upload request failed: {0}")]
    RequestFailed(String),

    #[error("Upload rejected: HTTP {0} - {1}")]
    Rejected(u16, String),
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Client for the media CDN upload endpoint. Accepts a file and a folder,
/// returns the public URL the CDN serves the file from.
#[derive(Clone)]
pub struct StorageService {
    upload_url: String,
    upload_preset: String,
    client: Client,
}

impl StorageService {
    pub fn new(upload_url: String, upload_preset: String) -> Self {
        info!("Storage client uploading to: {}", upload_url);
        Self {
            upload_url,
            upload_preset,
            client: Client::new(),
        }
    }

    /// Checks the declared content type and the decoded size before any
    /// network call is made.
    pub fn validate_image(content_type: &str, size: usize) -> Result<(), StorageError> {
        if !content_type.starts_with("image/") {
            return Err(StorageError::UnsupportedType(content_type.to_string()));
        }
        if size > MAX_UPLOAD_BYTES {
            return Err(StorageError::TooLarge(size));
        }
        Ok(())
    }

    pub async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        info!("Uploading {} ({} bytes) to folder {}", file_name, bytes.len(), folder);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| StorageError::UnsupportedType(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string())
            .part("file", part);

        match self.client.post(&self.upload_url).multipart(form).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    match response.json::<UploadResponse>().await {
                        Ok(body) => {
                            info!("Upload complete: {}", body.secure_url);
                            Ok(body.secure_url)
                        }
                        Err(e) => {
                            error!("Failed to deserialize upload response: {:?}", e);
                            Err(StorageError::RequestFailed(format!(
                                "Failed to deserialize upload response: {}",
                                e
                            )))
                        }
                    }
                } else {
                    let status = response.status();
                    let error_body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "unable to read error response".to_string());
                    error!("Upload rejected: HTTP {} - {}", status, error_body);
                    Err(StorageError::Rejected(status.as_u16(), error_body))
                }
            }
            Err(e) => {
                error!("Request to storage service failed: {:?}", e);
                Err(StorageError::RequestFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_accepts_images_under_limit() {
        assert!(StorageService::validate_image("image/jpeg", 1024).is_ok());
        assert!(StorageService::validate_image("image/png", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_validate_image_rejects_non_images() {
        let err = StorageService::validate_image("application/pdf", 1024).unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedType(_)));
    }

    #[test]
    fn test_validate_image_rejects_oversize() {
        let err = StorageService::validate_image("image/jpeg", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, StorageError::TooLarge(_)));
    }
}
