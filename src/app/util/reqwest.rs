use bytes::Bytes;
use reqwest::Client;

use crate::transfer::errors::TransferError;

pub async fn get_bytes(client: &Client, url: &str) -> Result<Bytes, TransferError> {
    match client.get(url).send().await {
        Ok(res) if res.status().is_success() => match res.bytes().await {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                tracing::error!(%e);
                Err(TransferError::Network(
                    "Failed to get bytes from response.".to_string(),
                ))
            }
        },
        Ok(res) => {
            tracing::error!("get_bytes: {} answered {}", url, res.status());
            Err(TransferError::Network(format!(
                "Failed to download result: {}",
                res.status().as_u16()
            )))
        }
        Err(e) => {
            tracing::error!(%e);
            Err(TransferError::Network("Failed to get url response.".to_string()))
        }
    }
}
