use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{OcrResult, Receipt, ReceiptUploadResponse, ReceiptVerifyResponse};
use crate::transport::{Transport, Upload};

use super::segment;

/// Multipart field name the backend reads the receipt image from.
const RECEIPT_FIELD: &str = "receipt";

/// Outcome of [`ReceiptsApi::upload_and_verify`].
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedReceipt {
    pub receipt: Receipt,
    pub ocr: OcrResult,
}

pub struct ReceiptsApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn receipts(&self) -> ReceiptsApi<'_, T, S> {
        ReceiptsApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> ReceiptsApi<'_, T, S> {
    pub async fn upload(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Receipt, ApiError> {
        let upload = Upload {
            field: RECEIPT_FIELD.to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        };
        let resp: ReceiptUploadResponse = self.client.upload("/api/receipts/upload", upload).await?;
        Ok(resp.receipt)
    }

    pub async fn verify(&self, receipt_id: &str) -> Result<OcrResult, ApiError> {
        let resp: ReceiptVerifyResponse = self
            .client
            .post_empty(&format!("/api/receipts/{}/verify", segment(receipt_id)))
            .await?;
        Ok(resp.ocr_result)
    }

    /// Upload, then verify once the upload has resolved. A failed upload
    /// never issues the verify call.
    pub async fn upload_and_verify(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<VerifiedReceipt, ApiError> {
        let receipt = self.upload(file_name, mime, bytes).await?;
        let ocr = self.verify(&receipt.id).await?;
        Ok(VerifiedReceipt { receipt, ocr })
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ApiClient;
    use crate::transport::mock::MockTransport;
    use crate::transport::Method;
    use serde_json::json;
    use store::MemoryStore;

    const BASE: &str = "http://api.test";

    #[tokio::test]
    async fn test_upload_then_verify_in_order() {
        let transport = MockTransport::new(BASE);
        let client = ApiClient::new(BASE, transport.clone(), MemoryStore::new());
        transport.reply(Method::Post, "/api/receipts/upload", 200, json!({"receipt": {"id": 31, "status": "stored"}}));
        transport.reply(
            Method::Post,
            "/api/receipts/31/verify",
            200,
            json!({"ocrResult": {"vendor": "AXS", "faceValueCents": 9900, "confidence": 0.8}}),
        );

        let verified = client
            .receipts()
            .upload_and_verify("r.jpg", "image/jpeg", vec![0xFF, 0xD8])
            .await
            .unwrap();
        assert_eq!(verified.receipt.id, "31");
        assert_eq!(verified.ocr.face_value_cents, Some(9900));

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/api/receipts/upload".to_string(),
                "http://api.test/api/receipts/31/verify".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_upload_skips_verify() {
        let transport = MockTransport::new(BASE);
        let client = ApiClient::new(BASE, transport.clone(), MemoryStore::new());
        transport.reply(Method::Post, "/api/receipts/upload", 413, json!({"error": "File too large"}));

        let err = client
            .receipts()
            .upload_and_verify("big.png", "image/png", vec![0; 16])
            .await
            .unwrap_err();
        assert_eq!(err.message, "File too large");
        assert_eq!(transport.requests().len(), 1);
    }
}
