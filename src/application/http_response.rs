// HTTPレスポンス生成
//
// 成功・失敗いずれのレスポンスもJSONボディと
// 許可範囲の広いCORSヘッダーを持つ。

use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::catalog_error::INTERNAL_ERROR_MESSAGE;
use crate::domain::CatalogError;

/// シリアライズに失敗した場合に返すボディ
const FALLBACK_ERROR_BODY: &str =
    r#"{"error":{"code":"INTERNAL_ERROR","message":"Internal server error"}}"#;

/// エラーレスポンスのボディ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// エラー詳細
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// 安定したエラーコード（INVALID_REQUEST, NOT_FOUND, INTERNAL_ERROR）
    pub code: String,
    /// エラーメッセージ
    pub message: String,
}

impl From<&CatalogError> for ErrorBody {
    fn from(error: &CatalogError) -> Self {
        Self {
            error: ErrorDetail {
                code: error.code().to_string(),
                message: error.public_message().to_string(),
            },
        }
    }
}

/// JSONレスポンスを生成
///
/// シリアライズに失敗した場合は500のエラーエンベロープを返す。
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    match serde_json::to_string(body) {
        Ok(json) => build_response(status, json),
        Err(err) => {
            error!(error = %err, "レスポンスのシリアライズに失敗");
            build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                FALLBACK_ERROR_BODY.to_string(),
            )
        }
    }
}

/// エラーエンベロープのレスポンスを生成
pub fn error_response(error: &CatalogError) -> Response<Body> {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, &ErrorBody::from(error))
}

/// 内部エラーのレスポンスを生成（設定エラーなどハンドラー外の失敗用）
pub fn internal_error_response() -> Response<Body> {
    error_response(&CatalogError::Internal(INTERNAL_ERROR_MESSAGE.to_string()))
}

fn build_response(status: StatusCode, json: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(json));
    *response.status_mut() = status;
    *response.headers_mut() = build_cors_headers();
    response
}

/// 共通ヘッダーを生成
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
/// - Access-Control-Allow-Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Access-Control-Allow-Headers: Content-Type, X-Amz-Date, Authorization, X-Api-Key
pub fn build_cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, X-Amz-Date, Authorization, X-Api-Key"),
    );

    headers
}

/// テスト用: レスポンスボディを文字列として取得
#[cfg(test)]
pub(crate) fn body_text(response: &Response<Body>) -> String {
    match response.body() {
        Body::Text(text) => text.clone(),
        Body::Binary(bytes) => String::from_utf8(bytes.clone()).unwrap(),
        Body::Empty => String::new(),
        _ => panic!("予期しないBody型"),
    }
}
