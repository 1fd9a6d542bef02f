/// 商品カタログAPIのエラー型
///
/// ハンドラー境界でHTTPのエラーエンベロープへ1対1に変換される。
use thiserror::Error;

/// 内部エラー時にクライアントへ返すメッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 商品カタログAPIのエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// 必須入力の欠落・不正（ストアへのアクセスは行わない）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 該当する商品が存在しない（正常系の一部）
    #[error("Not found: {0}")]
    NotFound(String),

    /// ストレージエンジンまたは実行時の障害
    ///
    /// 保持する詳細はサーバーログ専用で、レスポンスには含めない。
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// クライアントが分岐に使う安定したエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::InvalidRequest(_) => "INVALID_REQUEST",
            CatalogError::NotFound(_) => "NOT_FOUND",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::InvalidRequest(_) => 400,
            CatalogError::NotFound(_) => 404,
            CatalogError::Internal(_) => 500,
        }
    }

    /// クライアントへ返すメッセージ
    pub fn public_message(&self) -> &str {
        match self {
            CatalogError::InvalidRequest(message) | CatalogError::NotFound(message) => message,
            CatalogError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}
