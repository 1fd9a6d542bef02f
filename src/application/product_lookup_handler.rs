/// 商品ID指定の取得ハンドラー（GET /products/{id}）
///
/// 主キーによるポイントリードを1回だけ発行し、見つかった商品をそのまま返す。
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use tracing::{error, info};

use crate::application::http_response::{error_response, json_response};
use crate::domain::{CatalogError, Product};
use crate::infrastructure::ProductRepository;

/// パスパラメータ名
pub const PRODUCT_ID_PATH_PARAMETER: &str = "id";

/// 商品ID指定の取得ハンドラー
pub struct ProductLookupHandler<R>
where
    R: ProductRepository,
{
    /// 商品リポジトリ
    repo: R,
}

impl<R> ProductLookupHandler<R>
where
    R: ProductRepository,
{
    /// 新しいハンドラーを作成
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// 商品IDで商品を取得
    ///
    /// # 戻り値
    /// * `Ok(Product)` - 保存されている商品（加工なし）
    /// * `Err(CatalogError::InvalidRequest)` - 商品IDが未指定または空（ストアにはアクセスしない）
    /// * `Err(CatalogError::NotFound)` - 該当する商品が存在しない
    /// * `Err(CatalogError::Internal)` - ストレージエンジンの障害
    pub async fn lookup(&self, product_id: Option<&str>) -> Result<Product, CatalogError> {
        let product_id = product_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CatalogError::InvalidRequest("Product ID is required".to_string()))?;

        let product = self.repo.get_by_key(product_id).await?;

        product.ok_or_else(|| CatalogError::NotFound("Product not found".to_string()))
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// # 戻り値
    /// - 200: 商品オブジェクト
    /// - 400: 商品IDが未指定
    /// - 404: 商品が存在しない
    /// - 500: 内部エラー
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let product_id = request
            .path_parameters_ref()
            .and_then(|params| params.first(PRODUCT_ID_PATH_PARAMETER));

        info!(
            method = %request.method(),
            path = request.uri().path(),
            product_id = ?product_id,
            "商品取得リクエスト受信"
        );

        match self.lookup(product_id).await {
            Ok(product) => {
                info!(product_id = product.product_id(), "商品取得完了");
                json_response(StatusCode::OK, &product)
            }
            Err(err) => {
                match &err {
                    CatalogError::Internal(detail) => {
                        error!(product_id = ?product_id, error = %detail, "商品取得エラー");
                    }
                    _ => {
                        info!(product_id = ?product_id, code = err.code(), "商品取得失敗");
                    }
                }
                error_response(&err)
            }
        }
    }
}
