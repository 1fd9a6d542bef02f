/// 商品一覧取得 HTTP Lambdaエントリポイント（GET /products）
///
/// クエリ文字列のcategory, brand, limitからアクセスパスを選択し、
/// `{"products": [...], "count": n}`を返却する。
///
/// # 環境変数
/// - TABLE_NAME: 商品テーブル名（必須）
/// - CATEGORY_INDEX_NAME / BRAND_INDEX_NAME: GSI名（省略時は標準名）
/// - CATALOG_DEFAULT_LIMIT / CATALOG_MAX_LIMIT: limitのデフォルト値と上限
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use product_catalog::application::{internal_error_response, ProductQueryHandler};
use product_catalog::domain::QueryLimitConfig;
use product_catalog::infrastructure::{init_logging, shared_product_repository};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("商品一覧Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 設定読み込みに失敗した場合もエラーエンベロープ付きの500を返す。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let repo = match shared_product_repository().await {
        Ok(repo) => repo,
        Err(err) => {
            error!(error = %err, "DynamoDB設定読み込み失敗");
            return Ok(internal_error_response());
        }
    };

    // 環境変数からlimit設定を読み込み
    let limit_config = QueryLimitConfig::from_env();

    let query_handler = ProductQueryHandler::with_config(repo.clone(), limit_config);
    Ok(query_handler.handle(&request).await)
}
