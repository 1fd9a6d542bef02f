/// 商品ID指定取得 HTTP Lambdaエントリポイント（GET /products/{id}）
///
/// API Gateway経由のHTTPリクエストを処理し、
/// 主キーで取得した商品をJSONで返却する。
///
/// # 環境変数
/// - TABLE_NAME: 商品テーブル名（必須）
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use product_catalog::application::{internal_error_response, ProductLookupHandler};
use product_catalog::infrastructure::{init_logging, shared_product_repository};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("商品取得Lambda関数を初期化");

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

    let lookup_handler = ProductLookupHandler::new(repo.clone());
    Ok(lookup_handler.handle(&request).await)
}
