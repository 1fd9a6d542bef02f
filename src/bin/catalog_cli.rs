/// 商品カタログ運用CLI
///
/// Lambdaと同じハンドラーを使ってDynamoDBの商品テーブルをローカルから参照する。
/// 結果はHTTPレスポンスと同じJSON形式で標準出力に書き出す。
///
/// # 環境変数
/// - TABLE_NAME: 商品テーブル名（必須）
/// - CATEGORY_INDEX_NAME / BRAND_INDEX_NAME: GSI名（省略時は標準名）
/// - CATALOG_DEFAULT_LIMIT / CATALOG_MAX_LIMIT: limitのデフォルト値と上限
///
/// # ローカル実行
/// ```bash
/// export TABLE_NAME=products
///
/// # 商品ID指定
/// cargo run --bin catalog_cli -- get p1
///
/// # 一覧（カテゴリとブランドで絞り込み）
/// cargo run --bin catalog_cli -- list --category shoes --brand nike --limit 20
/// ```
use clap::{Parser, Subcommand};
use lambda_http::Error;
use product_catalog::application::{ErrorBody, ProductLookupHandler, ProductQueryHandler};
use product_catalog::domain::{CatalogError, ProductQuery, QueryLimitConfig};
use product_catalog::infrastructure::{
    init_logging, DynamoDbConfig, DynamoProductRepository, ProductRepository,
};
use tracing::{error, info};

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "catalog_cli")]
#[command(about = "DynamoDBの商品カタログを参照")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// 商品IDで1件取得
    Get {
        /// 商品ID
        product_id: String,
    },
    /// 商品一覧を取得
    List {
        /// カテゴリで絞り込み
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// ブランドで絞り込み
        #[arg(long, short = 'b')]
        brand: Option<String>,

        /// 取得上限件数（HTTPのlimitパラメータと同じ解釈）
        #[arg(long, short = 'l')]
        limit: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let args = CliArgs::parse();
    info!(command = ?args.command, "コマンドライン引数をパース");

    let config = DynamoDbConfig::from_env().await.map_err(|e| {
        error!(error = %e, "DynamoDB設定読み込み失敗");
        Error::from(e.to_string())
    })?;
    let repo = DynamoProductRepository::from_config(&config);

    match execute(args.command, repo, QueryLimitConfig::from_env()).await {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&ErrorBody::from(&err))?);
            Err(Error::from(err.to_string()))
        }
    }
}

/// コマンドを実行し、出力するJSONを返す
async fn execute<R>(
    command: Command,
    repo: R,
    limit_config: QueryLimitConfig,
) -> Result<String, CatalogError>
where
    R: ProductRepository,
{
    let json = match command {
        Command::Get { product_id } => {
            let product = ProductLookupHandler::new(repo)
                .lookup(Some(&product_id))
                .await?;
            serde_json::to_string_pretty(&product)
        }
        Command::List {
            category,
            brand,
            limit,
        } => {
            let query = ProductQuery::from_params(
                category.as_deref(),
                brand.as_deref(),
                limit.as_deref(),
                &limit_config,
            );
            let list = ProductQueryHandler::with_config(repo, limit_config)
                .query(&query)
                .await?;
            serde_json::to_string_pretty(&list)
        }
    };

    json.map_err(|e| CatalogError::Internal(e.to_string()))
}
