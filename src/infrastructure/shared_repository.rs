/// プロセス全体で共有するDynamoProductRepository
///
/// Lambda warm start時にクライアントを再利用するため、
/// 最初の呼び出しで初期化したリポジトリを静的に保持する。
/// 初期化に失敗した場合はセルを空のまま残し、次の呼び出しで再試行する。
use tokio::sync::OnceCell;
use tracing::info;

use crate::infrastructure::{DynamoDbConfig, DynamoDbConfigError, DynamoProductRepository};

static PRODUCT_REPOSITORY: OnceCell<DynamoProductRepository> = OnceCell::const_new();

/// 共有リポジトリを取得（初期化されていなければ初期化）
///
/// # 戻り値
/// * `Ok(&'static DynamoProductRepository)` - 静的参照へのリポジトリ
/// * `Err(DynamoDbConfigError)` - 設定読み込みエラー
pub async fn shared_product_repository() -> Result<&'static DynamoProductRepository, DynamoDbConfigError> {
    PRODUCT_REPOSITORY
        .get_or_try_init(|| async {
            let config = DynamoDbConfig::from_env().await?;
            let repo = DynamoProductRepository::from_config(&config);
            info!(table_name = repo.table_name(), "DynamoDBクライアントを初期化");
            Ok(repo)
        })
        .await
}
