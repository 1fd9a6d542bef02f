/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

use crate::domain::SecondaryIndex;

/// 環境変数名: 商品テーブル名
pub const ENV_TABLE_NAME: &str = "TABLE_NAME";

/// 環境変数名: CategoryIndex名
pub const ENV_CATEGORY_INDEX_NAME: &str = "CATEGORY_INDEX_NAME";

/// 環境変数名: BrandIndex名
pub const ENV_BRAND_INDEX_NAME: &str = "BRAND_INDEX_NAME";

/// DynamoDB設定のエラー型
#[derive(Debug, Error)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名・インデックス名とクライアントを持つDynamoDB設定
///
/// 環境変数:
/// - TABLE_NAME: 商品テーブル名（必須）
/// - CATEGORY_INDEX_NAME: カテゴリGSI名（デフォルト: CategoryIndex）
/// - BRAND_INDEX_NAME: ブランドGSI名（デフォルト: BrandIndex）
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 商品テーブル名
    products_table: String,
    /// カテゴリGSI名
    category_index: String,
    /// ブランドGSI名
    brand_index: String,
}

impl DynamoDbConfig {
    /// 環境変数とAWS設定からDynamoDbConfigを作成
    ///
    /// TABLE_NAMEが未設定の場合はAWS設定を読み込む前にエラーを返す。
    /// AWS認証情報とリージョンはaws-configのデフォルトプロバイダーチェーンから読み込む。
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        let products_table = std::env::var(ENV_TABLE_NAME)
            .ok()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DynamoDbConfigError::MissingEnvVar(ENV_TABLE_NAME.to_string()))?;

        let category_index = index_name_from_env(ENV_CATEGORY_INDEX_NAME, SecondaryIndex::Category);
        let brand_index = index_name_from_env(ENV_BRAND_INDEX_NAME, SecondaryIndex::Brand);

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self {
            client,
            products_table,
            category_index,
            brand_index,
        })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（インデックス名は標準名）
    #[cfg(test)]
    pub(crate) fn new(client: DynamoDbClient, products_table: String) -> Self {
        Self {
            client,
            products_table,
            category_index: SecondaryIndex::Category.default_index_name().to_string(),
            brand_index: SecondaryIndex::Brand.default_index_name().to_string(),
        }
    }

    /// インデックス名を上書き
    #[cfg(test)]
    pub(crate) fn with_index_names(mut self, category_index: String, brand_index: String) -> Self {
        self.category_index = category_index;
        self.brand_index = brand_index;
        self
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 商品テーブル名を取得
    pub fn products_table(&self) -> &str {
        &self.products_table
    }

    /// インデックス名を取得
    pub fn index_name(&self, index: SecondaryIndex) -> &str {
        match index {
            SecondaryIndex::Category => &self.category_index,
            SecondaryIndex::Brand => &self.brand_index,
        }
    }
}

fn index_name_from_env(key: &str, index: SecondaryIndex) -> String {
    std::env::var(key)
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| index.default_index_name().to_string())
}

/// ネットワークアクセスなしでDynamoDBクライアントを作成（テスト用）
#[cfg(test)]
pub(crate) fn offline_client() -> DynamoDbClient {
    use aws_sdk_dynamodb::config::{BehaviorVersion, Region};

    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("ap-northeast-1"))
        .build();
    DynamoDbClient::from_conf(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // 安全性: シングルスレッドテスト環境（#[serial]）で使用
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn cleanup() {
        unsafe {
            remove_env(ENV_TABLE_NAME);
            remove_env(ENV_CATEGORY_INDEX_NAME);
            remove_env(ENV_BRAND_INDEX_NAME);
        }
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let error = DynamoDbConfigError::MissingEnvVar("TABLE_NAME".to_string());
        assert_eq!(error.to_string(), "Missing environment variable: TABLE_NAME");
    }

    #[test]
    fn test_new_uses_default_index_names() {
        let config = DynamoDbConfig::new(offline_client(), "products".to_string());

        assert_eq!(config.products_table(), "products");
        assert_eq!(config.index_name(SecondaryIndex::Category), "CategoryIndex");
        assert_eq!(config.index_name(SecondaryIndex::Brand), "BrandIndex");
        let _client_ref = config.client();
    }

    #[test]
    fn test_with_index_names() {
        let config = DynamoDbConfig::new(offline_client(), "products".to_string())
            .with_index_names("GSI-Category".to_string(), "GSI-Brand".to_string());

        assert_eq!(config.index_name(SecondaryIndex::Category), "GSI-Category");
        assert_eq!(config.index_name(SecondaryIndex::Brand), "GSI-Brand");
    }

    #[tokio::test]
    #[serial(catalog_env)]
    async fn test_from_env_missing_table_name() {
        unsafe { cleanup() };

        let result = DynamoDbConfig::from_env().await;
        match result {
            Err(DynamoDbConfigError::MissingEnvVar(var)) => assert_eq!(var, "TABLE_NAME"),
            Ok(_) => panic!("TABLE_NAME未設定でも設定が作成された"),
        }
    }

    #[tokio::test]
    #[serial(catalog_env)]
    async fn test_from_env_empty_table_name() {
        unsafe {
            cleanup();
            set_env(ENV_TABLE_NAME, "");
        }

        assert!(DynamoDbConfig::from_env().await.is_err());

        unsafe { cleanup() };
    }

    #[test]
    #[serial(catalog_env)]
    fn test_index_name_from_env() {
        unsafe {
            cleanup();
            set_env(ENV_CATEGORY_INDEX_NAME, "GSI-Category");
        }

        assert_eq!(
            index_name_from_env(ENV_CATEGORY_INDEX_NAME, SecondaryIndex::Category),
            "GSI-Category"
        );
        assert_eq!(
            index_name_from_env(ENV_BRAND_INDEX_NAME, SecondaryIndex::Brand),
            "BrandIndex"
        );

        unsafe { cleanup() };
    }
}
