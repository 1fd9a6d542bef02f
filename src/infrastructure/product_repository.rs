/// DynamoDBから商品を読み取るための商品リポジトリ
///
/// コアは読み取り専用であり、書き込み操作は提供しない。
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

use crate::domain::{CatalogError, Product, ScanFilter, SecondaryIndex, PRODUCT_ID_ATTRIBUTE};
use crate::infrastructure::DynamoDbConfig;

/// 商品リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductRepositoryError {
    /// DynamoDBからの読み取りに失敗（タイムアウト、スロットリング、接続障害など）
    #[error("Read error: {0}")]
    ReadError(String),

    /// 保存されているアイテムを商品に変換できない
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

/// ストレージエンジンの障害はすべて内部エラーとして扱う
impl From<ProductRepositoryError> for CatalogError {
    fn from(err: ProductRepositoryError) -> Self {
        CatalogError::Internal(err.to_string())
    }
}

/// 商品読み取り用トレイト
///
/// 各メソッドはストレージエンジンへの操作をちょうど1回発行する。
/// 異なる実装を可能にする（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 主キーで商品を取得
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(Product))`
    /// * 見つからなかった場合は`Ok(None)`
    /// * 失敗時は`Err(ProductRepositoryError)`
    async fn get_by_key(&self, product_id: &str) -> Result<Option<Product>, ProductRepositoryError>;

    /// セカンダリインデックスに等価条件でクエリ
    ///
    /// インデックス属性を持たない商品は結果に含まれない（スパースインデックス）。
    async fn query_index(
        &self,
        index: SecondaryIndex,
        value: &str,
        limit: u32,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// テーブルをスキャン
    ///
    /// `limit`は読み取るアイテム数に適用され、`filter`はその後に評価される。
    async fn scan(
        &self,
        filter: Option<&ScanFilter>,
        limit: u32,
    ) -> Result<Vec<Product>, ProductRepositoryError>;
}

/// 両方のフィルターを指定したスキャンのフィルター式
const SCAN_FILTER_EXPRESSION: &str = "category = :category AND brand = :brand";

/// ProductRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoProductRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 商品テーブル名
    table_name: String,
    /// カテゴリGSI名
    category_index: String,
    /// ブランドGSI名
    brand_index: String,
}

impl DynamoProductRepository {
    /// DynamoDB設定から作成
    pub fn from_config(config: &DynamoDbConfig) -> Self {
        Self {
            client: config.client().clone(),
            table_name: config.products_table().to_string(),
            category_index: config.index_name(SecondaryIndex::Category).to_string(),
            brand_index: config.index_name(SecondaryIndex::Brand).to_string(),
        }
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// インデックス名を取得
    pub fn index_name(&self, index: SecondaryIndex) -> &str {
        match index {
            SecondaryIndex::Category => &self.category_index,
            SecondaryIndex::Brand => &self.brand_index,
        }
    }

    /// インデックスのキー条件式を生成
    /// フォーマット: {attribute} = :value
    fn key_condition_expression(index: SecondaryIndex) -> String {
        format!("{} = :value", index.attribute_name())
    }

    /// DynamoDBのLimit（i32）に変換
    fn to_dynamo_limit(limit: u32) -> i32 {
        i32::try_from(limit).unwrap_or(i32::MAX)
    }

    /// DynamoDBのアイテムを商品にデシリアライズ
    fn deserialize_item(item: HashMap<String, AttributeValue>) -> Result<Product, ProductRepositoryError> {
        serde_dynamo::from_item(item)
            .map_err(|e| ProductRepositoryError::DeserializationError(e.to_string()))
    }

    /// 複数のアイテムを商品にデシリアライズ（ストアが返した順序を維持）
    fn deserialize_items(
        items: Option<Vec<HashMap<String, AttributeValue>>>,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        items
            .unwrap_or_default()
            .into_iter()
            .map(Self::deserialize_item)
            .collect()
    }
}

#[async_trait]
impl ProductRepository for DynamoProductRepository {
    async fn get_by_key(&self, product_id: &str) -> Result<Option<Product>, ProductRepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PRODUCT_ID_ATTRIBUTE, AttributeValue::S(product_id.to_string()))
            .send()
            .await
            .map_err(|e| ProductRepositoryError::ReadError(e.into_service_error().to_string()))?;

        result.item.map(Self::deserialize_item).transpose()
    }

    async fn query_index(
        &self,
        index: SecondaryIndex,
        value: &str,
        limit: u32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(self.index_name(index))
            .key_condition_expression(Self::key_condition_expression(index))
            .expression_attribute_values(":value", AttributeValue::S(value.to_string()))
            .limit(Self::to_dynamo_limit(limit))
            .send()
            .await
            .map_err(|e| ProductRepositoryError::ReadError(e.into_service_error().to_string()))?;

        Self::deserialize_items(result.items)
    }

    async fn scan(
        &self,
        filter: Option<&ScanFilter>,
        limit: u32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut builder = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(Self::to_dynamo_limit(limit));

        if let Some(filter) = filter {
            builder = builder
                .filter_expression(SCAN_FILTER_EXPRESSION)
                .expression_attribute_values(":category", AttributeValue::S(filter.category.clone()))
                .expression_attribute_values(":brand", AttributeValue::S(filter.brand.clone()));
        }

        let result = builder
            .send()
            .await
            .map_err(|e| ProductRepositoryError::ReadError(e.into_service_error().to_string()))?;

        Self::deserialize_items(result.items)
    }
}
