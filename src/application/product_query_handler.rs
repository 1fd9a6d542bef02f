/// 商品一覧の取得ハンドラー（GET /products）
///
/// フィルターの有無からアクセスパスを選択し、ストレージエンジンへの操作を1回だけ発行する。
/// 結果の並び順はストアが返した順序のままで、ソートは行わない。
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use tracing::{debug, error, info};

use crate::application::http_response::{error_response, json_response};
use crate::domain::{
    AccessPath, CatalogError, ProductList, ProductQuery, QueryLimitConfig, SecondaryIndex,
};
use crate::infrastructure::ProductRepository;

/// クエリ文字列パラメータ名
pub const CATEGORY_PARAMETER: &str = "category";
pub const BRAND_PARAMETER: &str = "brand";
pub const LIMIT_PARAMETER: &str = "limit";

/// 商品一覧の取得ハンドラー
pub struct ProductQueryHandler<R>
where
    R: ProductRepository,
{
    /// 商品リポジトリ
    repo: R,
    /// limit設定
    limit_config: QueryLimitConfig,
}

impl<R> ProductQueryHandler<R>
where
    R: ProductRepository,
{
    /// デフォルトのlimit設定でハンドラーを作成
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, QueryLimitConfig::default())
    }

    /// limit設定を指定してハンドラーを作成
    pub fn with_config(repo: R, limit_config: QueryLimitConfig) -> Self {
        Self { repo, limit_config }
    }

    /// 検索条件に合う商品一覧を取得
    ///
    /// # 戻り値
    /// * `Ok(ProductList)` - 取得した商品と件数（0件の場合も成功）
    /// * `Err(CatalogError::Internal)` - ストレージエンジンの障害（部分的な結果は返さない）
    pub async fn query(&self, query: &ProductQuery) -> Result<ProductList, CatalogError> {
        let access_path = AccessPath::select(query);
        let limit = query.limit();

        debug!(
            access_path = access_path.name(),
            category = ?query.category(),
            brand = ?query.brand(),
            limit,
            "アクセスパスを選択"
        );

        let products = match &access_path {
            AccessPath::FilteredScan(filter) => self.repo.scan(Some(filter), limit).await?,
            AccessPath::CategoryIndex(category) => {
                self.repo
                    .query_index(SecondaryIndex::Category, category, limit)
                    .await?
            }
            AccessPath::BrandIndex(brand) => {
                self.repo
                    .query_index(SecondaryIndex::Brand, brand, limit)
                    .await?
            }
            AccessPath::FullScan => self.repo.scan(None, limit).await?,
        };

        let list = ProductList::new(products);
        info!(
            access_path = access_path.name(),
            count = list.count,
            limit,
            "商品一覧取得完了"
        );

        Ok(list)
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// # 戻り値
    /// - 200: `{"products": [...], "count": n}`
    /// - 500: 内部エラー
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let category = query_parameter(request, CATEGORY_PARAMETER);
        let brand = query_parameter(request, BRAND_PARAMETER);
        let limit = query_parameter(request, LIMIT_PARAMETER);

        info!(
            method = %request.method(),
            path = request.uri().path(),
            category = ?category,
            brand = ?brand,
            limit = ?limit,
            "商品一覧リクエスト受信"
        );

        let query = ProductQuery::from_params(category, brand, limit, &self.limit_config);

        match self.query(&query).await {
            Ok(list) => json_response(StatusCode::OK, &list),
            Err(err) => {
                error!(error = %err, "商品一覧取得エラー");
                error_response(&err)
            }
        }
    }
}

/// クエリ文字列パラメータを取得
///
/// 同名パラメータが複数ある場合はREST APIの`queryStringParameters`と同じく最後の値を使う。
fn query_parameter<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .query_string_parameters_ref()
        .and_then(|params| params.all(name))
        .and_then(|values| values.last().copied())
}
