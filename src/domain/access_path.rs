/// 一覧取得のアクセスパス選択
///
/// 検索条件に含まれるフィルターの有無だけからアクセスパスを決定する。
/// 優先順位は以下の通りで、各分岐は排他的:
/// 1. category と brand の両方 → フィルター付きテーブルスキャン
/// 2. category のみ → CategoryIndex へのクエリ
/// 3. brand のみ → BrandIndex へのクエリ
/// 4. どちらもなし → テーブル全体のスキャン
use crate::domain::product::{BRAND_ATTRIBUTE, CATEGORY_ATTRIBUTE};
use crate::domain::{Product, ProductQuery};

/// セカンダリインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryIndex {
    /// categoryをパーティションキーとするGSI
    Category,
    /// brandをパーティションキーとするGSI
    Brand,
}

impl SecondaryIndex {
    /// インデックスのパーティションキー属性名
    pub fn attribute_name(self) -> &'static str {
        match self {
            SecondaryIndex::Category => CATEGORY_ATTRIBUTE,
            SecondaryIndex::Brand => BRAND_ATTRIBUTE,
        }
    }

    /// 標準のインデックス名
    pub fn default_index_name(self) -> &'static str {
        match self {
            SecondaryIndex::Category => "CategoryIndex",
            SecondaryIndex::Brand => "BrandIndex",
        }
    }
}

/// スキャン時のフィルター条件（category = :category AND brand = :brand）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFilter {
    pub category: String,
    pub brand: String,
}

impl ScanFilter {
    /// 商品がフィルター条件に完全一致するか
    pub fn matches(&self, product: &Product) -> bool {
        product.category() == Some(self.category.as_str())
            && product.brand() == Some(self.brand.as_str())
    }
}

/// 一覧取得で使用する物理アクセスパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessPath {
    /// フィルター付きテーブルスキャン
    ///
    /// limitは読み取り件数に対して適用され、フィルターはその後に評価される。
    /// そのため条件に合う商品がさらに存在しても、返却件数がlimitを下回ることがある。
    FilteredScan(ScanFilter),
    /// CategoryIndexへの等価条件クエリ
    CategoryIndex(String),
    /// BrandIndexへの等価条件クエリ
    BrandIndex(String),
    /// 条件なしのテーブルスキャン
    FullScan,
}

impl AccessPath {
    /// 検索条件からアクセスパスを選択
    pub fn select(query: &ProductQuery) -> Self {
        match (query.category(), query.brand()) {
            (Some(category), Some(brand)) => AccessPath::FilteredScan(ScanFilter {
                category: category.to_string(),
                brand: brand.to_string(),
            }),
            (Some(category), None) => AccessPath::CategoryIndex(category.to_string()),
            (None, Some(brand)) => AccessPath::BrandIndex(brand.to_string()),
            (None, None) => AccessPath::FullScan,
        }
    }

    /// ログ出力用の名前
    pub fn name(&self) -> &'static str {
        match self {
            AccessPath::FilteredScan(_) => "filtered_scan",
            AccessPath::CategoryIndex(_) => "category_index",
            AccessPath::BrandIndex(_) => "brand_index",
            AccessPath::FullScan => "full_scan",
        }
    }
}
