/// 商品レコード
///
/// 主キー`productId`以外の属性はドメイン層では解釈せず、
/// 保存されている内容をそのままレスポンスへ受け渡す。
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 主キー属性名
pub const PRODUCT_ID_ATTRIBUTE: &str = "productId";

/// カテゴリ属性名（CategoryIndexのパーティションキー）
pub const CATEGORY_ATTRIBUTE: &str = "category";

/// ブランド属性名（BrandIndexのパーティションキー）
pub const BRAND_ATTRIBUTE: &str = "brand";

/// 商品
///
/// JSON上は`productId`と任意の追加属性を持つフラットなオブジェクトとして表現される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 商品ID（主キー、空文字列不可）
    #[serde(rename = "productId")]
    product_id: String,
    /// 主キー以外の全属性（category, brandを含む）
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Product {
    /// 商品IDと属性から商品を作成
    ///
    /// `attributes`に`productId`キーが含まれていた場合は取り除く。
    pub fn new(product_id: impl Into<String>, mut attributes: Map<String, Value>) -> Self {
        attributes.remove(PRODUCT_ID_ATTRIBUTE);
        Self {
            product_id: product_id.into(),
            attributes,
        }
    }

    /// 商品IDを取得
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// カテゴリを取得（未設定または文字列以外の場合はNone）
    pub fn category(&self) -> Option<&str> {
        self.string_attribute(CATEGORY_ATTRIBUTE)
    }

    /// ブランドを取得（未設定または文字列以外の場合はNone）
    pub fn brand(&self) -> Option<&str> {
        self.string_attribute(BRAND_ATTRIBUTE)
    }

    /// 主キー以外の属性を取得
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// 文字列属性を取得
    pub fn string_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

/// 商品一覧のレスポンスボディ
///
/// `count`は実際に返却した件数であり、limitや総ヒット件数ではない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub count: usize,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        let count = products.len();
        Self { products, count }
    }
}
