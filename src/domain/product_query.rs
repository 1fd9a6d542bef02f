/// 商品一覧の検索条件
///
/// リクエストごとに生成され、レスポンス返却後に破棄される。
use tracing::warn;

use crate::domain::QueryLimitConfig;

/// 商品一覧の検索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    category: Option<String>,
    brand: Option<String>,
    limit: u32,
}

impl ProductQuery {
    /// 検索条件を直接指定して作成
    ///
    /// 空文字列のフィルターは未指定として扱う。limitは1以上に丸める。
    pub fn new(category: Option<&str>, brand: Option<&str>, limit: u32) -> Self {
        Self {
            category: non_empty(category),
            brand: non_empty(brand),
            limit: limit.max(1),
        }
    }

    /// クエリ文字列パラメータから検索条件を作成
    ///
    /// limitの扱い:
    /// - 未指定: `config.default_limit`
    /// - 数値でない、0以下: `config.default_limit`（警告ログを出力）
    /// - `config.max_limit`超過: `config.max_limit`に丸める
    pub fn from_params(
        category: Option<&str>,
        brand: Option<&str>,
        limit: Option<&str>,
        config: &QueryLimitConfig,
    ) -> Self {
        let limit = match limit {
            None => config.default_limit,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(parsed) if parsed > 0 => parsed.min(config.max_limit),
                _ => {
                    warn!(
                        limit = raw,
                        default = config.default_limit,
                        "不正なlimitのためデフォルト値を使用"
                    );
                    config.default_limit
                }
            },
        };

        Self::new(category, brand, limit)
    }

    /// カテゴリフィルター
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// ブランドフィルター
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// 取得上限件数
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> QueryLimitConfig {
        QueryLimitConfig::default()
    }

    #[test]
    fn test_from_params_defaults_limit_when_absent() {
        let query = ProductQuery::from_params(None, None, None, &config());
        assert_eq!(query.limit(), 50);
        assert!(query.category().is_none());
        assert!(query.brand().is_none());
    }

    #[test]
    fn test_from_params_parses_limit() {
        let query = ProductQuery::from_params(Some("shoes"), None, Some("10"), &config());
        assert_eq!(query.category(), Some("shoes"));
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn test_from_params_trims_limit() {
        let query = ProductQuery::from_params(None, None, Some(" 7 "), &config());
        assert_eq!(query.limit(), 7);
    }

    #[test]
    fn test_from_params_invalid_limit_uses_default() {
        for raw in ["abc", "", "0", "-5", "1.5", "10abc", "99999999999"] {
            let query = ProductQuery::from_params(None, None, Some(raw), &config());
            assert_eq!(query.limit(), 50, "limit={raw:?}");
        }
    }

    #[test]
    fn test_from_params_clamps_to_max_limit() {
        let query = ProductQuery::from_params(None, None, Some("5000"), &config());
        assert_eq!(query.limit(), 1000);
    }

    #[test]
    fn test_from_params_uses_configured_default() {
        let config = QueryLimitConfig {
            default_limit: 5,
            max_limit: 10,
        };
        let query = ProductQuery::from_params(None, None, Some("nope"), &config);
        assert_eq!(query.limit(), 5);
    }

    #[test]
    fn test_empty_filters_are_absent() {
        let query = ProductQuery::from_params(Some(""), Some("nike"), None, &config());
        assert!(query.category().is_none());
        assert_eq!(query.brand(), Some("nike"));
    }

    #[test]
    fn test_new_keeps_limit_positive() {
        let query = ProductQuery::new(None, None, 0);
        assert_eq!(query.limit(), 1);
    }
}
