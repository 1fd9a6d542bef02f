// 一覧取得のlimit設定
//
// limitパラメータのデフォルト値と上限値を保持し、
// 環境変数からの読み込みを提供するドメイン層コンポーネント。

use tracing::info;

/// limitが指定されない場合のデフォルト値
pub const DEFAULT_DEFAULT_LIMIT: u32 = 50;

/// limitの上限値
pub const DEFAULT_MAX_LIMIT: u32 = 1000;

/// 環境変数名: default_limit
pub const ENV_DEFAULT_LIMIT: &str = "CATALOG_DEFAULT_LIMIT";

/// 環境変数名: max_limit
pub const ENV_MAX_LIMIT: &str = "CATALOG_MAX_LIMIT";

/// 一覧取得のlimit設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimitConfig {
    /// limitが指定されない、または不正な場合に使う値
    pub default_limit: u32,
    /// limitの上限値（これを超える指定は丸める）
    pub max_limit: u32,
}

impl Default for QueryLimitConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl QueryLimitConfig {
    /// 環境変数から設定を読み込み
    ///
    /// 未設定、パースエラー、0の場合はデフォルト値を使用する。
    /// default_limitがmax_limitを超える場合はmax_limitに揃える。
    ///
    /// # 環境変数
    /// - CATALOG_DEFAULT_LIMIT: limitが指定されない場合のデフォルト値
    /// - CATALOG_MAX_LIMIT: limitの上限値
    pub fn from_env() -> Self {
        let max_limit = parse_env_positive_u32(ENV_MAX_LIMIT, DEFAULT_MAX_LIMIT);
        let default_limit =
            parse_env_positive_u32(ENV_DEFAULT_LIMIT, DEFAULT_DEFAULT_LIMIT).min(max_limit);

        info!(default_limit, max_limit, "QueryLimitConfig loaded");

        Self {
            default_limit,
            max_limit,
        }
    }
}

/// 環境変数から正のu32値を読み込む
///
/// 未設定、パースエラー、0の場合はデフォルト値を返す。
fn parse_env_positive_u32(key: &str, default: u32) -> u32 {
    match std::env::var(key) {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => {
                info!(key, value = parsed, "Environment variable loaded");
                parsed
            }
            _ => {
                info!(
                    key,
                    value = %value,
                    default,
                    "Environment variable parse error, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
