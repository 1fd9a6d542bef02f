// アプリケーション層モジュール
pub mod http_response;
pub mod product_lookup_handler;
pub mod product_query_handler;

// 再エクスポート
pub use http_response::{
    ErrorBody, ErrorDetail, build_cors_headers, error_response, internal_error_response, json_response,
};
pub use product_lookup_handler::ProductLookupHandler;
pub use product_query_handler::ProductQueryHandler;
