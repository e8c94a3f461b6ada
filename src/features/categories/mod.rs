/// カテゴリ機能モジュール
///
/// 固定のカテゴリテーブルと、未知のIDをフォールバックカテゴリに解決する
/// 参照機能を提供します。カテゴリは静的設定であり、データベースには
/// 保存しません。
pub mod commands;
pub mod models;

// 公開インターフェース
pub use models::{category_by_id, Category, CATEGORIES};
