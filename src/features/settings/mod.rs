/// 設定機能モジュール
///
/// このモジュールは、ユーザー設定の永続化と参照を提供します：
/// - 通貨・国・ユーザー名・テーマ・桁区切りの保存と読み込み
/// - 静的な通貨・国の選択肢テーブル
/// - 桁区切り設定を適用した金額フォーマット
pub mod commands;
pub mod models;
pub mod repository;

// 公開インターフェース
pub use models::{Country, Currency, Settings, COUNTRIES, CURRENCIES};
