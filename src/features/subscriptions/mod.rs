/// サブスクリプション機能モジュール
///
/// このモジュールは、サブスクリプション管理に関連するすべての機能を提供します：
/// - サブスクリプションの作成、読み取り、更新、削除
/// - 支払いサイクル（毎月・毎年・カスタム周期）の保持
pub mod commands;
pub mod models;
pub mod repository;

// 公開インターフェース
pub use models::{
    CreateSubscriptionDto, CustomRecurrence, CustomUnit, RecurrenceType, Subscription,
    UpdateSubscriptionDto,
};
