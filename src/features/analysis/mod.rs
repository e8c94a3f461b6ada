/// 分析機能モジュール
///
/// このモジュールは、サブスクリプション支出の正規化と集計を提供します：
/// - 支払いサイクルの月額・年額換算
/// - 月額・年額合計
/// - カテゴリ別・支払いサイクル別の内訳
/// - 1年縛りサブスクリプションの年額合計
///
/// すべての集計は入力を変更しない純粋な計算で、呼び出しごとに
/// コレクション全体から再計算します。
pub mod aggregate;
pub mod commands;
pub mod models;
pub mod normalize;

// 公開インターフェース
pub use aggregate::{
    by_category, by_recurrence_type, locked_in_yearly_total, percentage_of, total_monthly,
    total_yearly,
};
pub use normalize::{to_monthly, to_yearly};
