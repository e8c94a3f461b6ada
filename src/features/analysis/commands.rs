use super::aggregate;
use super::models::{AnalysisSummary, CategoryBreakdown, RecurrenceBreakdown, SpendingTotals};
use crate::features::subscriptions::models::Subscription;
use crate::features::subscriptions::repository;
use crate::AppState;
use tauri::State;

/// サブスクリプション全体の集計からサマリーレスポンスを構築する
///
/// # 引数
/// * `subscriptions` - サブスクリプションのリスト
///
/// # 戻り値
/// 分析サマリー。各内訳のパーセントは月額合計に対する割合。
fn build_summary(subscriptions: &[Subscription]) -> AnalysisSummary {
    let total_monthly = aggregate::total_monthly(subscriptions);

    let by_category = aggregate::by_category(subscriptions)
        .into_iter()
        .map(|total| CategoryBreakdown {
            category_id: total.category.id,
            label: total.category.label,
            icon: total.category.icon,
            color: total.category.color,
            amount: total.amount,
            count: total.count,
            percentage: aggregate::percentage_of(total.amount, total_monthly),
        })
        .collect();

    let by_recurrence_type = aggregate::by_recurrence_type(subscriptions)
        .into_iter()
        .map(|total| RecurrenceBreakdown {
            recurrence_type: total.recurrence_type,
            amount: total.amount,
            count: total.count,
            percentage: aggregate::percentage_of(total.amount, total_monthly),
        })
        .collect();

    AnalysisSummary {
        total_monthly,
        total_yearly: aggregate::total_yearly(subscriptions),
        locked_in_yearly_total: aggregate::locked_in_yearly_total(subscriptions),
        by_category,
        by_recurrence_type,
    }
}

/// 月額・年額の合計を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 月額・年額合計、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_spending_totals(state: State<'_, AppState>) -> Result<SpendingTotals, String> {
    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    let subscriptions = repository::find_all(&db).map_err(|e| e.user_message().to_string())?;

    Ok(SpendingTotals {
        total_monthly: aggregate::total_monthly(&subscriptions),
        total_yearly: aggregate::total_yearly(&subscriptions),
    })
}

/// 分析サマリーを取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// カテゴリ別・サイクル別内訳と合計を含むサマリー、
/// または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_analysis_summary(state: State<'_, AppState>) -> Result<AnalysisSummary, String> {
    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    let subscriptions = repository::find_all(&db).map_err(|e| e.user_message().to_string())?;

    Ok(build_summary(&subscriptions))
}
