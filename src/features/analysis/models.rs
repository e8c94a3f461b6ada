use crate::features::subscriptions::models::RecurrenceType;
use serde::Serialize;

/// 月額・年額合計レスポンス
#[derive(Debug, Serialize)]
pub struct SpendingTotals {
    pub total_monthly: f64,
    pub total_yearly: f64,
}

/// カテゴリ別集計レスポンス（表示メタデータ付き）
#[derive(Debug, Serialize)]
pub struct CategoryBreakdown {
    pub category_id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub amount: f64,
    pub count: usize,
    pub percentage: f64,
}

/// 支払いサイクル別集計レスポンス
#[derive(Debug, Serialize)]
pub struct RecurrenceBreakdown {
    pub recurrence_type: RecurrenceType,
    pub amount: f64,
    pub count: usize,
    pub percentage: f64,
}

/// 分析画面向けのサマリーレスポンス
#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub total_monthly: f64,
    pub total_yearly: f64,
    pub locked_in_yearly_total: f64,
    pub by_category: Vec<CategoryBreakdown>,
    pub by_recurrence_type: Vec<RecurrenceBreakdown>,
}
