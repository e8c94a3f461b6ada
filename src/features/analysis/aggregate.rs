use super::normalize::{to_monthly, to_yearly};
use crate::features::categories::{category_by_id, Category, CATEGORIES};
use crate::features::subscriptions::models::{RecurrenceType, Subscription};
use std::cmp::Ordering;

/// カテゴリごとの月額集計
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: &'static Category,
    pub amount: f64,
    pub count: usize,
}

/// 支払いサイクルごとの月額集計
#[derive(Debug, Clone)]
pub struct RecurrenceTotal {
    pub recurrence_type: RecurrenceType,
    pub amount: f64,
    pub count: usize,
}

/// 全サブスクリプションの月額合計を計算する
///
/// # 引数
/// * `subscriptions` - サブスクリプションのリスト
///
/// # 戻り値
/// 月額換算の合計金額
pub fn total_monthly(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .fold(0.0, |acc, sub| acc + to_monthly(sub))
}

/// 全サブスクリプションの年額合計を計算する
///
/// # 引数
/// * `subscriptions` - サブスクリプションのリスト
///
/// # 戻り値
/// 年額換算の合計金額
pub fn total_yearly(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .fold(0.0, |acc, sub| acc + to_yearly(sub))
}

/// カテゴリ別の月額集計を計算する
///
/// # 引数
/// * `subscriptions` - サブスクリプションのリスト
///
/// # 戻り値
/// 金額降順のカテゴリ別集計。金額ゼロのカテゴリは含まない。
///
/// # 集計ルール
/// 未知のカテゴリIDはフォールバックカテゴリ（"other"）に合算するため、
/// 集計結果の金額の総和は常に月額合計と一致する。同額のカテゴリの順序は
/// カテゴリテーブル順（安定ソート）。
pub fn by_category(subscriptions: &[Subscription]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = CATEGORIES
        .iter()
        .map(|category| CategoryTotal {
            category,
            amount: 0.0,
            count: 0,
        })
        .collect();

    for sub in subscriptions {
        let resolved = category_by_id(&sub.category);
        if let Some(total) = totals.iter_mut().find(|t| t.category.id == resolved.id) {
            total.amount += to_monthly(sub);
            total.count += 1;
        }
    }

    totals.retain(|total| total.amount > 0.0);
    totals.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    totals
}

/// 支払いサイクル別の月額集計を計算する
///
/// # 引数
/// * `subscriptions` - サブスクリプションのリスト
///
/// # 戻り値
/// 毎月・毎年・カスタムの固定順の集計。金額ゼロのサイクルは含まない。
pub fn by_recurrence_type(subscriptions: &[Subscription]) -> Vec<RecurrenceTotal> {
    [
        RecurrenceType::Monthly,
        RecurrenceType::Yearly,
        RecurrenceType::Custom,
    ]
    .iter()
    .map(|&recurrence_type| {
        let mut amount = 0.0;
        let mut count = 0;
        for sub in subscriptions {
            if sub.recurrence_type == recurrence_type {
                amount += to_monthly(sub);
                count += 1;
            }
        }
        RecurrenceTotal {
            recurrence_type,
            amount,
            count,
        }
    })
    .filter(|total| total.amount > 0.0)
    .collect()
}

/// 合計に対する割合をパーセントで計算する
///
/// # 引数
/// * `amount` - 対象の金額
/// * `total` - 合計金額
///
/// # 戻り値
/// パーセント値。合計がゼロ以下の場合はエラーではなく0を返す
/// （空のコレクションに対する明示的なポリシー）。
pub fn percentage_of(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}

/// 1年縛りのサブスクリプションの年額合計を計算する
///
/// # 引数
/// * `subscriptions` - サブスクリプションのリスト
///
/// # 戻り値
/// 1年縛りの年額換算合計
pub fn locked_in_yearly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|sub| sub.is_locked_in)
        .fold(0.0, |acc, sub| acc + to_yearly(sub))
}
