use crate::features::subscriptions::models::{CustomUnit, RecurrenceType, Subscription};

/// サブスクリプションの費用を月額換算する
///
/// # 引数
/// * `subscription` - サブスクリプション
///
/// # 戻り値
/// 月額換算の金額
///
/// # 換算ルール
/// - 毎年: cost / 12
/// - カスタム（N週ごと）: (cost * 52) / 12 / N （年52週で年額換算してから月割り）
/// - カスタム（Nヶ月ごと）: cost / N
/// - 毎月、またはカスタム周期データなし: cost をそのまま返す
///
/// 丸めは行わない。表示用の丸めはフォーマット層の責務。
pub fn to_monthly(subscription: &Subscription) -> f64 {
    match subscription.recurrence_type {
        RecurrenceType::Yearly => subscription.cost / 12.0,
        RecurrenceType::Custom => match subscription.custom_recurrence {
            Some(custom) => match custom.unit {
                CustomUnit::Weeks => (subscription.cost * 52.0) / 12.0 / custom.value as f64,
                CustomUnit::Months => subscription.cost / custom.value as f64,
            },
            // カスタム周期データがない場合は月額として扱う
            None => subscription.cost,
        },
        RecurrenceType::Monthly => subscription.cost,
    }
}

/// サブスクリプションの費用を年額換算する
///
/// # 引数
/// * `subscription` - サブスクリプション
///
/// # 戻り値
/// 年額換算の金額
///
/// 常に月額換算の12倍として導出する（独立計算はしない）。
pub fn to_yearly(subscription: &Subscription) -> f64 {
    to_monthly(subscription) * 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::CustomRecurrence;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn subscription(
        cost: f64,
        recurrence_type: RecurrenceType,
        custom_recurrence: Option<CustomRecurrence>,
    ) -> Subscription {
        Subscription {
            id: "test".to_string(),
            name: "Test".to_string(),
            cost,
            recurrence_type,
            custom_recurrence,
            category: "other".to_string(),
            is_locked_in: false,
            logo_url: String::new(),
            date_added: "2026-01-01T00:00:00+01:00".to_string(),
            country: "France".to_string(),
            notes: String::new(),
            updated_at: "2026-01-01T00:00:00+01:00".to_string(),
        }
    }

    #[test]
    fn test_monthly_is_identity() {
        let sub = subscription(15.99, RecurrenceType::Monthly, None);
        approx_eq(to_monthly(&sub), 15.99);
        approx_eq(to_yearly(&sub), 15.99 * 12.0);
    }

    #[test]
    fn test_yearly_divides_by_twelve() {
        let sub = subscription(120.0, RecurrenceType::Yearly, None);
        approx_eq(to_monthly(&sub), 10.0);
        approx_eq(to_yearly(&sub), 120.0);
    }

    #[test]
    fn test_custom_months() {
        // 3ヶ月ごとに30 → 月額10
        let sub = subscription(
            30.0,
            RecurrenceType::Custom,
            Some(CustomRecurrence {
                unit: CustomUnit::Months,
                value: 3,
            }),
        );
        approx_eq(to_monthly(&sub), 10.0);
    }

    #[test]
    fn test_custom_weeks() {
        // 2週ごとに20 → (20 * 52) / 12 / 2 ≈ 43.33
        let sub = subscription(
            20.0,
            RecurrenceType::Custom,
            Some(CustomRecurrence {
                unit: CustomUnit::Weeks,
                value: 2,
            }),
        );
        approx_eq(to_monthly(&sub), (20.0 * 52.0) / 12.0 / 2.0);
    }

    #[test]
    fn test_custom_without_data_degrades_to_monthly() {
        let sub = subscription(9.99, RecurrenceType::Custom, None);
        approx_eq(to_monthly(&sub), 9.99);
    }

    /// quickcheck用の任意サブスクリプション生成
    #[derive(Debug, Clone)]
    struct AnySubscription(Subscription);

    impl Arbitrary for AnySubscription {
        fn arbitrary(g: &mut Gen) -> Self {
            let cost = (u32::arbitrary(g) % 1_000_000) as f64 / 100.0 + 0.01;
            let recurrence_type = *g
                .choose(&[
                    RecurrenceType::Monthly,
                    RecurrenceType::Yearly,
                    RecurrenceType::Custom,
                ])
                .unwrap();
            let custom_recurrence =
                if recurrence_type == RecurrenceType::Custom && bool::arbitrary(g) {
                    Some(CustomRecurrence {
                        unit: if bool::arbitrary(g) {
                            CustomUnit::Weeks
                        } else {
                            CustomUnit::Months
                        },
                        value: (u8::arbitrary(g) % 24) as i64 + 1,
                    })
                } else {
                    None
                };
            AnySubscription(subscription(cost, recurrence_type, custom_recurrence))
        }
    }

    #[quickcheck]
    fn prop_yearly_is_always_twelve_times_monthly(any: AnySubscription) -> bool {
        // 年額は常に月額の12倍（導出値の法則）
        to_yearly(&any.0) == to_monthly(&any.0) * 12.0
    }

    #[quickcheck]
    fn prop_monthly_is_positive_for_valid_input(any: AnySubscription) -> bool {
        to_monthly(&any.0) > 0.0
    }
}
