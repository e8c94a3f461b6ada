use serde::{Deserialize, Serialize};

/// 支払いサイクルの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    /// 毎月
    Monthly,
    /// 毎年
    Yearly,
    /// カスタム周期（Nヶ月ごと / N週ごと）
    Custom,
}

impl RecurrenceType {
    /// データベースに保存する文字列を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
            RecurrenceType::Custom => "custom",
        }
    }

    /// データベースの文字列から種別を取得する
    ///
    /// # 引数
    /// * `value` - データベースに保存された文字列
    ///
    /// # 戻り値
    /// 支払いサイクル種別（未知の値は毎月にフォールバック）
    pub fn from_db(value: &str) -> Self {
        match value {
            "yearly" => RecurrenceType::Yearly,
            "custom" => RecurrenceType::Custom,
            _ => RecurrenceType::Monthly,
        }
    }
}

/// カスタム周期の単位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomUnit {
    /// 週単位
    Weeks,
    /// 月単位
    Months,
}

impl CustomUnit {
    /// データベースに保存する文字列を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomUnit::Weeks => "weeks",
            CustomUnit::Months => "months",
        }
    }

    /// データベースの文字列から単位を取得する
    ///
    /// # 引数
    /// * `value` - データベースに保存された文字列
    ///
    /// # 戻り値
    /// カスタム周期の単位（未知の値はNone）
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "weeks" => Some(CustomUnit::Weeks),
            "months" => Some(CustomUnit::Months),
            _ => None,
        }
    }
}

/// カスタム周期（「value 単位ごとに請求」を表す）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomRecurrence {
    pub unit: CustomUnit,
    pub value: i64,
}

/// サブスクリプションデータモデル
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub recurrence_type: RecurrenceType,
    pub custom_recurrence: Option<CustomRecurrence>,
    pub category: String,
    pub is_locked_in: bool,
    pub logo_url: String,
    pub date_added: String,
    pub country: String,
    pub notes: String,
    pub updated_at: String,
}

/// サブスクリプション作成用DTO
#[derive(Debug, Deserialize)]
pub struct CreateSubscriptionDto {
    pub name: String,
    pub cost: f64,
    pub recurrence_type: RecurrenceType,
    pub custom_recurrence: Option<CustomRecurrence>,
    pub category: String,
    pub is_locked_in: bool,
    pub logo_url: Option<String>,
    pub country: Option<String>,
    pub notes: Option<String>,
}

/// サブスクリプション更新用DTO（指定フィールドのみ上書き）
#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionDto {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub recurrence_type: Option<RecurrenceType>,
    pub custom_recurrence: Option<CustomRecurrence>,
    pub category: Option<String>,
    pub is_locked_in: Option<bool>,
    pub logo_url: Option<String>,
    pub country: Option<String>,
    pub notes: Option<String>,
}
