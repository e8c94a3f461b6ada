use serde::{Deserialize, Serialize};

/// 桁区切り文字の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// スペース区切り（例: 1 234.56）
    Space,
    /// カンマ区切り（例: 1,234.56）
    Comma,
}

impl DigitGrouping {
    /// 設定値の文字列から桁区切り設定を取得する
    ///
    /// # 引数
    /// * `value` - 設定値（"space" または "comma"）
    ///
    /// # 戻り値
    /// 桁区切り設定（未知の値はスペース区切りにフォールバック）
    pub fn from_setting(value: &str) -> Self {
        match value {
            "comma" => DigitGrouping::Comma,
            _ => DigitGrouping::Space,
        }
    }

    /// 設定値として保存する文字列を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitGrouping::Space => "space",
            DigitGrouping::Comma => "comma",
        }
    }

    /// 区切り文字を取得する
    fn separator(&self) -> char {
        match self {
            DigitGrouping::Space => ' ',
            DigitGrouping::Comma => ',',
        }
    }
}

/// 金額を桁区切り付きの表示文字列にフォーマットする
///
/// # 引数
/// * `value` - フォーマットする金額
/// * `grouping` - 桁区切り設定
///
/// # 戻り値
/// 小数点以下2桁固定、3桁ごとに区切り文字を挿入した文字列
/// （非数値は "0" として扱う）
pub fn format_amount(value: f64, grouping: DigitGrouping) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rendered = format!("{value:.2}");
    let (integer_part, decimal_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    // 符号は区切りの対象にしない
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(grouping.separator());
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{decimal_part}")
}
