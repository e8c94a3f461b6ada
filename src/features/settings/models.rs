use serde::{Deserialize, Serialize};

/// 通貨の定義（静的な選択肢）
#[derive(Debug, Clone, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub label: &'static str,
}

/// 対応通貨のテーブル（表示順）
pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "EUR",
        symbol: "€",
        label: "EUR - Euro (€)",
    },
    Currency {
        code: "USD",
        symbol: "$",
        label: "USD - US Dollar ($)",
    },
    Currency {
        code: "GBP",
        symbol: "£",
        label: "GBP - British Pound (£)",
    },
    Currency {
        code: "JPY",
        symbol: "¥",
        label: "JPY - Japanese Yen (¥)",
    },
    Currency {
        code: "CAD",
        symbol: "CA$",
        label: "CAD - Canadian Dollar (CA$)",
    },
    Currency {
        code: "AUD",
        symbol: "A$",
        label: "AUD - Australian Dollar (A$)",
    },
    Currency {
        code: "CHF",
        symbol: "CHF",
        label: "CHF - Swiss Franc (CHF)",
    },
    Currency {
        code: "BRL",
        symbol: "R$",
        label: "BRL - Brazilian Real (R$)",
    },
];

/// 国の定義（静的な選択肢）
#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
}

/// 対応国のテーブル
pub const COUNTRIES: &[Country] = &[
    Country {
        code: "France",
        label: "France",
        flag: "🇫🇷",
    },
    Country {
        code: "Spain",
        label: "Spain",
        flag: "🇪🇸",
    },
];

/// 通貨コードから通貨を検索する
pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// 国コードから国を検索する
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

/// 設定キー
pub mod keys {
    pub const CURRENCY: &str = "currency";
    pub const COUNTRY: &str = "country";
    pub const USER_NAME: &str = "user_name";
    pub const THEME: &str = "theme";
    pub const DIGIT_GROUPING: &str = "digit_grouping";
}

/// ユーザー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub currency_code: String,
    pub country: String,
    pub user_name: String,
    pub theme: String,
    pub digit_grouping: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_code: "EUR".to_string(),
            country: "France".to_string(),
            user_name: "User".to_string(),
            theme: "system".to_string(),
            digit_grouping: "space".to_string(),
        }
    }
}
