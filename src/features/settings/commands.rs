use super::models::{
    country_by_code, currency_by_code, keys, Country, Currency, Settings, COUNTRIES, CURRENCIES,
};
use super::repository;
use crate::shared::utils::format::{format_amount, DigitGrouping};
use crate::AppState;
use tauri::State;

/// 設定キーと値の組み合わせを検証する
///
/// # 引数
/// * `key` - 設定キー
/// * `value` - 設定値
///
/// # 戻り値
/// 成功時はOk(())、不正な場合はエラーメッセージ
fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        keys::CURRENCY => {
            if currency_by_code(value).is_none() {
                return Err("対応していない通貨コードです".to_string());
            }
        }
        keys::COUNTRY => {
            if country_by_code(value).is_none() {
                return Err("対応していない国です".to_string());
            }
        }
        keys::THEME => {
            if !matches!(value, "system" | "light" | "dark") {
                return Err("テーマは'system'、'light'、'dark'のいずれかです".to_string());
            }
        }
        keys::DIGIT_GROUPING => {
            if !matches!(value, "space" | "comma") {
                return Err("桁区切りは'space'または'comma'のいずれかです".to_string());
            }
        }
        keys::USER_NAME => {
            if value.trim().is_empty() {
                return Err("ユーザー名を入力してください".to_string());
            }
        }
        _ => return Err(format!("未知の設定キーです: {key}")),
    }

    Ok(())
}

/// ユーザー設定を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// ユーザー設定（未保存のキーはデフォルト値）、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    repository::load_settings(&db).map_err(|e| e.user_message().to_string())
}

/// ユーザー設定を更新する
///
/// # 引数
/// * `key` - 設定キー
/// * `value` - 設定値
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新後のユーザー設定、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn update_setting(
    key: String,
    value: String,
    state: State<'_, AppState>,
) -> Result<Settings, String> {
    // バリデーション
    validate_setting(&key, &value)?;

    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    repository::save_setting(&db, &key, &value).map_err(|e| e.user_message().to_string())?;
    repository::load_settings(&db).map_err(|e| e.user_message().to_string())
}

/// 対応通貨の一覧を取得する
///
/// # 戻り値
/// 固定の通貨テーブル
#[tauri::command]
pub fn get_currencies() -> Vec<Currency> {
    CURRENCIES.to_vec()
}

/// 対応国の一覧を取得する
///
/// # 戻り値
/// 固定の国テーブル
#[tauri::command]
pub fn get_countries() -> Vec<Country> {
    COUNTRIES.to_vec()
}

/// 金額を桁区切り設定に従ってフォーマットする
///
/// # 引数
/// * `value` - フォーマットする金額
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 表示用文字列、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn format_amount_preview(
    value: f64,
    state: State<'_, AppState>,
) -> Result<String, String> {
    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    let grouping = repository::load_setting(&db, keys::DIGIT_GROUPING, "space")
        .map_err(|e| e.user_message().to_string())?;

    Ok(format_amount(value, DigitGrouping::from_setting(&grouping)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_currency() {
        assert!(validate_setting(keys::CURRENCY, "EUR").is_ok());
        assert!(validate_setting(keys::CURRENCY, "BTC").is_err());
    }

    #[test]
    fn test_validate_country() {
        assert!(validate_setting(keys::COUNTRY, "Spain").is_ok());
        assert!(validate_setting(keys::COUNTRY, "Italy").is_err());
    }

    #[test]
    fn test_validate_theme() {
        assert!(validate_setting(keys::THEME, "system").is_ok());
        assert!(validate_setting(keys::THEME, "dark").is_ok());
        assert!(validate_setting(keys::THEME, "sepia").is_err());
    }

    #[test]
    fn test_validate_digit_grouping() {
        assert!(validate_setting(keys::DIGIT_GROUPING, "space").is_ok());
        assert!(validate_setting(keys::DIGIT_GROUPING, "comma").is_ok());
        assert!(validate_setting(keys::DIGIT_GROUPING, "dot").is_err());
    }

    #[test]
    fn test_validate_user_name() {
        assert!(validate_setting(keys::USER_NAME, "Claire").is_ok());
        assert!(validate_setting(keys::USER_NAME, "  ").is_err());
    }

    #[test]
    fn test_validate_unknown_key() {
        assert!(validate_setting("font_size", "12").is_err());
    }

    #[test]
    fn test_static_pick_lists() {
        assert_eq!(get_currencies().len(), CURRENCIES.len());
        assert_eq!(get_countries().len(), COUNTRIES.len());
    }
}
