use super::models::{keys, Settings};
use crate::shared::errors::AppError;
use chrono::Utc;
use chrono_tz::Europe::Paris;
use rusqlite::{params, Connection};

/// 設定値を読み込む
///
/// # 引数
/// * `conn` - データベース接続
/// * `key` - 設定キー
/// * `default` - 未保存時のデフォルト値
///
/// # 戻り値
/// 保存されている設定値、未保存の場合はデフォルト値
pub fn load_setting(conn: &Connection, key: &str, default: &str) -> Result<String, AppError> {
    let result = conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        params![key],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(value) => Ok(value),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(default.to_string()),
        Err(e) => Err(AppError::Database(e.to_string())),
    }
}

/// 設定値を保存する（既存キーは上書き）
///
/// # 引数
/// * `conn` - データベース接続
/// * `key` - 設定キー
/// * `value` - 設定値
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn save_setting(conn: &Connection, key: &str, value: &str) -> Result<(), AppError> {
    // パリ時間で現在時刻を取得
    let now = Utc::now().with_timezone(&Paris).to_rfc3339();

    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;

    Ok(())
}

/// すべてのユーザー設定を読み込む
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// ユーザー設定（未保存のキーはデフォルト値で補完）
pub fn load_settings(conn: &Connection) -> Result<Settings, AppError> {
    let defaults = Settings::default();

    Ok(Settings {
        currency_code: load_setting(conn, keys::CURRENCY, &defaults.currency_code)?,
        country: load_setting(conn, keys::COUNTRY, &defaults.country)?,
        user_name: load_setting(conn, keys::USER_NAME, &defaults.user_name)?,
        theme: load_setting(conn, keys::THEME, &defaults.theme)?,
        digit_grouping: load_setting(conn, keys::DIGIT_GROUPING, &defaults.digit_grouping)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_load_setting_returns_default_when_missing() {
        let conn = test_conn();
        let value = load_setting(&conn, keys::THEME, "system").unwrap();
        assert_eq!(value, "system");
    }

    #[test]
    fn test_save_and_load_setting() {
        let conn = test_conn();

        save_setting(&conn, keys::THEME, "dark").unwrap();
        assert_eq!(load_setting(&conn, keys::THEME, "system").unwrap(), "dark");

        // 上書き保存
        save_setting(&conn, keys::THEME, "light").unwrap();
        assert_eq!(load_setting(&conn, keys::THEME, "system").unwrap(), "light");
    }

    #[test]
    fn test_load_settings_merges_defaults() {
        let conn = test_conn();

        save_setting(&conn, keys::CURRENCY, "JPY").unwrap();
        save_setting(&conn, keys::USER_NAME, "Claire").unwrap();

        let settings = load_settings(&conn).unwrap();
        assert_eq!(settings.currency_code, "JPY");
        assert_eq!(settings.user_name, "Claire");
        // 未保存のキーはデフォルト値
        assert_eq!(settings.country, "France");
        assert_eq!(settings.theme, "system");
        assert_eq!(settings.digit_grouping, "space");
    }
}
