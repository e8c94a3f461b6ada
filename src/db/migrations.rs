use chrono::{Duration, Utc};
use chrono_tz::Europe::Paris;
use log::info;
use rusqlite::{params, Connection, Result};
use uuid::Uuid;

/// 現在のスキーマバージョン
const SCHEMA_VERSION: i32 = 2;

/// すべてのデータベースマイグレーションを実行する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
///
/// # 処理内容
/// 1. テーブルの作成
/// 2. 旧スキーマからの一回限りのアップグレード
/// 3. インデックスの作成（アップグレード後のカラムを対象とするため後段）
/// 4. 初回起動時のデフォルトデータ投入
pub fn run_migrations(conn: &Connection) -> Result<()> {
    create_tables(conn)?;
    upgrade_legacy_schema(conn)?;
    create_indexes(conn)?;
    seed_default_subscriptions(conn)?;
    Ok(())
}

/// テーブルを作成する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
fn create_tables(conn: &Connection) -> Result<()> {
    // サブスクリプションテーブルを作成
    conn.execute(
        "CREATE TABLE IF NOT EXISTS subscriptions (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            cost REAL NOT NULL CHECK(cost > 0),
            recurrence_type TEXT NOT NULL DEFAULT 'monthly'
                CHECK(recurrence_type IN ('monthly', 'yearly', 'custom')),
            custom_unit TEXT CHECK(custom_unit IN ('weeks', 'months')),
            custom_value INTEGER,
            category TEXT NOT NULL DEFAULT 'other',
            is_locked_in INTEGER NOT NULL DEFAULT 0,
            logo_url TEXT NOT NULL DEFAULT '',
            date_added TEXT NOT NULL,
            country TEXT NOT NULL DEFAULT 'France',
            notes TEXT NOT NULL DEFAULT '',
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    // 設定テーブルを作成（キー単位のユーザー設定ストア）
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// インデックスを作成する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
///
/// 旧スキーマで後から追加されるカラムを含むため、
/// スキーマアップグレードの後に呼び出すこと。
fn create_indexes(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_subscriptions_category ON subscriptions(category)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_subscriptions_date_added ON subscriptions(date_added)",
        [],
    )?;

    Ok(())
}

/// 旧スキーマからのアップグレードを一回だけ実行する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
///
/// # 処理内容
/// 旧バージョンのデータベースには recurrence_type 以降のカラムが存在しない。
/// PRAGMA user_version で世代を判定し、不足カラムをデフォルト値付きで追加、
/// 旧 recurrence カラムの値を recurrence_type へ移し替える。
/// 読み取り箇所での都度判定は行わず、ここで形を揃え切る。
fn upgrade_legacy_schema(conn: &Connection) -> Result<()> {
    let user_version: i32 =
        conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if user_version >= SCHEMA_VERSION {
        return Ok(());
    }

    // パリ時間で現在時刻を取得
    let now = Utc::now().with_timezone(&Paris).to_rfc3339();

    // 不足しているカラムをデフォルト値付きで追加
    let added_columns = [
        ("recurrence_type", "TEXT NOT NULL DEFAULT 'monthly'"),
        ("custom_unit", "TEXT"),
        ("custom_value", "INTEGER"),
        ("is_locked_in", "INTEGER NOT NULL DEFAULT 0"),
        ("logo_url", "TEXT NOT NULL DEFAULT ''"),
        ("date_added", "TEXT NOT NULL DEFAULT ''"),
        ("country", "TEXT NOT NULL DEFAULT 'France'"),
        ("notes", "TEXT NOT NULL DEFAULT ''"),
        ("updated_at", "TEXT NOT NULL DEFAULT ''"),
    ];

    for (column, definition) in added_columns {
        if !table_has_column(conn, "subscriptions", column)? {
            conn.execute(
                &format!("ALTER TABLE subscriptions ADD COLUMN {column} {definition}"),
                [],
            )?;
            info!("旧スキーマにカラムを追加しました: subscriptions.{column}");
        }
    }

    // 旧 recurrence カラムの値を recurrence_type へ移し替え
    if table_has_column(conn, "subscriptions", "recurrence")? {
        let migrated = conn.execute(
            "UPDATE subscriptions SET recurrence_type = lower(recurrence)
             WHERE lower(recurrence) IN ('monthly', 'yearly', 'custom')",
            [],
        )?;
        info!("recurrence カラムから {migrated} 件を移行しました");
    }

    // 追加時刻が未設定のレコードに現在時刻を補完
    conn.execute(
        "UPDATE subscriptions SET date_added = ?1 WHERE date_added = ''",
        params![now],
    )?;
    conn.execute(
        "UPDATE subscriptions SET updated_at = ?1 WHERE updated_at = ''",
        params![now],
    )?;

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    Ok(())
}

/// テーブルに指定カラムが存在するかを判定する
///
/// # 引数
/// * `conn` - データベース接続
/// * `table` - テーブル名
/// * `column` - カラム名
///
/// # 戻り値
/// カラムが存在する場合はtrue
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }

    Ok(false)
}

/// テーブルが空の場合、初期サブスクリプションデータを挿入する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
fn seed_default_subscriptions(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))?;

    if count > 0 {
        return Ok(());
    }

    let now = Utc::now().with_timezone(&Paris);

    // (名前, 月額, カテゴリ, 1年縛り, ロゴURL, 追加日の経過日数)
    let defaults = [
        (
            "Netflix",
            15.99,
            "entertainment",
            false,
            "https://www.google.com/s2/favicons?domain=netflix.com&sz=64",
            3i64,
        ),
        ("Gold's Gym", 45.00, "sport", true, "", 2i64),
        (
            "Spotify",
            16.99,
            "music",
            false,
            "https://www.google.com/s2/favicons?domain=spotify.com&sz=64",
            1i64,
        ),
    ];

    for (name, cost, category, is_locked_in, logo_url, days_ago) in defaults {
        let date_added = (now - Duration::days(days_ago)).to_rfc3339();
        conn.execute(
            "INSERT INTO subscriptions (id, name, cost, recurrence_type, custom_unit, custom_value,
                 category, is_locked_in, logo_url, date_added, country, notes, updated_at)
             VALUES (?1, ?2, ?3, 'monthly', NULL, NULL, ?4, ?5, ?6, ?7, 'France', '', ?8)",
            params![
                Uuid::new_v4().to_string(),
                name,
                cost,
                category,
                is_locked_in as i64,
                logo_url,
                date_added,
                now.to_rfc3339(),
            ],
        )?;
    }

    info!("初期サブスクリプションデータを投入しました: {}件", defaults.len());

    Ok(())
}
