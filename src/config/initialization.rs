use crate::config::{get_database_filename, get_environment, Environment};
use log::{info, warn};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Manager};

/// アプリケーション初期化の結果を表す構造体
#[derive(Debug)]
pub struct InitializationResult {
    /// 初回起動かどうか
    pub is_first_run: bool,
    /// アプリケーションデータディレクトリのパス
    pub app_data_dir: PathBuf,
    /// データベースファイルのパス
    pub database_path: PathBuf,
    /// 実行環境
    pub environment: Environment,
}

/// アプリケーションの初期化を実行する
///
/// # 引数
/// * `app_handle` - Tauriアプリケーションハンドル
///
/// # 戻り値
/// 初期化結果、または失敗時はエラーメッセージ
///
/// # 処理内容
/// 1. アプリケーションデータディレクトリの作成
/// 2. 初回起動の判定
/// 3. データベースファイルの初期化
/// 4. 環境に応じた設定の適用
pub fn initialize_application(app_handle: &AppHandle) -> Result<InitializationResult, String> {
    // 現在の実行環境を取得
    let environment = get_environment();

    // アプリケーションデータディレクトリを取得・作成
    let app_data_dir = ensure_app_data_directory(app_handle)?;

    // データベースファイルパスを構築
    let db_filename = get_database_filename(environment.clone());
    let database_path = app_data_dir.join(db_filename);

    // 初回起動かどうかを判定（データベースファイルの存在で判定）
    let is_first_run = !database_path.exists();

    // 初回起動の場合、初期化ログを出力
    if is_first_run {
        log_first_run_initialization(&environment, &app_data_dir, &database_path);
    }

    // データベースを初期化
    initialize_database_file(&database_path)?;

    Ok(InitializationResult {
        is_first_run,
        app_data_dir,
        database_path,
        environment,
    })
}

/// アプリケーションデータディレクトリを確実に作成する
///
/// # 引数
/// * `app_handle` - Tauriアプリケーションハンドル
///
/// # 戻り値
/// アプリケーションデータディレクトリのパス、または失敗時はエラーメッセージ
fn ensure_app_data_directory(app_handle: &AppHandle) -> Result<PathBuf, String> {
    let app_data_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| format!("アプリデータディレクトリの取得に失敗しました: {e}"))?;

    // ディレクトリが存在しない場合は作成
    if !app_data_dir.exists() {
        fs::create_dir_all(&app_data_dir)
            .map_err(|e| format!("アプリデータディレクトリの作成に失敗しました: {e}"))?;

        info!(
            "アプリケーションデータディレクトリを作成しました: {:?}",
            app_data_dir
        );
    }

    Ok(app_data_dir)
}

/// データベースファイルを初期化する
///
/// # 引数
/// * `database_path` - データベースファイルのパス
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラーメッセージ
///
/// # 破損データの扱い
/// 既存ファイルが開けない・マイグレーションできない場合は破損とみなし、
/// ファイルを退避してから初期データ入りのデータベースを作り直す。
fn initialize_database_file(database_path: &Path) -> Result<(), String> {
    match open_and_migrate(database_path) {
        Ok(()) => {
            info!("データベースファイルを初期化しました: {:?}", database_path);
            Ok(())
        }
        Err(e) => {
            warn!("データベースの初期化に失敗しました（破損の可能性）: {e}");
            quarantine_corrupt_database(database_path)?;

            open_and_migrate(database_path)
                .map_err(|e| format!("データベースの再作成に失敗しました: {e}"))?;
            info!("データベースを初期状態で再作成しました: {:?}", database_path);
            Ok(())
        }
    }
}

/// データベース接続を開き、マイグレーションを実行する
///
/// # 引数
/// * `database_path` - データベースファイルのパス
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラーメッセージ
fn open_and_migrate(database_path: &Path) -> Result<(), String> {
    // データベース接続を開く（ファイルが存在しない場合は自動作成される）
    let conn = Connection::open(database_path)
        .map_err(|e| format!("データベースファイルの作成に失敗しました: {e}"))?;

    // マイグレーションを実行してテーブルを作成
    crate::db::migrations::run_migrations(&conn)
        .map_err(|e| format!("データベースマイグレーションの実行に失敗しました: {e}"))?;

    Ok(())
}

/// 破損したデータベースファイルを退避する
///
/// # 引数
/// * `database_path` - データベースファイルのパス
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラーメッセージ
fn quarantine_corrupt_database(database_path: &Path) -> Result<(), String> {
    if !database_path.exists() {
        return Ok(());
    }

    let mut backup_path = database_path.as_os_str().to_owned();
    backup_path.push(".corrupt");
    let backup_path = PathBuf::from(backup_path);

    fs::rename(database_path, &backup_path)
        .map_err(|e| format!("破損したデータベースの退避に失敗しました: {e}"))?;
    warn!("破損したデータベースを退避しました: {:?}", backup_path);

    Ok(())
}

/// 初回起動時の初期化ログを出力する
///
/// # 引数
/// * `environment` - 実行環境
/// * `app_data_dir` - アプリケーションデータディレクトリ
/// * `database_path` - データベースファイルパス
fn log_first_run_initialization(
    environment: &Environment,
    app_data_dir: &Path,
    database_path: &Path,
) {
    info!("=== アプリケーション初回起動 ===");
    info!("実行環境: {:?}", environment);
    info!("アプリデータディレクトリ: {:?}", app_data_dir);
    info!("データベースファイル: {:?}", database_path);
    info!("初期化を開始します...");
}

/// 初期化完了ログを出力する
///
/// # 引数
/// * `result` - 初期化結果
pub fn log_initialization_complete(result: &InitializationResult) {
    if result.is_first_run {
        info!("=== 初期化完了 ===");
        info!("初回起動の初期化が正常に完了しました");
    } else {
        info!("アプリケーション起動完了（既存データベースを使用）");
    }
    info!("環境: {:?}", result.environment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_migrate_creates_seeded_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("subtracker.db");

        open_and_migrate(&db_path).unwrap();

        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_corrupt_database_is_quarantined_and_recreated() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("subtracker.db");

        // SQLiteとして解釈できないファイルを用意
        fs::write(&db_path, b"this is not a sqlite database").unwrap();

        initialize_database_file(&db_path).unwrap();

        // 破損ファイルは退避され、初期データ入りで再作成される
        assert!(dir.path().join("subtracker.db.corrupt").exists());
        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }
}
