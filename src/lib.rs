mod config;
pub mod db;
mod features;
mod shared;

use config::EnvironmentConfig;
use features::{analysis, categories, settings, subscriptions};
use log::{error, info, warn};
use rusqlite::Connection;
use std::sync::Mutex;
use tauri::Manager;

/// アプリケーション状態（データベース接続を保持）
pub struct AppState {
    pub db: Mutex<Connection>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // ログシステムを初期化
            initialize_logging_system();

            info!("アプリケーション初期化を開始します...");

            // 環境変数を読み込み（.envファイルがある場合）
            if dotenv::dotenv().is_err() {
                // .envファイルがない場合は無視（本番環境では環境変数が直接設定される）
                warn!(".envファイルが見つかりません。環境変数が直接設定されていることを確認してください。");
            } else {
                info!(".envファイルを読み込みました");
            }

            // アプリ起動時にデータベースを初期化
            info!("データベースを初期化しています...");
            let db_conn = db::initialize_database(app.handle()).map_err(|e| {
                error!("データベースの初期化に失敗しました: {}", e);
                e
            })?;

            info!("データベースの初期化が完了しました");

            // データベース接続をアプリ状態に保存
            app.manage(AppState {
                db: Mutex::new(db_conn),
            });

            info!("アプリケーション初期化が完了しました");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // サブスクリプションコマンド
            subscriptions::commands::create_subscription,
            subscriptions::commands::get_subscriptions,
            subscriptions::commands::update_subscription,
            subscriptions::commands::delete_subscription,
            // 分析コマンド
            analysis::commands::get_spending_totals,
            analysis::commands::get_analysis_summary,
            // カテゴリコマンド
            categories::commands::get_categories,
            // 設定コマンド
            settings::commands::get_settings,
            settings::commands::update_setting,
            settings::commands::get_currencies,
            settings::commands::get_countries,
            settings::commands::format_amount_preview,
        ])
        .run(tauri::generate_context!())
        .expect("Tauriアプリケーションの実行中にエラーが発生しました");
}

/// ログシステムを初期化
fn initialize_logging_system() {
    // 環境設定を取得
    let env_config = EnvironmentConfig::from_env();

    // ログレベルを設定
    let log_level = match env_config.log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    // env_loggerを初期化
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    info!(
        "ログシステムを初期化しました: level={}, environment={}",
        env_config.log_level, env_config.environment
    );
}
