use super::models::{CreateSubscriptionDto, RecurrenceType, Subscription, UpdateSubscriptionDto};
use super::repository;
use crate::AppState;
use tauri::State;

/// 名前のバリデーション
fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("サブスクリプション名を入力してください".to_string());
    }
    Ok(())
}

/// 金額のバリデーション
fn validate_cost(cost: f64) -> Result<(), String> {
    if !cost.is_finite() || cost <= 0.0 {
        return Err("金額は正の数値である必要があります".to_string());
    }
    Ok(())
}

/// カスタム周期のバリデーション
fn validate_custom_value(value: i64) -> Result<(), String> {
    if value < 1 {
        return Err("カスタム周期は1以上である必要があります".to_string());
    }
    Ok(())
}

/// サブスクリプションを作成する
///
/// # 引数
/// * `dto` - サブスクリプション作成用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 作成されたサブスクリプション、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn create_subscription(
    dto: CreateSubscriptionDto,
    state: State<'_, AppState>,
) -> Result<Subscription, String> {
    // バリデーション
    validate_name(&dto.name)?;
    validate_cost(dto.cost)?;
    if dto.recurrence_type == RecurrenceType::Custom {
        if let Some(custom) = &dto.custom_recurrence {
            validate_custom_value(custom.value)?;
        }
    }

    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    // サブスクリプションを作成
    repository::create(&db, dto).map_err(|e| e.user_message().to_string())
}

/// サブスクリプション一覧を取得する（追加日昇順）
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// サブスクリプションのリスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_subscriptions(state: State<'_, AppState>) -> Result<Vec<Subscription>, String> {
    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    // サブスクリプション一覧を取得
    repository::find_all(&db).map_err(|e| e.user_message().to_string())
}

/// サブスクリプションを更新する
///
/// # 引数
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新されたサブスクリプション、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn update_subscription(
    id: String,
    dto: UpdateSubscriptionDto,
    state: State<'_, AppState>,
) -> Result<Subscription, String> {
    // バリデーション: 指定されたフィールドのみ検証
    if let Some(ref name) = dto.name {
        validate_name(name)?;
    }
    if let Some(cost) = dto.cost {
        validate_cost(cost)?;
    }
    if let Some(custom) = &dto.custom_recurrence {
        validate_custom_value(custom.value)?;
    }

    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    // サブスクリプションを更新
    repository::update(&db, &id, dto).map_err(|e| e.user_message().to_string())
}

/// サブスクリプションを削除する
///
/// # 引数
/// * `id` - サブスクリプションID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラーメッセージ
#[tauri::command]
pub async fn delete_subscription(id: String, state: State<'_, AppState>) -> Result<(), String> {
    // データベース接続を取得
    let db = state
        .db
        .lock()
        .map_err(|e| format!("データベースロックエラー: {e}"))?;

    // サブスクリプションを削除
    repository::delete(&db, &id).map_err(|e| e.user_message().to_string())
}
