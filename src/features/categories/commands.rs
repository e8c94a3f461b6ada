use super::models::{Category, CATEGORIES};

/// カテゴリ一覧を取得する（表示順）
///
/// # 戻り値
/// 固定のカテゴリテーブル
#[tauri::command]
pub fn get_categories() -> Vec<Category> {
    CATEGORIES.to_vec()
}
