use super::models::{
    CreateSubscriptionDto, CustomRecurrence, CustomUnit, RecurrenceType, Subscription,
    UpdateSubscriptionDto,
};
use crate::shared::errors::AppError;
use chrono::Utc;
use chrono_tz::Europe::Paris;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// SELECT句で取得するカラムの並び
const SUBSCRIPTION_COLUMNS: &str = "id, name, cost, recurrence_type, custom_unit, custom_value,
     category, is_locked_in, logo_url, date_added, country, notes, updated_at";

/// データベース行をサブスクリプションにマッピングする
///
/// # 引数
/// * `row` - データベース行
///
/// # 戻り値
/// サブスクリプション、または失敗時はエラー
///
/// # 不正データの扱い
/// 未知の recurrence_type は毎月扱い、不完全なカスタム周期（単位欠落・
/// 1未満の値）はカスタム周期なしに丸める。寛容な読み取りはここに集約し、
/// 以降のコードは整形済みのモデルだけを扱う。
fn map_row(row: &Row<'_>) -> rusqlite::Result<Subscription> {
    let recurrence_type: String = row.get(3)?;
    let custom_unit: Option<String> = row.get(4)?;
    let custom_value: Option<i64> = row.get(5)?;

    let custom_recurrence = match (
        custom_unit.as_deref().and_then(CustomUnit::from_db),
        custom_value,
    ) {
        (Some(unit), Some(value)) if value >= 1 => Some(CustomRecurrence { unit, value }),
        _ => None,
    };

    Ok(Subscription {
        id: row.get(0)?,
        name: row.get(1)?,
        cost: row.get(2)?,
        recurrence_type: RecurrenceType::from_db(&recurrence_type),
        custom_recurrence,
        category: row.get(6)?,
        is_locked_in: row.get::<_, i64>(7)? != 0,
        logo_url: row.get(8)?,
        date_added: row.get(9)?,
        country: row.get(10)?,
        notes: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

/// サブスクリプションを作成する
///
/// # 引数
/// * `conn` - データベース接続
/// * `dto` - サブスクリプション作成用DTO
///
/// # 戻り値
/// 作成されたサブスクリプション、または失敗時はエラー
pub fn create(conn: &Connection, dto: CreateSubscriptionDto) -> Result<Subscription, AppError> {
    // パリ時間で現在時刻を取得
    let now = Utc::now().with_timezone(&Paris).to_rfc3339();
    let id = Uuid::new_v4().to_string();

    let (custom_unit, custom_value) = match dto.custom_recurrence {
        Some(custom) => (Some(custom.unit.as_str()), Some(custom.value)),
        None => (None, None),
    };

    conn.execute(
        "INSERT INTO subscriptions (id, name, cost, recurrence_type, custom_unit, custom_value,
             category, is_locked_in, logo_url, date_added, country, notes, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            id,
            dto.name,
            dto.cost,
            dto.recurrence_type.as_str(),
            custom_unit,
            custom_value,
            dto.category,
            dto.is_locked_in as i64,
            dto.logo_url.unwrap_or_default(),
            now,
            dto.country.unwrap_or_else(|| "France".to_string()),
            dto.notes.unwrap_or_default(),
            now,
        ],
    )?;

    find_by_id(conn, &id)
}

/// IDでサブスクリプションを取得する
///
/// # 引数
/// * `conn` - データベース接続
/// * `id` - サブスクリプションID
///
/// # 戻り値
/// サブスクリプション、または失敗時はエラー
pub fn find_by_id(conn: &Connection, id: &str) -> Result<Subscription, AppError> {
    conn.query_row(
        &format!("SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE id = ?1"),
        params![id],
        map_row,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            AppError::NotFound(format!("ID {id} のサブスクリプションが見つかりません"))
        }
        _ => AppError::Database(e.to_string()),
    })
}

/// サブスクリプション一覧を取得する（追加日昇順）
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// サブスクリプションのリスト、または失敗時はエラー
pub fn find_all(conn: &Connection) -> Result<Vec<Subscription>, AppError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions ORDER BY date_added"
    ))?;
    let subscriptions = stmt.query_map([], map_row)?;

    subscriptions
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::Database(e.to_string()))
}

/// サブスクリプションを更新する（指定フィールドのみ上書き）
///
/// # 引数
/// * `conn` - データベース接続
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO
///
/// # 戻り値
/// 更新されたサブスクリプション、または失敗時はエラー
pub fn update(
    conn: &Connection,
    id: &str,
    dto: UpdateSubscriptionDto,
) -> Result<Subscription, AppError> {
    // パリ時間で現在時刻を取得
    let now = Utc::now().with_timezone(&Paris).to_rfc3339();

    // 既存のサブスクリプションを取得
    let existing = find_by_id(conn, id)?;

    // 更新するフィールドを決定
    let name = dto.name.unwrap_or(existing.name);
    let cost = dto.cost.unwrap_or(existing.cost);
    let recurrence_type = dto.recurrence_type.unwrap_or(existing.recurrence_type);
    let category = dto.category.unwrap_or(existing.category);
    let is_locked_in = dto.is_locked_in.unwrap_or(existing.is_locked_in);
    let logo_url = dto.logo_url.unwrap_or(existing.logo_url);
    let country = dto.country.unwrap_or(existing.country);
    let notes = dto.notes.unwrap_or(existing.notes);

    // カスタム周期はサイクル種別に追従させる（カスタム以外では保持しない）
    let custom_recurrence = match recurrence_type {
        RecurrenceType::Custom => dto.custom_recurrence.or(existing.custom_recurrence),
        _ => None,
    };
    let (custom_unit, custom_value) = match custom_recurrence {
        Some(custom) => (Some(custom.unit.as_str()), Some(custom.value)),
        None => (None, None),
    };

    conn.execute(
        "UPDATE subscriptions
         SET name = ?1, cost = ?2, recurrence_type = ?3, custom_unit = ?4, custom_value = ?5,
             category = ?6, is_locked_in = ?7, logo_url = ?8, country = ?9, notes = ?10,
             updated_at = ?11
         WHERE id = ?12",
        params![
            name,
            cost,
            recurrence_type.as_str(),
            custom_unit,
            custom_value,
            category,
            is_locked_in as i64,
            logo_url,
            country,
            notes,
            now,
            id,
        ],
    )?;

    find_by_id(conn, id)
}

/// サブスクリプションを削除する
///
/// # 引数
/// * `conn` - データベース接続
/// * `id` - サブスクリプションID
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn delete(conn: &Connection, id: &str) -> Result<(), AppError> {
    let rows_affected = conn.execute("DELETE FROM subscriptions WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "ID {id} のサブスクリプションが見つかりません"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    /// シードデータを除いた空のテスト用データベースを作成する
    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute("DELETE FROM subscriptions", []).unwrap();
        conn
    }

    fn create_dto(name: &str, cost: f64) -> CreateSubscriptionDto {
        CreateSubscriptionDto {
            name: name.to_string(),
            cost,
            recurrence_type: RecurrenceType::Monthly,
            custom_recurrence: None,
            category: "entertainment".to_string(),
            is_locked_in: false,
            logo_url: None,
            country: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_and_find_by_id() {
        let conn = test_conn();

        let created = create(&conn, create_dto("Netflix", 15.99)).unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Netflix");
        assert_eq!(created.cost, 15.99);
        assert_eq!(created.country, "France");
        assert!(!created.date_added.is_empty());

        let found = find_by_id(&conn, &created.id).unwrap();
        assert_eq!(found.name, created.name);
    }

    #[test]
    fn test_create_with_custom_recurrence() {
        let conn = test_conn();

        let mut dto = create_dto("Box mensuel", 30.0);
        dto.recurrence_type = RecurrenceType::Custom;
        dto.custom_recurrence = Some(CustomRecurrence {
            unit: CustomUnit::Months,
            value: 3,
        });

        let created = create(&conn, dto).unwrap();
        assert_eq!(created.recurrence_type, RecurrenceType::Custom);
        assert_eq!(
            created.custom_recurrence,
            Some(CustomRecurrence {
                unit: CustomUnit::Months,
                value: 3,
            })
        );
    }

    #[test]
    fn test_find_by_id_not_found() {
        let conn = test_conn();
        let result = find_by_id(&conn, "missing");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_find_all_ordered_by_date_added() {
        let conn = test_conn();

        // date_added を直接制御して挿入順を再現
        for (id, name, date) in [
            ("s2", "Spotify", "2026-02-01T00:00:00+01:00"),
            ("s1", "Netflix", "2026-01-01T00:00:00+01:00"),
        ] {
            conn.execute(
                "INSERT INTO subscriptions (id, name, cost, recurrence_type, category,
                     is_locked_in, logo_url, date_added, country, notes, updated_at)
                 VALUES (?1, ?2, 10.0, 'monthly', 'music', 0, '', ?3, 'France', '', ?3)",
                params![id, name, date],
            )
            .unwrap();
        }

        let all = find_all(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Netflix");
        assert_eq!(all[1].name, "Spotify");
    }

    #[test]
    fn test_update_merges_fields() {
        let conn = test_conn();
        let created = create(&conn, create_dto("Netflix", 15.99)).unwrap();

        let dto = UpdateSubscriptionDto {
            name: None,
            cost: Some(17.99),
            recurrence_type: None,
            custom_recurrence: None,
            category: None,
            is_locked_in: Some(true),
            logo_url: None,
            country: None,
            notes: None,
        };

        let updated = update(&conn, &created.id, dto).unwrap();
        assert_eq!(updated.name, "Netflix");
        assert_eq!(updated.cost, 17.99);
        assert!(updated.is_locked_in);
    }

    #[test]
    fn test_update_clears_custom_recurrence_when_cycle_changes() {
        let conn = test_conn();

        let mut dto = create_dto("Box mensuel", 30.0);
        dto.recurrence_type = RecurrenceType::Custom;
        dto.custom_recurrence = Some(CustomRecurrence {
            unit: CustomUnit::Weeks,
            value: 2,
        });
        let created = create(&conn, dto).unwrap();

        let update_dto = UpdateSubscriptionDto {
            name: None,
            cost: None,
            recurrence_type: Some(RecurrenceType::Monthly),
            custom_recurrence: None,
            category: None,
            is_locked_in: None,
            logo_url: None,
            country: None,
            notes: None,
        };

        let updated = update(&conn, &created.id, update_dto).unwrap();
        assert_eq!(updated.recurrence_type, RecurrenceType::Monthly);
        assert!(updated.custom_recurrence.is_none());
    }

    #[test]
    fn test_delete() {
        let conn = test_conn();
        let created = create(&conn, create_dto("Netflix", 15.99)).unwrap();

        delete(&conn, &created.id).unwrap();
        assert!(matches!(
            find_by_id(&conn, &created.id),
            Err(AppError::NotFound(_))
        ));

        // 存在しないIDの削除はNotFound
        assert!(matches!(
            delete(&conn, &created.id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_incomplete_custom_data_maps_to_none() {
        let conn = test_conn();

        // 単位が欠落したカスタム周期レコード
        conn.execute(
            "INSERT INTO subscriptions (id, name, cost, recurrence_type, custom_unit, custom_value,
                 category, is_locked_in, logo_url, date_added, country, notes, updated_at)
             VALUES ('c1', 'Mystery', 12.0, 'custom', NULL, 4, 'other', 0, '',
                 '2026-01-01T00:00:00+01:00', 'France', '', '2026-01-01T00:00:00+01:00')",
            [],
        )
        .unwrap();

        let found = find_by_id(&conn, "c1").unwrap();
        assert_eq!(found.recurrence_type, RecurrenceType::Custom);
        assert!(found.custom_recurrence.is_none());
    }
}
