use serde::Serialize;

/// カテゴリデータモデル（静的な表示メタデータ）
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// 固定のカテゴリテーブル（表示順）
///
/// 末尾の "other" が未知のカテゴリIDのフォールバック先となる。
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "entertainment",
        label: "Entertainment",
        icon: "movie",
        color: "#F87171",
    },
    Category {
        id: "utilities",
        label: "Utilities",
        icon: "bolt",
        color: "#FACC15",
    },
    Category {
        id: "sport",
        label: "Sport",
        icon: "fitness_center",
        color: "#4ADE80",
    },
    Category {
        id: "software",
        label: "Software",
        icon: "terminal",
        color: "#60A5FA",
    },
    Category {
        id: "health",
        label: "Health",
        icon: "medical_services",
        color: "#F472B6",
    },
    Category {
        id: "food",
        label: "Food",
        icon: "restaurant",
        color: "#FB923C",
    },
    Category {
        id: "music",
        label: "Music",
        icon: "music_note",
        color: "#C084FC",
    },
    Category {
        id: "productivity",
        label: "Productivity",
        icon: "folder",
        color: "#818CF8",
    },
    Category {
        id: "transport",
        label: "Transport",
        icon: "directions_transit",
        color: "#2DD4BF",
    },
    Category {
        id: "other",
        label: "Other",
        icon: "category",
        color: "#9CA3AF",
    },
];

/// カテゴリIDから表示メタデータを解決する
///
/// # 引数
/// * `id` - カテゴリID
///
/// # 戻り値
/// 一致するカテゴリ。未知・空のIDはフォールバックカテゴリ（"other"）
pub fn category_by_id(id: &str) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|category| category.id == id)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}
