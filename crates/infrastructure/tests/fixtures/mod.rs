#![allow(dead_code)]

pub const SMALL_CATALOG_JSON: &str = r#"[
  { "id": 1, "name": "Alpha", "icon": "fas fa-a", "country": "США", "risk": "Высокий", "users": "10M+" },
  { "id": 2, "name": "Beta", "icon": "fas fa-b", "country": "Китай", "risk": "Средний", "users": 2500000 },
  { "id": 3, "name": "Gamma", "icon": "fas fa-c", "country": "ОАЭ", "risk": "Низкий", "users": "300K" }
]"#;

pub const DUPLICATE_ID_CATALOG_JSON: &str = r#"[
  { "id": 1, "name": "Alpha", "icon": "i", "country": "c", "risk": "r", "users": "1" },
  { "id": 1, "name": "Alpha again", "icon": "i", "country": "c", "risk": "r", "users": "1" }
]"#;
