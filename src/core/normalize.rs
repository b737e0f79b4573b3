use crate::domain::model::{AvatarCells, UserRecord, NO_AVATAR};
use crate::utils::text::{escape_html, is_web_url};
use serde_json::{Map, Value};

/// Optional text fields of a WP user and the value used when the key is
/// missing or not a string: (remote key, default).
const TEXT_DEFAULTS: [(&str, &str); 4] = [
    ("url", ""),
    ("description", ""),
    ("slug", ""),
    ("link", ""),
];

/// Avatar sizes read from `avatar_urls`, by exact key.
const AVATAR_SIZES: [&str; 3] = ["24", "48", "96"];

/// Normalize a response array, skipping elements that lack `id` or `name`.
/// Output order follows the payload.
pub fn normalize_users(domain: &str, items: &[Value]) -> Vec<UserRecord> {
    let total = items.len();
    let records: Vec<UserRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match normalize_user(domain, item) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::warn!("Skipping user #{} from {}: {}", index, domain, reason);
                None
            }
        })
        .collect();

    if records.len() != total {
        tracing::debug!(
            "{}: kept {} of {} users after normalization",
            domain,
            records.len(),
            total
        );
    }
    records
}

pub fn normalize_user(domain: &str, item: &Value) -> Result<UserRecord, String> {
    let obj = item
        .as_object()
        .ok_or_else(|| format!("expected an object, got {}", json_kind(item)))?;

    let id = obj
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| "missing or non-integer 'id'".to_string())?;
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| "missing or non-string 'name'".to_string())?
        .to_string();

    let [url, description, slug, slug_link] =
        TEXT_DEFAULTS.map(|(key, default)| text_or(obj, key, default));
    let [avatar_24, avatar_48, avatar_96] = AVATAR_SIZES.map(|size| avatar_url(obj, size));

    let avatar_cells = AvatarCells {
        x24: avatar_cell(&avatar_24),
        x48: avatar_cell(&avatar_48),
        x96: avatar_cell(&avatar_96),
    };

    Ok(UserRecord {
        domain: domain.to_string(),
        id,
        name,
        url,
        description,
        slug,
        slug_link,
        avatar_24,
        avatar_48,
        avatar_96,
        avatar_cells,
    })
}

fn text_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn avatar_url(obj: &Map<String, Value>, size: &str) -> String {
    obj.get("avatar_urls")
        .and_then(|avatars| avatars.get(size))
        .and_then(Value::as_str)
        .filter(|url| is_web_url(url))
        .unwrap_or(NO_AVATAR)
        .to_string()
}

/// Final HTML for an avatar column: an image, or the dash placeholder.
pub fn avatar_cell(url: &str) -> String {
    if url == NO_AVATAR {
        NO_AVATAR.to_string()
    } else {
        format!(r#"<img src="{}" alt="Avatar">"#, escape_html(url))
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
