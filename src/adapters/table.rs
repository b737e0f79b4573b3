use crate::core::UserRecord;
use crate::utils::error::{Result, WurError};

pub const TABLE_DELIMITER: u8 = b';';

pub const TABLE_COLUMNS: [&str; 10] = [
    "domain",
    "id",
    "name",
    "url",
    "description",
    "slug",
    "slug_link",
    "avatar_urls_24",
    "avatar_urls_48",
    "avatar_urls_96",
];

/// Serialize records as a semicolon-delimited table. The header row is always
/// present so an empty domain still yields a readable file.
pub fn render_table(records: &[UserRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(TABLE_DELIMITER)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(TABLE_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| WurError::IoError(e.into_error()))
}
