//! Shared helpers for the Diesel repository implementations.

use diesel_async::{AsyncPgConnection, RunQueryDsl};

/// Move a table's identity sequence past its highest stored id.
///
/// Inserting an explicit id into a `GENERATED BY DEFAULT AS IDENTITY` column
/// does not advance the sequence, so the next store-assigned id would collide
/// with the row just written.
pub(crate) async fn resync_identity(
    conn: &mut AsyncPgConnection,
    table: &'static str,
) -> Result<(), diesel::result::Error> {
    let statement = format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
         (SELECT COALESCE(MAX(id), 1) FROM {table}))"
    );
    diesel::sql_query(statement).execute(conn).await?;
    Ok(())
}
