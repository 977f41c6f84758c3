use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "whosin.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| msg_error_anyhow!(e))?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
