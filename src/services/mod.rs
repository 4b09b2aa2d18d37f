pub mod db;
pub mod dbc {
    pub mod database_client;
}

pub use dbc::database_client::DatabaseClient;
pub use db::DatabaseService;
