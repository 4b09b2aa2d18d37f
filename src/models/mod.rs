pub mod istates;
pub mod idirectory;
pub mod imovement;
pub mod inotification;
pub mod ievents;
pub mod istats;
pub mod icommands;

pub use istates::*;
pub use idirectory::*;
pub use imovement::*;
pub use inotification::*;
pub use ievents::*;
pub use istats::*;
pub use icommands::*;

use chrono::{Local, NaiveDateTime};

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
