pub mod release;
pub mod time;
