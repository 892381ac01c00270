pub mod ndjson;
pub mod reporter;
pub mod txt;
