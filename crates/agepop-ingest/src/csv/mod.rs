//! CSV reading utilities.

mod encoding;
mod reader;
mod table;

pub use encoding::{TableEncoding, decode_bytes, detect_encoding};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_table, read_table,
    read_table_from_reader, read_table_from_reader_with_limit,
};
pub use table::Table;
