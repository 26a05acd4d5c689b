pub mod paths;

pub use paths::{
    DEFAULT_LOG_SUFFIXES, channel_name_from_path, open_log_file, trim_suffixes,
    validate_file_size,
};
