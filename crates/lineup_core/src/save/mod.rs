// Layout export/import
// Pretty JSON envelope, atomic writes, structural check on the way in

pub mod error;
pub mod format;
pub mod manager;

pub use error::SaveError;
pub use format::{
    current_timestamp, export_file_name, export_json, parse_import, ExportEnvelope, ImportedLayout,
};
pub use manager::LayoutFiles;
