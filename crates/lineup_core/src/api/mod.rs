pub mod json_api;

pub use json_api::{
    execute_command, execute_command_json, execute_command_json_with, EditorCommand,
    EditorResponse,
};
