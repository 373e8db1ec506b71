pub mod config;
pub mod distance;
pub mod doctor;
pub mod score;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}
