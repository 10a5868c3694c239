use sprout_core::ProjectContext;

use crate::Template;

pub const DEFAULT_PORT: u16 = 8080;

/// The `.env` file read by godotenv at startup
pub struct EnvFile {
    pub port: u16,
}

impl Default for EnvFile {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Template for EnvFile {
    fn path(&self) -> &'static str {
        ".env"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        format!("PORT={}\n", self.port)
    }
}
