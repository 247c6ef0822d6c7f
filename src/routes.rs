// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/api-endpoint";
pub const OPENAPI: &str = "/api-docs/openapi.json";
