pub const CONFIG_READ_ERROR: &str = "Failed to read config file";
pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML config";

pub fn config_missing(path: &str) -> String {
    format!("No config file at {path}, using defaults")
}

pub fn starting(endpoint: &str) -> String {
    format!("Starting weather client against {endpoint}")
}

pub fn connecting(endpoint: &str, transport: impl std::fmt::Debug) -> String {
    format!("Connecting to MCP server at {endpoint} ({transport:?})...")
}

pub fn connect_fail(endpoint: &str) -> String {
    format!("Failed to connect to MCP server at {endpoint}")
}

pub fn connected(name: &str, version: &str) -> String {
    format!("Connected to {name} v{version}")
}

pub const CONNECTED_NO_INFO: &str = "Connected (server sent no info)";
pub const LIST_TOOLS_FAIL: &str = "Failed to list tools";

pub fn tools_listed(count: usize) -> String {
    format!("Server advertises {count} tools")
}

pub fn invoking(tool: &str) -> String {
    format!("Calling tool {tool}")
}

pub fn invoke_fail(tool: &str) -> String {
    format!("Tool call {tool} failed")
}

pub fn tool_reported_error(tool: &str, detail: &str) -> String {
    format!("Tool {tool} reported an error: {detail}")
}

pub fn unexpected_result(tool: &str) -> String {
    format!("Unexpected result from {tool}")
}

pub const SESSION_CLOSED: &str = "Session closed";
pub const CLOSE_FAIL: &str = "Failed to close MCP session";

pub fn close_fail_after_error(err: &str) -> String {
    format!("Failed to close MCP session after an earlier error: {err}")
}

pub const SESSION_ALREADY_CLOSED: &str = "MCP session is already closed";
pub const LOG_FILE_CLEAR_FAIL: &str = "Failed to clear previous log file";
pub const FINISHED: &str = "Done.";
