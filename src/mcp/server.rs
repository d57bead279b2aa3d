/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads newline-delimited JSON-RPC requests
/// 2. Routes tool calls to the habit store
/// 3. Writes any store notifications followed by the response

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools;
use crate::{HabitTrackerServer, ServerError};

/// MCP server that handles communication with the client
pub struct McpServer {
    /// The underlying habit tracker server
    habit_tracker: HabitTrackerServer,
    /// Whether the client has confirmed initialization
    initialized: bool,
}

impl McpServer {
    pub fn new(habit_tracker: HabitTrackerServer) -> Self {
        Self {
            habit_tracker,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve requests from `reader` until it is exhausted
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (input closed)");
                    break;
                }
                Ok(_) => {
                    for message in self.process_line(&line) {
                        let encoded = serde_json::to_string(&message)?;

                        writer.write_all(encoded.as_bytes()).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;

                        debug!("Sent message: {}", encoded);
                    }
                }
                Err(e) => {
                    error!("Failed to read request: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Whether the client has sent its `initialized` notification
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn habit_tracker(&self) -> &HabitTrackerServer {
        &self.habit_tracker
    }

    /// Process one line of input, returning every message to send back
    ///
    /// Notifications raised while handling the request come first, the
    /// response last. Client notifications produce no response.
    pub fn process_line(&mut self, line: &str) -> Vec<Value> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                let response = JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                );
                return vec![encode(&response)];
            }
        };

        let response = self.handle_request(request);

        let mut outgoing: Vec<Value> = self
            .habit_tracker
            .drain_notifications()
            .iter()
            .map(|n| encode(&JsonRpcNotification::log_message(n)))
            .collect();
        if let Some(response) = response {
            outgoing.push(encode(&response));
        }
        outgoing
    }

    fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            if matches!(request.method.as_str(), "initialized" | "notifications/initialized") {
                self.initialized = true;
            } else {
                debug!("Ignoring client notification: {}", request.method);
            }
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(id, Value::Null)
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        };

        Some(response)
    }

    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
                logging: Some(json!({})),
            },
            server_info: ServerInfo {
                name: "Habit Tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::success(id, encode(&result))
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let tools = vec![
            tool::<tools::CreateHabitParams>("habit_create", "Create a new habit to track"),
            tool::<tools::UpdateHabitParams>(
                "habit_update",
                "Change a habit's name, description, category, frequency or color",
            ),
            tool::<tools::DeleteHabitParams>("habit_delete", "Permanently delete a habit"),
            tool::<tools::ToggleHabitParams>(
                "habit_toggle",
                "Mark a habit done, or undo it; completing adds one to the streak",
            ),
            tool::<tools::ListHabitsParams>("habit_list", "List habits, pending first"),
            tool::<tools::StatsParams>(
                "habit_stats",
                "Completion rate, highest streak, weekly average and category breakdown",
            ),
            tool::<tools::session::LoginParams>("session_login", "Sign in with an email and name"),
            tool::<NoParams>("session_logout", "Sign out"),
            tool::<NoParams>("session_status", "Show who is signed in"),
        ];

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    fn handle_tools_call(&mut self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params.map(serde_json::from_value) {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid parameters: {}", e),
                    None,
                );
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        debug!("Calling tool {}", tool_params.name);
        let result = self.call_tool(&tool_params.name, tool_params.arguments);

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string(), None),
        }
    }

    fn call_tool(&mut self, name: &str, args: Map<String, Value>) -> ToolCallResult {
        let tracker = &mut self.habit_tracker;

        match name {
            "habit_create" => with_args(args, |p: tools::CreateHabitParams| {
                tools::create_habit(tracker.store_mut(), p).map(|r| {
                    format!("{}\nHabit ID: {}", r.message, r.habit.id)
                })
            }),
            "habit_update" => with_args(args, |p: tools::UpdateHabitParams| {
                tools::update_habit(tracker.store_mut(), p).map(|r| r.message)
            }),
            "habit_delete" => with_args(args, |p: tools::DeleteHabitParams| {
                tools::delete_habit(tracker.store_mut(), p).map(|r| r.message)
            }),
            "habit_toggle" => with_args(args, |p: tools::ToggleHabitParams| {
                tools::toggle_habit(tracker.store_mut(), p).map(|r| r.message)
            }),
            "habit_list" => with_args(args, |p: tools::ListHabitsParams| {
                tools::list_habits(tracker.store(), p).map(|r| r.message)
            }),
            "habit_stats" => with_args(args, |p: tools::StatsParams| {
                tools::get_habit_stats(tracker.store(), p).map(|r| r.message)
            }),
            "session_login" => match serde_json::from_value::<tools::session::LoginParams>(Value::Object(args)) {
                Ok(p) => match tools::session::login(tracker.session_mut(), p) {
                    Ok(r) => ToolCallResult::success(r.message),
                    Err(e) => ToolCallResult::error(e.to_string()),
                },
                Err(e) => ToolCallResult::error(format!("Invalid arguments: {}", e)),
            },
            "session_logout" => ToolCallResult::success(tools::session::logout(tracker.session_mut()).message),
            "session_status" => ToolCallResult::success(tools::session::status(tracker.session()).message),
            _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
        }
    }
}

/// Arguments for tools that take none
#[allow(dead_code)]
#[derive(Debug, serde::Deserialize, JsonSchema)]
struct NoParams {}

/// Parse tool arguments and run `f`, rendering either outcome as a tool result
fn with_args<P, F>(args: Map<String, Value>, f: F) -> ToolCallResult
where
    P: DeserializeOwned,
    F: FnOnce(P) -> Result<String, crate::store::HabitError>,
{
    let params = match serde_json::from_value(Value::Object(args)) {
        Ok(p) => p,
        Err(e) => return ToolCallResult::error(format!("Invalid arguments: {}", e)),
    };

    match f(params) {
        Ok(message) => ToolCallResult::success(message),
        Err(e) => ToolCallResult::from_habit_error(&e),
    }
}

fn tool<P: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    let schema = schemars::schema_for!(P);

    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" })),
    }
}

fn encode<T: Serialize>(message: &T) -> Value {
    serde_json::to_value(message).unwrap_or_else(|e| {
        error!("Failed to encode message: {}", e);
        Value::Null
    })
}
