//! Line-delimited JSON-RPC tool server.
//!
//! Lets an automated caller generate a site without the CLI. One JSON object
//! per input line, one response object per output line:
//!
//! | Method | Result |
//! |--------|--------|
//! | `initialize` | protocol version, capabilities, server info |
//! | `tools/list` | the single `generate_website` tool and its input schema |
//! | `tools/call` | validate, build, write; text content describing the outcome |
//! | `notifications/*` | nothing is written back |
//!
//! Tool-level failures (invalid record, failed build) are successful
//! responses with `isError: true`. Protocol failures use JSON-RPC error
//! objects:
//!
//! | Code | When |
//! |------|------|
//! | `-32700` | the line is not JSON (`id` is `null`) |
//! | `-32600` | JSON, but not a request object |
//! | `-32601` | unknown method or unknown tool |
//! | `-32602` | `tools/call` params missing a tool name |
//! | `-32603` | a response could not be produced |
//!
//! stdout carries only protocol traffic; diagnostics go through `tracing`.

use crate::artifacts::build;
use crate::assets::AssetSource;
use crate::record::BusinessRecord;
use crate::validate::{ValidationMode, validate};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SERVER_NAME: &str = "website-generator";
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const TOOL_NAME: &str = "generate_website";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

fn tool_text(text: impl Into<String>, is_error: bool) -> Value {
    let mut result = json!({ "content": [{ "type": "text", "text": text.into() }] });
    if is_error {
        result["isError"] = Value::Bool(true);
    }
    result
}

/// Input schema advertised by `tools/list`.
pub fn tool_schema() -> Value {
    let text = |description: &str| json!({ "type": "string", "description": description });
    json!({
        "type": "object",
        "properties": {
            "business_name": text("Name of the business"),
            "business_type": text("Type of business, e.g. coffee_shop, bakery, barber_shop"),
            "tagline": text("Business tagline or slogan"),
            "short_description": text("Brief description of the business"),
            "contact_whatsapp": text("WhatsApp phone number (digits only)"),
            "instagram_handle": text("Instagram handle (without @ symbol)"),
            "theme_choice": {
                "type": "string",
                "description": "Visual theme for the website",
                "enum": ["classic", "kiroween"]
            },
            "menu_items": {
                "type": "array",
                "description": "Menu items or services with names and prices",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": text("Menu item name"),
                        "price": text("Menu item price")
                    },
                    "required": ["name", "price"]
                }
            }
        },
        "required": [
            "business_name",
            "business_type",
            "tagline",
            "short_description",
            "contact_whatsapp",
            "instagram_handle",
            "theme_choice"
        ]
    })
}

/// Answers tool protocol requests against one asset source and output dir.
pub struct ToolServer {
    assets: Box<dyn AssetSource>,
    out_dir: PathBuf,
    mode: ValidationMode,
}

impl ToolServer {
    pub fn new(assets: Box<dyn AssetSource>, out_dir: impl Into<PathBuf>, mode: ValidationMode) -> Self {
        Self {
            assets,
            out_dir: out_dir.into(),
            mode,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Handle one raw input line. `None` means nothing should be written.
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparsable request line");
                return Some(Response::error(Value::Null, PARSE_ERROR, "Parse error"));
            }
        };
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<Request>(value) {
            Ok(request) => self.handle(request),
            Err(e) => Some(Response::error(id, INVALID_REQUEST, format!("Invalid request: {e}"))),
        }
    }

    /// Handle a parsed request. `None` for notifications.
    pub fn handle(&self, request: Request) -> Option<Response> {
        tracing::debug!(method = %request.method, "request");
        if request.id.is_none() && request.method.starts_with("notifications/") {
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => Response::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            ),
            "tools/list" => Response::success(
                id,
                json!({
                    "tools": [{
                        "name": TOOL_NAME,
                        "description": "Generate a static website from business information. \
                                        Writes index.html, styles.css, menu.json and \
                                        deployment-instructions.txt to the output directory.",
                        "inputSchema": tool_schema()
                    }]
                }),
            ),
            "tools/call" => match serde_json::from_value::<ToolCallParams>(request.params) {
                Ok(params) if params.name == TOOL_NAME => {
                    Response::success(id, self.generate_website(params.arguments))
                }
                Ok(params) => {
                    Response::error(id, METHOD_NOT_FOUND, format!("Unknown tool: {}", params.name))
                }
                Err(e) => Response::error(id, INVALID_PARAMS, format!("Invalid params: {e}")),
            },
            other => Response::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
        };
        Some(response)
    }

    fn generate_website(&self, arguments: Value) -> Value {
        let record = BusinessRecord::from_json_value(arguments).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "tool arguments are not a record object");
            BusinessRecord::default()
        });

        if let Err(e) = validate(&record, self.mode).into_result() {
            return tool_text(e.to_string(), true);
        }

        let written = build(&record, self.assets.as_ref())
            .map_err(|e| e.to_string())
            .and_then(|bundle| bundle.write_to(&self.out_dir).map_err(|e| e.to_string()));

        match written {
            Ok(paths) => {
                let mut text = String::from("Website generated successfully!\n\nGenerated files:");
                for path in paths {
                    text.push_str(&format!("\n- {}", path.display()));
                }
                tool_text(text, false)
            }
            Err(cause) => {
                tracing::error!(error = %cause, "website generation failed");
                tool_text("Failed to generate website", true)
            }
        }
    }

    /// Serve until `reader` is exhausted.
    pub fn serve(&self, reader: impl BufRead, mut writer: impl Write) -> Result<(), ServerError> {
        tracing::info!(out_dir = %self.out_dir.display(), "tool server started");
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let Some(response) = self.handle_line(&line) else {
                continue;
            };
            let out = serde_json::to_string(&response).unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to serialize response");
                format!(
                    r#"{{"jsonrpc":"2.0","id":null,"error":{{"code":{INTERNAL_ERROR},"message":"Internal error"}}}}"#
                )
            });
            writeln!(writer, "{out}")?;
            writer.flush()?;
        }
        tracing::info!("tool server shutting down");
        Ok(())
    }
}
