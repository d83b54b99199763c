//! Macro Tracker MCP Server Implementation
//!
//! Exposes the session tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::session::Session;
use crate::tools::status::{StatusTracker, TRACKER_INSTRUCTIONS};
use crate::tools::{food_log, macros, profile};

/// Macro Tracker MCP Service
#[derive(Clone)]
pub struct MacroTrackerService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    session: Session,
    tool_router: ToolRouter<MacroTrackerService>,
}

impl MacroTrackerService {
    pub fn new(session: Session, catalog_source: String) -> Self {
        let catalog_size = session.catalog().len();
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(catalog_source, catalog_size))),
            session,
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON text content
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetProfileParams {
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Activity multiplier (1.2, 1.375, 1.55, 1.725) or label (Sedentary,
    /// Lightly Active, Moderately Active, Very Active). Keeps the current
    /// level when omitted.
    pub activity: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFoodParams {
    /// Exact catalog name, e.g. "Egg (1 large)"
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveFoodParams {
    /// Zero-based index from get_food_log
    pub index: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetMacroSplitParams {
    /// Protein share of calories in percent
    pub protein: f64,
    /// Carbohydrate share of calories in percent
    pub carbs: f64,
    /// Fat share of calories in percent
    pub fat: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MacroTrackerService {
    // --- Status ---

    #[tool(description = "Get the current status of the Macro Tracker service including build info, catalog and process information")]
    async fn tracker_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        json_result(&status)
    }

    #[tool(description = "Get instructions for calculating a calorie threshold, logging foods and setting macro targets. Call this when starting a session.")]
    fn tracker_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(TRACKER_INSTRUCTIONS)]))
    }

    // --- Profile ---

    #[tool(description = "Set weight (kg), height (cm), age (years) and activity level. Omitted metrics are cleared; omitted activity is kept.")]
    fn set_profile(&self, Parameters(p): Parameters<SetProfileParams>) -> Result<CallToolResult, McpError> {
        let result = profile::set_profile(&self.session, p.weight, p.height, p.age, p.activity.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List the accepted activity levels and their multipliers")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        json_result(&profile::activity_options())
    }

    #[tool(description = "Estimate daily calories from the profile and store it as the calorie threshold. Keeps the previous threshold if the profile is incomplete.")]
    fn calculate_threshold(&self) -> Result<CallToolResult, McpError> {
        let result = profile::calculate_threshold(&self.session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Food Log ---

    #[tool(description = "List catalog foods with per-serving protein, carbs, fat and calories")]
    fn list_foods(&self) -> Result<CallToolResult, McpError> {
        json_result(&food_log::list_foods(&self.session))
    }

    #[tool(description = "Log one serving of a catalog food")]
    fn add_food(&self, Parameters(p): Parameters<AddFoodParams>) -> Result<CallToolResult, McpError> {
        let result = food_log::add_food(&self.session, &p.name).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove the food log entry at the given index")]
    fn remove_food(&self, Parameters(p): Parameters<RemoveFoodParams>) -> Result<CallToolResult, McpError> {
        let result = food_log::remove_food(&self.session, p.index).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get logged foods in order with their indices and calories")]
    fn get_food_log(&self) -> Result<CallToolResult, McpError> {
        let result = food_log::get_food_log(&self.session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove every entry from the food log")]
    fn clear_food_log(&self) -> Result<CallToolResult, McpError> {
        let result = food_log::clear_food_log(&self.session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get protein, carbs, fat and calorie totals for the food log, with Over/Under against the threshold")]
    fn get_totals(&self) -> Result<CallToolResult, McpError> {
        let result = food_log::get_totals(&self.session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Macros ---

    #[tool(description = "Set the macro split in percent. Protein, carbs and fat must total exactly 100 for targets to be available.")]
    fn set_macro_split(&self, Parameters(p): Parameters<SetMacroSplitParams>) -> Result<CallToolResult, McpError> {
        let result = macros::set_macro_split(&self.session, p.protein, p.carbs, p.fat)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get daily gram targets for protein, carbs and fat from the threshold and macro split")]
    fn get_targets(&self) -> Result<CallToolResult, McpError> {
        let result = macros::get_targets(&self.session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the whole session: profile, threshold, food log, totals, split and targets")]
    fn get_summary(&self) -> Result<CallToolResult, McpError> {
        let result = macros::get_summary(&self.session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacroTrackerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macro-tracker".into(),
                version: crate::tools::status::VERSION.into(),
                title: Some("Macro Tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macro Tracker - calorie threshold, food log and macro targets for one in-memory session. \
                 Call tracker_instructions first. \
                 Profile: set_profile, list_activity_levels, calculate_threshold. \
                 Food: list_foods, add_food, remove_food, get_food_log, clear_food_log, get_totals. \
                 Macros: set_macro_split, get_targets. \
                 Overview: get_summary, tracker_status."
                    .into(),
            ),
        }
    }
}
