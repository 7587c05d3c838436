use std::sync::Arc;

use faq_core::{FALLBACK_ANSWER, FaqEntry};
use faq_store::{FaqHandle, Location, load_location};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct FaqServer {
    state: Arc<RwLock<ServerState>>,
    tool_router: ToolRouter<Self>,
}

struct ServerState {
    handle: FaqHandle,
    source: String,
    suggestion_limit: usize,
}

impl FaqServer {
    /// A server whose document is still pending.
    pub fn new(source: impl Into<String>, suggestion_limit: usize) -> Self {
        Self::with_handle(FaqHandle::pending(), source, suggestion_limit)
    }

    pub fn with_handle(
        handle: FaqHandle,
        source: impl Into<String>,
        suggestion_limit: usize,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(ServerState {
                handle,
                source: source.into(),
                suggestion_limit,
            })),
            tool_router: Self::tool_router(),
        }
    }

    /// Fetch the document once and publish the outcome to the handle.
    pub async fn load_from(&self, location: &Location) {
        let result = load_location(location).await;
        let mut state = self.state.write().await;
        match result {
            Ok(store) => state.handle.set_ready(store),
            Err(e) => {
                tracing::error!("failed to load FAQ document from {location}: {e}");
                state.handle.set_failed(e.to_string());
            }
        }
    }

    fn json_result(value: serde_json::Value) -> CallToolResult {
        CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&value).unwrap_or_default(),
        )])
    }
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct AskRequest {
    /// The visitor's question, as typed
    text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SuggestRequest {
    /// Partial question text typed so far
    text: String,
    /// Maximum number of suggestions; defaults to the configured limit
    limit: Option<usize>,
}

#[tool_router]
impl FaqServer {
    #[tool(
        description = "Answer a visitor question from the site FAQ. Returns the answer of the first stored question that contains the text (case-insensitive), or a fixed fallback message when nothing matches."
    )]
    async fn faq_ask(
        &self,
        Parameters(req): Parameters<AskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let state = self.state.read().await;
        let entry = state.handle.find_entry(&req.text);
        let answer = entry.map_or(FALLBACK_ANSWER, FaqEntry::answer);
        let matched = entry.is_some();

        Ok(Self::json_result(serde_json::json!({
            "answer": answer,
            "matched": matched,
        })))
    }

    #[tool(
        description = "Autocomplete: list stored FAQ questions containing the partial text, in FAQ order. Empty text returns no suggestions."
    )]
    async fn faq_suggest(
        &self,
        Parameters(req): Parameters<SuggestRequest>,
    ) -> Result<CallToolResult, McpError> {
        let state = self.state.read().await;
        let limit = req.limit.unwrap_or(state.suggestion_limit);
        let suggestions = state.handle.suggest(&req.text, limit);

        Ok(Self::json_result(serde_json::json!({
            "suggestions": suggestions,
        })))
    }

    #[tool(description = "FAQ document status: load state, source, entry and duplicate counts.")]
    async fn faq_stats(&self) -> Result<CallToolResult, McpError> {
        let state = self.state.read().await;
        let duplicates = state
            .handle
            .store()
            .map_or(0, |store| store.duplicate_questions());

        Ok(Self::json_result(serde_json::json!({
            "status": state.handle.status(),
            "source": state.source,
            "entries": state.handle.len(),
            "duplicates": duplicates,
            "failure": state.handle.failure(),
        })))
    }
}

#[tool_handler]
impl ServerHandler for FaqServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Site FAQ lookup.\n\n\
                 - faq_ask: answer a visitor question. Matching is plain case-insensitive substring \
                   search over stored questions; the first match in FAQ order wins. If nothing \
                   matches, the fixed fallback message is returned with matched=false.\n\
                 - faq_suggest: offer stored questions while the visitor is typing.\n\
                 - faq_stats: check whether the FAQ document has loaded."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
