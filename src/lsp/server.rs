//! Main Language Server Protocol server implementation for mdfence
//!
//! Publishes unrecognized-language diagnostics, offers quick fixes and a formatting action,
//! completes language tags after an opening fence and runs the editor commands through the
//! client.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result as JsonRpcResult;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::analysis::{compute_diagnostics, provide_actions, provide_completions};
use crate::config::{Config, LanguageConfig};
use crate::editing::{
    self, CommandError, CommandOutcome, EXECUTABLE_COMMANDS, FORMAT_CODE_COMMAND, INSERT_LANGUAGE_COMMAND,
};
use crate::editing::format_code;
use crate::editor::{Editor, Selection};
use crate::lsp::editor::LspEditor;
use crate::lsp::types::{
    CommandArguments, MdfenceLspConfig, all_languages_setting, completion_to_lsp, diagnostic_to_lsp,
    quick_fix_to_lsp, to_byte_range, to_offset, toggle_formatting_action,
};
use crate::utils::line_index::LineIndex;

/// An open document
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub language_id: String,
}

/// Main LSP server for mdfence
pub struct MdfenceLanguageServer {
    client: Client,
    /// Options sent by the client
    config: Arc<RwLock<MdfenceLspConfig>>,
    /// Configuration file contents
    mdfence_config: Arc<RwLock<Config>>,
    /// Document store for open files
    documents: Arc<RwLock<HashMap<Url, Document>>>,
}

impl MdfenceLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            config: Arc::new(RwLock::new(MdfenceLspConfig::default())),
            mdfence_config: Arc::new(RwLock::new(Config::default())),
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Client options take precedence over the config file
    async fn language_config(&self) -> LanguageConfig {
        let file_config = self.mdfence_config.read().await.languages;
        match self.config.read().await.all_available_languages {
            Some(all_available_languages) => LanguageConfig {
                all_available_languages,
            },
            None => file_config,
        }
    }

    async fn document(&self, uri: &Url) -> Option<Document> {
        self.documents.read().await.get(uri).cloned()
    }

    async fn lsp_diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        if !self.config.read().await.enable_diagnostics {
            return Vec::new();
        }
        let index = LineIndex::new(text);
        compute_diagnostics(text)
            .iter()
            .map(|diagnostic| diagnostic_to_lsp(diagnostic, &index))
            .collect()
    }

    /// Replace the published diagnostic set of a document
    async fn update_diagnostics(&self, uri: Url, text: &str) {
        let diagnostics = self.lsp_diagnostics(text).await;
        self.client.publish_diagnostics(uri, diagnostics, None).await;
    }

    async fn load_config_file(&self, root: Option<&Path>) {
        let config_path = self.config.read().await.config_path.clone();
        let result = match (&config_path, root) {
            (Some(path), _) => Config::load_from_path(Path::new(path)).map(Some),
            (None, Some(root)) => Config::discover(root).map(|path| Config::load_from_path(&path)).transpose(),
            (None, None) => Ok(None),
        };

        match result {
            Ok(Some(config)) => *self.mdfence_config.write().await = config,
            Ok(None) => log::debug!("No mdfence config file found, using defaults"),
            Err(e) => {
                log::warn!("Failed to load mdfence config: {e}");
                self.client
                    .log_message(MessageType::WARNING, format!("Failed to load mdfence config: {e}"))
                    .await;
            }
        }
    }

    async fn run_command(&self, command: &str, arguments: CommandArguments) -> Result<CommandOutcome, CommandError> {
        let language_config = self.language_config().await;
        let Some(document) = self.document(&arguments.uri).await else {
            return Err(CommandError::NoActiveEditor);
        };

        let index = LineIndex::new(&document.text);
        let range = arguments.range.map(|range| to_byte_range(&index, &range));
        let mut selections: Vec<Selection> = arguments
            .selections
            .iter()
            .map(|range| Selection::new(to_byte_range(&index, range)))
            .collect();
        // The server never sees the cursor, so formatting needs an explicit target
        if command == FORMAT_CODE_COMMAND && selections.is_empty() {
            selections.extend(range.clone().map(Selection::new));
        }

        let mut editor = LspEditor::new(
            self.client.clone(),
            arguments.uri,
            document.text,
            document.language_id,
            selections,
        );

        if command == INSERT_LANGUAGE_COMMAND {
            editing::insert_language_identifier(Some(&mut editor), range, &language_config).await
        } else if editor.selections().is_empty() {
            log::debug!("formatCode sent without a range or selections");
            editor.warn(format_code::NO_SELECTION_WARNING).await;
            Err(CommandError::NoSelection)
        } else {
            editing::format_code(Some(&mut editor), &language_config).await
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for MdfenceLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> JsonRpcResult<InitializeResult> {
        log::info!("Initializing mdfence Language Server");

        if let Some(options) = params.initialization_options {
            match serde_json::from_value::<MdfenceLspConfig>(options) {
                Ok(config) => *self.config.write().await = config,
                Err(e) => log::warn!("Ignoring invalid initialization options: {e}"),
            }
        }

        let root = params.root_uri.as_ref().and_then(|uri| uri.to_file_path().ok());
        self.load_config_file(root.as_deref()).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec!["`".to_string()]),
                    ..Default::default()
                }),
                code_action_provider: Some(CodeActionProviderCapability::Options(CodeActionOptions {
                    code_action_kinds: Some(vec![CodeActionKind::QUICKFIX, CodeActionKind::REFACTOR]),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                    resolve_provider: None,
                })),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: EXECUTABLE_COMMANDS.iter().map(|command| command.to_string()).collect(),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                diagnostic_provider: Some(DiagnosticServerCapabilities::Options(DiagnosticOptions {
                    identifier: Some("mdfence".to_string()),
                    inter_file_dependencies: false,
                    workspace_diagnostics: false,
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                })),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "mdfence".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("mdfence Language Server initialized");

        self.client
            .log_message(MessageType::INFO, "mdfence Language Server started")
            .await;
    }

    async fn shutdown(&self) -> JsonRpcResult<()> {
        log::info!("Shutting down mdfence Language Server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;
        self.documents.write().await.insert(
            item.uri.clone(),
            Document {
                text: item.text.clone(),
                language_id: item.language_id,
            },
        );

        self.update_diagnostics(item.uri, &item.text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // FULL sync: the last change carries the whole text
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };

        if let Some(document) = self.documents.write().await.get_mut(&uri) {
            document.text = change.text.clone();
        } else {
            log::debug!("Change for unknown document {uri}");
            return;
        }

        self.update_diagnostics(uri, &change.text).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(document) = self.document(&uri).await {
            self.update_diagnostics(uri, &document.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.write().await.remove(&params.text_document.uri);

        // Clear diagnostics
        self.client
            .publish_diagnostics(params.text_document.uri, Vec::new(), None)
            .await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        if let Some(all_available_languages) = all_languages_setting(&params.settings) {
            log::info!("allAvailableLanguages set to {all_available_languages}");
            self.config.write().await.all_available_languages = Some(all_available_languages);
        }
    }

    async fn completion(&self, params: CompletionParams) -> JsonRpcResult<Option<CompletionResponse>> {
        let position = params.text_document_position;
        let Some(document) = self.document(&position.text_document.uri).await else {
            return Ok(None);
        };

        let language_config = self.language_config().await;
        let index = LineIndex::new(&document.text);
        let cursor = to_offset(&index, position.position);

        Ok(
            provide_completions(&document.text, cursor, &language_config).map(|items| {
                CompletionResponse::Array(items.iter().map(|item| completion_to_lsp(item, &index)).collect())
            }),
        )
    }

    async fn code_action(&self, params: CodeActionParams) -> JsonRpcResult<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        let Some(document) = self.document(&uri).await else {
            return Ok(None);
        };

        let index = LineIndex::new(&document.text);
        let requested = to_byte_range(&index, &params.range);

        let diagnostics: Vec<_> = compute_diagnostics(&document.text)
            .into_iter()
            .filter(|diagnostic| diagnostic.intersects(&requested))
            .collect();

        let mut actions: Vec<CodeActionOrCommand> = provide_actions(&diagnostics)
            .iter()
            .map(|action| CodeActionOrCommand::CodeAction(quick_fix_to_lsp(action, &uri, &index)))
            .collect();

        if !requested.is_empty() {
            actions.push(CodeActionOrCommand::CodeAction(toggle_formatting_action(&uri, params.range)));
        }

        Ok(Some(actions))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> JsonRpcResult<Option<Value>> {
        let command = params.command.as_str();
        if command != FORMAT_CODE_COMMAND && command != INSERT_LANGUAGE_COMMAND {
            log::warn!("Unknown command {command}");
            return Ok(None);
        }

        let Some(arguments) = params
            .arguments
            .into_iter()
            .next()
            .and_then(|value| serde_json::from_value::<CommandArguments>(value).ok())
        else {
            log::warn!("Missing or invalid arguments for {command}");
            return Ok(None);
        };

        match self.run_command(command, arguments).await {
            Ok(outcome) => log::debug!("{command} finished: {outcome:?}"),
            // The command already warned the user
            Err(e @ (CommandError::EditRejected(_) | CommandError::NoSelection)) => log::debug!("{command} failed: {e}"),
            Err(e) => {
                self.client.show_message(MessageType::WARNING, e.to_string()).await;
            }
        }
        Ok(None)
    }

    async fn diagnostic(&self, params: DocumentDiagnosticParams) -> JsonRpcResult<DocumentDiagnosticReportResult> {
        let items = match self.document(&params.text_document.uri).await {
            Some(document) => self.lsp_diagnostics(&document.text).await,
            None => Vec::new(),
        };

        Ok(DocumentDiagnosticReportResult::Report(DocumentDiagnosticReport::Full(
            RelatedFullDocumentDiagnosticReport {
                related_documents: None,
                full_document_diagnostic_report: FullDocumentDiagnosticReport { result_id: None, items },
            },
        )))
    }
}
