//! The dispatcher: authorization gate, dedup guard, transition execution.
//!
//! Processing for one sender is serialized end to end: the per-sender lock is
//! taken before the dedup check and held until the session has been updated
//! and its timer rescheduled. Events for different senders run concurrently.

use crate::menu;
use crate::messages;
use crate::normalize::normalize_input;
use crate::roster::Roster;
use crate::route::{route, Action};
use condo_core::{
    ArtifactHandle, AuthorizedUser, DocumentCategory, DocumentError, DocumentRequest,
    InboundEvent, Result, Transport,
};
use condo_docs::{DocumentStore, ResolvedArtifact};
use condo_session::{ConvState, SessionStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub struct ConversationRouter {
    roster: Arc<Roster>,
    sessions: Arc<dyn SessionStore>,
    documents: Arc<dyn DocumentStore>,
    transport: Arc<dyn Transport>,
    /// Optional picture sent ahead of the greeting.
    greeting_image: Option<ArtifactHandle>,
    /// Pause after the typing indicator and between batch items.
    typing_delay: Duration,
}

impl ConversationRouter {
    pub fn new(
        roster: Arc<Roster>,
        sessions: Arc<dyn SessionStore>,
        documents: Arc<dyn DocumentStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            roster,
            sessions,
            documents,
            transport,
            greeting_image: None,
            typing_delay: Duration::from_millis(500),
        }
    }

    pub fn with_greeting_image(mut self, image: ArtifactHandle) -> Self {
        self.greeting_image = Some(image);
        self
    }

    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    /// Processes one inbound event end to end.
    #[instrument(skip(self, event), fields(sender_id = %event.sender_id))]
    pub async fn handle_event(&self, event: &InboundEvent) -> Result<()> {
        let Some(user) = self.roster.authorize(&event.sender_id) else {
            warn!(sender_id = %event.sender_id, "Unauthorized sender");
            self.say(&event.sender_id, &messages::unauthorized(&event.sender_id))
                .await;
            return Ok(());
        };
        let user = user.clone();
        let sender = event.sender_id.as_str();

        let lock = self.sessions.serial_lock(sender).await;
        let _guard = lock.lock().await;

        if !self.sessions.accept(sender, &event.message_id).await {
            return Ok(());
        }

        info!(
            sender_id = %sender,
            user = %user.name,
            unit = %user.unit,
            body = %event.body,
            "Received message"
        );

        let input = normalize_input(&event.body);
        let state = self.sessions.get(sender).await;
        let action = route(state, &input);
        debug!(state = ?state, input = %input, action = ?action, "Routed");

        self.execute(sender, &user, &event.body, action).await;

        // Exit and expiry clear the entry; a cleared session must not get a
        // fresh timer here.
        if self.sessions.get(sender).await.is_some() {
            self.sessions.touch(sender).await;
        }

        Ok(())
    }

    async fn execute(&self, sender: &str, user: &AuthorizedUser, raw_body: &str, action: Action) {
        match action {
            Action::Exit => {
                self.sessions.clear(sender).await;
                self.say(sender, messages::FAREWELL).await;
                info!(sender_id = %sender, "Conversation ended by user");
            }
            Action::Greet => self.send_main_menu(sender, user, true).await,
            Action::BackToMainMenu => self.send_main_menu(sender, user, false).await,
            Action::PromptGreeting => self.say(sender, messages::PROMPT_GREETING).await,
            Action::RunCategory(category) => self.run_category(sender, user, category).await,
            Action::SendPeriod(month) => self.send_period(sender, user, month).await,
            Action::ShowPeriodMenu => self.show_period_menu(sender).await,
            Action::InvalidMainOption => {
                self.say(sender, &messages::invalid_main_option(raw_body))
                    .await
            }
            Action::InvalidCategoryOption => {
                self.say(sender, messages::INVALID_CATEGORY_OPTION).await
            }
            Action::InvalidPeriodOption => {
                self.say(sender, messages::INVALID_PERIOD_OPTION).await
            }
            Action::InvalidPeriodNavOption => {
                self.say(sender, messages::INVALID_PERIOD_NAV_OPTION).await
            }
        }
    }

    async fn send_main_menu(&self, sender: &str, user: &AuthorizedUser, initial: bool) {
        self.sessions.set(sender, ConvState::MainMenu).await;
        if initial {
            if let Some(image) = &self.greeting_image {
                if let Err(e) = self.transport.send_document(sender, image).await {
                    error!(error = %e, sender_id = %sender, "Failed to send greeting image");
                    self.say(sender, messages::GREETING_IMAGE_ERROR).await;
                } else {
                    info!(sender_id = %sender, file = %image.filename, "File sent");
                }
            }
            self.say(sender, &messages::greeting(&user.name)).await;
        } else {
            self.say(sender, &messages::menu_text()).await;
        }
    }

    async fn show_period_menu(&self, sender: &str) {
        self.say(sender, &messages::month_menu()).await;
        self.sessions.set(sender, ConvState::PeriodSelection).await;
    }

    async fn run_category(&self, sender: &str, user: &AuthorizedUser, category: DocumentCategory) {
        self.typing(sender).await;

        if category == DocumentCategory::MonthlyReport {
            self.show_period_menu(sender).await;
            return;
        }

        let label = menu::label_for(category);
        let next = menu::next_state(category);
        let request = DocumentRequest {
            category,
            unit: user.unit.clone(),
            period: None,
        };

        match self.documents.resolve(&request).await {
            Ok(resolved) if resolved.is_empty() => {
                self.say(sender, &messages::none_available(label, &user.unit))
                    .await;
                self.say(sender, messages::OPTIONS_BACK_MAIN).await;
                self.sessions.set(sender, next).await;
            }
            Ok(resolved) => {
                if resolved.len() > 1 {
                    self.say(
                        sender,
                        &messages::batch_preamble(resolved.len(), label, &user.unit),
                    )
                    .await;
                }
                self.deliver_batch(sender, resolved).await;
                self.say(sender, messages::OPTIONS_BACK_MAIN).await;
                self.sessions.set(sender, next).await;
            }
            Err(DocumentError::UnknownUnit { .. }) => {
                self.say(sender, &messages::unknown_unit(label, &user.unit))
                    .await;
                self.say(sender, messages::OPTIONS_BACK_MAIN).await;
                self.sessions.set(sender, next).await;
            }
            Err(e @ DocumentError::Catalog(_)) => {
                error!(error = %e, sender_id = %sender, category = ?category, "Catalog error");
                self.say(sender, messages::TRY_AGAIN_LATER).await;
                self.sessions.set(sender, ConvState::MainMenu).await;
            }
        }
    }

    async fn send_period(&self, sender: &str, user: &AuthorizedUser, month: u32) {
        self.typing(sender).await;

        let request = DocumentRequest {
            category: DocumentCategory::MonthlyReport,
            unit: user.unit.clone(),
            period: Some(month),
        };

        match self.documents.resolve(&request).await {
            Ok(resolved) => {
                self.deliver_batch(sender, resolved).await;
                self.say(sender, messages::OPTIONS_BACK_MONTHS).await;
                self.sessions
                    .set(sender, ConvState::PeriodResultNavigation)
                    .await;
            }
            Err(e) => {
                error!(error = %e, sender_id = %sender, month, "Monthly report resolution failed");
                self.say(sender, messages::TRY_AGAIN_LATER).await;
                self.sessions.set(sender, ConvState::MainMenu).await;
            }
        }
    }

    /// Sends each resolved artifact; a failure on one item is reported to the
    /// user and the rest of the batch continues.
    async fn deliver_batch(&self, sender: &str, resolved: Vec<ResolvedArtifact>) {
        let mut first = true;
        for item in resolved {
            if !first {
                tokio::time::sleep(self.typing_delay).await;
            }
            first = false;
            match item {
                ResolvedArtifact::Ready(artifact) => {
                    match self.transport.send_document(sender, &artifact).await {
                        Ok(()) => {
                            info!(sender_id = %sender, file = %artifact.filename, "File sent");
                        }
                        Err(e) => {
                            error!(
                                error = %e,
                                sender_id = %sender,
                                file = %artifact.filename,
                                "Failed to send document"
                            );
                            self.say(sender, &messages::missing_artifact(&artifact.filename))
                                .await;
                        }
                    }
                }
                ResolvedArtifact::Missing { filename } => {
                    warn!(sender_id = %sender, file = %filename, "Document missing");
                    self.say(sender, &messages::missing_artifact(&filename)).await;
                }
            }
        }
    }

    /// Text send with transport failures logged, never propagated. A failed
    /// reply must not wedge or crash the processing turn.
    async fn say(&self, sender: &str, text: &str) {
        if let Err(e) = self.transport.send_text(sender, text).await {
            error!(error = %e, sender_id = %sender, "Failed to send text");
        }
    }

    /// Best-effort typing indicator followed by a short pause.
    async fn typing(&self, sender: &str) {
        if let Err(e) = self.transport.send_typing(sender).await {
            debug!(error = %e, sender_id = %sender, "Typing indicator failed");
        }
        tokio::time::sleep(self.typing_delay).await;
    }
}
