use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use opsdeck_core::assistant::{AssistantSim, ReplyTarget, SimReply};
use opsdeck_core::catalog;
use opsdeck_core::fixtures;
use opsdeck_core::prefs::Prefs;
use opsdeck_core::types::{
    ChatMessage, Credential, FaqEntry, Integration, Notification, StatCard, Template, Workflow,
    WorkflowStep,
};

use crate::effects::{self, EffectManager};
use crate::theme::Theme;
use crate::widgets::toast::ToastManager;

/// Pages shown in the header, in route order.
pub const TAB_NAMES: &[&str] = &[
    "Dashboard",
    "Integrations",
    "Chat",
    "Use Cases",
    "Pricing",
    "Credentials",
    "Support",
    "Feedback",
];

/// The web console's routes, one per tab. `:go <route>` resolves against
/// these; anything else is the not-found case.
pub const TAB_ROUTES: &[&str] = &[
    "/",
    "/integrations",
    "/chat",
    "/use-cases",
    "/pricing",
    "/credentials",
    "/support",
    "/feedback",
];

pub const DETAIL_SUBTABS: &[&str] = &["Commands", "Logs", "Metadata"];
pub const FEEDBACK_TABS: &[&str] = &["General", "Bug Report", "Feature Request"];
pub const SEVERITIES: &[&str] = &["Low", "Medium", "High"];

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Name,
    Service,
    Kind,
    Value,
}

impl CredentialField {
    fn next(self) -> Self {
        match self {
            CredentialField::Name => CredentialField::Service,
            CredentialField::Service => CredentialField::Kind,
            CredentialField::Kind => CredentialField::Value,
            CredentialField::Value => CredentialField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            CredentialField::Name => CredentialField::Value,
            CredentialField::Service => CredentialField::Name,
            CredentialField::Kind => CredentialField::Service,
            CredentialField::Value => CredentialField::Kind,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialForm {
    pub name: String,
    pub service_idx: usize,
    pub kind_idx: usize,
    pub value: String,
    pub field: CredentialField,
}

impl Default for CredentialForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            service_idx: 0,
            kind_idx: 0,
            value: String::new(),
            field: CredentialField::Name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SupportForm {
    pub fields: [String; 4], // name, email, subject, message
    pub field: usize,
    pub focused: bool,
}

impl SupportForm {
    pub const LABELS: [&'static str; 4] = ["Name", "Email", "Subject", "Message"];

    fn clear(&mut self) {
        self.fields = Default::default();
        self.field = 0;
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub sub_tab: usize,
    pub focused: bool,
    pub field: usize,
    pub rating: u8,
    pub general_text: String,
    pub bug_title: String,
    pub bug_steps: String,
    pub severity: usize,
    pub feature_title: String,
    pub feature_desc: String,
    pub feature_use: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            sub_tab: 0,
            focused: false,
            field: 0,
            rating: 0,
            general_text: String::new(),
            bug_title: String::new(),
            bug_steps: String::new(),
            severity: 1, // medium
            feature_title: String::new(),
            feature_desc: String::new(),
            feature_use: String::new(),
        }
    }
}

impl FeedbackForm {
    fn field_count(&self) -> usize {
        match self.sub_tab {
            0 => 1,
            1 => 2,
            _ => 3,
        }
    }

    fn current_field_mut(&mut self) -> &mut String {
        match (self.sub_tab, self.field) {
            (0, _) => &mut self.general_text,
            (1, 0) => &mut self.bug_title,
            (1, _) => &mut self.bug_steps,
            (2, 0) => &mut self.feature_title,
            (2, 1) => &mut self.feature_desc,
            _ => &mut self.feature_use,
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub current_tab: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub show_notifications: bool,
    pub notif_selected: usize,

    /// Per-tab list cursor, reset on tab switch.
    pub selected_index: usize,

    // Command mode
    pub in_command_mode: bool,
    pub command_buffer: String,
    pub command_result: Option<String>,

    // Preferences
    pub prefs: Prefs,
    pub theme: Theme,
    /// Write preference changes back to disk. Off in tests and headless mode.
    pub persist_prefs: bool,

    // Fixture-backed data
    pub stats: Vec<StatCard>,
    pub workflows: Vec<Workflow>,
    pub steps: Vec<WorkflowStep>,
    pub integrations: Vec<Integration>,
    pub integration_categories: Vec<String>,
    pub templates: Vec<Template>,
    pub template_categories: Vec<String>,
    pub credentials: Vec<Credential>,
    pub notifications: Vec<Notification>,
    pub faqs: Vec<FaqEntry>,
    pub faq_open: Vec<bool>,

    // Chat console
    pub messages: Vec<ChatMessage>,
    pub chat_input: String,
    pub chat_focused: bool,
    pub chat_generation: u64,
    pub quick_prompt_idx: usize,

    // Simulated assistant plumbing
    pub assistant: AssistantSim,
    pub reply_tx: flume::Sender<SimReply>,
    pub reply_rx: flume::Receiver<SimReply>,

    // Catalog filters
    pub integrations_query: String,
    pub integrations_category: usize,
    pub templates_query: String,
    pub templates_category: usize,
    pub search_focused: bool,

    // Workflow detail view
    pub workflow_detail: Option<usize>,
    pub detail_selected: usize,
    pub detail_expanded: Vec<bool>,
    pub detail_subtab: usize,
    pub detail_chat: Vec<ChatMessage>,
    pub detail_input: String,
    pub detail_chat_focused: bool,
    pub detail_generation: u64,

    // Troubleshoot dialog
    pub troubleshoot: Option<usize>,
    pub troubleshoot_choice: usize,
    pub troubleshoot_prompt: String,
    pub troubleshoot_prompt_focused: bool,

    // Other per-tab state
    pub credential_form: Option<CredentialForm>,
    pub support_form: SupportForm,
    pub feedback: FeedbackForm,
    pub plan_index: usize,

    // Chrome
    pub toasts: ToastManager,
    pub effects: EffectManager,
    pub last_frame: Instant,
}

impl App {
    pub fn new() -> Self {
        Self::with_prefs(Prefs::default())
    }

    pub fn with_prefs(prefs: Prefs) -> Self {
        let (reply_tx, reply_rx) = AssistantSim::channel();
        let integrations = fixtures::integration_catalog();
        let integration_categories = catalog::integration_categories(&integrations);
        let templates = fixtures::templates();
        let template_categories = catalog::template_categories(&templates);
        let faqs = fixtures::faqs();
        let faq_open = vec![false; faqs.len()];
        let theme = Theme::from_name(&prefs.appearance.theme);

        Self {
            current_tab: 0,
            should_quit: false,
            show_help: false,
            show_notifications: false,
            notif_selected: 0,
            selected_index: 0,
            in_command_mode: false,
            command_buffer: String::new(),
            command_result: None,
            prefs,
            theme,
            persist_prefs: false,
            stats: fixtures::dashboard_stats(),
            workflows: fixtures::dashboard_workflows(),
            steps: fixtures::pipeline_steps(),
            integrations,
            integration_categories,
            templates,
            template_categories,
            credentials: fixtures::credential_vault(),
            notifications: fixtures::seed_notifications(),
            faqs,
            faq_open,
            messages: fixtures::chat_seed(),
            chat_input: String::new(),
            chat_focused: false,
            chat_generation: 0,
            quick_prompt_idx: 0,
            assistant: AssistantSim::new(),
            reply_tx,
            reply_rx,
            integrations_query: String::new(),
            integrations_category: 0,
            templates_query: String::new(),
            templates_category: 0,
            search_focused: false,
            workflow_detail: None,
            detail_selected: 0,
            detail_expanded: Vec::new(),
            detail_subtab: 0,
            detail_chat: Vec::new(),
            detail_input: String::new(),
            detail_chat_focused: false,
            detail_generation: 0,
            troubleshoot: None,
            troubleshoot_choice: 0,
            troubleshoot_prompt: String::new(),
            troubleshoot_prompt_focused: false,
            credential_form: None,
            support_form: SupportForm::default(),
            feedback: FeedbackForm::default(),
            plan_index: 0,
            toasts: ToastManager::new(),
            effects: EffectManager::new(),
            last_frame: Instant::now(),
        }
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub fn integration_category(&self) -> &str {
        &self.integration_categories[self.integrations_category]
    }

    pub fn template_category(&self) -> &str {
        &self.template_categories[self.templates_category]
    }

    pub fn filtered_integrations(&self) -> Vec<&Integration> {
        catalog::filter_integrations(
            &self.integrations,
            &self.integrations_query,
            self.integration_category(),
        )
    }

    pub fn filtered_templates(&self) -> Vec<&Template> {
        catalog::filter_templates(
            &self.templates,
            &self.templates_query,
            self.template_category(),
        )
    }

    fn current_list_len(&self) -> usize {
        match self.current_tab {
            0 => self.workflows.len(),
            1 => self.filtered_integrations().len(),
            3 => self.filtered_templates().len(),
            5 => self.credentials.len(),
            6 => self.faqs.len(),
            _ => 0,
        }
    }

    // -----------------------------------------------------------------------
    // Assistant plumbing
    // -----------------------------------------------------------------------

    /// Move any delivered simulator replies into their conversations.
    /// Replies for a cleared chat or a closed detail view are dropped.
    pub fn drain_replies(&mut self) {
        while let Ok(reply) = self.reply_rx.try_recv() {
            match reply.target {
                ReplyTarget::Console if reply.generation == self.chat_generation => {
                    self.messages.push(reply.message);
                }
                ReplyTarget::WorkflowDetail
                    if reply.generation == self.detail_generation
                        && self.workflow_detail.is_some() =>
                {
                    self.detail_chat.push(reply.message);
                }
                _ => {
                    tracing::debug!(generation = reply.generation, "dropping stale assistant reply");
                }
            }
        }
    }

    pub fn submit_chat(&mut self) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.messages.push(ChatMessage::user(text));
        self.chat_input.clear();
        self.assistant.submit(self.chat_generation, &self.reply_tx);
    }

    pub fn clear_chat(&mut self) {
        self.chat_generation += 1;
        self.messages.clear();
        self.toasts.info("Chat history cleared");
    }

    fn submit_detail_chat(&mut self) {
        let text = self.detail_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(workflow) = self.workflow_detail.and_then(|i| self.workflows.get(i)) else {
            return;
        };
        let name = workflow.name.clone();
        self.detail_chat.push(ChatMessage::user(text));
        self.detail_input.clear();
        self.assistant
            .submit_for_workflow(self.detail_generation, &name, &self.reply_tx);
    }

    // -----------------------------------------------------------------------
    // Workflow detail view
    // -----------------------------------------------------------------------

    pub fn open_workflow_detail(&mut self, index: usize) {
        let Some(workflow) = self.workflows.get(index) else {
            return;
        };
        self.workflow_detail = Some(index);
        self.detail_selected = 0;
        self.detail_subtab = 0;
        self.detail_expanded = self.steps.iter().map(|s| s.default_expanded()).collect();
        self.detail_chat = vec![ChatMessage::assistant(format!(
            "I'm monitoring your \"{}\" workflow. You can ask me to modify steps, \
             add new tools, or troubleshoot any issues.",
            workflow.name
        ))];
        self.effects.trigger("detail", effects::detail_sweep());
    }

    pub fn close_workflow_detail(&mut self) {
        self.workflow_detail = None;
        // Orphan in-flight replies addressed to the dismantled view.
        self.detail_generation += 1;
        self.detail_chat.clear();
        self.detail_input.clear();
        self.detail_chat_focused = false;
        self.troubleshoot = None;
    }

    pub fn retry_step(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            step.retry();
        }
    }

    // -----------------------------------------------------------------------
    // Catalog mutations
    // -----------------------------------------------------------------------

    pub fn toggle_selected_integration(&mut self) -> Option<bool> {
        let id = self
            .filtered_integrations()
            .get(self.selected_index)?
            .id
            .clone();
        let name = self
            .integrations
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_default();
        let state = catalog::toggle_connection(&mut self.integrations, &id)?;
        if state {
            self.toasts.success(format!("{name} connected"));
        } else {
            self.toasts.info(format!("{name} disconnected"));
        }
        Some(state)
    }

    pub fn delete_selected_credential(&mut self) {
        let Some(cred) = self.credentials.get(self.selected_index) else {
            return;
        };
        let (id, name) = (cred.id.clone(), cred.name.clone());
        if catalog::delete_credential(&mut self.credentials, &id) {
            self.toasts.info(format!("Deleted credential \"{name}\""));
            if self.selected_index >= self.credentials.len() && self.selected_index > 0 {
                self.selected_index -= 1;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Preferences
    // -----------------------------------------------------------------------

    pub fn cycle_theme(&mut self) {
        let name = self.prefs.cycle_theme().to_string();
        self.theme = Theme::from_name(&name);
        self.toasts.info(format!("Theme: {name}"));
        self.store_prefs();
    }

    pub fn cycle_language(&mut self) {
        let lang = self.prefs.cycle_language().to_string();
        self.toasts.info(format!("Language: {lang}"));
        self.store_prefs();
    }

    fn store_prefs(&mut self) {
        if !self.persist_prefs {
            return;
        }
        if let Err(e) = self.prefs.save() {
            tracing::warn!("failed to save preferences: {e}");
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn go_to_tab(&mut self, index: usize) {
        if index >= TAB_NAMES.len() {
            return;
        }
        if index != self.current_tab {
            self.effects.trigger("tab", effects::tab_fade());
        }
        self.current_tab = index;
        self.selected_index = 0;
        self.search_focused = false;
    }

    pub fn next_tab(&mut self) {
        self.go_to_tab((self.current_tab + 1) % TAB_NAMES.len());
    }

    pub fn prev_tab(&mut self) {
        let target = if self.current_tab == 0 {
            TAB_NAMES.len() - 1
        } else {
            self.current_tab - 1
        };
        self.go_to_tab(target);
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // A pending command result is dismissed by the next keypress.
        self.command_result = None;

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }
        if self.show_notifications {
            self.on_notifications_key(key);
            return;
        }
        if self.in_command_mode {
            self.on_command_key(key);
            return;
        }
        if self.credential_form.is_some() {
            self.on_credential_form_key(key);
            return;
        }
        if self.troubleshoot.is_some() {
            self.on_troubleshoot_key(key);
            return;
        }
        if self.handle_focused_input(key) {
            return;
        }
        if self.current_tab == 0 && self.workflow_detail.is_some() && self.on_detail_key(key) {
            return;
        }
        self.on_global_key(key);
    }

    fn on_notifications_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => self.show_notifications = false,
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.notifications.is_empty()
                    && self.notif_selected < self.notifications.len() - 1
                {
                    self.notif_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.notif_selected = self.notif_selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(n) = self.notifications.get(self.notif_selected) {
                    let id = n.id.clone();
                    catalog::mark_notification_read(&mut self.notifications, &id);
                }
            }
            _ => {}
        }
    }

    fn on_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.in_command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let input = format!(":{}", self.command_buffer);
                self.in_command_mode = false;
                self.command_buffer.clear();
                match crate::command::parse_command(&input) {
                    Some(cmd) => {
                        self.command_result = crate::command::execute_command(self, cmd);
                    }
                    None => {
                        self.command_result = Some(format!("unknown command: {input}"));
                    }
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => self.command_buffer.push(c),
            _ => {}
        }
    }

    fn on_credential_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.credential_form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.credential_form = None;
            }
            KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
            KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
            KeyCode::Left | KeyCode::Char('h')
                if matches!(form.field, CredentialField::Service | CredentialField::Kind) =>
            {
                cycle_back(form);
            }
            KeyCode::Right | KeyCode::Char('l')
                if matches!(form.field, CredentialField::Service | CredentialField::Kind) =>
            {
                cycle_forward(form);
            }
            KeyCode::Enter => {
                if form.name.trim().is_empty() {
                    self.toasts.warning("Credential name is required");
                    return;
                }
                let name = form.name.clone();
                tracing::debug!(credential = %name, "discarding add-credential form input");
                self.credential_form = None;
                self.toasts
                    .success(format!("Credential \"{name}\" saved (demo: not stored)"));
            }
            KeyCode::Backspace => {
                match form.field {
                    CredentialField::Name => {
                        form.name.pop();
                    }
                    CredentialField::Value => {
                        form.value.pop();
                    }
                    _ => {}
                };
            }
            KeyCode::Char(c) => match form.field {
                CredentialField::Name => form.name.push(c),
                CredentialField::Value => form.value.push(c),
                _ => {}
            },
            _ => {}
        }
    }

    fn on_troubleshoot_key(&mut self, key: KeyEvent) {
        let Some(step_idx) = self.troubleshoot else {
            return;
        };
        if self.troubleshoot_prompt_focused {
            match key.code {
                KeyCode::Esc => self.troubleshoot_prompt_focused = false,
                KeyCode::Enter => {
                    if !self.troubleshoot_prompt.trim().is_empty() {
                        let Some(name) = self.steps.get(step_idx).map(|s| s.name.clone()) else {
                            self.troubleshoot = None;
                            return;
                        };
                        tracing::debug!(step = %name, "prompt fix text discarded (simulated)");
                        self.retry_step(step_idx);
                        self.toasts.success(format!("Applying fix to {name}"));
                        self.troubleshoot = None;
                        self.troubleshoot_prompt.clear();
                        self.troubleshoot_prompt_focused = false;
                    }
                }
                KeyCode::Backspace => {
                    self.troubleshoot_prompt.pop();
                }
                KeyCode::Char(c) => self.troubleshoot_prompt.push(c),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.troubleshoot = None;
                self.troubleshoot_prompt.clear();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.troubleshoot_choice = (self.troubleshoot_choice + 1).min(2);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.troubleshoot_choice = self.troubleshoot_choice.saturating_sub(1);
            }
            KeyCode::Enter => {
                let Some(name) = self.steps.get(step_idx).map(|s| s.name.clone()) else {
                    self.troubleshoot = None;
                    return;
                };
                match self.troubleshoot_choice {
                    0 => {
                        self.retry_step(step_idx);
                        self.toasts.success(format!("AI retry started for {name}"));
                        self.troubleshoot = None;
                    }
                    1 => {
                        self.toasts.info(format!("Edit requested for {name}"));
                        self.troubleshoot = None;
                    }
                    _ => self.troubleshoot_prompt_focused = true,
                }
            }
            _ => {}
        }
    }

    /// Route keys into whichever text input currently has focus. Returns
    /// `true` when the key was consumed.
    fn handle_focused_input(&mut self, key: KeyEvent) -> bool {
        match self.current_tab {
            0 if self.detail_chat_focused && self.workflow_detail.is_some() => {
                match key.code {
                    KeyCode::Esc => self.detail_chat_focused = false,
                    KeyCode::Enter => self.submit_detail_chat(),
                    KeyCode::Backspace => {
                        self.detail_input.pop();
                    }
                    KeyCode::Char(c) => self.detail_input.push(c),
                    _ => {}
                }
                true
            }
            1 | 3 if self.search_focused => {
                let query = if self.current_tab == 1 {
                    &mut self.integrations_query
                } else {
                    &mut self.templates_query
                };
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => self.search_focused = false,
                    KeyCode::Backspace => {
                        query.pop();
                        self.selected_index = 0;
                    }
                    KeyCode::Char(c) => {
                        query.push(c);
                        self.selected_index = 0;
                    }
                    _ => {}
                }
                true
            }
            2 if self.chat_focused => {
                match key.code {
                    KeyCode::Esc => self.chat_focused = false,
                    KeyCode::Enter => self.submit_chat(),
                    KeyCode::Backspace => {
                        self.chat_input.pop();
                    }
                    KeyCode::Char(c) => self.chat_input.push(c),
                    _ => {}
                }
                true
            }
            6 if self.support_form.focused => {
                self.on_support_form_key(key);
                true
            }
            7 if self.feedback.focused => {
                self.on_feedback_form_key(key);
                true
            }
            _ => false,
        }
    }

    fn on_support_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.support_form.focused = false,
            KeyCode::Tab | KeyCode::Down => {
                self.support_form.field = (self.support_form.field + 1) % 4;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.support_form.field = (self.support_form.field + 3) % 4;
            }
            KeyCode::Enter => {
                if self.support_form.field < 3 {
                    self.support_form.field += 1;
                    return;
                }
                let f = &self.support_form.fields;
                if f[0].trim().is_empty() || f[1].trim().is_empty() || f[3].trim().is_empty() {
                    self.toasts.warning("Name, email and message are required");
                    return;
                }
                tracing::debug!("support request discarded (simulated)");
                self.support_form.clear();
                self.support_form.focused = false;
                self.toasts.success("Message sent to support");
            }
            KeyCode::Backspace => {
                self.support_form.fields[self.support_form.field].pop();
            }
            KeyCode::Char(c) => self.support_form.fields[self.support_form.field].push(c),
            _ => {}
        }
    }

    fn on_feedback_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.feedback.focused = false,
            KeyCode::Tab | KeyCode::Down => {
                self.feedback.field = (self.feedback.field + 1) % self.feedback.field_count();
            }
            KeyCode::BackTab | KeyCode::Up => {
                let n = self.feedback.field_count();
                self.feedback.field = (self.feedback.field + n - 1) % n;
            }
            KeyCode::Enter => {
                if self.feedback.field + 1 < self.feedback.field_count() {
                    self.feedback.field += 1;
                    return;
                }
                self.submit_feedback();
            }
            KeyCode::Backspace => {
                self.feedback.current_field_mut().pop();
            }
            KeyCode::Char(c) => self.feedback.current_field_mut().push(c),
            _ => {}
        }
    }

    fn submit_feedback(&mut self) {
        let ok = match self.feedback.sub_tab {
            0 => self.feedback.rating > 0 || !self.feedback.general_text.trim().is_empty(),
            1 => {
                !self.feedback.bug_title.trim().is_empty()
                    && !self.feedback.bug_steps.trim().is_empty()
            }
            _ => {
                !self.feedback.feature_title.trim().is_empty()
                    && !self.feedback.feature_desc.trim().is_empty()
            }
        };
        if !ok {
            self.toasts.warning("Fill in the form before submitting");
            return;
        }
        let message = match self.feedback.sub_tab {
            0 => "Thanks for your feedback!",
            1 => "Bug report submitted",
            _ => "Feature request submitted",
        };
        tracing::debug!(tab = self.feedback.sub_tab, "feedback discarded (simulated)");
        let sub_tab = self.feedback.sub_tab;
        self.feedback = FeedbackForm {
            sub_tab,
            ..Default::default()
        };
        self.toasts.success(message);
    }

    /// Workflow detail keys. Returns `false` for keys the detail view does
    /// not care about, so tab switching etc. still works with it open.
    fn on_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.close_workflow_detail();
                true
            }
            KeyCode::Char('i') => {
                self.detail_chat_focused = true;
                true
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.steps.is_empty() && self.detail_selected < self.steps.len() - 1 {
                    self.detail_selected += 1;
                }
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.detail_selected = self.detail_selected.saturating_sub(1);
                true
            }
            KeyCode::Enter => {
                if let Some(open) = self.detail_expanded.get_mut(self.detail_selected) {
                    *open = !*open;
                }
                true
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.detail_subtab =
                    (self.detail_subtab + DETAIL_SUBTABS.len() - 1) % DETAIL_SUBTABS.len();
                true
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.detail_subtab = (self.detail_subtab + 1) % DETAIL_SUBTABS.len();
                true
            }
            KeyCode::Char('R') => {
                if let Some(step) = self.steps.get(self.detail_selected) {
                    let name = step.name.clone();
                    self.retry_step(self.detail_selected);
                    self.toasts.info(format!("Rerun requested for {name}"));
                }
                true
            }
            KeyCode::Char('e') => {
                if let Some(step) = self.steps.get(self.detail_selected) {
                    let name = step.name.clone();
                    self.toasts.info(format!("Edit requested for {name}"));
                }
                true
            }
            KeyCode::Char('t') => {
                match self.steps.get(self.detail_selected) {
                    Some(step) if step.status.is_error() => {
                        self.troubleshoot = Some(self.detail_selected);
                        self.troubleshoot_choice = 0;
                    }
                    Some(_) => self.toasts.warning("Selected step has not failed"),
                    None => {}
                }
                true
            }
            _ => false,
        }
    }

    fn on_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('n') => {
                self.show_notifications = true;
                self.notif_selected = 0;
            }
            KeyCode::Char(':') => {
                self.in_command_mode = true;
                self.command_buffer.clear();
            }
            KeyCode::Char('T') => self.cycle_theme(),
            KeyCode::Char('L') => self.cycle_language(),
            KeyCode::Char(c @ '1'..='8') => {
                self.go_to_tab((c as usize) - ('1' as usize));
            }
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.current_list_len();
                if len > 0 && self.selected_index < len - 1 {
                    self.selected_index += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            _ => self.on_tab_key(key),
        }
    }

    fn on_tab_key(&mut self, key: KeyEvent) {
        match self.current_tab {
            // Dashboard overview
            0 => {
                if key.code == KeyCode::Enter {
                    self.open_workflow_detail(self.selected_index);
                }
            }
            // Integrations
            1 => match key.code {
                KeyCode::Char('/') => self.search_focused = true,
                KeyCode::Char('h') | KeyCode::Left => {
                    let n = self.integration_categories.len();
                    self.integrations_category = (self.integrations_category + n - 1) % n;
                    self.selected_index = 0;
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.integrations_category =
                        (self.integrations_category + 1) % self.integration_categories.len();
                    self.selected_index = 0;
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let _ = self.toggle_selected_integration();
                }
                _ => {}
            },
            // Chat
            2 => match key.code {
                KeyCode::Char('i') => self.chat_focused = true,
                KeyCode::Char('C') => self.clear_chat(),
                KeyCode::Char('p') => {
                    let prompts = fixtures::quick_prompts();
                    self.chat_input = prompts[self.quick_prompt_idx % prompts.len()].to_string();
                    self.quick_prompt_idx += 1;
                    self.chat_focused = true;
                }
                _ => {}
            },
            // Use cases
            3 => match key.code {
                KeyCode::Char('/') => self.search_focused = true,
                KeyCode::Char('h') | KeyCode::Left => {
                    let n = self.template_categories.len();
                    self.templates_category = (self.templates_category + n - 1) % n;
                    self.selected_index = 0;
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.templates_category =
                        (self.templates_category + 1) % self.template_categories.len();
                    self.selected_index = 0;
                }
                KeyCode::Char('c') => {
                    // Clear filters, mirroring the empty-state button.
                    self.templates_query.clear();
                    self.templates_category = 0;
                    self.selected_index = 0;
                }
                _ => {}
            },
            // Pricing
            4 => match key.code {
                KeyCode::Char('h') | KeyCode::Left => {
                    self.plan_index = self.plan_index.saturating_sub(1);
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.plan_index = (self.plan_index + 1).min(3);
                }
                _ => {}
            },
            // Credentials
            5 => match key.code {
                KeyCode::Char('a') => self.credential_form = Some(CredentialForm::default()),
                KeyCode::Char('d') => self.delete_selected_credential(),
                _ => {}
            },
            // Support
            6 => match key.code {
                KeyCode::Enter => {
                    if let Some(open) = self.faq_open.get_mut(self.selected_index) {
                        *open = !*open;
                    }
                }
                KeyCode::Char('i') => {
                    self.support_form.focused = true;
                }
                _ => {}
            },
            // Feedback
            7 => match key.code {
                KeyCode::Char('[') => {
                    let n = FEEDBACK_TABS.len();
                    self.feedback.sub_tab = (self.feedback.sub_tab + n - 1) % n;
                    self.feedback.field = 0;
                }
                KeyCode::Char(']') => {
                    self.feedback.sub_tab = (self.feedback.sub_tab + 1) % FEEDBACK_TABS.len();
                    self.feedback.field = 0;
                }
                KeyCode::Char('h') | KeyCode::Left => match self.feedback.sub_tab {
                    0 => self.feedback.rating = self.feedback.rating.saturating_sub(1),
                    1 => self.feedback.severity = self.feedback.severity.saturating_sub(1),
                    _ => {}
                },
                KeyCode::Char('l') | KeyCode::Right => match self.feedback.sub_tab {
                    0 => self.feedback.rating = (self.feedback.rating + 1).min(5),
                    1 => {
                        self.feedback.severity =
                            (self.feedback.severity + 1).min(SEVERITIES.len() - 1)
                    }
                    _ => {}
                },
                KeyCode::Char('i') => {
                    self.feedback.focused = true;
                    self.feedback.field = 0;
                }
                KeyCode::Enter => self.submit_feedback(),
                _ => {}
            },
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle_back(form: &mut CredentialForm) {
    match form.field {
        CredentialField::Service => {
            let n = fixtures::credential_services().len();
            form.service_idx = (form.service_idx + n - 1) % n;
        }
        CredentialField::Kind => {
            let n = fixtures::credential_kinds().len();
            form.kind_idx = (form.kind_idx + n - 1) % n;
        }
        _ => {}
    }
}

fn cycle_forward(form: &mut CredentialForm) {
    match form.field {
        CredentialField::Service => {
            form.service_idx = (form.service_idx + 1) % fixtures::credential_services().len();
        }
        CredentialField::Kind => {
            form.kind_idx = (form.kind_idx + 1) % fixtures::credential_kinds().len();
        }
        _ => {}
    }
}
