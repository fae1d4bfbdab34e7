//! Render tests for every page of the console.
//!
//! Each test draws into a 120x40 test backend and asserts that the expected
//! fixture content shows up in the buffer, including overlays, filters and
//! empty states.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

#[path = "../src/app.rs"]
mod app;
#[path = "../src/command.rs"]
mod command;
#[path = "../src/effects.rs"]
mod effects;
#[path = "../src/strings.rs"]
mod strings;
#[path = "../src/tabs/mod.rs"]
mod tabs;
#[path = "../src/theme.rs"]
mod theme;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

use app::App;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn render_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_to_string(&terminal.backend().buffer().clone())
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn render_tab(tab: usize) -> String {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char((b'1' + tab as u8) as char)));
    render_to_string(&mut app)
}

fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "expected {needle:?} in rendered output.\nFull output:\n{output}"
    );
}

fn assert_contains_all(output: &str, needles: &[&str]) {
    for needle in needles {
        assert_contains(output, needle);
    }
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

#[test]
fn tab_bar_lists_every_page() {
    let output = render_tab(0);
    assert_contains(&output, "opsdeck");
    assert_contains_all(
        &output,
        &[
            "1:Dashboard",
            "2:Integrations",
            "3:Chat",
            "4:Use Cases",
            "5:Pricing",
            "6:Credentials",
            "7:Support",
            "8:Feedback",
        ],
    );
}

#[test]
fn status_bar_shows_hints_badges_and_clock() {
    let output = render_tab(0);
    assert_contains_all(&output, &["Help", "Notifications", "Command", "Quit"]);
    assert_contains(&output, "1 active");
    assert_contains(&output, "2 unread");
    assert_contains(&output, "dark/en");
}

#[test]
fn command_mode_prompt_is_visible() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char(':')));
    for c in "go pricing".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    let output = render_to_string(&mut app);
    assert_contains(&output, ":go pricing");
}

#[test]
fn command_result_replaces_status_line() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char(':')));
    for c in "go admin".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&mut app);
    assert_contains(&output, "no such route");
}

#[test]
fn help_modal_lists_keybindings() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&mut app);
    assert_contains_all(
        &output,
        &["Keybindings", "Jump to page", "Command mode", "Quit"],
    );
}

#[test]
fn notifications_overlay_shows_entries_and_unread_count() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('n')));
    let output = render_to_string(&mut app);
    assert_contains_all(
        &output,
        &[
            "Notifications (2 unread)",
            "Docker Build Completed",
            "Jenkins Pipeline Failed",
            "Kubernetes Deployment Slow",
        ],
    );
}

#[test]
fn marking_read_updates_overlay_badge() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('n')));
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&mut app);
    assert_contains(&output, "Notifications (1 unread)");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[test]
fn dashboard_shows_stat_cards() {
    let output = render_tab(0);
    assert_contains_all(
        &output,
        &[
            "Active Workflows",
            "Deployments Today",
            "Success Rate",
            "Avg Deploy Time",
            "98.5%",
            "3m 42s",
        ],
    );
}

#[test]
fn dashboard_shows_workflows_with_steps() {
    let output = render_tab(0);
    assert_contains_all(
        &output,
        &[
            "Production Deploy - Node.js API",
            "Database Migration - PostgreSQL",
            "Security Scan - Docker Images",
            "[Build]",
            "[Backup]",
            "running",
            "completed",
            "pending",
        ],
    );
}

#[test]
fn dashboard_shows_connected_tools_and_quick_actions() {
    let output = render_tab(0);
    assert_contains_all(
        &output,
        &["Connected Tools", "ArgoCD", "Quick Actions", "Deploy Latest Build"],
    );
}

#[test]
fn dashboard_empty_workflows_still_renders() {
    let mut app = App::new();
    app.workflows.clear();
    let output = render_to_string(&mut app);
    assert_contains(&output, "Active Workflows");
}

// ---------------------------------------------------------------------------
// Workflow detail view
// ---------------------------------------------------------------------------

#[test]
fn detail_view_shows_pipeline_steps() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&mut app);
    assert_contains_all(
        &output,
        &[
            "pipeline detail",
            "GitHub",
            "Docker",
            "Jenkins",
            "Terraform",
            "Kubernetes",
            "[SUCCESS]",
            "[RUNNING]",
            "[ERROR]",
            "[PENDING]",
            "Workflow Assistant",
        ],
    );
}

#[test]
fn detail_view_expanded_step_shows_subtabs_and_commands() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    // Jenkins (index 2) is expanded by default on the Commands sub-tab.
    let output = render_to_string(&mut app);
    assert_contains_all(
        &output,
        &["Commands", "Logs", "Metadata", "jenkins-cli build ReactApp-Pipeline"],
    );
}

#[test]
fn detail_view_logs_subtab_shows_live_output_marker() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('l'))); // Commands -> Logs
    let output = render_to_string(&mut app);
    assert_contains_all(&output, &["Running unit tests...", "Live output..."]);
}

#[test]
fn detail_view_metadata_subtab_shows_pairs() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('h'))); // Commands -> Metadata (wraps back)
    let output = render_to_string(&mut app);
    assert_contains(&output, "Build Number:");
}

#[test]
fn detail_view_error_step_shows_message() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&mut app);
    assert_contains(&output, "Error acquiring the state lock");
}

#[test]
fn detail_chat_greeting_mentions_workflow() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&mut app);
    assert_contains(&output, "I'm monitoring your");
}

// ---------------------------------------------------------------------------
// Troubleshoot dialog
// ---------------------------------------------------------------------------

#[test]
fn troubleshoot_dialog_lists_three_paths() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Enter));
    for _ in 0..3 {
        app.on_key(key(KeyCode::Char('j')));
    }
    app.on_key(key(KeyCode::Char('t')));
    let output = render_to_string(&mut app);
    assert_contains_all(
        &output,
        &[
            "Troubleshoot - Terraform",
            "Error Details",
            "AI Retry",
            "Manual Edit",
            "Prompt Fix",
        ],
    );
}

#[test]
fn troubleshoot_dialog_respects_language_preference() {
    let mut app = App::new();
    app.prefs.language.interface_language = "es".into();
    app.on_key(key(KeyCode::Enter));
    for _ in 0..3 {
        app.on_key(key(KeyCode::Char('j')));
    }
    app.on_key(key(KeyCode::Char('t')));
    let output = render_to_string(&mut app);
    assert_contains_all(&output, &["Solucionar", "Reintento IA"]);
}

// ---------------------------------------------------------------------------
// Integrations
// ---------------------------------------------------------------------------

#[test]
fn integrations_shows_summary_badges() {
    let output = render_tab(1);
    assert_contains_all(
        &output,
        &["Tool Integrations", "6 Connected", "18 Available"],
    );
}

#[test]
fn integrations_shows_category_stats() {
    let output = render_tab(1);
    assert_contains_all(
        &output,
        &[
            "GitOps",
            "Infrastructure",
            "Source Code",
            "Containerization",
            "CI/CD",
            "Orchestration",
            "1/4",
        ],
    );
}

#[test]
fn integrations_lists_tools_with_descriptions() {
    let output = render_tab(1);
    assert_contains_all(
        &output,
        &[
            "Tools (24)",
            "ArgoCD",
            "[connected]",
            "Declarative GitOps continuous delivery tool",
        ],
    );
}

#[test]
fn integrations_search_filters_list() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('/')));
    for c in "jenkins".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    let output = render_to_string(&mut app);
    assert_contains(&output, "Tools (1)");
    assert_contains(&output, "Jenkins");
}

#[test]
fn integrations_toggle_updates_badges() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('j'))); // Flux (disconnected)
    app.on_key(key(KeyCode::Char(' ')));
    let output = render_to_string(&mut app);
    assert_contains_all(&output, &["7 Connected", "17 Available"]);
}

#[test]
fn integrations_empty_filter_shows_message() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('/')));
    for c in "zzzz".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    let output = render_to_string(&mut app);
    assert_contains(&output, "No tools match the current filters.");
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[test]
fn chat_shows_seeded_thread() {
    let output = render_tab(2);
    assert_contains_all(
        &output,
        &[
            "AI Workflow Assistant",
            "System",
            "You",
            "AI Assistant",
            "Deploy my React app to production using Docker and Kubernetes",
            "[WF-2024-001]",
        ],
    );
}

#[test]
fn chat_side_panel_shows_prompts_and_templates() {
    let output = render_tab(2);
    assert_contains_all(
        &output,
        &[
            "Quick Actions",
            "Start New Workflow",
            "Quick Prompts",
            "Create a CI/CD pipeline for my React app",
            "Recent Templates",
            "React + Docker + K8s",
        ],
    );
}

#[test]
fn chat_cleared_history_shows_empty_state() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('3')));
    app.on_key(key(KeyCode::Char('C')));
    let output = render_to_string(&mut app);
    assert_contains(&output, "No messages");
}

// ---------------------------------------------------------------------------
// Use cases
// ---------------------------------------------------------------------------

#[test]
fn use_cases_lists_templates_with_detail_panel() {
    let output = render_tab(3);
    assert_contains_all(
        &output,
        &[
            "Templates (6)",
            "CI/CD Pipeline for Python/Django",
            "*Featured*",
            "intermediate",
            "5-10 min",
            "Required Tools:",
        ],
    );
}

#[test]
fn use_cases_detail_follows_selection() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('4')));
    app.on_key(key(KeyCode::Char('j')));
    let output = render_to_string(&mut app);
    assert_contains(&output, "Microservices on Kubernetes with ArgoCD");
    assert_contains(&output, "[ArgoCD]");
}

#[test]
fn use_cases_empty_filter_shows_clear_hint() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('4')));
    app.on_key(key(KeyCode::Char('/')));
    for c in "zzzz".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    let output = render_to_string(&mut app);
    assert_contains(&output, "No templates found");
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[test]
fn pricing_shows_metrics_plans_and_addons() {
    let output = render_tab(4);
    assert_contains_all(
        &output,
        &[
            "Prompt",
            "Quick Fix",
            "Free Trial",
            "Developer",
            "Startup (Most Popular)",
            "Enterprise",
            "Rs.20,000",
            "Prompt Pack",
            "CI/CD Run Pack",
        ],
    );
}

#[test]
fn pricing_shows_policies() {
    let output = render_tab(4);
    assert_contains_all(
        &output,
        &["Payment & Billing", "Upgrades & Changes", "16% discount on annual subscriptions"],
    );
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[test]
fn credentials_shows_stats_and_table() {
    let output = render_tab(5);
    assert_contains_all(
        &output,
        &[
            "Total Credentials",
            "Stored Credentials",
            "Docker Hub Registry",
            "Jenkins Admin",
            "K8s Cluster Access",
            "GitLab Deploy Key",
            "API Token",
            "Kubeconfig",
            "Active",
            "Unused",
        ],
    );
}

#[test]
fn credentials_delete_updates_table_and_count() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::Char('d')));
    let output = render_to_string(&mut app);
    assert!(!output.contains("Docker Hub Registry"));
    // Total credentials card dropped from 4 to 3.
    assert_contains(&output, "Total Credentials");
    assert_contains(&output, "3");
}

#[test]
fn credentials_add_dialog_renders_fields() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::Char('a')));
    let output = render_to_string(&mut app);
    assert_contains_all(
        &output,
        &[
            "Add New Credential",
            "Credential Name",
            "Service",
            "Credential Type",
            "Credential Value",
        ],
    );
}

#[test]
fn credentials_empty_state() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('6')));
    app.credentials.clear();
    let output = render_to_string(&mut app);
    assert_contains(&output, "No credentials stored.");
}

// ---------------------------------------------------------------------------
// Support
// ---------------------------------------------------------------------------

#[test]
fn support_shows_faq_form_docs_and_status() {
    let output = render_tab(6);
    assert_contains_all(
        &output,
        &[
            "Frequently Asked Questions",
            "How do I connect a new DevOps tool?",
            "Contact Support",
            "Documentation & Resources",
            "API Reference",
            "System Status",
            "Workflow Engine",
            "99.8%",
        ],
    );
}

#[test]
fn support_faq_expands_answer() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('7')));
    let before = render_to_string(&mut app);
    assert!(!before.contains("Navigate to the Tool Integration page"));
    app.on_key(key(KeyCode::Enter));
    let after = render_to_string(&mut app);
    assert_contains(&after, "Navigate to the Tool Integration page");
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[test]
fn feedback_shows_stats_forms_and_roadmap() {
    let output = render_tab(7);
    assert_contains_all(
        &output,
        &[
            "Feedback Submitted",
            "1,247",
            "Submit Feedback",
            "General",
            "Bug Report",
            "Feature Request",
            "Recent Community Feedback",
            "Add support for GitLab runners",
            "In Progress",
            "Planned",
            "Completed",
            "Multi-cloud deployment",
        ],
    );
}

#[test]
fn feedback_bug_form_shows_severity() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('8')));
    app.on_key(key(KeyCode::Char(']')));
    let output = render_to_string(&mut app);
    assert_contains_all(&output, &["Severity", "Bug Title", "Steps to Reproduce"]);
}

#[test]
fn feedback_feature_form_shows_fields() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('8')));
    app.on_key(key(KeyCode::Char('[')));
    let output = render_to_string(&mut app);
    assert_contains_all(&output, &["Feature Title", "Description", "Use Case"]);
}

// ---------------------------------------------------------------------------
// Theme & sizes
// ---------------------------------------------------------------------------

#[test]
fn light_theme_renders_every_tab() {
    let mut app = App::new();
    app.on_key(key(KeyCode::Char('T')));
    assert_eq!(app.theme.name, "light");
    for tab in 0..8u8 {
        app.on_key(key(KeyCode::Char((b'1' + tab) as char)));
        let output = render_to_string(&mut app);
        assert!(!output.is_empty());
    }
}

#[test]
fn all_tabs_render_without_panic() {
    for tab in 0..8 {
        let output = render_tab(tab);
        assert!(!output.is_empty(), "tab {tab} rendered empty output");
    }
}

#[test]
fn all_tabs_render_at_small_size() {
    let mut app = App::new();
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    for tab in 0..8u8 {
        app.on_key(key(KeyCode::Char((b'1' + tab) as char)));
        terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
    }
}

#[test]
fn all_tabs_render_at_wide_size() {
    let mut app = App::new();
    let backend = TestBackend::new(200, 50);
    let mut terminal = Terminal::new(backend).unwrap();
    for tab in 0..8u8 {
        app.on_key(key(KeyCode::Char((b'1' + tab) as char)));
        terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
    }
}

#[test]
fn detail_and_overlays_render_at_small_size() {
    let mut app = App::new();
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    app.on_key(key(KeyCode::Enter));
    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
    for _ in 0..3 {
        app.on_key(key(KeyCode::Char('j')));
    }
    app.on_key(key(KeyCode::Char('t')));
    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
    app.on_key(key(KeyCode::Esc));
    app.on_key(key(KeyCode::Char('?')));
    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
}

#[test]
fn tab_switching_preserves_data() {
    let mut app = App::new();
    for tab in 0..8u8 {
        app.on_key(key(KeyCode::Char((b'1' + tab) as char)));
    }
    app.on_key(key(KeyCode::Char('1')));
    assert_eq!(app.integrations.len(), 24);
    assert_eq!(app.credentials.len(), 4);
    assert_eq!(app.messages.len(), 3);
    let output = render_to_string(&mut app);
    assert_contains(&output, "Production Deploy - Node.js API");
}
