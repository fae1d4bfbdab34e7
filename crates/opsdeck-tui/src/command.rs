//! Command system for the opsdeck console.
//!
//! Two entry points share one command set:
//! - **Command mode**: `:` prefixed text typed interactively.
//! - **JSON pipe**: structured commands read from stdin in `--headless` mode.
//!
//! `:go <route>` resolves the web console's URL paths against the tab list;
//! an unknown path produces the not-found result. Query commands return
//! serialized state as JSON strings so scripts can inspect the console
//! without struct access.

use serde_json::json;

use crate::app::{App, TAB_NAMES, TAB_ROUTES};

// ---------------------------------------------------------------------------
// AppCommand
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    Go(String),
    Tab(usize),
    NextTab,
    PrevTab,
    Select(usize),
    Up,
    Down,

    // Actions
    Chat(String),
    ClearChat,
    Toggle,
    Theme,
    Language,

    // Queries
    QueryState,
    QueryTab,
    QuerySelected,

    // System
    Quit,
    Help,
}

// ---------------------------------------------------------------------------
// Text parser (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command, e.g. `:go /pricing`, `:tab 3`, `:chat hi`,
/// `:query state`, `:quit`.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim().strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(str::trim);

    match verb {
        "go" => {
            let route = arg?;
            if route.is_empty() {
                return None;
            }
            Some(AppCommand::Go(route.to_string()))
        }
        "tab" => Some(AppCommand::Tab(arg?.parse().ok()?)),
        "next" | "next_tab" => Some(AppCommand::NextTab),
        "prev" | "prev_tab" => Some(AppCommand::PrevTab),
        "select" | "sel" => Some(AppCommand::Select(arg?.parse().ok()?)),
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "chat" => {
            let text = arg?;
            if text.is_empty() {
                return None;
            }
            Some(AppCommand::Chat(text.to_string()))
        }
        "clear" => Some(AppCommand::ClearChat),
        "toggle" => Some(AppCommand::Toggle),
        "theme" => Some(AppCommand::Theme),
        "lang" | "language" => Some(AppCommand::Language),
        "query" => match arg? {
            "state" => Some(AppCommand::QueryState),
            "tab" => Some(AppCommand::QueryTab),
            "selected" => Some(AppCommand::QuerySelected),
            _ => None,
        },
        "quit" | "q" => Some(AppCommand::Quit),
        "help" | "?" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON parser
// ---------------------------------------------------------------------------

/// Parse a headless-pipe command: `{"cmd":"go","args":["/pricing"]}`.
pub fn parse_json_command(input: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(input).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_usize =
        |idx: usize| -> Option<usize> { args?.as_array()?.get(idx)?.as_u64().map(|n| n as usize) };
    let arg_str = |idx: usize| -> Option<&str> { args?.as_array()?.get(idx)?.as_str() };

    match cmd {
        "go" => Some(AppCommand::Go(arg_str(0)?.to_string())),
        "tab" => Some(AppCommand::Tab(arg_usize(0)?)),
        "next_tab" => Some(AppCommand::NextTab),
        "prev_tab" => Some(AppCommand::PrevTab),
        "select" => Some(AppCommand::Select(arg_usize(0)?)),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "chat" => Some(AppCommand::Chat(arg_str(0)?.to_string())),
        "clear" => Some(AppCommand::ClearChat),
        "toggle" => Some(AppCommand::Toggle),
        "theme" => Some(AppCommand::Theme),
        "language" => Some(AppCommand::Language),
        "query_state" => Some(AppCommand::QueryState),
        "query_tab" => Some(AppCommand::QueryTab),
        "query_selected" => Some(AppCommand::QuerySelected),
        "quit" => Some(AppCommand::Quit),
        "help" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Resolve a route path to its tab index. Accepts the path with or without
/// the leading slash; `/` and the empty string mean the dashboard.
pub fn resolve_route(route: &str) -> Option<usize> {
    let trimmed = route.trim();
    if trimmed == "/" || trimmed.is_empty() {
        return Some(0);
    }
    let normalized = trimmed.trim_start_matches('/');
    TAB_ROUTES
        .iter()
        .position(|r| r.trim_start_matches('/') == normalized && !r.trim_start_matches('/').is_empty())
}

/// Execute a command against the application state. Query commands and the
/// not-found route return `Some(json_string)`; everything else returns `None`.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> Option<String> {
    match cmd {
        // -- Navigation -----------------------------------------------------
        AppCommand::Go(route) => match resolve_route(&route) {
            Some(idx) => {
                app.go_to_tab(idx);
                None
            }
            None => Some(
                json!({ "error": format!("no such route: {route}") }).to_string(),
            ),
        },
        AppCommand::Tab(idx) => {
            app.go_to_tab(idx);
            None
        }
        AppCommand::NextTab => {
            app.next_tab();
            None
        }
        AppCommand::PrevTab => {
            app.prev_tab();
            None
        }
        AppCommand::Select(idx) => {
            app.selected_index = idx;
            None
        }
        AppCommand::Up => {
            app.selected_index = app.selected_index.saturating_sub(1);
            None
        }
        AppCommand::Down => {
            app.selected_index += 1;
            None
        }

        // -- Actions --------------------------------------------------------
        AppCommand::Chat(text) => {
            app.chat_input = text;
            app.submit_chat();
            None
        }
        AppCommand::ClearChat => {
            app.clear_chat();
            None
        }
        AppCommand::Toggle => {
            let _ = app.toggle_selected_integration();
            None
        }
        AppCommand::Theme => {
            app.cycle_theme();
            None
        }
        AppCommand::Language => {
            app.cycle_language();
            None
        }

        // -- Queries --------------------------------------------------------
        AppCommand::QueryState => {
            let state = json!({
                "current_tab": app.current_tab,
                "tab_name": TAB_NAMES.get(app.current_tab).copied().unwrap_or("unknown"),
                "route": TAB_ROUTES.get(app.current_tab).copied().unwrap_or("/"),
                "selected_index": app.selected_index,
                "theme": app.prefs.appearance.theme,
                "language": app.prefs.language.interface_language,
                "counts": {
                    "workflows": app.workflows.len(),
                    "steps": app.steps.len(),
                    "integrations": app.integrations.len(),
                    "connected": opsdeck_core::catalog::connected_count(&app.integrations),
                    "messages": app.messages.len(),
                    "templates": app.templates.len(),
                    "credentials": app.credentials.len(),
                    "notifications": app.notifications.len(),
                    "unread": opsdeck_core::catalog::unread_count(&app.notifications),
                }
            });
            Some(state.to_string())
        }
        AppCommand::QueryTab => Some(serialize_tab_data(app).to_string()),
        AppCommand::QuerySelected => Some(serialize_selected_item(app).to_string()),

        // -- System ---------------------------------------------------------
        AppCommand::Quit => {
            app.should_quit = true;
            None
        }
        AppCommand::Help => {
            app.show_help = true;
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization (json! to avoid Serialize plumbing for view types)
// ---------------------------------------------------------------------------

fn serialize_tab_data(app: &App) -> serde_json::Value {
    match app.current_tab {
        0 => json!(app
            .workflows
            .iter()
            .map(|w| json!({
                "id": w.id,
                "name": w.name,
                "status": w.status.label(),
                "progress": w.status.progress(),
                "duration": w.duration,
                "steps": w.steps,
            }))
            .collect::<Vec<_>>()),
        1 => json!(app
            .filtered_integrations()
            .iter()
            .map(|t| json!({
                "id": t.id,
                "name": t.name,
                "category": t.category,
                "connected": t.connected,
            }))
            .collect::<Vec<_>>()),
        2 => json!(app
            .messages
            .iter()
            .map(|m| json!({
                "sender": m.sender_label(),
                "content": m.content,
                "timestamp": m.timestamp.to_rfc3339(),
                "workflow": m.workflow_ref,
            }))
            .collect::<Vec<_>>()),
        3 => json!(app
            .filtered_templates()
            .iter()
            .map(|t| json!({
                "id": t.id,
                "title": t.title,
                "category": t.category,
                "difficulty": t.difficulty.label(),
                "duration": t.duration,
                "tools": t.tools,
                "featured": t.featured,
            }))
            .collect::<Vec<_>>()),
        5 => json!(app
            .credentials
            .iter()
            .map(|c| json!({
                "id": c.id,
                "name": c.name,
                "type": c.kind,
                "service": c.service,
                "status": c.status.label(),
            }))
            .collect::<Vec<_>>()),
        6 => json!(app
            .faqs
            .iter()
            .enumerate()
            .map(|(i, f)| json!({
                "question": f.question,
                "open": app.faq_open.get(i).copied().unwrap_or(false),
            }))
            .collect::<Vec<_>>()),
        _ => json!([]),
    }
}

fn serialize_selected_item(app: &App) -> serde_json::Value {
    let idx = app.selected_index;
    match app.current_tab {
        0 => app.workflows.get(idx).map(|w| {
            json!({
                "id": w.id,
                "name": w.name,
                "status": w.status.label(),
                "progress": w.status.progress(),
            })
        }),
        1 => app.filtered_integrations().get(idx).map(|t| {
            json!({
                "id": t.id,
                "name": t.name,
                "category": t.category,
                "connected": t.connected,
            })
        }),
        3 => app.filtered_templates().get(idx).map(|t| {
            json!({
                "id": t.id,
                "title": t.title,
                "difficulty": t.difficulty.label(),
            })
        }),
        5 => app.credentials.get(idx).map(|c| {
            json!({
                "id": c.id,
                "name": c.name,
                "service": c.service,
                "status": c.status.label(),
            })
        }),
        6 => app.faqs.get(idx).map(|f| json!({ "question": f.question })),
        _ => None,
    }
    .unwrap_or(json!(null))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new()
    }

    // -- parse_command ------------------------------------------------------

    #[test]
    fn parse_go_command() {
        assert_eq!(
            parse_command(":go /pricing"),
            Some(AppCommand::Go("/pricing".into()))
        );
        assert_eq!(
            parse_command(":go integrations"),
            Some(AppCommand::Go("integrations".into()))
        );
        assert_eq!(parse_command(":go"), None);
    }

    #[test]
    fn parse_tab_and_navigation() {
        assert_eq!(parse_command(":tab 3"), Some(AppCommand::Tab(3)));
        assert_eq!(parse_command(":tab abc"), None);
        assert_eq!(parse_command(":next"), Some(AppCommand::NextTab));
        assert_eq!(parse_command(":prev"), Some(AppCommand::PrevTab));
        assert_eq!(parse_command(":up"), Some(AppCommand::Up));
        assert_eq!(parse_command(":down"), Some(AppCommand::Down));
        assert_eq!(parse_command(":j"), Some(AppCommand::Down));
        assert_eq!(parse_command(":k"), Some(AppCommand::Up));
        assert_eq!(parse_command(":select 5"), Some(AppCommand::Select(5)));
        assert_eq!(parse_command(":select"), None);
    }

    #[test]
    fn parse_chat_commands() {
        assert_eq!(
            parse_command(":chat deploy my app"),
            Some(AppCommand::Chat("deploy my app".into()))
        );
        assert_eq!(parse_command(":chat"), None);
        assert_eq!(parse_command(":clear"), Some(AppCommand::ClearChat));
    }

    #[test]
    fn parse_action_commands() {
        assert_eq!(parse_command(":toggle"), Some(AppCommand::Toggle));
        assert_eq!(parse_command(":theme"), Some(AppCommand::Theme));
        assert_eq!(parse_command(":lang"), Some(AppCommand::Language));
        assert_eq!(parse_command(":language"), Some(AppCommand::Language));
    }

    #[test]
    fn parse_query_commands() {
        assert_eq!(parse_command(":query state"), Some(AppCommand::QueryState));
        assert_eq!(parse_command(":query tab"), Some(AppCommand::QueryTab));
        assert_eq!(
            parse_command(":query selected"),
            Some(AppCommand::QuerySelected)
        );
        assert_eq!(parse_command(":query nonsense"), None);
    }

    #[test]
    fn parse_system_commands() {
        assert_eq!(parse_command(":quit"), Some(AppCommand::Quit));
        assert_eq!(parse_command(":q"), Some(AppCommand::Quit));
        assert_eq!(parse_command(":help"), Some(AppCommand::Help));
        assert_eq!(parse_command(":?"), Some(AppCommand::Help));
    }

    #[test]
    fn parse_requires_colon_prefix() {
        assert_eq!(parse_command("quit"), None);
        assert_eq!(parse_command("go /pricing"), None);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert_eq!(parse_command("  :tab 2  "), Some(AppCommand::Tab(2)));
        assert_eq!(parse_command(":quit  "), Some(AppCommand::Quit));
    }

    #[test]
    fn parse_unknown_verb() {
        assert_eq!(parse_command(":frobnicate"), None);
    }

    // -- parse_json_command -------------------------------------------------

    #[test]
    fn parse_json_go() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"go","args":["/support"]}"#),
            Some(AppCommand::Go("/support".into()))
        );
    }

    #[test]
    fn parse_json_navigation() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"tab","args":[4]}"#),
            Some(AppCommand::Tab(4))
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"next_tab"}"#),
            Some(AppCommand::NextTab)
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"select","args":[2]}"#),
            Some(AppCommand::Select(2))
        );
    }

    #[test]
    fn parse_json_chat() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"chat","args":["hello"]}"#),
            Some(AppCommand::Chat("hello".into()))
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"clear"}"#),
            Some(AppCommand::ClearChat)
        );
    }

    #[test]
    fn parse_json_queries() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"query_state"}"#),
            Some(AppCommand::QueryState)
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"query_tab"}"#),
            Some(AppCommand::QueryTab)
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"query_selected"}"#),
            Some(AppCommand::QuerySelected)
        );
    }

    #[test]
    fn parse_json_invalid() {
        assert_eq!(parse_json_command("not json"), None);
        assert_eq!(parse_json_command(r#"{"cmd":"nope"}"#), None);
        assert_eq!(parse_json_command(r#"{"args":[1]}"#), None);
    }

    // -- routes -------------------------------------------------------------

    #[test]
    fn resolve_known_routes() {
        assert_eq!(resolve_route("/"), Some(0));
        assert_eq!(resolve_route(""), Some(0));
        assert_eq!(resolve_route("/integrations"), Some(1));
        assert_eq!(resolve_route("chat"), Some(2));
        assert_eq!(resolve_route("/use-cases"), Some(3));
        assert_eq!(resolve_route("pricing"), Some(4));
        assert_eq!(resolve_route("/credentials"), Some(5));
        assert_eq!(resolve_route("support"), Some(6));
        assert_eq!(resolve_route("/feedback"), Some(7));
    }

    #[test]
    fn resolve_unknown_route() {
        assert_eq!(resolve_route("/admin"), None);
        assert_eq!(resolve_route("workflows"), None);
    }

    #[test]
    fn execute_go_switches_tab() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::Go("/pricing".into()));
        assert!(result.is_none());
        assert_eq!(app.current_tab, 4);
    }

    #[test]
    fn execute_go_unknown_route_reports_not_found() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::Go("/admin".into())).unwrap();
        let v: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(v["error"].as_str().unwrap().contains("no such route"));
        // The tab did not change.
        assert_eq!(app.current_tab, 0);
    }

    // -- execute: navigation --------------------------------------------------

    #[test]
    fn execute_tab_bounds() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Tab(6));
        assert_eq!(app.current_tab, 6);
        execute_command(&mut app, AppCommand::Tab(999));
        assert_eq!(app.current_tab, 6);
    }

    #[test]
    fn execute_next_prev_wraps() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::PrevTab);
        assert_eq!(app.current_tab, TAB_NAMES.len() - 1);
        execute_command(&mut app, AppCommand::NextTab);
        assert_eq!(app.current_tab, 0);
    }

    // -- execute: actions -----------------------------------------------------

    #[test]
    fn execute_chat_appends_user_message() {
        let mut app = test_app();
        let before = app.messages.len();
        execute_command(&mut app, AppCommand::Chat("scale my deployment".into()));
        assert_eq!(app.messages.len(), before + 1);
        assert_eq!(app.messages.last().unwrap().content, "scale my deployment");
    }

    #[test]
    fn execute_clear_empties_history() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::ClearChat);
        assert!(app.messages.is_empty());
    }

    #[test]
    fn execute_toggle_flips_first_filtered_tool() {
        let mut app = test_app();
        app.go_to_tab(1);
        let before = app.integrations[0].connected;
        execute_command(&mut app, AppCommand::Toggle);
        assert_eq!(app.integrations[0].connected, !before);
    }

    #[test]
    fn execute_theme_cycles_palette() {
        let mut app = test_app();
        assert_eq!(app.theme.name, "dark");
        execute_command(&mut app, AppCommand::Theme);
        assert_eq!(app.theme.name, "light");
        assert_eq!(app.prefs.appearance.theme, "light");
    }

    // -- execute: queries -----------------------------------------------------

    #[test]
    fn query_state_reports_counts() {
        let mut app = test_app();
        app.go_to_tab(2);
        let result = execute_command(&mut app, AppCommand::QueryState).unwrap();
        let v: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(v["current_tab"], 2);
        assert_eq!(v["tab_name"], "Chat");
        assert_eq!(v["route"], "/chat");
        assert_eq!(v["counts"]["integrations"], 24);
        assert_eq!(v["counts"]["connected"], 6);
        assert_eq!(v["counts"]["unread"], 2);
    }

    #[test]
    fn query_tab_serializes_integrations_filter() {
        let mut app = test_app();
        app.go_to_tab(1);
        app.integrations_query = "jenkins".into();
        let result = execute_command(&mut app, AppCommand::QueryTab).unwrap();
        let v: serde_json::Value = serde_json::from_str(&result).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], "jenkins");
    }

    #[test]
    fn query_selected_out_of_bounds_is_null() {
        let mut app = test_app();
        app.go_to_tab(5);
        app.selected_index = 999;
        let result = execute_command(&mut app, AppCommand::QuerySelected).unwrap();
        let v: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn query_selected_returns_credential() {
        let mut app = test_app();
        app.go_to_tab(5);
        app.selected_index = 1;
        let result = execute_command(&mut app, AppCommand::QuerySelected).unwrap();
        let v: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(v["name"], "Jenkins Admin");
    }

    // -- execute: system ------------------------------------------------------

    #[test]
    fn execute_quit_and_help() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Quit);
        assert!(app.should_quit);
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Help);
        assert!(app.show_help);
    }

    // -- round trips ----------------------------------------------------------

    #[test]
    fn roundtrip_text_query() {
        let mut app = test_app();
        let cmd = parse_command(":query state").unwrap();
        assert!(execute_command(&mut app, cmd).is_some());
    }

    #[test]
    fn roundtrip_json_route() {
        let mut app = test_app();
        let cmd = parse_json_command(r#"{"cmd":"go","args":["/feedback"]}"#).unwrap();
        execute_command(&mut app, cmd);
        assert_eq!(app.current_tab, 7);
    }
}
