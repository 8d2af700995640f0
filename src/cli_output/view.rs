//! Rendering of session views and region lists.

use super::boxes::{field, icons, paragraph, section, step_line};
use crate::models::Region;
use crate::view_state::{Dashboard, Notice, SessionView};

/// Lines for a session view. `Hidden` renders nothing.
pub fn render_view(view: &SessionView) -> Vec<String> {
    match view {
        SessionView::Hidden => Vec::new(),
        SessionView::LoginPrompt(prompt) => {
            let mut lines = section(prompt.title);
            if let Some(error) = &prompt.error {
                lines.push(step_line(icons::FAILURE, error));
            }
            lines.extend(paragraph(prompt.body, 2));
            lines.push(String::new());
            lines.push(step_line("→", prompt.action_label));
            lines.push(format!("    {}", prompt.authorize_url));
            if prompt.dismissible {
                lines.push(String::new());
                lines.push("  Run `pca status --no-prompt` to hide this.".to_string());
            }
            lines
        }
        SessionView::Authenticating => vec![step_line(icons::PENDING, "Signing in with the WCA...")],
        SessionView::Loading => vec![step_line(icons::PENDING, "Loading your data...")],
        SessionView::LoadError { notice, dashboard } => {
            let mut lines = render_notice(icons::FAILURE, notice);
            if let Some(dashboard) = dashboard {
                lines.push(String::new());
                lines.extend(render_dashboard(dashboard));
            }
            lines
        }
        SessionView::Dashboard(dashboard) => render_dashboard(dashboard),
        SessionView::Submitted(notice) => render_notice(icons::SUCCESS, notice),
        SessionView::SubmitError { notice, dashboard } => {
            let mut lines = render_notice(icons::FAILURE, notice);
            lines.push(String::new());
            lines.extend(render_dashboard(dashboard));
            lines
        }
    }
}

fn render_notice(icon: &str, notice: &Notice) -> Vec<String> {
    let mut lines = vec![step_line(icon, &notice.title)];
    lines.extend(paragraph(&notice.body, 4));
    lines
}

fn render_dashboard(dashboard: &Dashboard) -> Vec<String> {
    let mut lines = section(&dashboard.greeting);
    lines.push(format!("  {}", dashboard.current_region));
    lines.push(format!("  {}", dashboard.request_status));

    lines.push(String::new());
    for text in &dashboard.guidance {
        lines.extend(paragraph(text, 2));
    }
    if let Some(selection) = &dashboard.selection {
        lines.push(String::new());
        lines.push(step_line(
            "→",
            &format!(
                "{}: pca submit <REGION> (default {})",
                selection.action_label, selection.default_region
            ),
        ));
    }
    lines
}

/// One `ID  Name` line per region.
pub fn render_regions(regions: &[Region]) -> Vec<String> {
    let width = regions
        .iter()
        .map(|r| r.id.as_str().chars().count())
        .max()
        .unwrap_or(0);
    regions
        .iter()
        .map(|r| format!("  {:<width$}  {}", r.id.as_str(), r.name, width = width))
        .collect()
}

/// Summary of the stored credential for `pca status`.
pub fn render_login_state(logged_in: bool) -> String {
    if logged_in {
        field("Login", "stored")
    } else {
        field("Login", "none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegionId;
    use crate::view_state::{LoginPrompt, LoginPromptConfig, RegionSelection};

    fn dashboard(selection: Option<RegionSelection>, guidance: usize) -> Dashboard {
        Dashboard {
            greeting: "Hello, Juan Dela Cruz (2019DELA01)!".to_string(),
            current_region: "Your current region: No region yet".to_string(),
            request_status: "Your region request's status: No request yet".to_string(),
            guidance: (0..guidance).map(|i| format!("Guidance {}", i)).collect(),
            selection,
        }
    }

    #[test]
    fn test_hidden_renders_nothing() {
        assert!(render_view(&SessionView::Hidden).is_empty());
    }

    #[test]
    fn test_login_prompt_shows_link() {
        let prompt = LoginPrompt::new(&LoginPromptConfig::default(), None);
        let url = prompt.authorize_url.clone();
        let lines = render_view(&SessionView::LoginPrompt(prompt));
        assert_eq!(lines[0], "Want to see your regional rank here?");
        assert!(lines.iter().any(|l| l.contains("Login with WCA")));
        assert!(lines.iter().any(|l| l.trim() == url));
    }

    #[test]
    fn test_dashboard_with_selection_lists_guidance() {
        let lines = render_view(&SessionView::Dashboard(dashboard(
            Some(RegionSelection::default()),
            2,
        )));
        assert!(lines.iter().any(|l| l.contains("Guidance 1")));
        assert!(lines
            .iter()
            .any(|l| l.contains("Set your region") && l.contains("default NCR")));
    }

    #[test]
    fn test_dashboard_without_selection_has_no_submit_hint() {
        let lines = render_view(&SessionView::Dashboard(dashboard(None, 2)));
        assert!(lines.iter().any(|l| l.contains("Guidance 0")));
        assert!(!lines.iter().any(|l| l.contains("Set your region")));
    }

    #[test]
    fn test_load_error_keeps_loaded_dashboard() {
        let lines = render_view(&SessionView::LoadError {
            notice: Notice {
                title: "Error: Can't load your data".to_string(),
                body: "The request timed out.".to_string(),
            },
            dashboard: Some(dashboard(None, 1)),
        });
        assert!(lines[0].contains("Error: Can't load your data"));
        assert!(lines.iter().any(|l| l.contains("Hello, Juan Dela Cruz (2019DELA01)!")));
        assert!(!lines.iter().any(|l| l.contains("Set your region")));
    }

    #[test]
    fn test_regions_are_aligned() {
        let regions = vec![
            Region {
                id: RegionId::parse("PH").unwrap(),
                name: "Philippines".to_string(),
            },
            Region {
                id: RegionId::parse("NCR").unwrap(),
                name: "National Capital Region".to_string(),
            },
        ];
        assert_eq!(
            render_regions(&regions),
            vec![
                "  PH   Philippines".to_string(),
                "  NCR  National Capital Region".to_string(),
            ]
        );
    }
}
