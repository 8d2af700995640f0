//! The `pca` commands, run against an [`App`].
//!
//! Each command returns a [`CommandReport`] instead of printing, so the
//! binary decides where output goes and tests can read it.

use tracing::debug;

use crate::app::{App, SubmitOutcome};
use crate::auth::RedirectParams;
use crate::cli_output::{icons, paragraph, render_login_state, render_regions, render_view, section, step_line};
use crate::error::PcaError;
use crate::models::RegionId;
use crate::traits::HttpClient;
use crate::view_state::SessionView;

/// Output of one command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReport {
    pub lines: Vec<String>,
    pub success: bool,
}

impl CommandReport {
    fn ok(lines: Vec<String>) -> Self {
        Self { lines, success: true }
    }

    fn failed(lines: Vec<String>) -> Self {
        Self { lines, success: false }
    }

    /// A failed report explaining `err`.
    pub fn from_error(err: &PcaError) -> Self {
        let mut lines = vec![step_line(icons::FAILURE, &err.user_message())];
        lines.extend(paragraph(err.recovery_hint(), 4));
        Self::failed(lines)
    }
}

/// A view counts as a failure when it shows an error.
fn view_report<C: HttpClient + 'static>(app: &App<C>) -> CommandReport {
    let view = app.view();
    let lines = render_view(&view);
    match view {
        SessionView::LoadError { .. } | SessionView::SubmitError { .. } => CommandReport::failed(lines),
        SessionView::LoginPrompt(ref prompt) if prompt.error.is_some() => CommandReport::failed(lines),
        _ => CommandReport::ok(lines),
    }
}

/// `pca status`: load the session and show it.
pub async fn status<C: HttpClient + 'static>(app: &mut App<C>, no_prompt: bool) -> CommandReport {
    if no_prompt {
        app.dismiss_login_prompt();
    }
    app.authenticate(None).await;
    app.run_until_settled().await;

    let mut report = view_report(app);
    report.lines.push(String::new());
    report.lines.push(render_login_state(app.cache().is_logged_in()));
    app.teardown();
    report
}

/// `pca login <redirect>`: exchange the code in `redirect` and show the
/// resulting session.
///
/// An existing login is kept and the code is ignored.
pub async fn login<C: HttpClient + 'static>(app: &mut App<C>, redirect: &str) -> CommandReport {
    let params = RedirectParams::parse(redirect);
    if params.is_empty() {
        debug!("Redirect carried no parameters");
    }
    let already = app.cache().is_logged_in();

    app.authenticate(Some(&params)).await;
    if !app.session.is_authenticated() {
        let mut lines = Vec::new();
        if params.code().is_none() && params.error().is_none() {
            lines.push(step_line(icons::FAILURE, "That address has no login code in it."));
            lines.push(String::new());
        }
        lines.extend(view_report(app).lines);
        app.teardown();
        return CommandReport::failed(lines);
    }
    app.run_until_settled().await;

    let mut lines = Vec::new();
    if already {
        lines.push(step_line(icons::WARNING, "Already logged in; the code was not used."));
    } else {
        lines.push(step_line(icons::SUCCESS, "Logged in"));
    }
    lines.push(String::new());
    let report = view_report(app);
    lines.extend(report.lines);
    app.teardown();
    CommandReport {
        lines,
        success: report.success,
    }
}

/// `pca regions`: list selectable regions.
pub async fn regions<C: HttpClient + 'static>(app: &App<C>, national: bool) -> CommandReport {
    match app.api().fetch_regions(national).await {
        Ok(regions) => {
            let mut lines = section("Regions");
            lines.extend(render_regions(&regions));
            CommandReport::ok(lines)
        }
        Err(err) => CommandReport::from_error(&err),
    }
}

/// `pca submit [REGION]`: request a region change.
///
/// The region must be one `GET /regions` lists; the default is NCR.
pub async fn submit<C: HttpClient + 'static>(app: &mut App<C>, region: Option<&str>) -> CommandReport {
    let region = match region {
        None => RegionId::default(),
        Some(raw) => match RegionId::parse(raw) {
            Some(id) => id,
            None => return CommandReport::failed(vec![step_line(icons::FAILURE, "Region must not be empty.")]),
        },
    };

    app.authenticate(None).await;
    app.run_until_settled().await;

    if !app.view().offers_submission() {
        let mut report = view_report(app);
        report.lines.push(String::new());
        report
            .lines
            .push(step_line(icons::FAILURE, "Setting your region isn't available right now."));
        app.teardown();
        return CommandReport::failed(report.lines);
    }

    if let Err(err) = ensure_known_region(app, &region).await {
        app.teardown();
        return err;
    }

    let outcome = app.submit_region(region).await;
    app.teardown();
    let mut report = view_report(app);
    if let SubmitOutcome::Failed(err) = outcome {
        report.success = false;
        if !app.session.is_authenticated() {
            report = CommandReport::from_error(&err);
        }
    }
    report
}

async fn ensure_known_region<C: HttpClient + 'static>(
    app: &App<C>,
    region: &RegionId,
) -> Result<(), CommandReport> {
    let regions = app
        .api()
        .fetch_regions(false)
        .await
        .map_err(|err| CommandReport::from_error(&err))?;
    if regions.iter().any(|r| &r.id == region) {
        Ok(())
    } else {
        Err(CommandReport::failed(vec![step_line(
            icons::FAILURE,
            &format!("Unknown region '{}'. Run `pca regions` to list them.", region),
        )]))
    }
}

/// `pca logout`: forget the credential. No server call is made.
pub fn logout<C: HttpClient + 'static>(app: &mut App<C>) -> CommandReport {
    let was_logged_in = app.cache().is_logged_in();
    app.logout();
    if was_logged_in {
        CommandReport::ok(vec![step_line(icons::SUCCESS, "Logged out")])
    } else {
        CommandReport::ok(vec![step_line(icons::SUCCESS, "Not logged in")])
    }
}

