//! Line-oriented command shell over an [`OrgConsole`].
//!
//! Each input line is one user event. Results are printed as JSON so the
//! shell can sit behind any front end.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use orgdesk_console::{Confirmed, OrgConsole};
use orgdesk_core::models::organization::OrganizationId;
use orgdesk_core::models::sso::SsoZone;
use orgdesk_core::models::tab::OrgTab;
use orgdesk_core::notify::{Notice, Notifier, RecordingNotifier};
use orgdesk_core::repository::{OrganizationRepository, SsoProviderRepository};
use serde_json::{Value, json};
use tracing::{debug, warn};

pub const HELP: &str = "\
commands:
  list | current | render | tab <id> | select <id>
  toggle on|off | refresh
  create | edit | switch | delete | sso-add | sso-edit <id>
  set <field> <value> | pick <id> | confirm | cancel
  sso [query] | sso-toggle <id> | sso-delete <id> | drag <id> | drop active|inactive
  notices | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Current,
    Render,
    Tab(OrgTab),
    Select(OrganizationId),
    Toggle(bool),
    Refresh,
    Create,
    Edit,
    Switch,
    Delete,
    SsoAdd,
    SsoEdit(String),
    Set { field: String, value: String },
    Pick(OrganizationId),
    Confirm,
    Cancel,
    Sso(String),
    SsoToggle(String),
    SsoDelete(String),
    Drag(String),
    Drop(SsoZone),
    Notices,
    Help,
    Quit,
}

fn arg<'a>(rest: &'a str, usage: &str) -> anyhow::Result<&'a str> {
    let rest = rest.trim();
    if rest.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(rest)
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let cmd = match word {
            "list" => Self::List,
            "current" => Self::Current,
            "render" => Self::Render,
            "tab" => Self::Tab(arg(rest, "tab <id>")?.parse()?),
            "select" => Self::Select(arg(rest, "select <id>")?.into()),
            "toggle" => match arg(rest, "toggle on|off")? {
                "on" => Self::Toggle(true),
                "off" => Self::Toggle(false),
                other => bail!("toggle expects on or off, got {other:?}"),
            },
            "refresh" => Self::Refresh,
            "create" => Self::Create,
            "edit" => Self::Edit,
            "switch" => Self::Switch,
            "delete" => Self::Delete,
            "sso-add" => Self::SsoAdd,
            "sso-edit" => Self::SsoEdit(arg(rest, "sso-edit <id>")?.to_string()),
            "set" => {
                let rest = arg(rest, "set <field> <value>")?;
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Self::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "pick" => Self::Pick(arg(rest, "pick <id>")?.into()),
            "confirm" => Self::Confirm,
            "cancel" => Self::Cancel,
            "sso" => Self::Sso(rest.trim().to_string()),
            "sso-toggle" => Self::SsoToggle(arg(rest, "sso-toggle <id>")?.to_string()),
            "sso-delete" => Self::SsoDelete(arg(rest, "sso-delete <id>")?.to_string()),
            "drag" => Self::Drag(arg(rest, "drag <id>")?.to_string()),
            "drop" => Self::Drop(arg(rest, "drop active|inactive")?.parse()?),
            "notices" => Self::Notices,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try `help`"),
        };
        Ok(Some(cmd))
    }
}

/// The console plus the notice history the shell prints.
pub struct Shell<R, S, N>
where
    R: OrganizationRepository,
    S: SsoProviderRepository,
    N: Notifier,
{
    console: OrgConsole<R, S, N>,
    recorder: RecordingNotifier,
    history: Vec<Notice>,
}

impl<R, S, N> Shell<R, S, N>
where
    R: OrganizationRepository,
    S: SsoProviderRepository,
    N: Notifier,
{
    /// `recorder` must share its log with the notifier the console and
    /// registry report to.
    pub fn new(console: OrgConsole<R, S, N>, recorder: RecordingNotifier) -> Self {
        Self {
            console,
            recorder,
            history: Vec::new(),
        }
    }

    pub fn console(&self) -> &OrgConsole<R, S, N> {
        &self.console
    }

    /// Run one command. `Ok(None)` means the command printed nothing.
    pub fn execute(&mut self, cmd: Command) -> anyhow::Result<Option<Value>> {
        debug!(?cmd, "Executing command");
        let c = &mut self.console;

        let out = match cmd {
            Command::List => json!(c.registry().list()),
            Command::Current => json!(c.current()?),
            Command::Render => json!({
                "header": c.header()?,
                "tabs": c.tab_strip(),
                "content": c.render()?,
            }),
            Command::Tab(tab) => {
                c.select_tab(tab);
                json!(c.render()?)
            }
            Command::Select(id) => json!(c.select_org(&id)?),
            Command::Toggle(enabled) => json!(c.toggle_enabled(enabled)?),
            Command::Refresh => {
                c.refresh();
                return Ok(None);
            }
            Command::Create => {
                c.open_create();
                json!(c.create_dialog().draft())
            }
            Command::Edit => {
                c.open_edit()?;
                json!(c.edit_dialog().draft())
            }
            Command::Switch => {
                c.open_change_org()?;
                json!({
                    "selected": c.change_org_dialog().selected(),
                    "options": c.org_options()?,
                })
            }
            Command::Delete => {
                c.request_delete()?;
                json!({ "target": c.delete_dialog().target() })
            }
            Command::SsoAdd => {
                c.open_sso_add();
                json!(c.sso_dialog().draft())
            }
            Command::SsoEdit(id) => {
                c.open_sso_edit(&id)?;
                json!(c.sso_dialog().draft())
            }
            Command::Set { field, value } => {
                c.set_field(&field, &value)?;
                return Ok(None);
            }
            Command::Pick(id) => {
                c.pick_org(&id)?;
                json!({ "selected": c.change_org_dialog().selected() })
            }
            Command::Confirm => match c.confirm()? {
                Confirmed::Created(org) => json!({ "created": org }),
                Confirmed::Updated(org) => json!({ "updated": org }),
                Confirmed::Selected(org) => json!({ "selected": org }),
                Confirmed::Deleted(id) => json!({ "deleted": id }),
                Confirmed::SsoSaved(provider) => json!({ "sso_saved": provider }),
            },
            Command::Cancel => {
                c.cancel();
                return Ok(None);
            }
            Command::Sso(query) => json!(c.render_sso(&query)),
            Command::SsoToggle(id) => json!(c.toggle_sso(&id)?),
            Command::SsoDelete(id) => {
                c.delete_sso(&id)?;
                json!({ "deleted": id })
            }
            Command::Drag(id) => {
                c.drag_sso(&id)?;
                return Ok(None);
            }
            Command::Drop(zone) => json!(c.drop_sso(zone)?),
            Command::Notices => json!(self.history),
            Command::Help => Value::String(HELP.to_string()),
            Command::Quit => return Ok(None),
        };
        Ok(Some(out))
    }

    /// Notices raised since the last call, moved into the history.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        let fresh = self.recorder.drain();
        self.history.extend(fresh.iter().cloned());
        fresh
    }

    /// Read commands from `input` until EOF or `quit`.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let cmd = match Command::parse(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "{}", json!({ "error": err.to_string() }))?;
                    continue;
                }
            };
            let quit = cmd == Command::Quit;

            match self.execute(cmd) {
                Ok(Some(value)) => writeln!(output, "{value}")?,
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "Command failed");
                    writeln!(output, "{}", json!({ "error": err.to_string() }))?;
                }
            }
            for notice in self.take_notices() {
                writeln!(output, "{}", json!({ "notice": notice }))?;
            }
            output.flush()?;

            if quit {
                break;
            }
        }
        Ok(())
    }
}
