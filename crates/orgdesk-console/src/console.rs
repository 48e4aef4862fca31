//! Console state container.
//!
//! Owns the registry, the SSO store, the tab state and every dialog, and
//! routes user intents between them.

use orgdesk_core::error::{OrgDeskError, OrgDeskResult};
use orgdesk_core::models::organization::{Organization, OrganizationId};
use orgdesk_core::models::sso::{SsoProvider, SsoZone};
use orgdesk_core::models::tab::OrgTab;
use orgdesk_core::notify::Notifier;
use orgdesk_core::repository::{OrganizationRepository, SsoProviderRepository};
use tracing::{debug, info};

use crate::config::ConsoleConfig;
use crate::dialog::{
    ChangeOrgDialog, CreateOrgDialog, DeleteOrgDialog, EditProfileDialog, OrgField,
    SsoConfigDialog, SsoDialogMode, SsoField,
};
use crate::drag::SsoDragBoard;
use crate::error::ConsoleError;
use crate::sources::TabSources;
use crate::tabs::TabNavigator;
use crate::views::{self, HeaderView, OrgOption, SsoView, TabItem, TabView};

/// Which dialog is showing. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    CreateOrg,
    EditProfile,
    ChangeOrg,
    DeleteOrg,
    SsoConfig,
}

/// What a successful confirm did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmed {
    Created(Organization),
    Updated(Organization),
    Selected(Organization),
    Deleted(OrganizationId),
    SsoSaved(SsoProvider),
}

/// The admin console.
///
/// Generic over the store implementations so the console has no
/// dependency on how organizations or providers are kept.
pub struct OrgConsole<R, S, N>
where
    R: OrganizationRepository,
    S: SsoProviderRepository,
    N: Notifier,
{
    registry: R,
    sso: S,
    notifier: N,
    sources: TabSources,
    tabs: TabNavigator,
    create: CreateOrgDialog,
    edit: EditProfileDialog,
    change_org: ChangeOrgDialog,
    delete: DeleteOrgDialog,
    sso_config: SsoConfigDialog,
    drag: SsoDragBoard,
}

impl<R, S, N> OrgConsole<R, S, N>
where
    R: OrganizationRepository,
    S: SsoProviderRepository,
    N: Notifier,
{
    pub fn new(
        registry: R,
        sso: S,
        notifier: N,
        sources: TabSources,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            registry,
            sso,
            notifier,
            sources,
            tabs: TabNavigator::new(config.initial_tab),
            create: CreateOrgDialog::new(config.default_tier),
            edit: EditProfileDialog::new(),
            change_org: ChangeOrgDialog::new(),
            delete: DeleteOrgDialog::new(),
            sso_config: SsoConfigDialog::new(),
            drag: SsoDragBoard::new(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn sso_store(&self) -> &S {
        &self.sso
    }

    pub fn current(&self) -> OrgDeskResult<Organization> {
        self.registry.get_current()
    }

    // -----------------------------------------------------------------------
    // Tabs and rendering
    // -----------------------------------------------------------------------

    pub fn active_tab(&self) -> OrgTab {
        self.tabs.active()
    }

    pub fn select_tab(&mut self, tab: OrgTab) -> OrgTab {
        self.tabs.select(tab)
    }

    pub fn tab_strip(&self) -> Vec<TabItem> {
        views::render_tabs(self.tabs.active())
    }

    pub fn header(&self) -> OrgDeskResult<HeaderView> {
        Ok(views::render_header(&self.registry.get_current()?))
    }

    /// Content of the active tab.
    pub fn render(&self) -> OrgDeskResult<TabView> {
        let view = match self.tabs.active() {
            OrgTab::Profile => {
                TabView::Profile(views::render_profile(&self.registry.get_current()?))
            }
            OrgTab::Users => TabView::Users(views::render_users(&self.sources.users)),
            OrgTab::Reports => TabView::Reports(views::render_reports(
                &self.sources.recent_reports,
                &self.sources.scheduled_reports,
            )),
            OrgTab::Usage => TabView::Usage(views::render_usage(&self.sources.usage)),
            OrgTab::Permissions => TabView::Permissions(views::render_permissions(
                &self.sources.roles,
                &self.sources.permissions,
            )),
        };
        Ok(view)
    }

    pub fn org_options(&self) -> OrgDeskResult<Vec<OrgOption>> {
        let current = self.registry.get_current()?;
        Ok(views::render_org_options(&self.registry.list(), &current.id))
    }

    pub fn render_sso(&self, query: &str) -> SsoView {
        views::render_sso(&self.sso, query)
    }

    // -----------------------------------------------------------------------
    // Header actions
    // -----------------------------------------------------------------------

    /// Switch organizations without going through the change-org dialog.
    ///
    /// Open dialogs were seeded from the previous organization and are
    /// closed.
    pub fn select_org(&mut self, id: &OrganizationId) -> OrgDeskResult<Organization> {
        let org = self.registry.select(id)?;
        self.close_all();
        Ok(org)
    }

    pub fn toggle_enabled(&mut self, enabled: bool) -> OrgDeskResult<Organization> {
        let current = self.registry.get_current()?;
        self.registry.set_enabled(&current.id, enabled)
    }

    /// Nothing to reload from; acknowledges the request.
    pub fn refresh(&self) {
        debug!("Refresh requested");
        self.notifier.success("Organization data refreshed");
    }

    // -----------------------------------------------------------------------
    // Dialogs
    // -----------------------------------------------------------------------

    pub fn open_dialog(&self) -> Option<DialogKind> {
        if self.create.is_open() {
            Some(DialogKind::CreateOrg)
        } else if self.edit.is_open() {
            Some(DialogKind::EditProfile)
        } else if self.change_org.is_open() {
            Some(DialogKind::ChangeOrg)
        } else if self.delete.is_open() {
            Some(DialogKind::DeleteOrg)
        } else if self.sso_config.is_open() {
            Some(DialogKind::SsoConfig)
        } else {
            None
        }
    }

    pub fn create_dialog(&self) -> &CreateOrgDialog {
        &self.create
    }

    pub fn edit_dialog(&self) -> &EditProfileDialog {
        &self.edit
    }

    pub fn change_org_dialog(&self) -> &ChangeOrgDialog {
        &self.change_org
    }

    pub fn delete_dialog(&self) -> &DeleteOrgDialog {
        &self.delete
    }

    pub fn sso_dialog(&self) -> &SsoConfigDialog {
        &self.sso_config
    }

    fn close_all(&mut self) {
        self.create.cancel();
        self.edit.cancel();
        self.change_org.cancel();
        self.delete.cancel();
        self.sso_config.cancel();
    }

    pub fn open_create(&mut self) {
        self.close_all();
        self.create.open();
    }

    /// Open the profile editor on the current organization.
    pub fn open_edit(&mut self) -> OrgDeskResult<()> {
        let current = self.registry.get_current()?;
        self.close_all();
        self.edit.open(&current);
        Ok(())
    }

    pub fn open_change_org(&mut self) -> OrgDeskResult<()> {
        let current = self.registry.get_current()?;
        self.close_all();
        self.change_org.open(&current.id);
        Ok(())
    }

    /// Ask for confirmation before deleting the current organization.
    pub fn request_delete(&mut self) -> OrgDeskResult<()> {
        let current = self.registry.get_current()?;
        self.close_all();
        self.delete.open(&current);
        self.notifier
            .error(&format!("Deleting {} requires confirmation", current.name));
        Ok(())
    }

    pub fn open_sso_add(&mut self) {
        self.close_all();
        self.sso_config.open_add();
    }

    pub fn open_sso_edit(&mut self, provider_id: &str) -> OrgDeskResult<()> {
        let provider = self.sso.get_by_id(provider_id)?;
        self.close_all();
        self.sso_config.open_edit(&provider);
        Ok(())
    }

    /// Type `value` into `field` of whichever dialog is open.
    pub fn set_field(&mut self, field: &str, value: &str) -> OrgDeskResult<()> {
        match self.open_dialog() {
            Some(DialogKind::CreateOrg) => {
                self.create.update_field(field.parse::<OrgField>()?, value)
            }
            Some(DialogKind::EditProfile) => {
                self.edit.update_field(field.parse::<OrgField>()?, value)
            }
            Some(DialogKind::SsoConfig) => {
                self.sso_config.update_field(field.parse::<SsoField>()?, value)
            }
            Some(DialogKind::ChangeOrg) | Some(DialogKind::DeleteOrg) => {
                Err(ConsoleError::UnknownField(field.to_string()).into())
            }
            None => Err(ConsoleError::DialogClosed.into()),
        }
    }

    /// Highlight an organization in the change-org dialog.
    pub fn pick_org(&mut self, id: &OrganizationId) -> OrgDeskResult<()> {
        self.change_org.pick(&self.registry, id)
    }

    pub fn confirm(&mut self) -> OrgDeskResult<Confirmed> {
        let confirmed = match self.open_dialog() {
            Some(DialogKind::CreateOrg) => {
                Confirmed::Created(self.create.confirm(&mut self.registry)?)
            }
            Some(DialogKind::EditProfile) => {
                Confirmed::Updated(self.edit.confirm(&mut self.registry)?)
            }
            Some(DialogKind::ChangeOrg) => {
                Confirmed::Selected(self.change_org.confirm(&mut self.registry)?)
            }
            Some(DialogKind::DeleteOrg) => match self.delete.confirm(&mut self.registry) {
                Ok(id) => Confirmed::Deleted(id),
                Err(err @ OrgDeskError::LastOrganization) => {
                    self.notifier.error(&err.to_string());
                    return Err(err);
                }
                Err(err) => return Err(err),
            },
            Some(DialogKind::SsoConfig) => {
                let adding = matches!(
                    self.sso_config.draft().map(|d| &d.mode),
                    Some(SsoDialogMode::Add)
                );
                let provider = self.sso_config.confirm(&mut self.sso)?;
                self.notifier.success(if adding {
                    "SSO provider added"
                } else {
                    "SSO settings updated"
                });
                Confirmed::SsoSaved(provider)
            }
            None => return Err(ConsoleError::DialogClosed.into()),
        };

        info!(result = ?confirmed, "Dialog confirmed");
        Ok(confirmed)
    }

    /// Close whatever dialog is open and drop a pending drag.
    pub fn cancel(&mut self) {
        if let Some(kind) = self.open_dialog() {
            debug!(?kind, "Dialog cancelled");
        }
        self.close_all();
        self.drag.cancel_drag();
    }

    // -----------------------------------------------------------------------
    // SSO providers
    // -----------------------------------------------------------------------

    pub fn toggle_sso(&mut self, provider_id: &str) -> OrgDeskResult<SsoProvider> {
        self.sso.toggle_active(provider_id)
    }

    /// Delete a provider. An edit dialog or drag on it is dropped too.
    pub fn delete_sso(&mut self, provider_id: &str) -> OrgDeskResult<()> {
        self.sso.delete(provider_id)?;

        let editing = matches!(
            self.sso_config.draft().map(|d| &d.mode),
            Some(SsoDialogMode::Edit(id)) if id == provider_id
        );
        if editing {
            self.sso_config.cancel();
        }
        if self.drag.dragging() == Some(provider_id) {
            self.drag.cancel_drag();
        }
        Ok(())
    }

    pub fn drag_sso(&mut self, provider_id: &str) -> OrgDeskResult<()> {
        // Only providers the table lists can be picked up.
        self.sso.get_by_id(provider_id)?;
        self.drag.drag_start(provider_id);
        Ok(())
    }

    pub fn dragging_sso(&self) -> Option<&str> {
        self.drag.dragging()
    }

    pub fn drop_sso(&mut self, zone: SsoZone) -> OrgDeskResult<Option<SsoProvider>> {
        self.drag.drop_on(zone, &mut self.sso)
    }
}
