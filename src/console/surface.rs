use std::fmt::{Display, Formatter};

use crate::cli::CreateArgs;
use crate::console::table;
use crate::http_handler::http_response::unit_type_list::UnitType;
use crate::http_handler::http_response::vessel_list::VesselOption;
use crate::keychain::Keychain;
use crate::voyage_control::{
    DeleteError, DraftField, FetchError, Notice, NoticeLevel, SubmitError, SubmitOutcome,
};
use crate::{error, info, log};

/// The [`ConsoleSurface`] executes one console command against the backend:
/// it owns the presentation side (tables and notices) and drives the voyage
/// controllers underneath.
pub(crate) struct ConsoleSurface {
    keychain: Keychain,
}

impl ConsoleSurface {
    pub(crate) fn new(keychain: Keychain) -> Self { Self { keychain } }

    /// Renders the stored voyages.
    pub(crate) async fn run_list(&self) -> Result<(), ConsoleError> {
        let voyages = self.keychain.board().voyages().await.map_err(ConsoleError::Fetch)?;
        if voyages.is_empty() {
            log!("No voyages stored");
        } else {
            println!("{}", table::render_voyage_table(&voyages));
        }
        Ok(())
    }

    /// Renders the selectable vessels.
    pub(crate) async fn run_vessels(&self) -> Result<(), ConsoleError> {
        let vessels =
            self.keychain.gateway().list_vessels().await.map_err(ConsoleError::Fetch)?;
        println!("{}", table::render_vessel_table(&vessels));
        Ok(())
    }

    /// Renders the selectable unit types.
    pub(crate) async fn run_unit_types(&self) -> Result<(), ConsoleError> {
        let unit_types =
            self.keychain.gateway().list_unit_types().await.map_err(ConsoleError::Fetch)?;
        println!("{}", table::render_unit_type_table(&unit_types));
        Ok(())
    }

    /// Runs one full creation workflow: load reference data, resolve the
    /// operator's vessel and unit type inputs against it, fill the draft
    /// and submit. On confirmation the refreshed voyage list is rendered.
    pub(crate) async fn run_create(&self, args: CreateArgs) -> Result<(), ConsoleError> {
        let workflow = self.keychain.workflow();
        workflow.initialize().await;

        // One retry per list before resolution gives up on it.
        if !workflow.reference().await.vessel_state().is_loaded() {
            workflow.refresh_vessels().await;
        }
        if !workflow.reference().await.unit_type_state().is_loaded() {
            workflow.refresh_unit_types().await;
        }

        let reference = workflow.reference().await;
        let vessel_id = resolve_vessel(reference.vessels(), &args.vessel)?;
        let mut unit_type_ids: Vec<String> = Vec::new();
        for raw in &args.unit_type {
            let id = resolve_unit_type(reference.unit_types(), raw)?;
            if !unit_type_ids.contains(&id) {
                unit_type_ids.push(id);
            }
        }

        workflow.update_field(DraftField::Departure, args.departure).await;
        workflow.update_field(DraftField::Arrival, args.arrival).await;
        workflow.update_field(DraftField::PortOfLoading, args.loading_port).await;
        workflow.update_field(DraftField::PortOfDischarge, args.discharge_port).await;
        workflow.update_field(DraftField::Vessel, vessel_id).await;
        for id in unit_type_ids {
            workflow.toggle_unit_type(id).await;
        }

        let mut changes = workflow.subscribe();
        match workflow.submit().await {
            Ok(SubmitOutcome::Created) => {
                self.show(&Notice::voyage_created());
                if changes.recv().await.is_ok() {
                    self.render_list_after_change().await;
                }
                workflow.close().await;
                Ok(())
            }
            Ok(outcome) => {
                log!("Creation ended without effect: {outcome}");
                Ok(())
            }
            Err(err) => {
                match &err {
                    SubmitError::Validation(cause) => self.show(&Notice::error(cause.to_string())),
                    SubmitError::Submission(_) => self.show(&Notice::create_failed()),
                }
                Err(ConsoleError::Submit(err))
            }
        }
    }

    /// Deletes one voyage by id and renders the refreshed list.
    pub(crate) async fn run_delete(&self, id: &str) -> Result<(), ConsoleError> {
        let board = self.keychain.board();
        let mut changes = board.subscribe();
        match board.delete(id).await {
            Ok(()) => {
                if changes.recv().await.is_ok() {
                    self.render_list_after_change().await;
                }
                Ok(())
            }
            Err(err) => {
                self.show(&Notice::delete_failed());
                Err(ConsoleError::Delete(err))
            }
        }
    }

    /// Re-fetches and renders the voyage list after a confirmed change.
    /// Failing here does not fail the command that caused the change.
    async fn render_list_after_change(&self) {
        match self.keychain.board().voyages().await {
            Ok(voyages) => println!("{}", table::render_voyage_table(&voyages)),
            Err(err) => log!("Skipping list refresh: {err}"),
        }
    }

    fn show(&self, notice: &Notice) {
        match notice.level() {
            NoticeLevel::Info => info!("{}", notice.message()),
            NoticeLevel::Error => error!("{}", notice.message()),
        }
    }
}

/// Maps the operator's vessel input to a backend id: an exact id match
/// wins, otherwise a case-insensitive unique name match.
fn resolve_vessel(vessels: &[VesselOption], input: &str) -> Result<String, ResolveError> {
    if let Some(hit) = vessels.iter().find(|vessel| vessel.value() == input) {
        return Ok(String::from(hit.value()));
    }
    let matches = vessels
        .iter()
        .filter(|vessel| vessel.label().eq_ignore_ascii_case(input))
        .collect::<Vec<_>>();
    match matches.as_slice() {
        [hit] => Ok(String::from(hit.value())),
        [] => Err(ResolveError::UnknownVessel(String::from(input))),
        _ => Err(ResolveError::AmbiguousVessel(String::from(input))),
    }
}

/// Same resolution scheme as [`resolve_vessel`], for unit types.
fn resolve_unit_type(unit_types: &[UnitType], input: &str) -> Result<String, ResolveError> {
    if let Some(hit) = unit_types.iter().find(|unit_type| unit_type.id() == input) {
        return Ok(String::from(hit.id()));
    }
    let matches = unit_types
        .iter()
        .filter(|unit_type| unit_type.name().eq_ignore_ascii_case(input))
        .collect::<Vec<_>>();
    match matches.as_slice() {
        [hit] => Ok(String::from(hit.id())),
        [] => Err(ResolveError::UnknownUnitType(String::from(input))),
        _ => Err(ResolveError::AmbiguousUnitType(String::from(input))),
    }
}

/// The operator's vessel or unit type input could not be mapped to a
/// backend id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolveError {
    UnknownVessel(String),
    AmbiguousVessel(String),
    UnknownUnitType(String),
    AmbiguousUnitType(String),
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnknownVessel(input) => {
                write!(f, "no vessel matches '{input}'")
            }
            ResolveError::AmbiguousVessel(input) => {
                write!(f, "vessel name '{input}' is ambiguous, pass its id instead")
            }
            ResolveError::UnknownUnitType(input) => {
                write!(f, "no unit type matches '{input}'")
            }
            ResolveError::AmbiguousUnitType(input) => {
                write!(f, "unit type name '{input}' is ambiguous, pass its id instead")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Why a console command failed; mapped to a non-zero exit code by `main`.
#[derive(Debug)]
pub(crate) enum ConsoleError {
    Fetch(FetchError),
    Submit(SubmitError),
    Delete(DeleteError),
    Resolve(ResolveError),
}

impl From<ResolveError> for ConsoleError {
    fn from(err: ResolveError) -> Self { ConsoleError::Resolve(err) }
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Fetch(err) => write!(f, "{err}"),
            ConsoleError::Submit(err) => write!(f, "{err}"),
            ConsoleError::Delete(err) => write!(f, "{err}"),
            ConsoleError::Resolve(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessels() -> Vec<VesselOption> {
        serde_json::from_str(
            r#"[{"value":"cvs1","label":"MV Aurora"},
                {"value":"cvs2","label":"MV Borealis"},
                {"value":"cvs3","label":"MV Aurora"}]"#,
        )
        .unwrap()
    }

    fn unit_types() -> Vec<UnitType> {
        serde_json::from_str(
            r#"[{"id":"ut1","name":"Reefer","defaultLength":13.6},
                {"id":"ut2","name":"Low Loader","defaultLength":10.0}]"#,
        )
        .unwrap()
    }

    #[test]
    fn resolve_vessel_prefers_exact_id() {
        assert_eq!(resolve_vessel(&vessels(), "cvs2").unwrap(), "cvs2");
    }

    #[test]
    fn resolve_vessel_matches_unique_name_case_insensitively() {
        assert_eq!(resolve_vessel(&vessels(), "mv borealis").unwrap(), "cvs2");
    }

    #[test]
    fn resolve_vessel_rejects_duplicate_names() {
        assert_eq!(
            resolve_vessel(&vessels(), "MV Aurora"),
            Err(ResolveError::AmbiguousVessel(String::from("MV Aurora")))
        );
    }

    #[test]
    fn resolve_vessel_rejects_unknown_input() {
        assert_eq!(
            resolve_vessel(&vessels(), "MV Ghost"),
            Err(ResolveError::UnknownVessel(String::from("MV Ghost")))
        );
    }

    #[test]
    fn resolve_unit_type_by_id_and_name() {
        assert_eq!(resolve_unit_type(&unit_types(), "ut1").unwrap(), "ut1");
        assert_eq!(resolve_unit_type(&unit_types(), "low loader").unwrap(), "ut2");
        assert_eq!(
            resolve_unit_type(&unit_types(), "Flatbed"),
            Err(ResolveError::UnknownUnitType(String::from("Flatbed")))
        );
    }
}
