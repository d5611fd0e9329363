use crate::http_handler::http_response::unit_type_list::UnitType;
use crate::http_handler::http_response::vessel_list::VesselOption;
use crate::voyage_control::gateway::FetchError;

/// Load lifecycle of one backend reference list. Each list fails or loads
/// on its own; one failing never blocks the other.
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Pending,
    Loaded(Vec<T>),
    Failed(FetchError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self { LoadState::Pending }
}

impl<T> LoadState<T> {
    /// The loaded items, or an empty slice while pending or failed.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Loaded(items) => items,
            LoadState::Pending | LoadState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            LoadState::Pending | LoadState::Loaded(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool { matches!(self, LoadState::Loaded(_)) }
}

/// The two backend reference lists the creation workflow selects from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    vessels: LoadState<VesselOption>,
    unit_types: LoadState<UnitType>,
}

impl ReferenceData {
    pub fn vessels(&self) -> &[VesselOption] { self.vessels.items() }
    pub fn unit_types(&self) -> &[UnitType] { self.unit_types.items() }
    pub fn vessel_state(&self) -> &LoadState<VesselOption> { &self.vessels }
    pub fn unit_type_state(&self) -> &LoadState<UnitType> { &self.unit_types }

    pub(crate) fn set_vessels(&mut self, state: LoadState<VesselOption>) { self.vessels = state; }
    pub(crate) fn set_unit_types(&mut self, state: LoadState<UnitType>) {
        self.unit_types = state;
    }
}
