/// Which project, if any, the details modal shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(u32),
}

impl ModalState {
    pub fn open(&mut self, project_id: u32) {
        *self = ModalState::Open(project_id);
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn project_id(&self) -> Option<u32> {
        match self {
            ModalState::Open(id) => Some(*id),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}
