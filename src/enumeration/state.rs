/// Odometer over operator indices shared by both enumeration strategies
#[derive(Debug, Clone)]
pub struct AssignmentState {
    pub(crate) indices: Vec<usize>,
    pub(crate) exhausted: bool,
}

impl AssignmentState {
    pub fn new(gaps: usize) -> Self {
        Self {
            indices: vec![0; gaps],
            exhausted: false,
        }
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
