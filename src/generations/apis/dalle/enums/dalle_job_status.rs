pub enum DalleJobStatus {
    NotRunning,
    Running,
    Succeeded,
    Failed,
    Canceled,
    Deleted,
}

impl DalleJobStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::NotRunning => "notRunning",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Deleted => "deleted",
        }
    }
}
