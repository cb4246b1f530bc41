//! Plain data row types written by output backends.

/// One settler at one snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:       u64,
    pub day:        u64,
    pub hour:       f32,
    pub agent_id:   u32,
    pub name:       String,
    pub profession: &'static str,
    pub state:      &'static str,
    /// Empty until the first transition.
    pub previous:   Option<&'static str>,
    pub x:          f32,
    pub z:          f32,
    pub heading:    f32,
    pub hunger:     f32,
    pub energy:     f32,
    pub happiness:  f32,
    pub health:     f32,
    pub home:       Option<u32>,
    pub workplace:  Option<u32>,
    pub experience: u32,
    pub hidden:     bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub transitions:  u64,
}
