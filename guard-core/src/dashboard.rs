use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsCounts {
    pub guards: u64,
    pub sites: u64,
    pub agencies: u64,
    pub patrol_officers: u64,
}

impl AnalyticsCounts {
    /// Label/value pairs in card order.
    pub fn cards(&self) -> [(&'static str, u64); 4] {
        [
            ("Guards", self.guards),
            ("Sites", self.sites),
            ("Agencies", self.agencies),
            ("Patrol Officers", self.patrol_officers),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentStatusCounts {
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
}

impl IncidentStatusCounts {
    pub fn total(&self) -> u64 {
        self.open + self.in_progress + self.resolved + self.closed
    }

    pub fn count_for(&self, filter: StatusFilter) -> u64 {
        match filter {
            StatusFilter::All => self.total(),
            StatusFilter::Open => self.open,
            StatusFilter::InProgress => self.in_progress,
            StatusFilter::Resolved => self.resolved,
            StatusFilter::Closed => self.closed,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Open,
        StatusFilter::InProgress,
        StatusFilter::Resolved,
        StatusFilter::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Open => "Open",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Resolved => "Resolved",
            StatusFilter::Closed => "Closed",
        }
    }
}
