//! Player context: who is asking, and what they are able to do.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::ids::{DataCenterId, WorldId};

/// Disciplines that gate crafting and gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Job {
    /// Carpenter.
    Crp,
    /// Blacksmith.
    Bsm,
    /// Armorer.
    Arm,
    /// Goldsmith.
    Gsm,
    /// Leatherworker.
    Ltw,
    /// Weaver.
    Wvr,
    /// Alchemist.
    Alc,
    /// Culinarian.
    Cul,
    /// Miner.
    Min,
    /// Botanist.
    Btn,
    /// Fisher.
    Fsh,
}

impl Job {
    /// Short uppercase abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Job::Crp => "CRP",
            Job::Bsm => "BSM",
            Job::Arm => "ARM",
            Job::Gsm => "GSM",
            Job::Ltw => "LTW",
            Job::Wvr => "WVR",
            Job::Alc => "ALC",
            Job::Cul => "CUL",
            Job::Min => "MIN",
            Job::Btn => "BTN",
            Job::Fsh => "FSH",
        }
    }

    /// Whether this job gathers rather than crafts.
    pub const fn is_gatherer(self) -> bool {
        matches!(self, Job::Min | Job::Btn | Job::Fsh)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Job {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_JOBS
            .iter()
            .copied()
            .find(|job| job.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown job '{s}'"))
    }
}

/// Per-request description of the player. Never mutated by the resolvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerContext {
    pub home_world: WorldId,
    pub data_center: DataCenterId,
    /// Grand Company rank, gates seal exchanges.
    #[serde(default)]
    pub gc_rank: u8,
    #[serde(default)]
    pub jobs: HashMap<Job, u8>,
    /// Names of the player's own retainers.
    #[serde(default)]
    pub retainers: Vec<String>,
}

impl PlayerContext {
    /// Create a context with no job levels, rank 0 and no retainers.
    pub fn new(home_world: WorldId, data_center: DataCenterId) -> Self {
        Self {
            home_world,
            data_center,
            gc_rank: 0,
            jobs: HashMap::new(),
            retainers: Vec::new(),
        }
    }

    /// Set the Grand Company rank.
    pub fn with_gc_rank(mut self, rank: u8) -> Self {
        self.gc_rank = rank;
        self
    }

    /// Set a job level.
    pub fn with_job(mut self, job: Job, level: u8) -> Self {
        self.jobs.insert(job, level);
        self
    }

    /// Set every job to the same level.
    pub fn with_all_jobs(mut self, level: u8) -> Self {
        for job in ALL_JOBS {
            self.jobs.insert(job, level);
        }
        self
    }

    /// Register one of the player's retainers.
    pub fn with_retainer(mut self, name: impl Into<String>) -> Self {
        self.retainers.push(name.into());
        self
    }

    /// Level of a job, 0 when unknown.
    pub fn job_level(&self, job: Job) -> u8 {
        self.jobs.get(&job).copied().unwrap_or(0)
    }

    /// Whether the named retainer belongs to this player.
    pub fn owns_retainer(&self, name: &str) -> bool {
        self.retainers.iter().any(|r| r == name)
    }
}

pub const ALL_JOBS: [Job; 11] = [
    Job::Crp,
    Job::Bsm,
    Job::Arm,
    Job::Gsm,
    Job::Ltw,
    Job::Wvr,
    Job::Alc,
    Job::Cul,
    Job::Min,
    Job::Btn,
    Job::Fsh,
];
