use serde::{Deserialize, Serialize};

/// Roadmap groupings for the learning tracker. Phases own months own
/// weeks; tasks point back at all three by id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Phase {
    pub phase_id: String,
    pub phase_title: String,
    #[serde(default)]
    pub months: Vec<Month>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Month {
    pub month_id: String,
    pub month_title: String,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Week {
    pub week_id: String,
    pub week_title: String,
    #[serde(default)]
    pub focus: String,
}
