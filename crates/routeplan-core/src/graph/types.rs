use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// Identifier of a node (airport) in a [`GraphStore`](super::GraphStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(NodeId).map_err(|_| {
            RouteError::UsageError(format!(
                "invalid node id '{}' (expected a non-negative integer)",
                s
            ))
        })
    }
}

/// Handle of an edge in the store's edge arena (its creation index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// The three independent weights carried by every edge.
///
/// Weights are unsigned; [`Weights::new`] is the checked conversion from
/// signed caller input and rejects negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Weights {
    pub distance: u64,
    pub duration: u64,
    pub cost: u64,
}

impl Weights {
    pub fn new(distance: i64, duration: i64, cost: i64) -> Result<Self> {
        Ok(Weights {
            distance: non_negative("distance", distance)?,
            duration: non_negative("duration", duration)?,
            cost: non_negative("cost", cost)?,
        })
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| RouteError::InvalidWeight { field, value })
}

/// A directed route from `origin` to `destination`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub origin: NodeId,
    pub destination: NodeId,
    #[serde(flatten)]
    pub weights: Weights,
}

impl Edge {
    /// Weight of this edge under the given criterion
    pub fn weight(&self, criterion: Criterion) -> u64 {
        criterion.weight(&self.weights)
    }
}

/// The weight dimension a path query optimises.
///
/// Deserialization goes through [`FromStr`], so config files accept the
/// same names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Criterion {
    Distance,
    Duration,
    Cost,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Distance, Criterion::Duration, Criterion::Cost];

    /// Select this criterion's weight from an edge's weights
    pub fn weight(&self, weights: &Weights) -> u64 {
        match self {
            Criterion::Distance => weights.distance,
            Criterion::Duration => weights.duration,
            Criterion::Cost => weights.cost,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Distance => "distance",
            Criterion::Duration => "duration",
            Criterion::Cost => "cost",
        }
    }

    /// Human label used in route reports
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Distance => "distance",
            Criterion::Duration => "travel time",
            Criterion::Cost => "cost",
        }
    }
}

impl FromStr for Criterion {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(Criterion::Distance),
            "duration" | "time" => Ok(Criterion::Duration),
            "cost" => Ok(Criterion::Cost),
            _ => Err(RouteError::InvalidCriterion(s.to_string())),
        }
    }
}

impl TryFrom<String> for Criterion {
    type Error = RouteError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered node ids from source to destination, inclusive.
/// Empty when no path exists.
pub type PathResult = Vec<NodeId>;
