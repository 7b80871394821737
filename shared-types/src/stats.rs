use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCounts {
    pub new: usize,
    pub contacted: usize,
    pub interested: usize,
    pub not_interested: usize,
    pub converted: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarrierCounts {
    pub telenor: usize,
    pub tele2: usize,
    pub tre: usize,
    pub telia: usize,
    pub other: usize,
}

/// Dashboard numbers over all stored contacts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactStats {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_carrier: CarrierCounts,
    pub with_notes: usize,
}
