use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundType {
    Qualifying,
    Flight,
    Playoff,
    Tournament,
}

impl FromStr for RoundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUALIFYING" => Ok(RoundType::Qualifying),
            "FLIGHT" => Ok(RoundType::Flight),
            "PLAYOFF" => Ok(RoundType::Playoff),
            "TOURNAMENT" => Ok(RoundType::Tournament),
            other => Err(format!("unknown round type '{other}'")),
        }
    }
}

impl fmt::Display for RoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundType::Qualifying => "QUALIFYING",
            RoundType::Flight => "FLIGHT",
            RoundType::Playoff => "PLAYOFF",
            RoundType::Tournament => "TOURNAMENT",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringType {
    Individual,
    Group,
}

impl fmt::Display for ScoringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringType::Individual => "INDIVIDUAL",
            ScoringType::Group => "GROUP",
        };
        write!(f, "{s}")
    }
}

/// One entry in a golfer's scoring record. Rounds come out of the round
/// tables; qualifying scores are converted into the same shape with
/// `qualifying_score_id` set and `round_id` unset.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundSummary {
    pub round_id: Option<i64>,
    pub qualifying_score_id: Option<i64>,
    pub golfer_id: i64,
    pub golfer_name: String,
    pub date_played: NaiveDate,
    pub round_type: RoundType,
    pub playing_handicap: i64,
    pub course_name: String,
    pub track_name: String,
    pub tee_color: String,
    pub tee_gender: String,
    pub tee_par: i64,
    pub rating: f64,
    pub slope: i64,
    pub gross_score: i64,
    pub adjusted_gross_score: i64,
    pub net_score: i64,
    pub score_differential: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HandicapIndexData {
    pub active_date: NaiveDateTime,
    pub active_handicap_index: Option<f64>,
    pub pending_handicap_index: Option<f64>,
    pub active_rounds: Option<Vec<RoundSummary>>,
    pub pending_rounds: Option<Vec<RoundSummary>>,
}
