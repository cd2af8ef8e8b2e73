//! Services

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing service identifiers or years.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseServiceError {
    /// The string is not a known service identifier.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The year is not one of the supported pricing years.
    #[error("unsupported year: {0}")]
    UnsupportedYear(u16),

    /// The year string is not a number.
    #[error("invalid year: {0}")]
    InvalidYear(String),
}

/// A bookable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Photography coverage
    Photography,

    /// Video recording coverage
    VideoRecording,

    /// Wedding photo session
    WeddingSession,

    /// Blu-ray package, an extra for video recording
    BlurayPackage,

    /// Coverage of a second event day, an extra for photography or video
    TwoDayEvent,
}

impl ServiceType {
    /// Every service type, in declaration order.
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Photography,
        ServiceType::VideoRecording,
        ServiceType::WeddingSession,
        ServiceType::BlurayPackage,
        ServiceType::TwoDayEvent,
    ];

    /// Stable identifier, as used in fixtures and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceType::Photography => "photography",
            ServiceType::VideoRecording => "video_recording",
            ServiceType::WeddingSession => "wedding_session",
            ServiceType::BlurayPackage => "bluray_package",
            ServiceType::TwoDayEvent => "two_day_event",
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ServiceType::Photography => "Photography",
            ServiceType::VideoRecording => "Video recording",
            ServiceType::WeddingSession => "Wedding session",
            ServiceType::BlurayPackage => "Blu-ray package",
            ServiceType::TwoDayEvent => "Two-day event",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceType {
    type Err = ParseServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace('-', "_");

        ServiceType::ALL
            .into_iter()
            .find(|service| service.as_str() == normalised)
            .ok_or_else(|| ParseServiceError::UnknownService(s.to_string()))
    }
}

/// A year with its own price list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum ServiceYear {
    /// 2020
    Y2020,

    /// 2021
    Y2021,

    /// 2022
    Y2022,
}

impl ServiceYear {
    /// Every supported year, oldest first.
    pub const ALL: [ServiceYear; 3] = [
        ServiceYear::Y2020,
        ServiceYear::Y2021,
        ServiceYear::Y2022,
    ];

    /// The calendar year.
    pub const fn year(self) -> u16 {
        match self {
            ServiceYear::Y2020 => 2020,
            ServiceYear::Y2021 => 2021,
            ServiceYear::Y2022 => 2022,
        }
    }
}

impl TryFrom<u16> for ServiceYear {
    type Error = ParseServiceError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        ServiceYear::ALL
            .into_iter()
            .find(|candidate| candidate.year() == year)
            .ok_or(ParseServiceError::UnsupportedYear(year))
    }
}

impl From<ServiceYear> for u16 {
    fn from(year: ServiceYear) -> Self {
        year.year()
    }
}

impl FromStr for ServiceYear {
    type Err = ParseServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .trim()
            .parse()
            .map_err(|_err| ParseServiceError::InvalidYear(s.to_string()))?;

        ServiceYear::try_from(year)
    }
}

impl fmt::Display for ServiceYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

/// What to do with a service in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceAction {
    /// Add the service to the selection.
    Select,

    /// Remove the service from the selection.
    Deselect,
}

/// A single select or deselect event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceUpdate {
    /// The action to perform
    pub action: ServiceAction,

    /// The service the action applies to
    pub service: ServiceType,
}

impl ServiceUpdate {
    /// Select the given service.
    pub const fn select(service: ServiceType) -> Self {
        ServiceUpdate {
            action: ServiceAction::Select,
            service,
        }
    }

    /// Deselect the given service.
    pub const fn deselect(service: ServiceType) -> Self {
        ServiceUpdate {
            action: ServiceAction::Deselect,
            service,
        }
    }
}
