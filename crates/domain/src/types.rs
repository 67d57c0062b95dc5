// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_OF_DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// How a court is enclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CourtType {
    /// Fully enclosed court.
    #[default]
    Indoor,
    /// Open-air court.
    Outdoor,
    /// Roofed court open at the sides.
    Covered,
}

impl CourtType {
    /// Converts this court type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Covered => "covered",
        }
    }
}

impl FromStr for CourtType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indoor" => Ok(Self::Indoor),
            "outdoor" => Ok(Self::Outdoor),
            "covered" => Ok(Self::Covered),
            _ => Err(DomainError::InvalidCourtType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CourtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Playing surface of a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Glass-walled court.
    #[default]
    Glass,
    /// Concrete-walled court.
    Concrete,
    /// Artificial grass carpet.
    ArtificialGrass,
}

impl Surface {
    /// Converts this surface to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Concrete => "concrete",
            Self::ArtificialGrass => "artificial_grass",
        }
    }
}

impl FromStr for Surface {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glass" => Ok(Self::Glass),
            "concrete" => Ok(Self::Concrete),
            "artificial_grass" => Ok(Self::ArtificialGrass),
            _ => Err(DomainError::InvalidSurface(s.to_string())),
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Currency in which a club prices its courts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    #[default]
    Eur,
    /// US dollar.
    Usd,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Converts this currency to its ISO 4217 code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        }
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            _ => Err(DomainError::InvalidCurrency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of an administrative user.
///
/// Super admins manage every club. Club admins are scoped to the club
/// recorded on their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Platform-wide administrator.
    SuperAdmin,
    /// Administrator of a single club.
    ClubAdmin,
}

impl AdminRole {
    /// Converts this role to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::ClubAdmin => "club_admin",
        }
    }
}

impl FromStr for AdminRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "club_admin" => Ok(Self::ClubAdmin),
            _ => Err(DomainError::InvalidAdminRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeOfDay` if the input is not a valid
/// 24-hour `HH:MM` value.
pub fn parse_time_of_day(input: &str) -> Result<Time, DomainError> {
    Time::parse(input.trim(), TIME_OF_DAY_FORMAT)
        .map_err(|_| DomainError::InvalidTimeOfDay(input.to_string()))
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input is not a valid date.
pub fn parse_date(input: &str) -> Result<Date, DomainError> {
    Date::parse(input.trim(), DATE_FORMAT).map_err(|e| DomainError::InvalidDate {
        input: input.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`, the form used in query strings
/// and request bodies.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the date cannot be formatted.
pub fn format_date(date: Date) -> Result<String, DomainError> {
    date.format(DATE_FORMAT)
        .map_err(|e| DomainError::InvalidDate {
            input: date.to_string(),
            error: e.to_string(),
        })
}
