//! Named screen routes — the 5-node navigation graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five screens of the flow.
///
/// Edges are unrestricted: any screen can navigate to any other by name.
/// This is a pointer into a static graph, not a call stack — there is no
/// back-stack semantics at this level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenRoute {
    Home,
    Documento,
    Biometria,
    Facial,
    Formulario,
}

impl ScreenRoute {
    /// All routes in the navigation table.
    pub const ALL: [ScreenRoute; 5] = [
        ScreenRoute::Home,
        ScreenRoute::Documento,
        ScreenRoute::Biometria,
        ScreenRoute::Facial,
        ScreenRoute::Formulario,
    ];

    /// The route name as registered in the navigation table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenRoute::Home => "home",
            ScreenRoute::Documento => "documento",
            ScreenRoute::Biometria => "biometria",
            ScreenRoute::Facial => "facial",
            ScreenRoute::Formulario => "formulario",
        }
    }
}

impl fmt::Display for ScreenRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A navigation request named a route that is not in the table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown screen route: {0}")]
pub struct RouteParseError(pub String);

impl FromStr for ScreenRoute {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(ScreenRoute::Home),
            "documento" => Ok(ScreenRoute::Documento),
            "biometria" => Ok(ScreenRoute::Biometria),
            "facial" => Ok(ScreenRoute::Facial),
            "formulario" => Ok(ScreenRoute::Formulario),
            other => Err(RouteParseError(other.to_string())),
        }
    }
}
