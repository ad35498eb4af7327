//! Error types, one enum per layer.

/// Inconsistent network data found while loading or inspecting the catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    #[error("stop {0:?} is defined more than once")]
    DuplicateStop(String),

    #[error("bus {0:?} is defined more than once")]
    DuplicateBus(String),

    #[error("bus {bus:?} refers to unknown stop {stop:?}")]
    UnknownStopInBus { bus: String, stop: String },

    #[error("stop {from:?} has a road distance to unknown stop {to:?}")]
    UnknownStopInDistance { from: String, to: String },

    #[error("bus {0:?} needs at least two stops")]
    TooFewStops(String),

    #[error("no road distance between stops {from:?} and {to:?}")]
    MissingRoadDistance { from: String, to: String },
}

/// Invalid routing settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("bus wait time must not be negative, got {0}")]
    NegativeWaitTime(i64),

    #[error("bus velocity must be a positive number, got {0}")]
    InvalidVelocity(f64),
}

/// Failure while constructing the routing graph. Fatal: no query may be answered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("bus {bus:?}: {source}")]
    Catalogue {
        bus: String,
        #[source]
        source: CatalogueError,
    },
}

/// Failure while answering a request document.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogueError::MissingRoadDistance {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(
            err.to_string(),
            "no road distance between stops \"A\" and \"B\""
        );

        let err = BuildError::Catalogue {
            bus: "14".into(),
            source: err,
        };
        assert_eq!(
            err.to_string(),
            "bus \"14\": no road distance between stops \"A\" and \"B\""
        );

        let err = SettingsError::NegativeWaitTime(-3);
        assert_eq!(
            err.to_string(),
            "bus wait time must not be negative, got -3"
        );
    }
}
