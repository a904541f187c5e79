//! Decorator pipelines assembled from a declarative list of stages

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{
    BoxedCursor, CountingCursor, CursorExt, Element, FilterCursor, Journal, LoggingCursor,
    StepCount, DEFAULT_LOG_PREFIX,
};

/// One decorator layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Log,
    /// Price filter; `None` falls back to the pipeline's default minimum
    Filter(Option<f64>),
    Count,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Log => f.write_str("log"),
            Stage::Filter(None) => f.write_str("filter"),
            Stage::Filter(Some(min)) => write!(f, "filter:{min}"),
            Stage::Count => f.write_str("count"),
        }
    }
}

impl FromStr for Stage {
    type Err = ApplicationError;

    /// Accepts `log`, `count`, `filter` and `filter:<min>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (s, None),
        };
        match (name.to_ascii_lowercase().as_str(), arg) {
            ("log", None) => Ok(Stage::Log),
            ("count", None) => Ok(Stage::Count),
            ("filter", None) => Ok(Stage::Filter(None)),
            ("filter", Some(min)) => min
                .parse::<f64>()
                .ok()
                .filter(|m| m.is_finite())
                .map(|m| Stage::Filter(Some(m)))
                .ok_or_else(|| ApplicationError::InvalidStage(format!("bad minimum in '{s}'"))),
            _ => Err(ApplicationError::InvalidStage(s.to_string())),
        }
    }
}

/// Ordered stages, applied innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
    default_min_price: f64,
    log_prefix: String,
}

/// An assembled chain plus handles to the state of its decorators.
pub struct Chain<'a, T: ?Sized> {
    pub cursor: BoxedCursor<'a, T>,
    /// One journal per log stage, innermost first
    pub journals: Vec<Journal>,
    /// One counter per count stage, innermost first
    pub counters: Vec<StepCount>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>, default_min_price: f64) -> Self {
        Self {
            stages,
            default_min_price,
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }

    pub fn with_log_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_prefix = prefix.into();
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Wrap `root` in every stage, first stage innermost.
    pub fn assemble<'a, T>(&self, root: BoxedCursor<'a, T>) -> Chain<'a, T>
    where
        T: Element + ?Sized + 'a,
    {
        let mut cursor = root;
        let mut journals = Vec::new();
        let mut counters = Vec::new();
        for stage in &self.stages {
            debug!(%stage, "wrapping cursor");
            cursor = match *stage {
                Stage::Log => {
                    let logged = LoggingCursor::with_prefix(cursor, self.log_prefix.clone());
                    journals.push(logged.journal());
                    logged.boxed()
                }
                Stage::Filter(min) => {
                    let min = min.unwrap_or(self.default_min_price);
                    FilterCursor::new(cursor, min).boxed()
                }
                Stage::Count => {
                    let counted = CountingCursor::new(cursor);
                    counters.push(counted.steps());
                    counted.boxed()
                }
            };
        }
        Chain {
            cursor,
            journals,
            counters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_stage_strings_when_parsing_then_recognizes_all_forms() {
        assert_eq!("log".parse::<Stage>().unwrap(), Stage::Log);
        assert_eq!("COUNT".parse::<Stage>().unwrap(), Stage::Count);
        assert_eq!("filter".parse::<Stage>().unwrap(), Stage::Filter(None));
        assert_eq!(
            "filter: 250".parse::<Stage>().unwrap(),
            Stage::Filter(Some(250.0))
        );
    }

    #[test]
    fn given_bad_stage_when_parsing_then_invalid_stage() {
        assert!(matches!(
            "sort".parse::<Stage>(),
            Err(ApplicationError::InvalidStage(_))
        ));
        assert!(matches!(
            "filter:cheap".parse::<Stage>(),
            Err(ApplicationError::InvalidStage(_))
        ));
        assert!("log:1".parse::<Stage>().is_err());
    }

    #[test]
    fn given_stage_when_displayed_then_round_trips_name() {
        assert_eq!(Stage::Filter(Some(99.5)).to_string(), "filter:99.5");
        assert_eq!(Stage::Log.to_string(), "log");
    }
}
