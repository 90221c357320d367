//! Process-wide option defaults sourced from the environment.

use crate::option_key::option_key;
use derive_getters::Getters;
use serde_json::{Value, json};
use std::sync::OnceLock;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// Environment variable naming the default Pinterest board.
pub const PINTEREST_BOARD_NAME_VAR: &str = "PINTEREST_BOARD_NAME";

/// Environment variable used when no board name is configured.
pub const PINTEREST_BOARD_ID_VAR: &str = "PINTEREST_BOARD_ID";

static GLOBAL_DEFAULTS: OnceLock<PublishDefaults> = OnceLock::new();

/// Lowest-precedence option bags, fixed at process start.
///
/// Only platforms listed here have a default; every other platform resolves
/// to no option bag when no tier supplies one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, TypedBuilder)]
pub struct PublishDefaults {
    /// Preferred Pinterest board name
    #[builder(default, setter(into, strip_option))]
    pinterest_board_name: Option<String>,
    /// Pinterest board identifier, used when no name is set
    #[builder(default, setter(into, strip_option))]
    pinterest_board_id: Option<String>,
}

impl PublishDefaults {
    /// Read defaults from the process environment.
    ///
    /// Reads:
    /// - `PINTEREST_BOARD_NAME` (optional)
    /// - `PINTEREST_BOARD_ID` (optional, fallback for the board name)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read defaults through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// ```
    /// use crosspost_compose::PublishDefaults;
    ///
    /// let defaults = PublishDefaults::from_lookup(|name| match name {
    ///     "PINTEREST_BOARD_ID" => Some("1234".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(defaults.pinterest_board_id().as_deref(), Some("1234"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            pinterest_board_name: read(PINTEREST_BOARD_NAME_VAR),
            pinterest_board_id: read(PINTEREST_BOARD_ID_VAR),
        }
    }

    /// Install `defaults` as the process-wide value.
    ///
    /// Only the first call has an effect. Returns the installed defaults.
    pub fn install(defaults: PublishDefaults) -> &'static PublishDefaults {
        GLOBAL_DEFAULTS.get_or_init(|| {
            info!(
                pinterest_board = defaults.pinterest_board().is_some(),
                "Installed publish defaults"
            );
            defaults
        })
    }

    /// Process-wide defaults, read from the environment on first use.
    pub fn global() -> &'static PublishDefaults {
        GLOBAL_DEFAULTS.get_or_init(Self::from_env)
    }

    /// Board to use when a Pinterest request names none.
    pub fn pinterest_board(&self) -> Option<&str> {
        self.pinterest_board_name
            .as_deref()
            .or(self.pinterest_board_id.as_deref())
    }

    /// Default option bag for the canonical key `key`, if one exists.
    pub fn option_default(&self, key: &str) -> Option<Value> {
        if key == option_key("pinterest") {
            let board = self.pinterest_board()?;
            debug!(key, board, "Using environment board default");
            return Some(json!({ "boardName": board }));
        }
        None
    }
}
