//! Section builders. Each is a pure function of a [`SaveContext`] that
//! returns its block of the document, trailing newline included, so the
//! compiler only has to concatenate them in order.

pub mod framework;
pub mod header;
pub mod metadata;
pub mod modules;
pub mod session_state;

use nexus_core::progression::DerivedState;
use nexus_core::EggState;

use crate::config::SaveConfig;
use crate::format::{self, RULE};
use crate::snapshot::SaveSnapshot;

/// Marker after CARE amounts in human-readable lines.
pub const HEART: &str = "♥️";

/// Bullet prefix for list lines.
pub const BULLET: &str = "• ";

/// Last-session placeholder when the campaign has no sessions.
pub const NO_SESSIONS_YET: &str = "No sessions yet";

/// Placeholder for an empty session list.
pub const NO_SESSIONS_LOGGED: &str = "No sessions logged yet";

/// A conversation mode and its fixed default.
#[derive(Debug, Clone, Copy)]
pub struct ModeDefault {
    /// Key inside the STATE object.
    pub key: &'static str,
    /// Display name.
    pub label: &'static str,
    /// Allowed values, slash-separated.
    pub options: &'static str,
    /// Default value.
    pub value: &'static str,
}

/// Mode defaults, in display order.
pub const MODES: [ModeDefault; 5] = [
    ModeDefault {
        key: "roleplay",
        label: "Roleplay",
        options: "ON/OFF/HYBRID",
        value: "HYBRID",
    },
    ModeDefault {
        key: "verbosity",
        label: "Verbosity",
        options: "Minimal/Normal/Detailed",
        value: "Normal",
    },
    ModeDefault {
        key: "eco",
        label: "Eco",
        options: "Off/On/Minimal",
        value: "Off",
    },
    ModeDefault {
        key: "developer",
        label: "Developer",
        options: "Off/On",
        value: "Off",
    },
    ModeDefault {
        key: "safety",
        label: "Safety",
        options: "Standard/Strict/Relaxed",
        value: "Standard",
    },
];

/// What every section builder reads from.
#[derive(Debug, Clone, Copy)]
pub struct SaveContext<'a> {
    /// The frozen input state.
    pub snapshot: &'a SaveSnapshot,
    /// Values the progression engine derived from the snapshot.
    pub derived: &'a DerivedState,
    /// Document settings.
    pub config: &'a SaveConfig,
}

impl SaveContext<'_> {
    /// Number of sessions in the campaign.
    pub fn total_sessions(&self) -> usize {
        self.snapshot.sessions().len()
    }

    /// Last session date, or `No sessions yet`. `Unknown` when every
    /// session is undated.
    pub fn last_session(&self) -> String {
        if self.total_sessions() == 0 {
            return NO_SESSIONS_YET.to_string();
        }
        format::date_or_unknown(self.derived.last_session_date.as_ref())
    }

    /// The hatched dragon's name if it has one.
    pub fn dragon_name(&self) -> Option<&str> {
        self.snapshot.user().egg.dragon().and_then(|d| d.name())
    }

    /// Labels of the active modules, in order.
    pub fn module_labels(&self) -> Vec<&'static str> {
        self.derived
            .active_modules
            .iter()
            .map(|m| m.label())
            .collect()
    }

    /// Egg status line shared by the summary: status, plus the dragon's
    /// name once hatched.
    pub fn egg_status_line(&self) -> String {
        let user = self.snapshot.user();
        match &user.egg {
            EggState::Hatched(_) => format!(
                "{} (Dragon: {})",
                user.egg_status(),
                self.dragon_name().unwrap_or("Unnamed")
            ),
            _ => user.egg_status().to_string(),
        }
    }
}

/// A titled top-level banner between rules.
pub fn banner(title: &str) -> String {
    format!("{RULE}\n{title}\n{RULE}\n")
}

/// Prefix each line with a bullet.
pub fn bullets<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| format!("{BULLET}{}", l.as_ref()))
        .collect()
}
