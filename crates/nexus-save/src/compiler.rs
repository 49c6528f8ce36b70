//! The section pipeline.

use crate::config::SaveConfig;
use crate::sections::{self, SaveContext};
use crate::snapshot::SaveSnapshot;

/// A section builder.
type Section = fn(&SaveContext<'_>) -> String;

/// Sections in document order. Nothing is ever reordered or skipped here;
/// conditional content lives inside the builders.
const PIPELINE: [Section; 6] = [
    sections::header::header,
    sections::header::restoration,
    sections::framework::framework,
    sections::modules::modules,
    sections::session_state::session_state,
    sections::metadata::metadata,
];

/// Compiles snapshots into SAVE_CODE documents.
#[derive(Debug, Clone, Default)]
pub struct SaveCompiler {
    config: SaveConfig,
}

impl SaveCompiler {
    /// A compiler with the given settings.
    pub fn new(config: SaveConfig) -> Self {
        Self { config }
    }

    /// The compiler's settings.
    pub fn config(&self) -> &SaveConfig {
        &self.config
    }

    /// Render one snapshot. Same snapshot, same bytes.
    pub fn compile(&self, snapshot: &SaveSnapshot) -> String {
        let derived = snapshot.derive();
        let ctx = SaveContext {
            snapshot,
            derived: &derived,
            config: &self.config,
        };
        PIPELINE.iter().map(|section| section(&ctx)).collect()
    }
}

/// Render a snapshot with the default settings.
pub fn compile(snapshot: &SaveSnapshot) -> String {
    SaveCompiler::default().compile(snapshot)
}
