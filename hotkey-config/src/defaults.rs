//! Factory-default hotkey catalog.

use crate::types::{HotkeySetting, KeyCode};

/// Key code for a letter in the catalog below.
fn letter(c: char) -> KeyCode {
    KeyCode::from_char(c).unwrap_or(KeyCode::NONE)
}

/// Default hotkeys for the code-inspection add-in commands.
///
/// Names are unique and no two entries share a key combination. Applications
/// with their own command set pass their own catalog to the reconciler instead.
pub fn hotkeys() -> Vec<HotkeySetting> {
    vec![
        HotkeySetting::new("ParseAll", KeyCode::BACKTICK).with_ctrl(),
        HotkeySetting::new("IndentProcedure", letter('P')).with_ctrl(),
        HotkeySetting::new("IndentModule", letter('M')).with_ctrl(),
        HotkeySetting::new("CodeExplorer", letter('R')).with_ctrl(),
        HotkeySetting::new("FindSymbol", letter('T')).with_ctrl(),
        HotkeySetting::new("InspectionResults", letter('I'))
            .with_ctrl()
            .with_shift(),
        HotkeySetting::new("TestExplorer", letter('T'))
            .with_ctrl()
            .with_shift(),
        HotkeySetting::new("RefactorMoveCloserToUsage", letter('C'))
            .with_ctrl()
            .with_shift(),
        HotkeySetting::new("RefactorRename", letter('R'))
            .with_ctrl()
            .with_shift(),
        HotkeySetting::new("RefactorExtractMethod", letter('M'))
            .with_ctrl()
            .with_shift(),
        HotkeySetting::new("SourceControl", letter('D'))
            .with_ctrl()
            .with_shift(),
        HotkeySetting::new("ExportActiveProject", letter('E'))
            .with_ctrl()
            .with_shift(),
    ]
}
