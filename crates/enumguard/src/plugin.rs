use serde::{Deserialize, Serialize};

/// One management action offered on a plugin's listing row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginAction {
    /// Host action key, e.g. `deactivate`, `delete`, `settings`.
    pub key: String,
    /// Rendered markup or label for the action.
    pub markup: String,
}

impl PluginAction {
    pub fn new(key: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            markup: markup.into(),
        }
    }
}

/// Action keys removed from the guard's own row.
const PROTECTED_KEYS: [&str; 2] = ["deactivate", "delete"];

/// Strip deactivate/delete from the guard's own plugin row.
///
/// Cosmetic, not a security boundary: it keeps the guard from being
/// switched off with one misclick in the management UI. Rows for other
/// plugins pass through untouched, order preserved.
pub fn filter_plugin_actions(
    self_id: &str,
    entry_id: &str,
    mut actions: Vec<PluginAction>,
) -> Vec<PluginAction> {
    if entry_id != self_id {
        return actions;
    }
    actions.retain(|action| !PROTECTED_KEYS.contains(&action.key.as_str()));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Vec<PluginAction> {
        vec![
            PluginAction::new("deactivate", "<a href=\"#\">Deactivate</a>"),
            PluginAction::new("delete", "<a href=\"#\">Delete</a>"),
            PluginAction::new("settings", "<a href=\"#\">Settings</a>"),
        ]
    }

    #[test]
    fn own_row_loses_deactivate_and_delete() {
        let actions = filter_plugin_actions("enumguard", "enumguard", row());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].key, "settings");
    }

    #[test]
    fn other_rows_pass_through() {
        let actions = filter_plugin_actions("enumguard", "other-plugin", row());
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].key, "deactivate");
    }

    #[test]
    fn remaining_order_is_preserved() {
        let mut actions = row();
        actions.insert(0, PluginAction::new("edit", "<a href=\"#\">Edit</a>"));
        let actions = filter_plugin_actions("enumguard", "enumguard", actions);
        let keys: Vec<&str> = actions.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["edit", "settings"]);
    }
}
