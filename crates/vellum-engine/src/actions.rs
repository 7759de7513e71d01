/// The effect an interactive node's action string maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Surface a user-visible notification
    Notify(String),
    /// Emit a log line on the host
    Log(String),
    /// Re-run the root document load
    ReloadRoot,
    /// Unrecognized action; logged, otherwise inert
    Unknown(String),
}

/// Map a declared action string to its effect.
///
/// The mapping is closed: extending it is a code change, not a runtime
/// lookup. Navigation is deliberately NOT triggered here — a node's
/// navigation target travels separately, and `navigateToScreen` only logs.
pub fn resolve_action(action: &str) -> Effect {
    match action {
        "printMessage" => Effect::Notify("Button clicked!".to_string()),
        "navigateToScreen" => Effect::Log("Navigating to a new screen".to_string()),
        "showAlert" => Effect::Log("Showing alert dialog".to_string()),
        "fetchData" => Effect::ReloadRoot,
        other => {
            tracing::debug!(action = other, "unknown action string");
            Effect::Unknown(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions() {
        assert_eq!(
            resolve_action("printMessage"),
            Effect::Notify("Button clicked!".to_string())
        );
        assert_eq!(
            resolve_action("navigateToScreen"),
            Effect::Log("Navigating to a new screen".to_string())
        );
        assert_eq!(
            resolve_action("showAlert"),
            Effect::Log("Showing alert dialog".to_string())
        );
        assert_eq!(resolve_action("fetchData"), Effect::ReloadRoot);
    }

    #[test]
    fn test_unknown_action_is_inert() {
        assert_eq!(
            resolve_action("teleport"),
            Effect::Unknown("teleport".to_string())
        );
        // The empty action (the decoder's default) is unknown too.
        assert_eq!(resolve_action(""), Effect::Unknown(String::new()));
    }
}
