//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per scope.

use crate::state::Destination;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Global actions
    NextDestination,
    PrevDestination,
    GoHome,
    GoFavorites,
    GoProfile,
    EnterDebug,
    DismissSnackbar,
    Quit,

    // Home actions
    NavigateNext,
    NavigatePrev,
    Activate,

    // Debug mode actions
    DebugModeNavigateNext,
    DebugModeNavigatePrev,
    DebugModeExit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Return a hotkey for the given key code without modifiers.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Represents the scopes that carry their own hotkey configurations.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyScope {
    Global,
    Home,
    DebugMode,
}

/// Maps hotkey actions to their key bindings for each scope.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeHotkeys {
    pub global: HashMap<HotkeyAction, Hotkey>,
    pub home: HashMap<HotkeyAction, Hotkey>,
    pub debug_mode: HashMap<HotkeyAction, Hotkey>,
}

/// Custom deserialization for ScopeHotkeys. Bindings read from the file are
/// laid over the defaults, so a scope only lists the actions it rebinds.
///
impl<'de> Deserialize<'de> for ScopeHotkeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ScopeHotkeysHelper {
            #[serde(default)]
            global: HashMap<HotkeyAction, Hotkey>,
            #[serde(default)]
            home: HashMap<HotkeyAction, Hotkey>,
            #[serde(default)]
            debug_mode: HashMap<HotkeyAction, Hotkey>,
        }

        let helper = ScopeHotkeysHelper::deserialize(deserializer)?;
        let mut hotkeys = default_hotkeys();
        hotkeys.global.extend(helper.global);
        hotkeys.home.extend(helper.home);
        hotkeys.debug_mode.extend(helper.debug_mode);

        for scope in [HotkeyScope::Global, HotkeyScope::Home, HotkeyScope::DebugMode] {
            if let Some((first, second)) = find_conflict(hotkeys.scope(scope)) {
                return Err(serde::de::Error::custom(format!(
                    "{:?} and {:?} are bound to the same key in {:?} scope",
                    first, second, scope
                )));
            }
        }
        Ok(hotkeys)
    }
}

/// Returns the first pair of actions sharing a key within one scope.
///
fn find_conflict(bindings: &HashMap<HotkeyAction, Hotkey>) -> Option<(HotkeyAction, HotkeyAction)> {
    let mut actions: Vec<_> = bindings.keys().copied().collect();
    actions.sort();
    actions.iter().enumerate().find_map(|(i, first)| {
        actions[i + 1..]
            .iter()
            .find(|second| bindings[first] == bindings[*second])
            .map(|second| (*first, *second))
    })
}

impl Default for ScopeHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ScopeHotkeys {
    /// Return the bindings of a single scope.
    ///
    pub fn scope(&self, scope: HotkeyScope) -> &HashMap<HotkeyAction, Hotkey> {
        match scope {
            HotkeyScope::Global => &self.global,
            HotkeyScope::Home => &self.home,
            HotkeyScope::DebugMode => &self.debug_mode,
        }
    }
}

/// Returns default hotkey mappings for all scopes.
///
pub fn default_hotkeys() -> ScopeHotkeys {
    let mut global = HashMap::new();
    global.insert(HotkeyAction::NextDestination, Hotkey::plain(KeyCode::Tab));
    global.insert(
        HotkeyAction::PrevDestination,
        Hotkey {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        },
    );
    global.insert(HotkeyAction::GoHome, Hotkey::plain(KeyCode::Char('1')));
    global.insert(HotkeyAction::GoFavorites, Hotkey::plain(KeyCode::Char('2')));
    global.insert(HotkeyAction::GoProfile, Hotkey::plain(KeyCode::Char('3')));
    global.insert(HotkeyAction::EnterDebug, Hotkey::plain(KeyCode::Char('d')));
    global.insert(HotkeyAction::DismissSnackbar, Hotkey::plain(KeyCode::Esc));
    global.insert(HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q')));

    let mut home = HashMap::new();
    home.insert(HotkeyAction::NavigateNext, Hotkey::plain(KeyCode::Char('j')));
    home.insert(HotkeyAction::NavigatePrev, Hotkey::plain(KeyCode::Char('k')));
    home.insert(HotkeyAction::Activate, Hotkey::plain(KeyCode::Enter));

    let mut debug_mode = HashMap::new();
    debug_mode.insert(
        HotkeyAction::DebugModeNavigateNext,
        Hotkey::plain(KeyCode::Char('j')),
    );
    debug_mode.insert(
        HotkeyAction::DebugModeNavigatePrev,
        Hotkey::plain(KeyCode::Char('k')),
    );
    debug_mode.insert(HotkeyAction::DebugModeExit, Hotkey::plain(KeyCode::Esc));

    ScopeHotkeys {
        global,
        home,
        debug_mode,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in a specific scope.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    scope: HotkeyScope,
    hotkeys: &ScopeHotkeys,
) -> Option<HotkeyAction> {
    // Lowest action wins so lookups don't depend on map iteration order
    hotkeys
        .scope(scope)
        .iter()
        .filter(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
        .min()
}

/// Resolves a KeyEvent against the active scopes: debug mode first when it is
/// on, then Home when Home is showing, then the global bindings.
///
pub fn resolve_action(
    event: &KeyEvent,
    destination: Destination,
    debug_mode: bool,
    hotkeys: &ScopeHotkeys,
) -> Option<HotkeyAction> {
    let mut scopes = Vec::with_capacity(3);
    if debug_mode {
        scopes.push(HotkeyScope::DebugMode);
    }
    if destination == Destination::Home {
        scopes.push(HotkeyScope::Home);
    }
    scopes.push(HotkeyScope::Global);

    scopes
        .into_iter()
        .find_map(|scope| get_action_for_event(event, scope, hotkeys))
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        if let Some(hotkey) = hotkeys.get(action) {
            let paired_hotkey = paired_action.and_then(|paired| hotkeys.get(&paired));
            match paired_hotkey {
                Some(paired_hotkey) => parts.push(format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                )),
                None => parts.push(format!(
                    " {}: {}",
                    format_hotkey_display(hotkey),
                    description
                )),
            }
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    // BackTab already implies Shift
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) && hotkey.code != KeyCode::BackTab {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        let event = key_event(KeyCode::Char('j'), KeyModifiers::empty());
        assert!(matches_hotkey(&event, &hotkey));

        let event2 = key_event(KeyCode::Char('k'), KeyModifiers::empty());
        assert!(!matches_hotkey(&event2, &hotkey));

        let event3 = key_event(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert!(!matches_hotkey(&event3, &hotkey));
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let event = key_event(KeyCode::Char('j'), KeyModifiers::empty());

        let action = get_action_for_event(&event, HotkeyScope::Home, &hotkeys);
        assert_eq!(action, Some(HotkeyAction::NavigateNext));

        let action2 = get_action_for_event(&event, HotkeyScope::DebugMode, &hotkeys);
        assert_eq!(action2, Some(HotkeyAction::DebugModeNavigateNext));

        let action3 = get_action_for_event(&event, HotkeyScope::Global, &hotkeys);
        assert_eq!(action3, None);
    }

    #[test]
    fn test_resolve_action_on_home() {
        let hotkeys = default_hotkeys();
        let event = key_event(KeyCode::Char('j'), KeyModifiers::empty());
        assert_eq!(
            resolve_action(&event, Destination::Home, false, &hotkeys),
            Some(HotkeyAction::NavigateNext)
        );
        assert_eq!(
            resolve_action(&event, Destination::Favorites, false, &hotkeys),
            None
        );
    }

    #[test]
    fn test_resolve_action_prefers_debug_mode() {
        let hotkeys = default_hotkeys();
        let esc = key_event(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(
            resolve_action(&esc, Destination::Home, true, &hotkeys),
            Some(HotkeyAction::DebugModeExit)
        );
        assert_eq!(
            resolve_action(&esc, Destination::Home, false, &hotkeys),
            Some(HotkeyAction::DismissSnackbar)
        );
    }

    #[test]
    fn test_resolve_action_falls_back_to_global() {
        let hotkeys = default_hotkeys();
        let tab = key_event(KeyCode::Tab, KeyModifiers::empty());
        assert_eq!(
            resolve_action(&tab, Destination::Profile, true, &hotkeys),
            Some(HotkeyAction::NextDestination)
        );
        let back_tab = key_event(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            resolve_action(&back_tab, Destination::Home, false, &hotkeys),
            Some(HotkeyAction::PrevDestination)
        );
    }

    #[test]
    fn test_default_hotkeys() {
        let hotkeys = default_hotkeys();
        assert!(!hotkeys.global.is_empty());
        assert!(!hotkeys.home.is_empty());
        assert!(!hotkeys.debug_mode.is_empty());
        assert_eq!(hotkeys, ScopeHotkeys::default());
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("j"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);

        let back_tab = Hotkey {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        };
        let serialized = serde_yaml::to_string(&back_tab).unwrap();
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(back_tab, deserialized);
    }

    #[test]
    fn test_char_hotkey_requires_char_field() {
        let result = serde_yaml::from_str::<Hotkey>("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_scope_keeps_defaults() {
        let yaml = "global:\n  quit:\n    code: Char\n    char: x\n";
        let hotkeys: ScopeHotkeys = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            hotkeys.global.get(&HotkeyAction::Quit),
            Some(&Hotkey::plain(KeyCode::Char('x')))
        );
        assert_eq!(
            hotkeys.global.get(&HotkeyAction::NextDestination),
            Some(&Hotkey::plain(KeyCode::Tab))
        );
        assert_eq!(hotkeys.home, default_hotkeys().home);
        assert_eq!(hotkeys.debug_mode, default_hotkeys().debug_mode);
    }

    #[test]
    fn test_duplicate_key_in_scope_is_rejected() {
        // 'q' already quits
        let yaml = "global:\n  next_destination:\n    code: Char\n    char: q\n";
        let err = serde_yaml::from_str::<ScopeHotkeys>(yaml).unwrap_err();
        assert!(err.to_string().contains("same key"));

        // Moving quit away frees the key
        let yaml = "global:\n  next_destination:\n    code: Char\n    char: q\n  quit:\n    code: Char\n    char: x\n";
        assert!(serde_yaml::from_str::<ScopeHotkeys>(yaml).is_ok());
    }

    #[test]
    fn test_shared_key_resolves_in_action_order() {
        let mut hotkeys = default_hotkeys();
        hotkeys
            .global
            .insert(HotkeyAction::Quit, Hotkey::plain(KeyCode::Tab));
        let tab = key_event(KeyCode::Tab, KeyModifiers::empty());
        for _ in 0..10 {
            // A fresh map gets a fresh hasher and iteration order
            let copy = ScopeHotkeys {
                global: hotkeys.global.clone().into_iter().collect(),
                ..default_hotkeys()
            };
            assert_eq!(
                get_action_for_event(&tab, HotkeyScope::Global, &copy),
                Some(HotkeyAction::NextDestination)
            );
        }
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.home,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::Activate, "open", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        );
        assert_eq!(text, " j/k: navigate, Enter: open");
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Char(' '))), "Space");
        assert_eq!(
            format_hotkey_display(&Hotkey {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            "Ctrl+c"
        );
        assert_eq!(
            format_hotkey_display(&Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            }),
            "Shift+Tab"
        );
    }
}
