use super::types::*;
use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ParsedInputConfig { pub key_bindings: KeyBindings, pub errors: Vec<String> }

#[derive(Debug, serde::Deserialize)]
struct RootToml { bindings: Option<HashMap<String, Vec<String>>> }

/// Parse `[bindings]` (action name -> list of key tokens). Problems are
/// collected in `errors`; whatever parsed cleanly is kept. An input with no
/// usable bindings yields the default table.
pub fn parse_input_toml(raw: &str) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    if raw.trim().is_empty() { return result; }
    let root: RootToml = match toml::from_str(raw) { Ok(r) => r, Err(e) => { result.errors.push(format!("Top-level parse: {e}")); return result; } };
    let Some(bindings) = root.bindings else { result.errors.push("missing [bindings] table; using defaults".into()); return result; };

    // Sorted so conflicts are reported deterministically.
    let mut entries: Vec<(String, Vec<String>)> = bindings.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table = KeyBindings::empty();
    for (action_name, tokens) in entries {
        let Some(action) = Action::from_name(&action_name) else { result.errors.push(format!("Binding references unknown action '{}': expected Up|Down", action_name)); continue; };
        for spec in &tokens {
            match parse_key_token(spec) {
                Ok(key) => {
                    if let Some(prev) = table.action_for(key) {
                        if prev != action { result.errors.push(format!("[binding {} '{}'] key already bound to {:?}; keeping first", action_name, spec, prev)); }
                        continue;
                    }
                    table.bind(key, action);
                }
                Err(err) => result.errors.push(format!("[binding {} '{}'] {err}", action_name, spec)),
            }
        }
    }
    if table.keys.is_empty() { result.errors.push("no usable key bindings; using defaults".into()); } else { result.key_bindings = table; }
    result
}

/// Accepts Bevy `KeyCode` names (`ArrowUp`, `KeyW`, `Digit1`), the short
/// aliases `Up`/`Down`/`Left`/`Right`, bare letters and digits, and an optional `Key:` prefix.
pub fn parse_key_token(s: &str) -> Result<KeyCode, String> {
    let name = s.strip_prefix("Key:").unwrap_or(s).trim();
    if let Some(kc) = letter_or_digit(name) { return Ok(kc); }
    let kc = match name {
        "Up" | "ArrowUp" => KeyCode::ArrowUp,
        "Down" | "ArrowDown" => KeyCode::ArrowDown,
        "Left" | "ArrowLeft" => KeyCode::ArrowLeft,
        "Right" | "ArrowRight" => KeyCode::ArrowRight,
        "Space" => KeyCode::Space,
        "Enter" | "Return" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Escape" => KeyCode::Escape,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Numpad8" => KeyCode::Numpad8,
        "Numpad2" => KeyCode::Numpad2,
        "" => return Err("empty key token".into()),
        other => return Err(format!("Unsupported KeyCode '{}' (extend parser)", other)),
    };
    Ok(kc)
}

fn letter_or_digit(name: &str) -> Option<KeyCode> {
    let c = match name.strip_prefix("Key").or_else(|| name.strip_prefix("Digit")) {
        Some(rest) if rest.len() == 1 => rest.chars().next()?,
        Some(_) => return None,
        None if name.len() == 1 => name.chars().next()?,
        None => return None,
    };
    const LETTERS: [KeyCode; 26] = [
        KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE, KeyCode::KeyF, KeyCode::KeyG,
        KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ, KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN,
        KeyCode::KeyO, KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT, KeyCode::KeyU,
        KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY, KeyCode::KeyZ,
    ];
    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
        KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
    ];
    match c {
        'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
        'a'..='z' => Some(LETTERS[(c as u8 - b'a') as usize]),
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bindings_and_aliases() {
        let raw = r#"
            [bindings]
            Up = ["Up", "Key:W", "Numpad8"]
            Down = ["ArrowDown", "s", "Digit2"]
        "#;
        let parsed = parse_input_toml(raw);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let b = &parsed.key_bindings;
        assert_eq!(b.action_for(KeyCode::ArrowUp), Some(Action::Up));
        assert_eq!(b.action_for(KeyCode::KeyW), Some(Action::Up));
        assert_eq!(b.action_for(KeyCode::Numpad8), Some(Action::Up));
        assert_eq!(b.action_for(KeyCode::ArrowDown), Some(Action::Down));
        assert_eq!(b.action_for(KeyCode::KeyS), Some(Action::Down));
        assert_eq!(b.action_for(KeyCode::Digit2), Some(Action::Down));
        assert_eq!(b.keys.len(), 6);
    }

    #[test]
    fn bad_entries_are_reported_and_skipped() {
        let raw = r#"
            [bindings]
            Up = ["ArrowUp", "Hyper"]
            Jump = ["Space"]
            Down = ["ArrowUp", "ArrowDown"]
        "#;
        let parsed = parse_input_toml(raw);
        let joined = parsed.errors.join(" | ");
        assert!(joined.contains("Unsupported KeyCode 'Hyper'"), "{joined}");
        assert!(joined.contains("unknown action 'Jump'"), "{joined}");
        // "Down" sorts before "Up", so ArrowUp goes to Down first.
        assert!(joined.contains("key already bound to Down"), "{joined}");
        assert_eq!(parsed.key_bindings.action_for(KeyCode::ArrowUp), Some(Action::Down));
        assert_eq!(parsed.key_bindings.action_for(KeyCode::Space), None);
    }

    #[test]
    fn empty_or_broken_input_falls_back_to_defaults() {
        let empty = parse_input_toml("");
        assert!(empty.errors.is_empty());
        assert_eq!(empty.key_bindings, KeyBindings::default());

        let broken = parse_input_toml("[bindings\nUp = ");
        assert!(broken.errors[0].starts_with("Top-level parse"));
        assert_eq!(broken.key_bindings, KeyBindings::default());

        let useless = parse_input_toml("[bindings]\nUp = [\"Nope\"]\n");
        assert!(useless.errors.iter().any(|e| e.contains("no usable key bindings")));
        assert_eq!(useless.key_bindings, KeyBindings::default());
    }

    #[test]
    fn key_tokens() {
        assert_eq!(parse_key_token("KeyZ"), Ok(KeyCode::KeyZ));
        assert_eq!(parse_key_token("q"), Ok(KeyCode::KeyQ));
        assert_eq!(parse_key_token("7"), Ok(KeyCode::Digit7));
        assert_eq!(parse_key_token("Key:Down"), Ok(KeyCode::ArrowDown));
        assert!(parse_key_token("").is_err());
        assert!(parse_key_token("KeyAB").is_err());
    }
}
